use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            // While any child component is suspended this fallback is
            // rendered in place of the children
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

/// Three pulsing dots; the keyframes live in `assets/main.css`.
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; gap: 6px; padding: 24px;",
            span { class: "loading-dot", style: "animation-delay: 0ms;" }
            span { class: "loading-dot", style: "animation-delay: 150ms;" }
            span { class: "loading-dot", style: "animation-delay: 300ms;" }
        }
    }
}
