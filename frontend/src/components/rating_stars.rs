//! Five-star row for a 0 to 5 rating.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_toggle_icons::{MdStar, MdStarBorder, MdStarHalf};
use dioxus_free_icons::Icon;

#[component]
pub fn RatingStars(rating: f64, size: Option<u32>) -> Element {
    let size = size.unwrap_or(16);
    rsx! {
        span {
            style: "display: inline-flex; align-items: center; color: #faad14;",
            for position in 1..=5u32 {
                StarAt { key: "{position}", rating, position, size }
            }
        }
    }
}

/// Full from x.75, half from x.25, otherwise empty.
#[component]
fn StarAt(rating: f64, position: u32, size: u32) -> Element {
    let style = format!("width: {size}px; height: {size}px;");
    if rating >= position as f64 - 0.25 {
        rsx! { Icon { icon: MdStar, style: "{style}" } }
    } else if rating >= position as f64 - 0.75 {
        rsx! { Icon { icon: MdStarHalf, style: "{style}" } }
    } else {
        rsx! { Icon { icon: MdStarBorder, style: "{style}" } }
    }
}
