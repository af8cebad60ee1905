//! Error boundary components for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; align-items: center; padding: 48px 16px;",
                        h1 {
                            style: "color: #cf1322; font-size: 34px; margin: 8px;",
                            "Đã xảy ra lỗi",
                        }
                        p {
                            style: "color: #8c8c8c; font-size: 15px; margin: 4px;",
                            "Boundary: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color: #1677ff; font-size: 16px; border: 1px solid #1677ff; padding: 8px 20px; border-radius: 6px; margin: 12px;",
                            "Quay lại trang chủ"
                        }
                        pre {
                            style: "color: #434343; background-color: #fff1f0; border: 1px solid #ffa39e; padding: 10px; border-radius: 6px; margin: 12px; text-wrap: auto; max-width: 640px; max-height: 320px; overflow-y: auto;",
                            "{_err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{:#?}", err.0)
                } else {
                    "Unknown error".to_string()
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #1677ff; font-size: 16px; background: none; border: 1px solid #1677ff; padding: 8px 20px; border-radius: 6px; margin: 12px; cursor: pointer;",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Thử lại"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h2 {
                style: "color: #cf1322; font-size: 22px; margin: 6px;",
                "Không tải được dữ liệu",
            }

            pre {
                style: "color: #820014; background-color: #fff1f0; border: 1px solid #ffa39e; padding: 10px; border-radius: 6px; margin: 6px; text-wrap: auto; max-width: 520px; max-height: 360px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
