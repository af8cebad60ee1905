//! Dish grid for the menu tab.

use dioxus::prelude::*;

use common::restaurant::Dish;

#[component]
pub fn MenuList(dishes: Vec<Dish>) -> Element {
    if dishes.is_empty() {
        return rsx! {
            div {
                style: "padding: 32px; text-align: center; color: #8c8c8c; font-size: 14px;",
                "Chưa có thực đơn"
            }
        };
    }

    rsx! {
        div {
            id: "x-menu-list",
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px;",
            for (index, dish) in dishes.into_iter().enumerate() {
                div {
                    key: "{index}",
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 8px;
                        background-color: #ffffff;
                        border: 1px solid #f0f0f0;
                        border-radius: 8px;
                        padding: 10px 14px;
                    ",
                    span {
                        style: "font-size: 14px; color: #262626;",
                        "{dish.name}"
                    }
                    span {
                        style: "font-size: 14px; font-weight: 600; color: #fa541c; flex-shrink: 0;",
                        "${dish.price:.2}"
                    }
                }
            }
        }
    }
}
