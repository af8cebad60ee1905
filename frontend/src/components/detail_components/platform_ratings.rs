//! Ratings the delivery platforms report for the same restaurant.

use dioxus::prelude::*;

use crate::components::rating_stars::RatingStars;

#[component]
pub fn PlatformRatings(ratings: Vec<(String, f64)>) -> Element {
    // Zero means the platform never rated this place; skip the row. With no
    // rows left the whole card disappears.
    let visible: Vec<(String, f64)> = ratings
        .into_iter()
        .filter(|(_, rating)| *rating > 0.0)
        .collect();
    if visible.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-platform-ratings",
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                background-color: #ffffff;
                border: 1px solid #f0f0f0;
                border-radius: 8px;
                padding: 16px;
            ",
            h3 {
                style: "font-size: 15px; font-weight: 600; color: #262626; margin: 0;",
                "Đánh giá từ các nền tảng"
            }
            for (name, rating) in visible {
                div {
                    key: "{name}",
                    style: "display: flex; align-items: center; justify-content: space-between; gap: 8px;",
                    span {
                        style: "font-size: 14px; color: #434343;",
                        {platform_display(&name)}
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 6px;",
                        RatingStars { rating, size: 14 }
                        span {
                            style: "font-size: 13px; color: #8c8c8c;",
                            "{rating:.1}"
                        }
                    }
                }
            }
        }
    }
}

fn platform_display(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_display_capitalizes() {
        assert_eq!(platform_display("foody"), "Foody");
        assert_eq!(platform_display("befood"), "Befood");
        assert_eq!(platform_display(""), "");
    }
}
