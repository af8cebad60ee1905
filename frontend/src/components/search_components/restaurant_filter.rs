//! Filter panel shared by the listing surfaces.
//!
//! Every control reads the current [`ListingQuery`] from its signal at the
//! moment of the event and hands a complete successor value to `on_change`,
//! so two quick clicks never overwrite each other with stale copies.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_content_icons::MdFilterList;
use dioxus_free_icons::icons::md_navigation_icons::MdRefresh;
use dioxus_free_icons::Icon;

use common::listing_query::{ListingQuery, SortKey};
use common::location::{districts_in_scope, CityKey};

#[component]
pub fn RestaurantFilter(
    query: ReadSignal<ListingQuery>,
    has_coordinates: ReadSignal<bool>,
    on_change: Callback<ListingQuery>,
) -> Element {
    let mut panel_open = use_signal(|| false);
    let selected_count = use_memo(move || query.read().districts.len());

    rsx! {
        div {
            id: "x-restaurant-filter",
            style: "margin-bottom: 16px;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        border: 1px solid #d9d9d9;
                        background-color: #ffffff;
                        border-radius: 6px;
                        padding: 6px 14px;
                        font-size: 14px;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        let open = panel_open();
                        panel_open.set(!open);
                    },
                    Icon { icon: MdFilterList, style: "width: 18px; height: 18px;" }
                    "Bộ lọc"
                    if selected_count() > 0 {
                        span {
                            style: "background-color: #fa541c; color: #ffffff; border-radius: 10px; padding: 0 8px; font-size: 12px;",
                            "{selected_count()}"
                        }
                    }
                }
                if query.read().has_active_filters() {
                    button {
                        style: "
                            display: flex;
                            align-items: center;
                            gap: 4px;
                            border: none;
                            background: none;
                            color: #fa541c;
                            font-size: 13px;
                            cursor: pointer;
                        ",
                        onclick: move |_| on_change(query.peek().reset_filters()),
                        Icon { icon: MdRefresh, style: "width: 16px; height: 16px;" }
                        "Xóa bộ lọc"
                    }
                }
            }
            if panel_open() {
                FilterPanel { query, has_coordinates, on_change }
            }
        }
    }
}

#[component]
fn FilterPanel(
    query: ReadSignal<ListingQuery>,
    has_coordinates: ReadSignal<bool>,
    on_change: Callback<ListingQuery>,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                background-color: #ffffff;
                border: 1px solid #f0f0f0;
                border-radius: 8px;
                padding: 16px;
                margin-top: 8px;
            ",
            CityPicker { query, on_change }
            DistrictPicker { query, on_change }
            SortPicker { query, has_coordinates, on_change }
        }
    }
}

#[component]
fn CityPicker(query: ReadSignal<ListingQuery>, on_change: Callback<ListingQuery>) -> Element {
    let selected = use_memo(move || query.read().city);
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            span {
                style: "font-size: 13px; font-weight: 600; color: #595959;",
                "Thành phố"
            }
            select {
                style: "border: 1px solid #d9d9d9; border-radius: 6px; padding: 6px 10px; font-size: 14px; width: 240px; background-color: #ffffff;",
                onchange: move |event| {
                    let city = CityKey::from_param(&event.value());
                    on_change(query.peek().with_city(city));
                },
                option { value: "", selected: selected().is_none(), "Tất cả" }
                for city in CityKey::ALL.iter().copied() {
                    option {
                        value: city.as_param(),
                        selected: selected() == Some(city),
                        "{city.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn DistrictPicker(query: ReadSignal<ListingQuery>, on_change: Callback<ListingQuery>) -> Element {
    let scope = use_memo(move || query.read().city);
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            span {
                style: "font-size: 13px; font-weight: 600; color: #595959;",
                "Quận"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 6px 14px; max-height: 180px; overflow-y: auto;",
                for district in districts_in_scope(scope()) {
                    DistrictCheckbox {
                        key: "{district.id}",
                        query,
                        on_change,
                        district_id: district.id,
                        label: district.name,
                    }
                }
            }
        }
    }
}

#[component]
fn DistrictCheckbox(
    query: ReadSignal<ListingQuery>,
    on_change: Callback<ListingQuery>,
    district_id: &'static str,
    label: &'static str,
) -> Element {
    let checked = query.read().districts.iter().any(|d| d == district_id);
    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 6px; width: 170px; font-size: 13px; color: #434343; cursor: pointer;",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |_| on_change(query.peek().toggle_district(district_id)),
            }
            "{label}"
        }
    }
}

#[component]
fn SortPicker(
    query: ReadSignal<ListingQuery>,
    has_coordinates: ReadSignal<bool>,
    on_change: Callback<ListingQuery>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            span {
                style: "font-size: 13px; font-weight: 600; color: #595959;",
                "Xếp theo"
            }
            div {
                style: "display: flex; flex-direction: column; gap: 6px;",
                SortRadio { query, on_change, sort: SortKey::Relevance, label: "Liên quan" }
                SortRadio { query, on_change, sort: SortKey::Rating, label: "Đánh giá" }
                SortRadio { query, on_change, sort: SortKey::ReviewCount, label: "Lượt đánh giá" }
                // Distance needs a position to compare against.
                if has_coordinates() {
                    SortRadio { query, on_change, sort: SortKey::Distance, label: "Khoảng cách" }
                }
            }
        }
    }
}

#[component]
fn SortRadio(
    query: ReadSignal<ListingQuery>,
    on_change: Callback<ListingQuery>,
    sort: SortKey,
    label: &'static str,
) -> Element {
    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 6px; font-size: 13px; color: #434343; cursor: pointer;",
            input {
                r#type: "radio",
                name: "x-sort-option",
                checked: query.read().sort == sort,
                onchange: move |_| on_change(query.peek().with_sort(sort)),
            }
            "{label}"
        }
    }
}
