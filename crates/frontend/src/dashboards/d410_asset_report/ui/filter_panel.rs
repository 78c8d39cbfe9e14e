use chrono::NaiveDate;
use contracts::dashboards::d410_asset_report::{
    month_name, AssetFilter, DateFilter, Period, ReportState,
};
use contracts::domain::a001_asset::{
    category_options, department_options, CategoryRef, DateField, DepartmentRef,
};
use leptos::prelude::*;
use std::str::FromStr;

/// Statuses offered in the status dropdown
const STATUSES: [&str; 6] = ["Active", "Inactive", "Maintenance", "Retired", "New", "In Use"];

fn parse_opt<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn non_blank(raw: String) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    }
}

fn update_date_filter(state: RwSignal<ReportState>, edit: impl FnOnce(&mut DateFilter)) {
    state.update(|s| {
        let mut next = s.date_filter().clone();
        edit(&mut next);
        s.set_date_filter(next);
    });
}

fn update_asset_filter(state: RwSignal<ReportState>, edit: impl FnOnce(&mut AssetFilter)) {
    state.update(|s| {
        let mut next = s.asset_filter().clone();
        edit(&mut next);
        s.set_asset_filter(next);
    });
}

/// Date and attribute filters of the asset report.
///
/// The loaded assets are already narrowed by the server, so dropdown choices
/// come from the reference lists and only fall back to the assets.
#[component]
pub fn FilterPanel(
    state: RwSignal<ReportState>,
    #[prop(into)] categories: Signal<Vec<CategoryRef>>,
    #[prop(into)] departments: Signal<Vec<DepartmentRef>>,
) -> impl IntoView {
    let categories =
        Memo::new(move |_| categories.with(|list| state.with(|s| category_options(list, s.assets()))));
    let departments = Memo::new(move |_| {
        departments.with(|list| state.with(|s| department_options(list, s.assets())))
    });

    let date_value = move |pick: fn(&DateFilter) -> Option<String>| {
        move || state.with(|s| pick(s.date_filter()).unwrap_or_default())
    };

    view! {
        <div class="report-filters">
            <div class="report-filters__group">
                <label>"Date field"</label>
                <select
                    prop:value=move || state.with(|s| s.date_filter().date_field.as_str())
                    on:change=move |ev| {
                        if let Some(field) = DateField::from_str_opt(&event_target_value(&ev)) {
                            update_date_filter(state, |f| f.date_field = field);
                        }
                    }
                >
                    {DateField::ALL
                        .iter()
                        .map(|field| view! { <option value=field.as_str()>{field.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="report-filters__group">
                <label>"Pin month"</label>
                <input
                    type="month"
                    prop:value=date_value(|f| match (f.month, f.year) {
                        (Some(month), Some(year)) => Period::new(year, month).ok().map(|p| p.label()),
                        _ => None,
                    })
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        if raw.trim().is_empty() {
                            update_date_filter(state, |f| {
                                f.month = None;
                                f.year = None;
                            });
                        } else if let Ok(period) = Period::parse(&raw) {
                            update_date_filter(state, |f| {
                                f.month = Some(period.month());
                                f.year = Some(period.year());
                            });
                        }
                    }
                />
            </div>

            <div class="report-filters__group">
                <label>"Month"</label>
                <select
                    prop:value=date_value(|f| f.month.map(|m| m.to_string()))
                    on:change=move |ev| {
                        let month = parse_opt::<u32>(&event_target_value(&ev));
                        update_date_filter(state, |f| f.month = month);
                    }
                >
                    <option value="">"Any month"</option>
                    {(1..=12u32)
                        .map(|m| view! { <option value=m.to_string()>{month_name(m).unwrap_or_default()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="report-filters__group">
                <label>"Year"</label>
                <input
                    type="number"
                    min="1900"
                    max="2100"
                    prop:value=date_value(|f| f.year.map(|y| y.to_string()))
                    on:input=move |ev| {
                        let year = parse_opt::<i32>(&event_target_value(&ev));
                        update_date_filter(state, |f| f.year = year);
                    }
                />
            </div>

            <div class="report-filters__group">
                <label>"From"</label>
                <input
                    type="date"
                    prop:value=date_value(|f| f.start_date.map(|d| d.format("%Y-%m-%d").to_string()))
                    on:change=move |ev| {
                        let start = parse_date(&event_target_value(&ev));
                        update_date_filter(state, |f| f.start_date = start);
                    }
                />
                <label>"To"</label>
                <input
                    type="date"
                    prop:value=date_value(|f| f.end_date.map(|d| d.format("%Y-%m-%d").to_string()))
                    on:change=move |ev| {
                        let end = parse_date(&event_target_value(&ev));
                        update_date_filter(state, |f| f.end_date = end);
                    }
                />
            </div>

            <div class="report-filters__group">
                <label>"Category"</label>
                <select
                    prop:value=move || {
                        state.with(|s| s.asset_filter().category_id.map(|id| id.to_string()).unwrap_or_default())
                    }
                    on:change=move |ev| {
                        let id = parse_opt::<i64>(&event_target_value(&ev));
                        update_asset_filter(state, |f| f.category_id = id);
                    }
                >
                    <option value="">"All categories"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="report-filters__group">
                <label>"Department"</label>
                <select
                    prop:value=move || {
                        state.with(|s| s.asset_filter().department_id.map(|id| id.to_string()).unwrap_or_default())
                    }
                    on:change=move |ev| {
                        let id = parse_opt::<i64>(&event_target_value(&ev));
                        update_asset_filter(state, |f| f.department_id = id);
                    }
                >
                    <option value="">"All departments"</option>
                    {move || {
                        departments
                            .get()
                            .into_iter()
                            .map(|d| view! { <option value=d.id.to_string()>{d.name}</option> })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="report-filters__group">
                <label>"Status"</label>
                <select
                    prop:value=move || state.with(|s| s.asset_filter().status.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let status = non_blank(event_target_value(&ev));
                        update_asset_filter(state, |f| f.status = status);
                    }
                >
                    <option value="">"All statuses"</option>
                    {STATUSES
                        .iter()
                        .map(|status| view! { <option value=*status>{*status}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="report-filters__group">
                <label>"Asset name"</label>
                <input
                    type="text"
                    placeholder="Search by name"
                    prop:value=move || state.with(|s| s.asset_filter().asset_name.clone().unwrap_or_default())
                    on:input=move |ev| {
                        let name = non_blank(event_target_value(&ev));
                        update_asset_filter(state, |f| f.asset_name = name);
                    }
                />
            </div>
        </div>
    }
}
