use crate::dashboards::d410_asset_report::api;
use crate::dashboards::d410_asset_report::ui::filter_panel::FilterPanel;
use crate::dashboards::d410_asset_report::ui::tables::{StatisticsTables, TrendTable};
use crate::dashboards::d410_asset_report::ui::url_state;
use crate::shared::components::StatCard;
use crate::shared::export::download_csv;
use crate::system::auth::use_auth;
use chrono::Utc;
use contracts::dashboards::d410_asset_report::{
    assets_to_csv, stats_to_csv, summarize_bills, DateMode, FetchOutcome, FilterKey, Period,
    ReportQuery, ReportState,
};
use contracts::domain::a001_asset::{AssetRecord, CategoryRef, DepartmentRef};
use contracts::domain::a002_bill::BillRecord;
use contracts::shared::config::AppConfig;
use contracts::shared::format::{format_money, format_percent};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Asset statistics report: filters, headline cards, comparison with the
/// previous month, trend and breakdowns
#[component]
pub fn AssetReportDashboard(config: AppConfig) -> impl IntoView {
    let auth = use_auth();
    let base_path = StoredValue::new(config.api.base_path.clone());
    let debounce_ms = config.report.debounce_ms as i32;
    let trend_window = config.report.trend_window;

    let initial_query = url_state::read_query();
    let state = RwSignal::new(ReportState::from_query(&ReportQuery {
        date_field: initial_query
            .date_field
            .or(Some(config.report.default_date_field)),
        ..initial_query
    }));

    let (loading, set_loading) = signal(true);
    let (show_reports, set_show_reports) = signal(false);
    let (notice, set_notice) = signal(None::<String>);
    let bills = RwSignal::new(Vec::<BillRecord>::new());
    let categories = RwSignal::new(Vec::<CategoryRef>::new());
    let departments = RwSignal::new(Vec::<DepartmentRef>::new());

    let load = move || {
        let Some(ticket) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        set_loading.set(true);
        let base = base_path.get_value();
        spawn_local(async move {
            let result = api::fetch_assets(&base, ticket.query.as_ref()).await;
            match state.try_update(|s| s.apply_response(&ticket, result)) {
                Some(FetchOutcome::Applied { count }) => {
                    log::debug!("Asset report loaded {} assets", count);
                    set_loading.set(false);
                }
                Some(FetchOutcome::Failed(_)) => set_loading.set(false),
                // A newer fetch owns the loading flag
                Some(FetchOutcome::Stale) | None => {}
            }
        });
    };

    // Bills feed the monthly billing block only
    let base = base_path.get_value();
    spawn_local(async move {
        match api::fetch_bills(&base).await {
            Ok(list) => bills.set(list),
            Err(e) => log::warn!("Bills unavailable: {}", e),
        }
    });

    // Reference lists; the filter panel falls back to the loaded assets
    let base = base_path.get_value();
    spawn_local(async move {
        match api::fetch_categories(&base).await {
            Ok(list) => categories.set(list),
            Err(e) => log::warn!("Categories unavailable: {}", e),
        }
        match api::fetch_departments(&base).await {
            Ok(list) => departments.set(list),
            Err(e) => log::warn!("Departments unavailable: {}", e),
        }
    });

    // Filters -> URL immediately, -> fetch after the debounce window
    let filters = Memo::new(move |_| state.with(|s| s.to_query()));
    let debounce_timeout = StoredValue::new(None::<i32>);
    let first_run = StoredValue::new(true);
    Effect::new(move |_| {
        let query = filters.get();
        url_state::write_query(&query);

        if first_run.get_value() {
            first_run.set_value(false);
            load();
            return;
        }

        let Some(window) = web_sys::window() else {
            return;
        };

        // Cancel previous timer
        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = Closure::wrap(Box::new(move || load()) as Box<dyn Fn()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            debounce_ms,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => {
                log::error!("setTimeout failed: {:?}", e);
                load();
            }
        }
        closure.forget();
    });

    let today = Utc::now().date_naive();
    let report = Memo::new(move |_| state.with(|s| s.view(trend_window, today)));

    let pinned_period = Memo::new(move |_| {
        state.with(|s| match s.date_filter().mode() {
            DateMode::MonthOfYear { month, year } => Period::new(year, month).ok(),
            _ => None,
        })
    });
    let bill_summary = Memo::new(move |_| {
        pinned_period
            .get()
            .map(|period| bills.with(|list| summarize_bills(list, period)))
    });

    let show_notice = move |message: String| {
        set_notice.set(Some(message));
        spawn_local(async move {
            TimeoutFuture::new(3000).await;
            set_notice.set(None);
        });
    };

    let export_assets = move |_| {
        let csv = report.with(|r| {
            let rows: Vec<&AssetRecord> = r.filtered.iter().collect();
            assets_to_csv(&rows)
        });
        let result = csv
            .map_err(|e| e.to_string())
            .and_then(|content| download_csv(&content, "asset-report.csv"));
        if let Err(e) = result {
            show_notice(e);
        }
    };

    let export_stats = move |_| {
        let csv = report.with(|r| stats_to_csv(&r.stats, &r.period_text));
        let result = csv
            .map_err(|e| e.to_string())
            .and_then(|content| download_csv(&content, "asset-statistics.csv"));
        if let Err(e) = result {
            show_notice(e);
        }
    };

    let comparison = move || report.with(|r| r.comparison.clone());
    let stats = Signal::derive(move || report.with(|r| r.stats.clone()));

    view! {
        <div id="d410_asset_report--dashboard" class="report-page">
            <div class="report-page__header">
                <h1>"Asset Report"</h1>
                <span class="report-page__period">{move || report.with(|r| r.period_text.clone())}</span>
                {move || {
                    auth.with(|a| a.user.as_ref().map(|u| u.full_name.clone())).map(|name| {
                        view! { <span class="report-page__user">{name}</span> }
                    })
                }}
                {move || {
                    auth.get().is_admin().then(|| {
                        view! {
                            <button
                                class="report-page__toggle"
                                on:click=move |_| set_show_reports.update(|v| *v = !*v)
                            >
                                {move || if show_reports.get() { "Dashboard" } else { "Statistical Reports" }}
                            </button>
                        }
                    })
                }}
            </div>

            <FilterPanel state=state categories=categories departments=departments />

            <div class="report-chips">
                {move || {
                    report
                        .with(|r| r.active_filters.clone())
                        .into_iter()
                        .map(|chip| {
                            let key: FilterKey = chip.key;
                            view! {
                                <span class="report-chip">
                                    {chip.label}
                                    <button on:click=move |_| state.update(|s| { s.clear(key); })>"×"</button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    (!report.with(|r| r.active_filters.is_empty())).then(|| {
                        view! {
                            <button
                                class="report-chips__clear"
                                on:click=move |_| state.update(|s| { s.clear_all(); })
                            >
                                "Clear all"
                            </button>
                        }
                    })
                }}
            </div>

            {move || {
                state.with(|s| s.last_error().map(str::to_string)).map(|err| {
                    view! {
                        <div class="report-error">
                            <strong>"Failed to load assets: "</strong>
                            {err}
                        </div>
                    }
                })
            }}
            {move || notice.get().map(|msg| view! { <div class="report-notice">{msg}</div> })}
            {move || loading.get().then(|| view! { <div class="report-loading">"Loading..."</div> })}
            {move || {
                let empty = state.with(|s| s.is_loaded())
                    && report.with(|r| r.filtered.is_empty());
                empty.then(|| {
                    view! { <div class="report-empty">"No assets match the current filters"</div> }
                })
            }}

            <div class="report-cards">
                <StatCard
                    label="Total assets"
                    value=Signal::derive(move || report.with(|r| r.stats.total_assets.to_string()))
                    change_percent=Signal::derive(move || comparison().map(|c| c.growth_rate.assets))
                    subtitle=Signal::derive(move || {
                        comparison().map(|c| format!("vs {}", c.previous.display_name()))
                    })
                />
                <StatCard
                    label="Total value"
                    value=Signal::derive(move || report.with(|r| format_money(r.stats.total_value)))
                    change_percent=Signal::derive(move || comparison().map(|c| c.growth_rate.value))
                />
                <StatCard
                    label="Average value"
                    value=Signal::derive(move || report.with(|r| format_money(r.stats.average_value)))
                    change_percent=Signal::derive(move || {
                        comparison().map(|c| c.growth_rate.average_value)
                    })
                />
            </div>

            {move || {
                comparison().map(|c| {
                    view! {
                        <div class="report-comparison">
                            <h3>{format!("{} vs {}", c.current.display_name(), c.previous.display_name())}</h3>
                            <p>
                                {format!(
                                    "Assets: {} (previous {}, change {:+})",
                                    c.current_period.total_assets,
                                    c.previous_period.total_assets,
                                    c.delta.assets,
                                )}
                            </p>
                            <p>
                                {format!(
                                    "Value: {} (previous {}, change {})",
                                    format_money(c.current_period.total_value),
                                    format_money(c.previous_period.total_value),
                                    format_percent(c.growth_rate.value),
                                )}
                            </p>
                        </div>
                    }
                })
            }}

            {move || {
                bill_summary.get().map(|summary| {
                    view! {
                        <div class="report-bills">
                            <h3>{format!("Bills for {}", summary.period.display_name())}</h3>
                            <p>
                                {format!(
                                    "{} bills, {} total",
                                    summary.total_bills,
                                    format_money(summary.total_amount),
                                )}
                            </p>
                            <ul>
                                {summary
                                    .status_breakdown
                                    .into_iter()
                                    .map(|(status, b)| {
                                        view! {
                                            <li>{format!("{}: {} ({})", status, b.count, format_money(b.total_value))}</li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
            }}

            <TrendTable points=Signal::derive(move || report.with(|r| r.trend.clone())) />

            {move || {
                show_reports.get().then(|| {
                    view! {
                        <div class="report-page__reports">
                            <div class="report-page__actions">
                                <button on:click=export_stats>"Export statistics"</button>
                                <button on:click=export_assets>"Export assets"</button>
                            </div>
                            <StatisticsTables stats=stats />
                        </div>
                    }
                })
            }}
        </div>
    }
}
