use contracts::dashboards::d410_asset_report::{Breakdown, MonthlyStats, StatusShare, TrendPoint};
use contracts::shared::format::{format_money, format_number_with_decimals};
use leptos::prelude::*;
use std::collections::BTreeMap;

/// One line of a breakdown table with a preformatted figure column
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub name: String,
    pub count: usize,
    pub figure: String,
}

pub fn value_rows(breakdown: &BTreeMap<String, Breakdown>) -> Vec<BreakdownRow> {
    breakdown
        .iter()
        .map(|(name, b)| BreakdownRow {
            name: name.clone(),
            count: b.count,
            figure: format_money(b.total_value),
        })
        .collect()
}

pub fn share_rows(distribution: &BTreeMap<String, StatusShare>) -> Vec<BreakdownRow> {
    distribution
        .iter()
        .map(|(name, share)| BreakdownRow {
            name: name.clone(),
            count: share.count,
            figure: format!("{}%", format_number_with_decimals(share.percentage, 1)),
        })
        .collect()
}

#[component]
pub fn BreakdownTable(
    title: &'static str,
    /// Header of the figure column
    figure_title: &'static str,
    #[prop(into)] rows: Signal<Vec<BreakdownRow>>,
) -> impl IntoView {
    view! {
        <div class="report-table">
            <h3>{title}</h3>
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th class="num">"Count"</th>
                        <th class="num">{figure_title}</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            view! { <tr><td colspan="3">"No data"</td></tr> }.into_any()
                        } else {
                            rows.into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{row.name}</td>
                                            <td class="num">{row.count}</td>
                                            <td class="num">{row.figure}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Breakdowns of one statistics snapshot
#[component]
pub fn StatisticsTables(#[prop(into)] stats: Signal<MonthlyStats>) -> impl IntoView {
    let status_rows = Signal::derive(move || stats.with(|s| share_rows(&s.status_distribution)));
    let category_rows = Signal::derive(move || stats.with(|s| value_rows(&s.category_breakdown)));
    let department_rows =
        Signal::derive(move || stats.with(|s| value_rows(&s.department_breakdown)));

    view! {
        <div class="report-tables">
            <BreakdownTable title="By status" figure_title="Share" rows=status_rows />
            <BreakdownTable title="By category" figure_title="Total value" rows=category_rows />
            <BreakdownTable title="By department" figure_title="Total value" rows=department_rows />
        </div>
    }
}

#[component]
pub fn TrendTable(#[prop(into)] points: Signal<Vec<TrendPoint>>) -> impl IntoView {
    view! {
        <div class="report-table report-table--trend">
            <h3>"Monthly trend"</h3>
            <table>
                <thead>
                    <tr>
                        <th>"Month"</th>
                        <th class="num">"Assets"</th>
                        <th class="num">"Total value"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        points
                            .get()
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <tr>
                                        <td>{p.period_label}</td>
                                        <td class="num">{p.total_assets}</td>
                                        <td class="num">{format_money(p.total_value)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
