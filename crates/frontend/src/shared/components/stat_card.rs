use contracts::shared::format::format_percent;
use leptos::prelude::*;

/// Headline figure with an optional change against the previous period
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Change % relative to previous period
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let change_view = move || {
        change_percent.get().map(|pct| {
            let cls = if pct > 0.0 {
                "stat-card__change stat-card__change--up"
            } else if pct < 0.0 {
                "stat-card__change stat-card__change--down"
            } else {
                "stat-card__change stat-card__change--flat"
            };
            view! { <span class=cls>{format_percent(pct)}</span> }
        })
    };

    let subtitle_view = move || {
        subtitle
            .get()
            .map(|s| view! { <div class="stat-card__subtitle">{s}</div> })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get()}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}
