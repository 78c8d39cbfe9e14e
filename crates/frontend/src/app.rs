use crate::dashboards::d410_asset_report::ui::AssetReportDashboard;
use crate::shared::config::fetch_config;
use crate::system::auth::AuthProvider;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    // The report page needs the API prefix before its first fetch
    let config = RwSignal::new(None::<AppConfig>);
    spawn_local(async move {
        config.set(Some(fetch_config().await));
    });

    view! {
        <AuthProvider>
            {move || match config.get() {
                Some(config) => view! { <AssetReportDashboard config=config /> }.into_any(),
                None => view! { <div class="report-loading">"Loading..."</div> }.into_any(),
            }}
        </AuthProvider>
    }
}
