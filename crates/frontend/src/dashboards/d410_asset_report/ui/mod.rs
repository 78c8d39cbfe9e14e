pub mod dashboard;
pub mod filter_panel;
pub mod tables;
pub mod url_state;

pub use dashboard::AssetReportDashboard;
