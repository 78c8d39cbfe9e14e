//! Asset statistics report: filters, monthly aggregation, trend series,
//! month-over-month comparison and the state behind the report page.

pub mod asset_filter;
pub mod bill_summary;
pub mod comparison;
pub mod date_filter;
pub mod dto;
pub mod error;
pub mod export;
pub mod labels;
pub mod period;
pub mod query;
pub mod state;
pub mod statistics;
pub mod trend;

#[cfg(test)]
pub(crate) mod fixtures;

pub use asset_filter::filter_assets;
pub use bill_summary::summarize_bills;
pub use comparison::{compare_month, compare_month_by, compare_periods};
pub use date_filter::{filter_by_date, matches, DateMode};
pub use dto::*;
pub use error::ReportError;
pub use export::{assets_to_csv, stats_to_csv, to_csv, CsvCell, CsvExportable, UTF8_BOM};
pub use labels::{active_filters, date_range_text};
pub use period::{month_name, Period};
pub use query::ReportQuery;
pub use state::{FetchOutcome, FetchTicket, ReportState};
pub use statistics::{aggregate, growth_rate, percent_of};
pub use trend::{anchor_period, generate_trend, generate_trend_at};
