use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::period::Period;
use crate::domain::a001_asset::{AssetRecord, DateField};

// ============================================================================
// Filters
// ============================================================================

/// Date constraint of the report. Several modes may be filled at once; the
/// predicate resolves them by precedence (see [`DateFilter::mode`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilter {
    pub date_field: DateField,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateFilter {
    /// Filter pinned to one calendar month
    pub fn for_period(date_field: DateField, period: Period) -> Self {
        Self {
            date_field,
            month: Some(period.month()),
            year: Some(period.year()),
            start_date: None,
            end_date: None,
        }
    }

    /// Inclusive date range filter
    pub fn for_range(date_field: DateField, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            date_field,
            month: None,
            year: None,
            start_date: Some(start),
            end_date: Some(end),
        }
    }

    /// Same date field, no constraint
    pub fn cleared(&self) -> Self {
        Self {
            date_field: self.date_field,
            ..Self::default()
        }
    }
}

/// Non-date constraints. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFilter {
    pub category_id: Option<i64>,
    pub department_id: Option<i64>,
    pub status: Option<String>,
    /// Case-insensitive substring of the asset name
    pub asset_name: Option<String>,
}

// ============================================================================
// Statistics
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusShare {
    pub count: usize,
    /// `count / total * 100`, 0 for an empty set
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub count: usize,
    pub total_value: f64,
}

/// Aggregate over one filtered asset set
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub total_assets: usize,
    pub total_value: f64,
    /// 0 for an empty set
    pub average_value: f64,
    pub status_distribution: BTreeMap<String, StatusShare>,
    /// Keyed by category name; "No Category" collects unreferenced assets
    pub category_breakdown: BTreeMap<String, Breakdown>,
    /// Keyed by department name; "No Department" collects unreferenced assets
    pub department_breakdown: BTreeMap<String, Breakdown>,
}

/// One month of the trend series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// "YYYY-MM"
    pub period_label: String,
    pub year: i32,
    pub month: u32,
    pub total_assets: usize,
    pub total_value: f64,
}

// ============================================================================
// Comparison
// ============================================================================

/// Percentage change against the previous period. 0 when the previous
/// value is 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRate {
    pub assets: f64,
    pub value: f64,
    pub average_value: f64,
}

/// Absolute change against the previous period
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delta {
    pub assets: i64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub current: Period,
    pub previous: Period,
    pub current_period: MonthlyStats,
    pub previous_period: MonthlyStats,
    pub growth_rate: GrowthRate,
    pub delta: Delta,
}

// ============================================================================
// Report page
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    Date,
    Category,
    Department,
    Status,
    AssetName,
}

/// One removable filter chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilter {
    pub key: FilterKey,
    pub label: String,
}

/// Everything the report page renders, derived from one state snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub period_text: String,
    pub filtered: Vec<AssetRecord>,
    pub stats: MonthlyStats,
    pub trend: Vec<TrendPoint>,
    /// Present only when both month and year are selected
    pub comparison: Option<ComparisonResult>,
    pub active_filters: Vec<ActiveFilter>,
}

// ============================================================================
// Bills
// ============================================================================

/// Monthly billing totals, the client-side counterpart of the server's
/// monthly summary job
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBillSummary {
    pub period: Period,
    pub total_bills: usize,
    pub total_amount: f64,
    pub status_breakdown: BTreeMap<String, Breakdown>,
    pub category_breakdown: BTreeMap<String, Breakdown>,
}
