use super::date_filter;
use super::dto::{ComparisonResult, DateFilter, Delta, GrowthRate, MonthlyStats};
use super::error::ReportError;
use super::period::Period;
use super::statistics::{aggregate, growth_rate};
use crate::domain::a001_asset::{AssetRecord, DateField};

/// Compare a month against the one before it, by purchase date
pub fn compare_month(
    assets: &[AssetRecord],
    month: u32,
    year: i32,
) -> Result<ComparisonResult, ReportError> {
    compare_month_by(assets, DateField::Purchase, month, year)
}

pub fn compare_month_by(
    assets: &[AssetRecord],
    date_field: DateField,
    month: u32,
    year: i32,
) -> Result<ComparisonResult, ReportError> {
    let current = Period::new(year, month)?;
    Ok(compare_periods(assets, date_field, current))
}

/// Growth rates are 0 whenever the previous period's figure is 0
pub fn compare_periods(
    assets: &[AssetRecord],
    date_field: DateField,
    current: Period,
) -> ComparisonResult {
    let previous = current.previous();
    let current_stats = period_stats(assets, date_field, current);
    let previous_stats = period_stats(assets, date_field, previous);

    let growth = GrowthRate {
        assets: growth_rate(
            current_stats.total_assets as f64,
            previous_stats.total_assets as f64,
        ),
        value: growth_rate(current_stats.total_value, previous_stats.total_value),
        average_value: growth_rate(current_stats.average_value, previous_stats.average_value),
    };
    let delta = Delta {
        assets: current_stats.total_assets as i64 - previous_stats.total_assets as i64,
        value: current_stats.total_value - previous_stats.total_value,
    };

    ComparisonResult {
        current,
        previous,
        current_period: current_stats,
        previous_period: previous_stats,
        growth_rate: growth,
        delta,
    }
}

fn period_stats(assets: &[AssetRecord], date_field: DateField, period: Period) -> MonthlyStats {
    let filter = DateFilter::for_period(date_field, period);
    aggregate(assets.iter().filter(|asset| date_filter::matches(asset, &filter)))
}
