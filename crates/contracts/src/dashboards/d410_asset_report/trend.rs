use chrono::{Datelike, NaiveDate, Utc};

use super::date_filter::{self, DateMode};
use super::dto::{AssetFilter, DateFilter, TrendPoint};
use super::period::Period;
use super::statistics::aggregate;
use crate::domain::a001_asset::AssetRecord;

/// Last period of the trend window.
///
/// - month+year: that month
/// - range: the month of the end date
/// - year only: December, or the current month for the current year
/// - month only: the latest such month not after today
/// - nothing pinned (or an invalid month): the current month
pub fn anchor_period(date_filter: &DateFilter, today: NaiveDate) -> Period {
    let current = Period::from_date(today);

    match date_filter.mode() {
        DateMode::Range { end, .. } => Period::from_date(end),
        DateMode::MonthOfYear { month, year } => Period::new(year, month).unwrap_or(current),
        DateMode::Year(year) if year == today.year() => current,
        DateMode::Year(year) => Period::new(year, 12).unwrap_or(current),
        DateMode::Month(month) => {
            let year = if month <= today.month() {
                today.year()
            } else {
                today.year() - 1
            };
            Period::new(year, month).unwrap_or(current)
        }
        DateMode::Any => current,
    }
}

/// Trend series ending at the anchor period, relative to today (UTC)
pub fn generate_trend(
    assets: &[AssetRecord],
    date_filter: &DateFilter,
    asset_filter: &AssetFilter,
    window: usize,
) -> Vec<TrendPoint> {
    generate_trend_at(
        assets,
        date_filter,
        asset_filter,
        window,
        Utc::now().date_naive(),
    )
}

/// Deterministic form of [`generate_trend`].
///
/// Always returns exactly `window` points, oldest first. Months without
/// matching assets are zero-filled. Each bucket keeps the selected date field
/// and re-applies the non-date constraints.
pub fn generate_trend_at(
    assets: &[AssetRecord],
    date_filter: &DateFilter,
    asset_filter: &AssetFilter,
    window: usize,
    today: NaiveDate,
) -> Vec<TrendPoint> {
    let anchor = anchor_period(date_filter, today);

    anchor
        .trailing(window)
        .into_iter()
        .map(|period| {
            let bucket = DateFilter::for_period(date_filter.date_field, period);
            let stats = aggregate(
                assets
                    .iter()
                    .filter(|asset| date_filter::matches(asset, &bucket) && asset_filter.matches(asset)),
            );
            TrendPoint {
                period_label: period.label(),
                year: period.year(),
                month: period.month(),
                total_assets: stats.total_assets,
                total_value: stats.total_value,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_asset_report::fixtures::{date, inventory};
    use crate::domain::a001_asset::DateField;

    fn today() -> NaiveDate {
        date(2024, 5, 10)
    }

    #[test]
    fn test_length_is_exactly_window() {
        let assets = inventory();
        for window in [0, 1, 6, 12, 24] {
            let trend = generate_trend_at(
                &assets,
                &DateFilter::default(),
                &AssetFilter::default(),
                window,
                today(),
            );
            assert_eq!(trend.len(), window);
        }

        let empty = generate_trend_at(&[], &DateFilter::default(), &AssetFilter::default(), 12, today());
        assert_eq!(empty.len(), 12);
        assert!(empty.iter().all(|p| p.total_assets == 0 && p.total_value == 0.0));
    }

    #[test]
    fn test_chronological_and_ends_at_current_month() {
        let trend = generate_trend_at(
            &inventory(),
            &DateFilter::default(),
            &AssetFilter::default(),
            12,
            today(),
        );
        assert_eq!(trend.first().unwrap().period_label, "2023-06");
        assert_eq!(trend.last().unwrap().period_label, "2024-05");
        assert!(trend
            .windows(2)
            .all(|w| (w[0].year, w[0].month) < (w[1].year, w[1].month)));
    }

    #[test]
    fn test_buckets_count_and_value() {
        let trend = generate_trend_at(
            &inventory(),
            &DateFilter::default(),
            &AssetFilter::default(),
            12,
            today(),
        );
        let by_label = |label: &str| trend.iter().find(|p| p.period_label == label).unwrap().clone();

        assert_eq!(by_label("2023-11").total_assets, 1);
        assert_eq!(by_label("2024-01").total_assets, 2);
        assert_eq!(by_label("2024-01").total_value, 3100.0);
        // Office chair plus the monitor bought just after midnight UTC+7
        assert_eq!(by_label("2024-02").total_assets, 2);
        assert_eq!(by_label("2024-03").total_assets, 0);
        assert_eq!(by_label("2024-05").total_assets, 0);
    }

    #[test]
    fn test_pinned_month_is_anchor_and_asset_filter_applies() {
        let date_filter = DateFilter {
            month: Some(2),
            year: Some(2024),
            ..DateFilter::default()
        };
        let monitors = AssetFilter {
            category_id: Some(2),
            ..AssetFilter::default()
        };
        let trend = generate_trend_at(&inventory(), &date_filter, &monitors, 3, today());

        let labels: Vec<&str> = trend.iter().map(|p| p.period_label.as_str()).collect();
        assert_eq!(labels, vec!["2023-12", "2024-01", "2024-02"]);
        let counts: Vec<usize> = trend.iter().map(|p| p.total_assets).collect();
        assert_eq!(counts, vec![0, 1, 1]);
    }

    #[test]
    fn test_date_field_is_preserved() {
        let date_filter = DateFilter {
            date_field: DateField::Warranty,
            year: Some(2025),
            ..DateFilter::default()
        };
        let trend = generate_trend_at(&inventory(), &date_filter, &AssetFilter::default(), 12, today());
        assert_eq!(trend.last().unwrap().period_label, "2025-12");
        let total: usize = trend.iter().map(|p| p.total_assets).sum();
        // Warranties ending 2025-01 and 2025-11
        assert_eq!(total, 2);
    }

    #[test]
    fn test_anchor_rules() {
        let base = DateFilter::default();
        assert_eq!(anchor_period(&base, today()), Period::new(2024, 5).unwrap());

        let year_now = DateFilter {
            year: Some(2024),
            ..base.clone()
        };
        assert_eq!(anchor_period(&year_now, today()), Period::new(2024, 5).unwrap());

        let year_past = DateFilter {
            year: Some(2022),
            ..base.clone()
        };
        assert_eq!(anchor_period(&year_past, today()), Period::new(2022, 12).unwrap());

        let month_later = DateFilter {
            month: Some(9),
            ..base.clone()
        };
        assert_eq!(anchor_period(&month_later, today()), Period::new(2023, 9).unwrap());

        let month_earlier = DateFilter {
            month: Some(3),
            ..base.clone()
        };
        assert_eq!(anchor_period(&month_earlier, today()), Period::new(2024, 3).unwrap());

        let range = DateFilter::for_range(DateField::Purchase, date(2023, 1, 1), date(2023, 8, 31));
        assert_eq!(anchor_period(&range, today()), Period::new(2023, 8).unwrap());

        let bad_month = DateFilter {
            month: Some(13),
            year: Some(2020),
            ..base
        };
        assert_eq!(anchor_period(&bad_month, today()), Period::new(2024, 5).unwrap());

        let extreme_year = DateFilter {
            month: Some(1),
            year: Some(i32::MIN),
            ..DateFilter::default()
        };
        assert_eq!(anchor_period(&extreme_year, today()), Period::new(2024, 5).unwrap());
        let extreme_year_only = DateFilter {
            year: Some(i32::MIN),
            ..DateFilter::default()
        };
        assert_eq!(
            anchor_period(&extreme_year_only, today()),
            Period::new(2024, 5).unwrap()
        );
    }

    #[test]
    fn test_idempotent() {
        let assets = inventory();
        let filter = DateFilter::default();
        let first = generate_trend_at(&assets, &filter, &AssetFilter::default(), 12, today());
        let second = generate_trend_at(&assets, &filter, &AssetFilter::default(), 12, today());
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_trend_uses_clock() {
        let trend = generate_trend(&inventory(), &DateFilter::default(), &AssetFilter::default(), 12);
        assert_eq!(trend.len(), 12);
        assert_eq!(
            trend.last().unwrap().period_label,
            Period::from_date(Utc::now().date_naive()).label()
        );
    }
}
