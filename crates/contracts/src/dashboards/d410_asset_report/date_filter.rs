use chrono::{Datelike, NaiveDate};

use super::dto::DateFilter;
use crate::domain::a001_asset::AssetRecord;

/// The date constraint a [`DateFilter`] resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMode {
    /// Inclusive on both ends
    Range { start: NaiveDate, end: NaiveDate },
    MonthOfYear { month: u32, year: i32 },
    Year(i32),
    /// Calendar month in any year
    Month(u32),
    Any,
}

impl DateFilter {
    /// Resolve the active mode. Precedence: range, month+year, year, month.
    /// A range needs both bounds; a lone bound is ignored.
    pub fn mode(&self) -> DateMode {
        match (self.start_date, self.end_date, self.month, self.year) {
            (Some(start), Some(end), _, _) => DateMode::Range { start, end },
            (_, _, Some(month), Some(year)) => DateMode::MonthOfYear { month, year },
            (_, _, None, Some(year)) => DateMode::Year(year),
            (_, _, Some(month), None) => DateMode::Month(month),
            _ => DateMode::Any,
        }
    }

    pub fn is_active(&self) -> bool {
        self.mode() != DateMode::Any
    }
}

/// Does `asset` fall inside the window described by `filter`?
///
/// With no constraint every asset matches. Otherwise an asset without a
/// value for the selected date field never matches.
pub fn matches(asset: &AssetRecord, filter: &DateFilter) -> bool {
    let mode = filter.mode();
    if mode == DateMode::Any {
        return true;
    }

    let Some(date) = asset.date_for(filter.date_field) else {
        return false;
    };

    match mode {
        DateMode::Range { start, end } => start <= date && date <= end,
        DateMode::MonthOfYear { month, year } => date.month() == month && date.year() == year,
        DateMode::Year(year) => date.year() == year,
        DateMode::Month(month) => date.month() == month,
        DateMode::Any => true,
    }
}

pub fn filter_by_date<'a>(assets: &'a [AssetRecord], filter: &DateFilter) -> Vec<&'a AssetRecord> {
    assets.iter().filter(|asset| matches(asset, filter)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_asset_report::fixtures::{date, inventory, scenario_assets};
    use crate::domain::a001_asset::DateField;

    fn ids(assets: &[&AssetRecord]) -> Vec<i64> {
        assets.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let assets = inventory();
        let filter = DateFilter::default();
        assert_eq!(filter.mode(), DateMode::Any);
        assert_eq!(filter_by_date(&assets, &filter).len(), assets.len());
    }

    #[test]
    fn test_month_and_year() {
        let assets = scenario_assets();
        let march = DateFilter {
            month: Some(3),
            year: Some(2024),
            ..DateFilter::default()
        };
        assert_eq!(ids(&filter_by_date(&assets, &march)), vec![1, 2]);

        let april = DateFilter {
            month: Some(4),
            year: Some(2024),
            ..DateFilter::default()
        };
        assert!(filter_by_date(&assets, &april).is_empty());
    }

    #[test]
    fn test_year_only_and_month_only() {
        let assets = inventory();
        let year_2024 = DateFilter {
            year: Some(2024),
            ..DateFilter::default()
        };
        assert_eq!(ids(&filter_by_date(&assets, &year_2024)), vec![11, 12, 13, 14]);

        let any_november = DateFilter {
            month: Some(11),
            ..DateFilter::default()
        };
        assert_eq!(ids(&filter_by_date(&assets, &any_november)), vec![10]);
    }

    #[test]
    fn test_range_is_inclusive() {
        let assets = inventory();
        let filter = DateFilter::for_range(DateField::Purchase, date(2024, 1, 20), date(2024, 2, 10));
        assert_eq!(ids(&filter_by_date(&assets, &filter)), vec![12, 13]);
    }

    #[test]
    fn test_range_takes_precedence_over_month_year() {
        let filter = DateFilter {
            month: Some(11),
            year: Some(2023),
            ..DateFilter::for_range(DateField::Purchase, date(2024, 1, 1), date(2024, 1, 31))
        };
        assert_eq!(
            filter.mode(),
            DateMode::Range {
                start: date(2024, 1, 1),
                end: date(2024, 1, 31)
            }
        );
        assert_eq!(ids(&filter_by_date(&inventory(), &filter)), vec![11, 12]);
    }

    #[test]
    fn test_half_open_range_falls_through() {
        let filter = DateFilter {
            start_date: Some(date(2024, 1, 1)),
            year: Some(2023),
            ..DateFilter::default()
        };
        assert_eq!(filter.mode(), DateMode::Year(2023));

        let lone_end = DateFilter {
            end_date: Some(date(2024, 1, 1)),
            ..DateFilter::default()
        };
        assert_eq!(lone_end.mode(), DateMode::Any);
        assert!(!lone_end.is_active());
    }

    #[test]
    fn test_missing_or_malformed_date_never_matches_active_filter() {
        let assets = inventory();
        // Asset 15 had an unparseable purchase date
        let spare = assets.iter().find(|a| a.id == 15).unwrap();
        assert!(matches(spare, &DateFilter::default()));
        assert!(!matches(
            spare,
            &DateFilter {
                year: Some(2024),
                ..DateFilter::default()
            }
        ));
    }

    #[test]
    fn test_selected_field_is_used() {
        let assets = inventory();
        let warranty_2025 = DateFilter {
            date_field: DateField::Warranty,
            year: Some(2025),
            ..DateFilter::default()
        };
        assert_eq!(ids(&filter_by_date(&assets, &warranty_2025)), vec![10, 12]);

        let created_feb = DateFilter {
            date_field: DateField::Created,
            month: Some(2),
            year: Some(2024),
            ..DateFilter::default()
        };
        assert_eq!(ids(&filter_by_date(&assets, &created_feb)), vec![13]);
    }

    #[test]
    fn test_utc_calendar_dates() {
        // 2024-03-01T00:30:00+07:00 is 2024-02-29 in UTC
        let assets = inventory();
        let feb = DateFilter {
            month: Some(2),
            year: Some(2024),
            ..DateFilter::default()
        };
        assert_eq!(ids(&filter_by_date(&assets, &feb)), vec![13, 14]);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let filter = DateFilter::for_range(DateField::Purchase, date(2024, 3, 1), date(2024, 1, 1));
        assert!(filter_by_date(&inventory(), &filter).is_empty());
    }
}
