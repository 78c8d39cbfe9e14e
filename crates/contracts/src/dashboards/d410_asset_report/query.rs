use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};

use super::dto::{AssetFilter, DateFilter};
use super::error::ReportError;
use crate::domain::a001_asset::DateField;
use crate::shared::date_utils::parse_calendar_date;

/// Flat query-string form of the report filters.
///
/// Used both for the `/assets/filter` request and for the page URL, so a
/// report can be bookmarked. Keys are camelCase; absent values are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Written as YYYY-MM-DD; full ISO timestamps are accepted when parsing
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "query_date"
    )]
    pub start_date: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "query_date"
    )]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_field: Option<DateField>,
}

fn query_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_calendar_date(value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date `{}`", value))),
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl ReportQuery {
    pub fn from_filters(date_filter: &DateFilter, asset_filter: &AssetFilter) -> Self {
        Self {
            category_id: asset_filter.category_id,
            department_id: asset_filter.department_id,
            status: non_blank(&asset_filter.status),
            asset_name: non_blank(&asset_filter.asset_name),
            month: date_filter.month,
            year: date_filter.year,
            start_date: date_filter.start_date,
            end_date: date_filter.end_date,
            date_field: Some(date_filter.date_field),
        }
    }

    /// Filters described by this query; a missing `dateField` means purchase date
    pub fn to_filters(&self) -> (DateFilter, AssetFilter) {
        let date_filter = DateFilter {
            date_field: self.date_field.unwrap_or_default(),
            month: self.month,
            year: self.year,
            start_date: self.start_date,
            end_date: self.end_date,
        };
        let asset_filter = AssetFilter {
            category_id: self.category_id,
            department_id: self.department_id,
            status: non_blank(&self.status),
            asset_name: non_blank(&self.asset_name),
        };
        (date_filter, asset_filter)
    }

    /// False when nothing but the date field is set; the full list endpoint
    /// is used instead of the filter endpoint then
    pub fn has_active_filters(&self) -> bool {
        Self {
            date_field: None,
            ..self.clone()
        } != Self::default()
    }

    pub fn to_query_string(&self) -> Result<String, ReportError> {
        serde_qs::to_string(self).map_err(|e| ReportError::Query(e.to_string()))
    }

    /// Parse a query string, with or without the leading `?`.
    /// Unknown keys are ignored.
    pub fn parse(query: &str) -> Result<Self, ReportError> {
        serde_qs::from_str(query.trim_start_matches('?'))
            .map_err(|e| ReportError::Query(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_asset_report::fixtures::date;

    fn full_query() -> ReportQuery {
        ReportQuery {
            category_id: Some(3),
            department_id: Some(12),
            status: Some("In Use".to_string()),
            asset_name: Some("Dell & Co + 50%".to_string()),
            month: Some(3),
            year: Some(2024),
            start_date: Some(date(2024, 1, 1)),
            end_date: Some(date(2024, 12, 31)),
            date_field: Some(DateField::Warranty),
        }
    }

    #[test]
    fn test_round_trip_full() {
        let query = full_query();
        let encoded = query.to_query_string().unwrap();
        assert_eq!(ReportQuery::parse(&encoded).unwrap(), query);
    }

    #[test]
    fn test_round_trip_partial_and_empty() {
        let partial = ReportQuery {
            year: Some(2023),
            date_field: Some(DateField::Created),
            ..ReportQuery::default()
        };
        let encoded = partial.to_query_string().unwrap();
        assert!(!encoded.contains("month"));
        assert_eq!(ReportQuery::parse(&encoded).unwrap(), partial);

        let empty = ReportQuery::default();
        assert_eq!(empty.to_query_string().unwrap(), "");
        assert_eq!(ReportQuery::parse("").unwrap(), empty);
    }

    #[test]
    fn test_filters_round_trip() {
        let date_filter = DateFilter {
            date_field: DateField::Warranty,
            month: Some(11),
            year: Some(2025),
            start_date: None,
            end_date: None,
        };
        let asset_filter = AssetFilter {
            category_id: Some(1),
            department_id: None,
            status: Some("Active".to_string()),
            asset_name: None,
        };
        let encoded = ReportQuery::from_filters(&date_filter, &asset_filter)
            .to_query_string()
            .unwrap();
        let (parsed_date, parsed_asset) = ReportQuery::parse(&encoded).unwrap().to_filters();
        assert_eq!(parsed_date, date_filter);
        assert_eq!(parsed_asset, asset_filter);
    }

    #[test]
    fn test_parse_with_question_mark_and_iso_timestamps() {
        let query = ReportQuery::parse(
            "?startDate=2024-01-01T00:00:00.000Z&endDate=2024-03-31T23:59:59.999Z&categoryId=4&active=tab",
        )
        .unwrap();
        assert_eq!(query.start_date, Some(date(2024, 1, 1)));
        assert_eq!(query.end_date, Some(date(2024, 3, 31)));
        assert_eq!(query.category_id, Some(4));
        assert_eq!(query.date_field, None);
        assert_eq!(query.to_filters().0.date_field, DateField::Purchase);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            ReportQuery::parse("month=march"),
            Err(ReportError::Query(_))
        ));
        assert!(matches!(
            ReportQuery::parse("startDate=yesterday"),
            Err(ReportError::Query(_))
        ));
        assert!(matches!(
            ReportQuery::parse("dateField=updated"),
            Err(ReportError::Query(_))
        ));
    }

    #[test]
    fn test_blank_text_filters_are_dropped() {
        let asset_filter = AssetFilter {
            status: Some("   ".to_string()),
            asset_name: Some(String::new()),
            ..AssetFilter::default()
        };
        let query = ReportQuery::from_filters(&DateFilter::default(), &asset_filter);
        assert_eq!(query.status, None);
        assert_eq!(query.asset_name, None);
        assert!(!query.has_active_filters());
    }

    #[test]
    fn test_has_active_filters() {
        assert!(!ReportQuery::default().has_active_filters());
        assert!(full_query().has_active_filters());
        let year_only = ReportQuery {
            year: Some(2024),
            ..ReportQuery::default()
        };
        assert!(year_only.has_active_filters());
    }
}
