use super::date_filter::DateMode;
use super::dto::{ActiveFilter, AssetFilter, DateFilter, FilterKey};
use super::period::{month_name, Period};
use crate::domain::a001_asset::{distinct_categories, distinct_departments, AssetRecord};

/// Human readable description of the selected report period
pub fn date_range_text(date_filter: &DateFilter) -> String {
    match date_filter.mode() {
        DateMode::Range { start, end } => format!(
            "{} - {}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        ),
        DateMode::MonthOfYear { month, year } => match Period::new(year, month) {
            Ok(period) => period.display_name(),
            Err(_) => format!("Month {} {}", month, year),
        },
        DateMode::Year(year) => format!("Year: {}", year),
        DateMode::Month(month) => match month_name(month) {
            Some(name) => format!("Month: {}", name),
            None => format!("Month: {}", month),
        },
        DateMode::Any => "All Time".to_string(),
    }
}

/// Removable chips for every constraint currently applied.
///
/// Category and department names are resolved against the loaded assets;
/// an id that no loaded asset references falls back to a generic label.
pub fn active_filters(
    date_filter: &DateFilter,
    asset_filter: &AssetFilter,
    assets: &[AssetRecord],
) -> Vec<ActiveFilter> {
    let mut chips = Vec::new();

    if date_filter.is_active() {
        chips.push(ActiveFilter {
            key: FilterKey::Date,
            label: date_range_text(date_filter),
        });
    }

    if let Some(category_id) = asset_filter.category_id {
        let label = distinct_categories(assets)
            .into_iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Category".to_string());
        chips.push(ActiveFilter {
            key: FilterKey::Category,
            label,
        });
    }

    if let Some(department_id) = asset_filter.department_id {
        let label = distinct_departments(assets)
            .into_iter()
            .find(|d| d.id == department_id)
            .map(|d| d.name)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Department".to_string());
        chips.push(ActiveFilter {
            key: FilterKey::Department,
            label,
        });
    }

    if let Some(status) = asset_filter.status_constraint() {
        chips.push(ActiveFilter {
            key: FilterKey::Status,
            label: status.to_string(),
        });
    }

    if let Some(name) = asset_filter.name_constraint() {
        chips.push(ActiveFilter {
            key: FilterKey::AssetName,
            label: format!("Name: {}", name),
        });
    }

    chips
}
