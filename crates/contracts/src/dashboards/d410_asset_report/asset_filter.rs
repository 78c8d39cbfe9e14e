use super::date_filter;
use super::dto::{AssetFilter, DateFilter};
use crate::domain::a001_asset::AssetRecord;

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl AssetFilter {
    /// Status constraint, ignoring blank input
    pub fn status_constraint(&self) -> Option<&str> {
        non_blank(&self.status)
    }

    pub fn name_constraint(&self) -> Option<&str> {
        non_blank(&self.asset_name)
    }

    pub fn is_active(&self) -> bool {
        self.category_id.is_some()
            || self.department_id.is_some()
            || self.status_constraint().is_some()
            || self.name_constraint().is_some()
    }

    /// Each constraint is independent; an asset must satisfy all present ones
    pub fn matches(&self, asset: &AssetRecord) -> bool {
        if let Some(category_id) = self.category_id {
            if asset.category_id() != Some(category_id) {
                return false;
            }
        }
        if let Some(department_id) = self.department_id {
            if asset.department_id() != Some(department_id) {
                return false;
            }
        }
        if let Some(status) = self.status_constraint() {
            if asset.status != status {
                return false;
            }
        }
        if let Some(name) = self.name_constraint() {
            if !asset.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Assets passing both the date window and the non-date constraints
pub fn filter_assets<'a>(
    assets: &'a [AssetRecord],
    date_filter: &DateFilter,
    asset_filter: &AssetFilter,
) -> Vec<&'a AssetRecord> {
    assets
        .iter()
        .filter(|asset| date_filter::matches(asset, date_filter) && asset_filter.matches(asset))
        .collect()
}
