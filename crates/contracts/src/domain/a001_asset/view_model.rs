//! Single place for the "how do I read this asset" questions: display labels
//! for optional references and date selection by field. Every engine and the
//! export go through these accessors.
use chrono::NaiveDate;

use super::aggregate::{AssetRecord, CategoryRef, DateField, DepartmentRef};

pub const NO_CATEGORY: &str = "No Category";
pub const NO_DEPARTMENT: &str = "No Department";

impl AssetRecord {
    /// Category name, or the sentinel when the reference is absent or unnamed
    pub fn category_label(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(NO_CATEGORY)
    }

    /// Department name, or the sentinel when the reference is absent or unnamed
    pub fn department_label(&self) -> &str {
        self.department
            .as_ref()
            .map(|d| d.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(NO_DEPARTMENT)
    }

    pub fn category_id(&self) -> Option<i64> {
        self.category.as_ref().map(|c| c.id)
    }

    pub fn department_id(&self) -> Option<i64> {
        self.department.as_ref().map(|d| d.id)
    }

    pub fn date_for(&self, field: DateField) -> Option<NaiveDate> {
        match field {
            DateField::Purchase => self.purchase_date,
            DateField::Warranty => self.warranty_expiry,
            DateField::Created => self.created_at,
        }
    }
}

/// Categories referenced by the list, sorted by name, one entry per id
pub fn distinct_categories(assets: &[AssetRecord]) -> Vec<CategoryRef> {
    let mut categories: Vec<CategoryRef> = Vec::new();
    for category in assets.iter().filter_map(|a| a.category.as_ref()) {
        if !categories.iter().any(|c| c.id == category.id) {
            categories.push(category.clone());
        }
    }
    categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    categories
}

/// Departments referenced by the list, sorted by name, one entry per id
pub fn distinct_departments(assets: &[AssetRecord]) -> Vec<DepartmentRef> {
    let mut departments: Vec<DepartmentRef> = Vec::new();
    for department in assets.iter().filter_map(|a| a.department.as_ref()) {
        if !departments.iter().any(|d| d.id == department.id) {
            departments.push(department.clone());
        }
    }
    departments.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    departments
}

/// Filter choices: the full reference list plus anything the loaded assets
/// reference that the list lacks. Reference names win on a shared id.
pub fn category_options(reference: &[CategoryRef], assets: &[AssetRecord]) -> Vec<CategoryRef> {
    let mut options = reference.to_vec();
    for category in distinct_categories(assets) {
        if !options.iter().any(|c| c.id == category.id) {
            options.push(category);
        }
    }
    options.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    options
}

pub fn department_options(
    reference: &[DepartmentRef],
    assets: &[AssetRecord],
) -> Vec<DepartmentRef> {
    let mut options = reference.to_vec();
    for department in distinct_departments(assets) {
        if !options.iter().any(|d| d.id == department.id) {
            options.push(department);
        }
    }
    options.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    options
}
