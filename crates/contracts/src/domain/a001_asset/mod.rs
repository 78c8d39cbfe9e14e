pub mod aggregate;
pub mod view_model;

pub use aggregate::{
    decode_asset_list, decode_category_list, decode_department_list, AssetDto, AssetRecord,
    CategoryDto, CategoryRef, DateField, DepartmentDto, DepartmentRef,
};
pub use view_model::{
    category_options, department_options, distinct_categories, distinct_departments, NO_CATEGORY,
    NO_DEPARTMENT,
};
