use contracts::dashboards::d410_asset_report::ReportQuery;
use contracts::domain::a001_asset::{
    decode_asset_list, decode_category_list, decode_department_list, AssetRecord, CategoryRef,
    DepartmentRef,
};
use contracts::domain::a002_bill::{decode_bill_list, BillRecord};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

async fn get_json(url: &str) -> Result<serde_json::Value, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Assets for the report. Without active filters the plain list endpoint
/// is used, otherwise the server narrows the list first.
pub async fn fetch_assets(
    base_path: &str,
    query: Option<&ReportQuery>,
) -> Result<Vec<AssetRecord>, String> {
    let url = match query {
        Some(query) => {
            let query_string = query.to_query_string().map_err(|e| e.to_string())?;
            format!("{}?{}", api_url(base_path, "/assets/filter"), query_string)
        }
        None => api_url(base_path, "/assets"),
    };

    let payload = get_json(&url).await?;
    decode_asset_list(payload).map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_bills(base_path: &str) -> Result<Vec<BillRecord>, String> {
    let payload = get_json(&api_url(base_path, "/bills")).await?;
    decode_bill_list(payload).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Full category list, independent of the report filters
pub async fn fetch_categories(base_path: &str) -> Result<Vec<CategoryRef>, String> {
    let payload = get_json(&api_url(base_path, "/categories")).await?;
    decode_category_list(payload).map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_departments(base_path: &str) -> Result<Vec<DepartmentRef>, String> {
    let payload = get_json(&api_url(base_path, "/departments")).await?;
    decode_department_list(payload).map_err(|e| format!("Failed to parse response: {}", e))
}
