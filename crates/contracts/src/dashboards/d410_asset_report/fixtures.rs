//! Test data, always decoded through the real API boundary
use chrono::NaiveDate;
use serde_json::json;

use crate::domain::a001_asset::{decode_asset_list, AssetRecord};

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Two laptops bought in March 2024, one paid and one unpaid
pub(crate) fn scenario_assets() -> Vec<AssetRecord> {
    decode_asset_list(json!([
        {
            "id": 1, "cost": 100, "status": "Paid",
            "category": { "id": 1, "name": "Laptop" },
            "purchaseDate": "2024-03-15"
        },
        {
            "id": 2, "cost": 200, "status": "Unpaid",
            "category": { "id": 1, "name": "Laptop" },
            "purchaseDate": "2024-03-20"
        }
    ]))
    .unwrap()
}

/// Scenario assets plus one January 2024 purchase
pub(crate) fn scenario_with_january() -> Vec<AssetRecord> {
    let mut assets = scenario_assets();
    assets.extend(
        decode_asset_list(json!([{
            "id": 3, "cost": 50, "status": "Paid",
            "category": { "id": 2, "name": "Monitor" },
            "purchaseDate": "2024-01-05"
        }]))
        .unwrap(),
    );
    assets
}

/// A spread of assets over late 2023 and 2024 with mixed references and dates
pub(crate) fn inventory() -> Vec<AssetRecord> {
    decode_asset_list(json!({
        "data": [
            {
                "id": 10, "assetName": "ThinkPad X1", "cost": 1500, "status": "In Use",
                "category": { "id": 1, "categoryName": "Laptop" },
                "department": { "id": 1, "departmentName": "Engineering" },
                "purchaseDate": "2023-11-03T09:00:00Z",
                "warrantyExpiry": "2025-11-03",
                "createdAt": "2023-11-04T10:00:00Z"
            },
            {
                "id": 11, "assetName": "MacBook Pro", "cost": 2500, "status": "Active",
                "category": { "id": 1, "categoryName": "Laptop" },
                "department": { "id": 2, "departmentName": "Design" },
                "purchaseDate": "2024-01-15",
                "warrantyExpiry": "2026-01-15",
                "createdAt": "2024-01-16"
            },
            {
                "id": 12, "assetName": "Dell U2720Q", "cost": 600, "status": "Active",
                "category": { "id": 2, "categoryName": "Monitor" },
                "department": { "id": 1, "departmentName": "Engineering" },
                "purchaseDate": "2024-01-20",
                "warrantyExpiry": "2025-01-20"
            },
            {
                "id": 13, "assetName": "Office Chair", "cost": 300, "status": "Maintenance",
                "purchaseDate": "2024-02-10",
                "createdAt": "2024-02-11"
            },
            {
                "id": 14, "assetName": "LG Ultrafine", "cost": 700, "status": "Retired",
                "category": { "id": 2, "categoryName": "Monitor" },
                "department": { "id": 2, "departmentName": "Design" },
                "purchaseDate": "2024-03-01T00:30:00+07:00",
                "warrantyExpiry": "2024-03-31"
            },
            {
                "id": 15, "assetName": "Spare Laptop", "cost": 900, "status": "New",
                "category": { "id": 1, "categoryName": "Laptop" },
                "purchaseDate": "garbage"
            }
        ]
    }))
    .unwrap()
}
