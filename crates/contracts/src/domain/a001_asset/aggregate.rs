use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{list_payload, DecodeError};
use crate::shared::date_utils::lenient_date;

// ============================================================================
// References
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DepartmentRef {
    pub id: i64,
    pub name: String,
}

/// Which date attribute of an asset a date filter looks at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    #[default]
    Purchase,
    Warranty,
    Created,
}

impl DateField {
    pub const ALL: [DateField; 3] = [DateField::Purchase, DateField::Warranty, DateField::Created];

    /// Wire value used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            DateField::Purchase => "purchase",
            DateField::Warranty => "warranty",
            DateField::Created => "created",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateField::Purchase => "Purchase Date",
            DateField::Warranty => "Warranty Expiry",
            DateField::Created => "Created Date",
        }
    }
}

// ============================================================================
// Asset record
// ============================================================================

/// Asset as seen by the reporting engines. Produced only through
/// [`AssetDto`] so every field is already validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: i64,
    pub name: String,
    pub serial_number: Option<String>,
    /// Non-negative, finite
    pub cost: f64,
    pub status: String,
    pub category: Option<CategoryRef>,
    pub department: Option<DepartmentRef>,
    /// UTC calendar dates
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub created_at: Option<NaiveDate>,
}

// ============================================================================
// Raw API shape
// ============================================================================
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    #[serde(default, alias = "name")]
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: i64,
    #[serde(default, alias = "name")]
    pub department_name: Option<String>,
}

/// Asset exactly as the backend sends it; everything optional
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, alias = "name")]
    pub asset_name: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryDto>,
    #[serde(default)]
    pub department: Option<DepartmentDto>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, alias = "warrantExpiry", deserialize_with = "lenient_date")]
    pub warranty_expiry: Option<NaiveDate>,
    #[serde(default, alias = "createAt", deserialize_with = "lenient_date")]
    pub created_at: Option<NaiveDate>,
}

impl TryFrom<AssetDto> for AssetRecord {
    type Error = DecodeError;

    fn try_from(dto: AssetDto) -> Result<Self, Self::Error> {
        let id = dto.id.ok_or(DecodeError::MissingField("id"))?;

        let cost = dto.cost.unwrap_or(0.0);
        if !cost.is_finite() || cost < 0.0 {
            return Err(DecodeError::InvalidAmount { id, amount: cost });
        }

        let status = dto
            .status
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(DecodeError::MissingField("status"))?;

        Ok(AssetRecord {
            id,
            name: dto.asset_name.unwrap_or_default(),
            serial_number: dto.serial_number.filter(|s| !s.trim().is_empty()),
            cost,
            status,
            category: dto.category.map(|c| CategoryRef {
                id: c.id,
                name: c.category_name.unwrap_or_default(),
            }),
            department: dto.department.map(|d| DepartmentRef {
                id: d.id,
                name: d.department_name.unwrap_or_default(),
            }),
            purchase_date: dto.purchase_date,
            warranty_expiry: dto.warranty_expiry,
            created_at: dto.created_at,
        })
    }
}

/// Decode an asset list response. Records that fail validation are skipped
/// and logged; a malformed envelope fails the whole decode.
pub fn decode_asset_list(value: serde_json::Value) -> Result<Vec<AssetRecord>, DecodeError> {
    let items = list_payload(value)?;
    let mut records = Vec::with_capacity(items.len());

    for item in items {
        let decoded = serde_json::from_value::<AssetDto>(item)
            .map_err(|e| DecodeError::Payload(e.to_string()))
            .and_then(AssetRecord::try_from);
        match decoded {
            Ok(record) => records.push(record),
            Err(err) => log::warn!("Skipping asset record: {}", err),
        }
    }

    log::debug!("Decoded {} asset records", records.len());
    Ok(records)
}

fn decode_references<D, R>(
    value: serde_json::Value,
    kind: &str,
    convert: impl Fn(D) -> R,
) -> Result<Vec<R>, DecodeError>
where
    D: serde::de::DeserializeOwned,
{
    let items = list_payload(value)?;
    let mut refs = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<D>(item) {
            Ok(dto) => refs.push(convert(dto)),
            Err(err) => log::warn!("Skipping {} record: {}", kind, err),
        }
    }
    Ok(refs)
}

/// Decode the `/categories` reference list
pub fn decode_category_list(value: serde_json::Value) -> Result<Vec<CategoryRef>, DecodeError> {
    decode_references(value, "category", |dto: CategoryDto| CategoryRef {
        id: dto.id,
        name: dto.category_name.unwrap_or_default(),
    })
}

/// Decode the `/departments` reference list
pub fn decode_department_list(
    value: serde_json::Value,
) -> Result<Vec<DepartmentRef>, DecodeError> {
    decode_references(value, "department", |dto: DepartmentDto| DepartmentRef {
        id: dto.id,
        name: dto.department_name.unwrap_or_default(),
    })
}
