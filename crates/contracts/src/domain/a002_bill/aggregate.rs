use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_asset::{CategoryDto, CategoryRef};
use crate::domain::common::{list_payload, DecodeError};
use crate::shared::date_utils::lenient_date;

/// Payment state of a bill. Unknown states are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BillStatus {
    Paid,
    Unpaid,
    Other(String),
}

impl BillStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            s if s.eq_ignore_ascii_case("paid") => BillStatus::Paid,
            s if s.eq_ignore_ascii_case("unpaid") => BillStatus::Unpaid,
            other => BillStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BillStatus::Paid => "Paid",
            BillStatus::Unpaid => "Unpaid",
            BillStatus::Other(s) => s.as_str(),
        }
    }
}

impl Serialize for BillStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    pub id: i64,
    pub bill_number: String,
    pub amount: f64,
    pub status: BillStatus,
    /// UTC calendar date the bill was issued
    pub created_at: Option<NaiveDate>,
    /// Category of the billed asset
    pub category: Option<CategoryRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillAssetDto {
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub category: Option<CategoryDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub bill_number: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default, alias = "statusBill")]
    pub status: Option<String>,
    #[serde(default, alias = "createAt", deserialize_with = "lenient_date")]
    pub created_at: Option<NaiveDate>,
    #[serde(default, alias = "asset", alias = "Asset")]
    pub assets: Option<BillAssetDto>,
}

impl TryFrom<BillDto> for BillRecord {
    type Error = DecodeError;

    fn try_from(dto: BillDto) -> Result<Self, Self::Error> {
        let id = dto.id.ok_or(DecodeError::MissingField("id"))?;

        // Bills created before amounts were stored carry only the asset cost
        let amount = dto
            .amount
            .or_else(|| dto.assets.as_ref().and_then(|a| a.cost))
            .unwrap_or(0.0);
        if !amount.is_finite() || amount < 0.0 {
            return Err(DecodeError::InvalidAmount { id, amount });
        }

        let status = dto
            .status
            .as_deref()
            .map(BillStatus::parse)
            .ok_or(DecodeError::MissingField("status"))?;

        Ok(BillRecord {
            id,
            bill_number: dto.bill_number.unwrap_or_default(),
            amount,
            status,
            created_at: dto.created_at,
            category: dto.assets.and_then(|a| a.category).map(|c| CategoryRef {
                id: c.id,
                name: c.category_name.unwrap_or_default(),
            }),
        })
    }
}

/// Decode a bill list response, skipping invalid records
pub fn decode_bill_list(value: serde_json::Value) -> Result<Vec<BillRecord>, DecodeError> {
    let items = list_payload(value)?;
    let mut records = Vec::with_capacity(items.len());

    for item in items {
        let decoded = serde_json::from_value::<BillDto>(item)
            .map_err(|e| DecodeError::Payload(e.to_string()))
            .and_then(BillRecord::try_from);
        match decoded {
            Ok(record) => records.push(record),
            Err(err) => log::warn!("Skipping bill record: {}", err),
        }
    }

    Ok(records)
}
