use csv::{QuoteStyle, WriterBuilder};

use super::dto::MonthlyStats;
use super::error::ReportError;
use crate::domain::a001_asset::AssetRecord;

/// Lets spreadsheet applications detect UTF-8
pub const UTF8_BOM: &str = "\u{FEFF}";

/// One CSV cell. Quoting follows the column type, not the content.
#[derive(Debug, Clone, PartialEq)]
pub enum CsvCell {
    Text(String),
    Number(String),
    Empty,
}

impl CsvCell {
    pub fn text(value: impl Into<String>) -> Self {
        CsvCell::Text(value.into())
    }

    fn encode(&self) -> String {
        match self {
            CsvCell::Text(value) => format!("\"{}\"", value.replace('"', "\"\"")),
            CsvCell::Number(value) => value.clone(),
            CsvCell::Empty => String::new(),
        }
    }
}

/// A type that can be written as one CSV row
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<CsvCell>;
}

/// Comma separated document with a BOM and a header row.
/// Text cells are quoted; numeric cells are written bare.
pub fn to_csv<T: CsvExportable>(rows: &[T]) -> Result<String, ReportError> {
    if rows.is_empty() {
        return Err(ReportError::Export("No data to export".to_string()));
    }

    // Cells arrive already encoded, so the writer must not quote again
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(UTF8_BOM.as_bytes().to_vec());

    let headers: Vec<String> = T::headers()
        .into_iter()
        .map(|h| CsvCell::text(h).encode())
        .collect();
    writer
        .write_record(&headers)
        .map_err(|e| ReportError::Export(e.to_string()))?;
    for row in rows {
        let cells: Vec<String> = row.to_csv_row().iter().map(CsvCell::encode).collect();
        writer
            .write_record(&cells)
            .map_err(|e| ReportError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Export(e.to_string()))
}

fn money_cell(value: f64) -> CsvCell {
    CsvCell::Number(format!("{:.2}", value))
}

fn count_cell(value: usize) -> CsvCell {
    CsvCell::Number(value.to_string())
}

fn date_cell(date: Option<chrono::NaiveDate>) -> CsvCell {
    date.map(|d| CsvCell::text(d.format("%Y-%m-%d").to_string()))
        .unwrap_or(CsvCell::Empty)
}

impl CsvExportable for AssetRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Name",
            "Serial Number",
            "Category",
            "Department",
            "Status",
            "Cost",
            "Purchase Date",
            "Warranty Expiry",
            "Created At",
        ]
    }

    fn to_csv_row(&self) -> Vec<CsvCell> {
        vec![
            CsvCell::Number(self.id.to_string()),
            CsvCell::text(self.name.as_str()),
            CsvCell::text(self.serial_number.clone().unwrap_or_default()),
            CsvCell::text(self.category_label()),
            CsvCell::text(self.department_label()),
            CsvCell::text(self.status.as_str()),
            money_cell(self.cost),
            date_cell(self.purchase_date),
            date_cell(self.warranty_expiry),
            date_cell(self.created_at),
        ]
    }
}

pub fn assets_to_csv(assets: &[&AssetRecord]) -> Result<String, ReportError> {
    let owned: Vec<AssetRecord> = assets.iter().map(|a| (*a).clone()).collect();
    to_csv(&owned)
}

/// One line of the statistics summary document
struct StatsRow {
    section: &'static str,
    item: String,
    count: Option<usize>,
    value: Option<f64>,
    percentage: Option<f64>,
}

impl CsvExportable for StatsRow {
    fn headers() -> Vec<&'static str> {
        vec!["Section", "Item", "Count", "Total Value", "Percentage"]
    }

    fn to_csv_row(&self) -> Vec<CsvCell> {
        vec![
            CsvCell::text(self.section),
            CsvCell::text(self.item.as_str()),
            self.count.map(count_cell).unwrap_or(CsvCell::Empty),
            self.value.map(money_cell).unwrap_or(CsvCell::Empty),
            self.percentage.map(money_cell).unwrap_or(CsvCell::Empty),
        ]
    }
}

/// Summary document: period, totals, then every breakdown bucket
pub fn stats_to_csv(stats: &MonthlyStats, period_text: &str) -> Result<String, ReportError> {
    let mut rows = vec![
        StatsRow {
            section: "Period",
            item: period_text.to_string(),
            count: None,
            value: None,
            percentage: None,
        },
        StatsRow {
            section: "Summary",
            item: "Total Assets".to_string(),
            count: Some(stats.total_assets),
            value: Some(stats.total_value),
            percentage: None,
        },
        StatsRow {
            section: "Summary",
            item: "Average Value".to_string(),
            count: None,
            value: Some(stats.average_value),
            percentage: None,
        },
    ];

    rows.extend(stats.status_distribution.iter().map(|(status, share)| StatsRow {
        section: "Status",
        item: status.clone(),
        count: Some(share.count),
        value: None,
        percentage: Some(share.percentage),
    }));
    rows.extend(stats.category_breakdown.iter().map(|(name, b)| StatsRow {
        section: "Category",
        item: name.clone(),
        count: Some(b.count),
        value: Some(b.total_value),
        percentage: None,
    }));
    rows.extend(stats.department_breakdown.iter().map(|(name, b)| StatsRow {
        section: "Department",
        item: name.clone(),
        count: Some(b.count),
        value: Some(b.total_value),
        percentage: None,
    }));

    to_csv(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_asset_report::fixtures::{inventory, scenario_assets};
    use crate::dashboards::d410_asset_report::statistics::aggregate;

    #[test]
    fn test_asset_csv_layout() {
        let assets = inventory();
        let refs: Vec<&AssetRecord> = assets.iter().filter(|a| a.id == 12).collect();
        let csv = assets_to_csv(&refs).unwrap();

        assert!(csv.starts_with(UTF8_BOM));
        let lines: Vec<&str> = csv.trim_start_matches(UTF8_BOM).lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "\"ID\",\"Name\",\"Serial Number\",\"Category\",\"Department\",\"Status\",\"Cost\",\"Purchase Date\",\"Warranty Expiry\",\"Created At\""
        );
        assert!(lines[1].starts_with("12,\"Dell U2720Q\","));
        assert!(lines[1]
            .contains("\"Monitor\",\"Engineering\",\"Active\",600.00,\"2024-01-20\",\"2025-01-20\""));
    }

    #[test]
    fn test_text_with_commas_and_quotes_is_escaped() {
        let mut assets = inventory();
        assets[0].name = "Desk, \"standing\"".to_string();
        let csv = assets_to_csv(&[&assets[0]]).unwrap();
        assert!(csv.contains("\"Desk, \"\"standing\"\"\""));
    }

    #[test]
    fn test_numeric_looking_text_stays_quoted() {
        let mut assets = inventory();
        assets[0].name = "2024".to_string();
        assets[0].serial_number = Some("00123".to_string());
        let csv = assets_to_csv(&[&assets[0]]).unwrap();
        let row = csv.trim_start_matches(UTF8_BOM).lines().nth(1).unwrap();

        assert!(row.starts_with(&format!("{},\"2024\",\"00123\",", assets[0].id)));
    }

    #[test]
    fn test_missing_dates_are_empty_cells() {
        let mut assets = inventory();
        assets[0].warranty_expiry = None;
        let csv = assets_to_csv(&[&assets[0]]).unwrap();
        let row = csv.trim_start_matches(UTF8_BOM).lines().nth(1).unwrap();
        assert_eq!(row.split(',').nth(8), Some(""));
    }

    #[test]
    fn test_empty_export_is_rejected() {
        assert!(matches!(assets_to_csv(&[]), Err(ReportError::Export(_))));
    }

    #[test]
    fn test_stats_csv() {
        let assets = scenario_assets();
        let stats = aggregate(&assets);
        let csv = stats_to_csv(&stats, "March 2024").unwrap();

        assert!(csv.starts_with(UTF8_BOM));
        assert!(csv.contains("\"Period\",\"March 2024\""));
        assert!(csv.contains("\"Summary\",\"Total Assets\",2,300.00,"));
        assert!(csv.contains("\"Status\",\"Paid\",1,,50.00"));
        assert!(csv.contains("\"Status\",\"Unpaid\",1,,50.00"));
        assert!(csv.contains("\"Category\",\"Laptop\",2,300.00,"));
        assert!(csv.contains("\"Department\",\"No Department\",2,300.00,"));
    }
}
