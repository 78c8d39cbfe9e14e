use super::dto::{Breakdown, MonthlyBillSummary};
use super::period::Period;
use super::statistics::add_to;
use crate::domain::a001_asset::NO_CATEGORY;
use crate::domain::a002_bill::BillRecord;

/// Totals of the bills issued in `period`, grouped by payment status and by
/// the category of the billed asset. Bills without an issue date are ignored.
pub fn summarize_bills(bills: &[BillRecord], period: Period) -> MonthlyBillSummary {
    let mut summary = MonthlyBillSummary {
        period,
        total_bills: 0,
        total_amount: 0.0,
        status_breakdown: Default::default(),
        category_breakdown: Default::default(),
    };

    let issued = bills
        .iter()
        .filter(|bill| bill.created_at.is_some_and(|d| period.contains(d)));

    for bill in issued {
        summary.total_bills += 1;
        summary.total_amount += bill.amount;

        add_to(
            summary
                .status_breakdown
                .entry(bill.status.as_str().to_string())
                .or_insert_with(Breakdown::default),
            bill.amount,
        );

        let category = bill
            .category
            .as_ref()
            .map(|c| c.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(NO_CATEGORY);
        add_to(
            summary
                .category_breakdown
                .entry(category.to_string())
                .or_insert_with(Breakdown::default),
            bill.amount,
        );
    }

    log::debug!(
        "Bill summary {}: {} bills, total {}",
        period,
        summary.total_bills,
        summary.total_amount
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_bill::decode_bill_list;
    use serde_json::json;

    fn bills() -> Vec<BillRecord> {
        decode_bill_list(json!([
            {
                "id": 1, "billNumber": "B-1", "amount": 120.0, "status": "Paid",
                "createdAt": "2024-03-02T10:00:00Z",
                "assets": { "category": { "id": 1, "categoryName": "Laptop" } }
            },
            {
                "id": 2, "billNumber": "B-2", "amount": 80.0, "statusBill": "unpaid",
                "createAt": "2024-03-31T23:30:00Z",
                "assets": { "category": { "id": 1, "categoryName": "Laptop" } }
            },
            {
                "id": 3, "billNumber": "B-3", "status": "Paid",
                "createdAt": "2024-03-15",
                "asset": { "cost": 40.0 }
            },
            {
                "id": 4, "billNumber": "B-4", "amount": 999.0, "status": "Paid",
                "createdAt": "2024-04-01T00:00:00Z"
            },
            {
                "id": 5, "billNumber": "B-5", "amount": 10.0, "status": "Overdue",
                "createdAt": "2024-03-10"
            },
            {
                "id": 6, "billNumber": "B-6", "amount": 5.0, "status": "Paid"
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_summary_for_month() {
        let summary = summarize_bills(&bills(), Period::new(2024, 3).unwrap());

        assert_eq!(summary.total_bills, 4);
        assert_eq!(summary.total_amount, 250.0);

        let paid = &summary.status_breakdown["Paid"];
        assert_eq!((paid.count, paid.total_value), (2, 160.0));
        let unpaid = &summary.status_breakdown["Unpaid"];
        assert_eq!((unpaid.count, unpaid.total_value), (1, 80.0));
        assert_eq!(summary.status_breakdown["Overdue"].count, 1);

        assert_eq!(summary.category_breakdown["Laptop"].total_value, 200.0);
        assert_eq!(summary.category_breakdown[NO_CATEGORY].count, 2);
    }

    #[test]
    fn test_breakdowns_sum_to_totals() {
        let summary = summarize_bills(&bills(), Period::new(2024, 3).unwrap());
        let status_count: usize = summary.status_breakdown.values().map(|b| b.count).sum();
        let category_value: f64 = summary
            .category_breakdown
            .values()
            .map(|b| b.total_value)
            .sum();
        assert_eq!(status_count, summary.total_bills);
        assert_eq!(category_value, summary.total_amount);
    }

    #[test]
    fn test_empty_month() {
        let summary = summarize_bills(&bills(), Period::new(2023, 12).unwrap());
        assert_eq!(summary.total_bills, 0);
        assert_eq!(summary.total_amount, 0.0);
        assert!(summary.status_breakdown.is_empty());
        assert!(summary.category_breakdown.is_empty());
    }
}
