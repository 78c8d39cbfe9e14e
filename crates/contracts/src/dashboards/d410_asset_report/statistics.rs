use super::dto::{Breakdown, MonthlyStats};
use crate::domain::a001_asset::AssetRecord;

/// `part / whole * 100`, 0 when `whole` is 0
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 || !whole.is_finite() {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Percentage change from `previous` to `current`, 0 when `previous` is 0
pub fn growth_rate(current: f64, previous: f64) -> f64 {
    if previous == 0.0 || !previous.is_finite() {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}

/// Reduce a set of assets to counts, sums and breakdowns.
///
/// Total over any input: an empty set yields zeros and empty maps. Every
/// asset lands in exactly one bucket of each breakdown.
pub fn aggregate<'a>(assets: impl IntoIterator<Item = &'a AssetRecord>) -> MonthlyStats {
    let mut stats = MonthlyStats::default();

    for asset in assets {
        stats.total_assets += 1;
        stats.total_value += asset.cost;

        stats
            .status_distribution
            .entry(asset.status.clone())
            .or_default()
            .count += 1;

        add_to(
            stats
                .category_breakdown
                .entry(asset.category_label().to_string())
                .or_default(),
            asset.cost,
        );
        add_to(
            stats
                .department_breakdown
                .entry(asset.department_label().to_string())
                .or_default(),
            asset.cost,
        );
    }

    let total = stats.total_assets as f64;
    for share in stats.status_distribution.values_mut() {
        share.percentage = percent_of(share.count as f64, total);
    }
    stats.average_value = if stats.total_assets == 0 {
        0.0
    } else {
        stats.total_value / total
    };

    stats
}

pub(super) fn add_to(bucket: &mut Breakdown, cost: f64) {
    bucket.count += 1;
    bucket.total_value += cost;
}
