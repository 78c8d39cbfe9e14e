use chrono::NaiveDate;

use super::asset_filter::filter_assets;
use super::comparison::compare_month_by;
use super::date_filter::DateMode;
use super::dto::{AssetFilter, DateFilter, FilterKey, ReportView};
use super::labels::{active_filters, date_range_text};
use super::query::ReportQuery;
use super::statistics::aggregate;
use super::trend::generate_trend_at;
use crate::domain::a001_asset::{AssetRecord, DateField};

/// Issued when a fetch starts; the response is accepted only while the
/// ticket is still the newest one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    /// `None` selects the unfiltered list endpoint
    pub query: Option<ReportQuery>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied { count: usize },
    /// A newer fetch or filter change superseded this response
    Stale,
    Failed(String),
}

/// Filter selection and last-known-good data of the asset report page.
///
/// Every filter change bumps `generation`, which invalidates fetches that
/// are still in flight. The asset list is only ever replaced by a
/// successful, current response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportState {
    date_filter: DateFilter,
    asset_filter: AssetFilter,
    assets: Vec<AssetRecord>,
    generation: u64,
    last_error: Option<String>,
    is_loaded: bool,
}

impl ReportState {
    pub fn new(default_date_field: DateField) -> Self {
        Self {
            date_filter: DateFilter {
                date_field: default_date_field,
                ..DateFilter::default()
            },
            ..Self::default()
        }
    }

    /// Restore the filters encoded in a page URL
    pub fn from_query(query: &ReportQuery) -> Self {
        let (date_filter, asset_filter) = query.to_filters();
        Self {
            date_filter,
            asset_filter,
            ..Self::default()
        }
    }

    pub fn date_filter(&self) -> &DateFilter {
        &self.date_filter
    }

    pub fn asset_filter(&self) -> &AssetFilter {
        &self.asset_filter
    }

    pub fn assets(&self) -> &[AssetRecord] {
        &self.assets
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// Returns false, without invalidating anything, when nothing changed
    pub fn set_date_filter(&mut self, date_filter: DateFilter) -> bool {
        if self.date_filter == date_filter {
            return false;
        }
        self.date_filter = date_filter;
        self.generation += 1;
        true
    }

    pub fn set_asset_filter(&mut self, asset_filter: AssetFilter) -> bool {
        if self.asset_filter == asset_filter {
            return false;
        }
        self.asset_filter = asset_filter;
        self.generation += 1;
        true
    }

    /// Drop every constraint, keeping the selected date field
    pub fn clear_all(&mut self) -> bool {
        let date_changed = self.clear_date_filter();
        let asset_changed = self.set_asset_filter(AssetFilter::default());
        date_changed || asset_changed
    }

    pub fn clear_date_filter(&mut self) -> bool {
        self.set_date_filter(self.date_filter.cleared())
    }

    pub fn clear_category(&mut self) -> bool {
        self.set_asset_filter(AssetFilter {
            category_id: None,
            ..self.asset_filter.clone()
        })
    }

    pub fn clear_department(&mut self) -> bool {
        self.set_asset_filter(AssetFilter {
            department_id: None,
            ..self.asset_filter.clone()
        })
    }

    pub fn clear_status(&mut self) -> bool {
        self.set_asset_filter(AssetFilter {
            status: None,
            ..self.asset_filter.clone()
        })
    }

    pub fn clear_asset_name(&mut self) -> bool {
        self.set_asset_filter(AssetFilter {
            asset_name: None,
            ..self.asset_filter.clone()
        })
    }

    /// Remove the constraint behind a filter chip
    pub fn clear(&mut self, key: FilterKey) -> bool {
        match key {
            FilterKey::Date => self.clear_date_filter(),
            FilterKey::Category => self.clear_category(),
            FilterKey::Department => self.clear_department(),
            FilterKey::Status => self.clear_status(),
            FilterKey::AssetName => self.clear_asset_name(),
        }
    }

    pub fn to_query(&self) -> ReportQuery {
        ReportQuery::from_filters(&self.date_filter, &self.asset_filter)
    }

    /// Start a fetch for the current filters. Any response to an earlier
    /// ticket becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        let query = self.to_query();
        FetchTicket {
            generation: self.generation,
            query: query.has_active_filters().then_some(query),
        }
    }

    /// Accept a fetch result if it belongs to the newest ticket.
    /// A failure records the error and keeps the previous assets.
    pub fn apply_response(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<AssetRecord>, String>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding stale asset response (generation {}, current {})",
                ticket.generation,
                self.generation
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(assets) => {
                let count = assets.len();
                self.assets = assets;
                self.last_error = None;
                self.is_loaded = true;
                FetchOutcome::Applied { count }
            }
            Err(message) => {
                log::warn!("Asset fetch failed: {}", message);
                self.last_error = Some(message.clone());
                FetchOutcome::Failed(message)
            }
        }
    }

    /// Everything the page shows, computed from this snapshot.
    ///
    /// The comparison block only exists when a single month of a single year
    /// is selected; it honours the non-date constraints and the date field.
    pub fn view(&self, trend_window: usize, today: NaiveDate) -> ReportView {
        let filtered: Vec<AssetRecord> =
            filter_assets(&self.assets, &self.date_filter, &self.asset_filter)
                .into_iter()
                .cloned()
                .collect();
        let stats = aggregate(&filtered);
        let trend = generate_trend_at(
            &self.assets,
            &self.date_filter,
            &self.asset_filter,
            trend_window,
            today,
        );

        let comparison = match self.date_filter.mode() {
            DateMode::MonthOfYear { month, year } => {
                let scoped: Vec<AssetRecord> = self
                    .assets
                    .iter()
                    .filter(|asset| self.asset_filter.matches(asset))
                    .cloned()
                    .collect();
                compare_month_by(&scoped, self.date_filter.date_field, month, year).ok()
            }
            _ => None,
        };

        ReportView {
            period_text: date_range_text(&self.date_filter),
            active_filters: active_filters(&self.date_filter, &self.asset_filter, &self.assets),
            filtered,
            stats,
            trend,
            comparison,
        }
    }
}
