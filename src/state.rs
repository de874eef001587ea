use std::path::Path;

use anyhow::Result;

use crate::data::aggregate::{
    JobTitleCount, YearSummary, breakdown_by_year, records_for_year, summarize,
};
use crate::data::model::SalaryDataset;
use crate::data::sort::{SortColumn, SummarySort, sort_breakdown};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which presentation of the year summaries is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Table,
    Charts,
}

/// The drill-down for one year, shown in the modal.
#[derive(Debug, Clone, PartialEq)]
pub struct YearBreakdown {
    pub year: String,
    /// Most frequent titles first.
    pub entries: Vec<JobTitleCount>,
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<SalaryDataset>,

    /// Year summaries of `dataset`, in `sort` order.
    pub summaries: Vec<YearSummary>,

    /// Ordering of the summary table.
    pub sort: SummarySort,

    pub view: View,

    /// Breakdown of the year picked in the table (None when closed).
    pub breakdown: Option<YearBreakdown>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,

    /// Id of the most recent load request.  Results of older requests are
    /// ignored.
    pub load_generation: u64,
}

impl AppState {
    /// Register a new load of `path` and return its generation.
    pub fn begin_load(&mut self, path: &Path) -> u64 {
        self.load_generation += 1;
        self.loading = true;
        self.status_message = None;
        log::info!("Loading {} (request {})", path.display(), self.load_generation);
        self.load_generation
    }

    /// Apply the outcome of load request `generation`.  Returns `false` when
    /// the result was stale and dropped.
    pub fn finish_load(&mut self, generation: u64, result: Result<SalaryDataset>) -> bool {
        if generation != self.load_generation {
            log::debug!(
                "Ignoring result of load request {generation}, latest is {}",
                self.load_generation
            );
            return false;
        }

        match result {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records from {} ({} rejected)",
                    dataset.len(),
                    dataset.source.display(),
                    dataset.rejected.len()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
        true
    }

    /// Ingest a newly loaded dataset and recompute the summaries.
    pub fn set_dataset(&mut self, dataset: SalaryDataset) {
        self.summaries = summarize(&dataset.records);
        self.sort.apply(&mut self.summaries);
        self.breakdown = None;
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Header click on the summary table.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        self.sort.apply(&mut self.summaries);
    }

    /// Compute and open the job-title breakdown for `year`.
    pub fn select_year(&mut self, year: &str) {
        let Some(ds) = &self.dataset else {
            return;
        };
        let mut entries = breakdown_by_year(&ds.records, year);
        sort_breakdown(&mut entries);
        log::debug!("Year {year}: {} distinct job titles", entries.len());
        self.breakdown = Some(YearBreakdown {
            year: year.to_string(),
            entries,
        });
    }

    /// Close the modal and discard the breakdown.
    pub fn close_breakdown(&mut self) {
        self.breakdown = None;
    }

    /// The summaries, in table order, as JSON.
    pub fn summaries_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.summaries)?)
    }

    /// Every record of `year`, with all columns, as JSON.
    pub fn year_records_json(&self, year: &str) -> Result<String> {
        let records = self
            .dataset
            .as_ref()
            .map(|ds| records_for_year(&ds.records, year))
            .unwrap_or_default();
        Ok(serde_json::to_string_pretty(&records)?)
    }

    /// Number of rows excluded at ingestion.
    pub fn rejected_count(&self) -> usize {
        self.dataset.as_ref().map_or(0, |ds| ds.rejected.len())
    }
}
