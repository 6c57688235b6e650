use std::path::PathBuf;
use std::time::SystemTime;

use crate::config::Config;
use crate::data::derive::derive_reviews;
use crate::data::filter::{FilterState, filtered_indices};
use crate::data::loader::load_store;
use crate::data::model::ReviewDataset;
use crate::data::sample::{SAMPLE_SIZE, sample_indices};
use crate::ingest::{CommandIngestor, IngestRunner};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which dashboard page is selected in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Model,
    Ingest,
    About,
}

/// Post counts offered by the ingest tool's selector.
pub const INGEST_CHOICES: [u32; 6] = [1, 5, 10, 20, 50, 100];

/// Outcome notice of the last ingest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestNotice {
    Success,
    Failure(String),
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Path of the persisted review store.
    pub store_path: PathBuf,
    /// Store mtime at the last load; the load is memoized on it.
    store_mtime: Option<SystemTime>,

    /// Loaded + derived dataset (None until a load succeeds).
    pub dataset: Option<ReviewDataset>,
    /// Rows dropped during the last derivation pass.
    pub skipped_rows: usize,

    /// Active filter selections.
    pub filters: FilterState,
    /// Indices of reviews passing the current filters (cached).
    pub visible_indices: Vec<usize>,
    /// Sampled review indices for the detail cards; `None` when the filtered
    /// set has fewer than [`SAMPLE_SIZE`] rows (empty-state message instead).
    pub sample: Option<Vec<usize>>,

    /// Selected sidebar page.
    pub page: Page,
    /// Selected post count for the ingest tool.
    pub ingest_posts: u32,
    /// Configured external ingest command (program + args).
    pub ingest_command: Option<Vec<String>>,
    /// Result of the last ingest run, shown on the Ingest page.
    pub ingest_notice: Option<IngestNotice>,

    /// Load error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let mut state = AppState {
            store_path: config.store_path.clone(),
            store_mtime: None,
            dataset: None,
            skipped_rows: 0,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            sample: None,
            page: Page::Home,
            ingest_posts: INGEST_CHOICES[0],
            ingest_command: config.ingest_command.clone(),
            ingest_notice: None,
            status_message: None,
        };
        state.reload();
        state
    }

    // -- Loading ------------------------------------------------------------

    /// Reload the store unconditionally: load → derive → rebuild filters.
    pub fn reload(&mut self) {
        self.store_mtime = std::fs::metadata(&self.store_path)
            .and_then(|m| m.modified())
            .ok();

        match load_store(&self.store_path) {
            Ok(raws) => {
                let (reviews, skipped) = derive_reviews(&raws);
                if skipped > 0 {
                    log::warn!("{skipped} malformed rows skipped during load");
                }
                log::info!(
                    "loaded {} reviews from {}",
                    reviews.len(),
                    self.store_path.display()
                );
                self.skipped_rows = skipped;
                self.set_dataset(ReviewDataset::from_reviews(reviews));
            }
            Err(e) => {
                log::error!("failed to load review store: {e}");
                self.dataset = None;
                self.skipped_rows = 0;
                self.visible_indices.clear();
                self.sample = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Reload only when the store changed on disk since the last load.
    /// Called when the Home page renders, keeping the view fresh without
    /// re-reading an unchanged file every frame.
    pub fn reload_if_stale(&mut self) {
        let mtime = std::fs::metadata(&self.store_path)
            .and_then(|m| m.modified())
            .ok();
        if mtime != self.store_mtime || (self.dataset.is_none() && self.status_message.is_none()) {
            self.reload();
        }
    }

    /// Point the state at a different store file and load it.
    pub fn open_store(&mut self, path: PathBuf) {
        self.store_path = path;
        self.reload();
    }

    /// Install a freshly derived dataset and reset the filters to its bounds.
    pub fn set_dataset(&mut self, dataset: ReviewDataset) {
        self.filters.date_range = dataset
            .date_bounds()
            .map(|(min, max)| (min.to_string(), max.to_string()));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    // -- Filtering & sampling -----------------------------------------------

    /// Recompute the visible set and the sample after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
        } else {
            self.visible_indices.clear();
        }
        self.resample();
    }

    /// Draw a fresh sample from the visible set.
    pub fn resample(&mut self) {
        self.sample = sample_indices(&self.visible_indices, SAMPLE_SIZE).ok();
    }

    // -- Ingestion ----------------------------------------------------------

    /// Run the configured ingest command synchronously and record the outcome.
    /// On success the memoized mtime is dropped so the next Home render
    /// reloads the store.
    pub fn run_ingest(&mut self) {
        let Some(command) = self.ingest_command.clone() else {
            self.ingest_notice = Some(IngestNotice::Failure(
                "No ingest command configured (set INGEST_COMMAND).".to_string(),
            ));
            return;
        };

        let ingestor = CommandIngestor::new(command);
        self.ingest_notice = match ingestor.ingest(self.ingest_posts) {
            Ok(()) => {
                self.store_mtime = None;
                Some(IngestNotice::Success)
            }
            Err(e) => Some(IngestNotice::Failure(e.to_string())),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::{AppState, IngestNotice, Page};
    use crate::config::Config;
    use crate::data::filter::TypeFilter;
    use crate::data::model::PostType;

    fn csv_store(rows: &[(i64, &str, &str)]) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp store");
        writeln!(file, "created,title,comment,sentiment,type").unwrap();
        for (created, sentiment, post_type) in rows {
            writeln!(file, "{created},T,C,{sentiment},{post_type}").unwrap();
        }
        file
    }

    fn state_for(store: &NamedTempFile) -> AppState {
        AppState::new(&Config {
            store_path: store.path().to_path_buf(),
            ingest_command: None,
        })
    }

    #[test]
    fn startup_load_selects_full_date_bounds() {
        let store = csv_store(&[
            (1641038400, "positive", "Discussion"),
            (1641384000, "negative", "News"),
        ]);
        let state = state_for(&store);

        let ds = state.dataset.as_ref().expect("dataset should load");
        assert_eq!(ds.len(), 2);
        assert_eq!(state.visible_indices.len(), 2);
        let (min, max) = ds.date_bounds().unwrap();
        assert_eq!(
            state.filters.date_range,
            Some((min.to_string(), max.to_string()))
        );
        assert_eq!(state.page, Page::Home);
    }

    #[test]
    fn missing_store_leaves_an_error_status() {
        let state = AppState::new(&Config {
            store_path: "/nonexistent/reviews.csv".into(),
            ingest_command: None,
        });
        assert!(state.dataset.is_none());
        assert!(state.status_message.as_deref().unwrap_or("").starts_with("Error:"));
        assert!(state.sample.is_none());
    }

    #[test]
    fn small_filtered_set_yields_no_sample() {
        let store = csv_store(&[
            (1641038400, "positive", "Discussion"),
            (1641124800, "negative", "News"),
        ]);
        let mut state = state_for(&store);
        state.refilter();
        // Two rows < sample size of five: empty state, not a crash.
        assert!(state.sample.is_none());
    }

    #[test]
    fn type_selection_refilters_the_cached_indices() {
        let store = csv_store(&[
            (1641038400, "positive", "Discussion"),
            (1641124800, "negative", "News"),
            (1641211200, "positive", "Discussion"),
        ]);
        let mut state = state_for(&store);

        state.filters.post_type = TypeFilter::Only(PostType::Discussion);
        state.refilter();
        assert_eq!(state.visible_indices, vec![0, 2]);
    }

    #[test]
    fn ingest_without_command_reports_failure() {
        let store = csv_store(&[(1641038400, "positive", "Discussion")]);
        let mut state = state_for(&store);
        state.run_ingest();
        assert!(matches!(state.ingest_notice, Some(IngestNotice::Failure(_))));
    }
}
