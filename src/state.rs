use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::color::PlatformColors;
use crate::data::compare::{self, CompareError, PlatformSummary};
use crate::data::export;
use crate::data::filter::{filtered_indices, PlatformChoice, ShowFilter};
use crate::data::model::{Platform, ShowDataset};
use crate::data::sort::{sorted_view, SortKeys};

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// Mode chosen in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Description,
    Search,
    Compare,
    Filter,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Description, Page::Search, Page::Compare, Page::Filter];

    pub fn label(self) -> &'static str {
        match self {
            Page::Description => "Go to App description",
            Page::Search => "Search by title",
            Page::Compare => "Compare Platforms",
            Page::Filter => "Filter TV Shows",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-page control state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct SearchControls {
    pub term: String,
    pub sort: SortKeys,
    pub show_json: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CompareControls {
    pub first: Option<Platform>,
    pub second: Option<Platform>,
    pub show_violin: bool,
    pub show_histogram: bool,
    pub show_density: bool,
    pub grid: bool,
}

#[derive(Debug, Clone)]
pub struct FilterControls {
    pub min_rating: f64,
    pub max_age: u32,
    pub min_year: i32,
    pub platform: PlatformChoice,
    pub include_unrated: bool,
    pub sort: SortKeys,
    pub offer_download: bool,
}

pub const DEFAULT_MIN_RATING: f64 = 2.0;
pub const DEFAULT_MAX_AGE: u32 = 3;
pub const DEFAULT_MIN_YEAR: i32 = 1980;

impl FilterControls {
    fn for_dataset(dataset: &ShowDataset) -> Self {
        let min_year = match dataset.year_range {
            Some((lo, hi)) => DEFAULT_MIN_YEAR.clamp(lo, hi),
            None => DEFAULT_MIN_YEAR,
        };
        FilterControls {
            min_rating: DEFAULT_MIN_RATING,
            max_age: DEFAULT_MAX_AGE,
            min_year,
            platform: PlatformChoice::All,
            include_unrated: false,
            sort: SortKeys::default(),
            offer_download: false,
        }
    }

    pub fn to_filter(&self) -> ShowFilter {
        ShowFilter {
            title: None,
            min_rating: Some(self.min_rating),
            include_unrated: self.include_unrated,
            max_age: Some(self.max_age),
            min_year: Some(self.min_year),
            platform: self.platform,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, shared read-only by every page.
    pub dataset: Arc<ShowDataset>,

    /// File the dataset came from.
    pub source_path: Option<PathBuf>,

    /// Per-platform summaries, computed once per dataset.
    pub summaries: Vec<PlatformSummary>,

    pub page: Page,
    pub description_grid: bool,
    pub search: SearchControls,
    pub compare: CompareControls,
    pub filter: FilterControls,

    pub colors: PlatformColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: ShowDataset, source_path: Option<PathBuf>) -> Self {
        let filter = FilterControls::for_dataset(&dataset);
        let summaries = compare::summarize_all(&dataset);
        Self {
            dataset: Arc::new(dataset),
            source_path,
            summaries,
            page: Page::default(),
            description_grid: false,
            search: SearchControls::default(),
            compare: CompareControls::default(),
            filter,
            colors: PlatformColors::default(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset, resetting the dataset-dependent controls.
    pub fn set_dataset(&mut self, dataset: ShowDataset, source_path: PathBuf) {
        self.filter = FilterControls::for_dataset(&dataset);
        self.summaries = compare::summarize_all(&dataset);
        self.dataset = Arc::new(dataset);
        self.source_path = Some(source_path);
        self.status_message = None;
    }

    // -- Search page --

    /// Search results in display order, or `None` when no term is entered.
    pub fn search_results(&self) -> Option<Vec<usize>> {
        let term = self.search.term.trim();
        if term.is_empty() {
            return None;
        }
        let view = filtered_indices(&self.dataset, &ShowFilter::title(term));
        Some(sorted_view(&self.dataset, &view, self.search.sort))
    }

    /// Unsorted search results rendered as pretty JSON.
    pub fn search_results_json(&self) -> Option<String> {
        let term = self.search.term.trim();
        if term.is_empty() {
            return None;
        }
        let view = filtered_indices(&self.dataset, &ShowFilter::title(term));
        let table = export::search_results_json(&self.dataset, &view);
        match serde_json::to_string_pretty(&table) {
            Ok(text) => Some(text),
            Err(e) => {
                log::error!("Failed to serialize search results: {e}");
                None
            }
        }
    }

    // -- Compare page --

    pub fn compared_platforms(&self) -> Result<Vec<Platform>, CompareError> {
        compare::selected_platforms(self.compare.first, self.compare.second)
    }

    // -- Filter page --

    /// Filtered and sorted rows for the filter page.
    pub fn filter_results(&self) -> Vec<usize> {
        let view = filtered_indices(&self.dataset, &self.filter.to_filter());
        sorted_view(&self.dataset, &view, self.filter.sort)
    }

    /// Banner describing the active filter and how many shows pass it.
    pub fn filter_banner(&self, count: usize) -> String {
        let platform = match self.filter.platform {
            PlatformChoice::All => ".".to_string(),
            PlatformChoice::Only(p) => format!(", you can find them in {p}"),
        };
        format!(
            "There are {count} TV Shows with a rating of at least {:.1} and with a target age of +{}{platform}",
            self.filter.min_rating, self.filter.max_age
        )
    }

    // -- Export --

    /// `data:` link carrying the whole normalized table as CSV.
    pub fn download_link(&self) -> anyhow::Result<String> {
        let csv = export::to_csv_string(&self.dataset, &self.dataset.all_indices())?;
        Ok(export::csv_data_uri(&csv))
    }

    pub fn save_table(&mut self, path: &Path) {
        match export::save_csv(&self.dataset, &self.dataset.all_indices(), path) {
            Ok(()) => {
                self.status_message = Some(format!("Saved table to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export table: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;

    fn state() -> AppState {
        let csv = ",Title,Year,Age,IMDb,Rotten Tomatoes,Netflix,Hulu,Prime Video,Disney+,type\n\
                   0,Dark,2017,16+,8.8,94%,1,0,0,0,1\n\
                   1,The Dark Crystal,1982,7+,8.5,,1,0,0,0,1\n\
                   2,Bluey,2018,all,9.3,,0,0,0,1,1\n\
                   3,Old Dark House,1950,all,6.1,,0,1,0,0,1\n";
        AppState::new(read_csv(csv.as_bytes()).unwrap(), None)
    }

    #[test]
    fn test_blank_search_shows_nothing() {
        let mut state = state();
        assert_eq!(state.search_results(), None);
        state.search.term = "   ".into();
        assert_eq!(state.search_results(), None);
        assert_eq!(state.search_results_json(), None);
    }

    #[test]
    fn test_search_sorted_by_year() {
        let mut state = state();
        state.search.term = " dark ".into();
        assert_eq!(state.search_results(), Some(vec![0, 1, 3]));
        state.search.sort.by_year = true;
        assert_eq!(state.search_results(), Some(vec![0, 1, 3]));
        state.search.sort.by_rating = true;
        state.search.sort.by_year = false;
        assert_eq!(state.search_results(), Some(vec![0, 1, 3]));
    }

    #[test]
    fn test_search_json_keeps_dataset_order() {
        let mut state = state();
        state.search.term = "dark".into();
        state.search.sort.by_rating = true;
        let json: serde_json::Value =
            serde_json::from_str(&state.search_results_json().unwrap()).unwrap();
        assert_eq!(json["index"], serde_json::json!(["0", "1", "3"]));
    }

    #[test]
    fn test_year_default_clamped_to_dataset() {
        let state = state();
        assert_eq!(state.filter.min_year, 1980);

        let csv = ",Title,Year,Age,IMDb,Rotten Tomatoes,Netflix,Hulu,Prime Video,Disney+,type\n\
                   0,New,2015,7+,8.0,,1,0,0,0,1\n";
        let state = AppState::new(read_csv(csv.as_bytes()).unwrap(), None);
        assert_eq!(state.filter.min_year, 2015);
    }

    #[test]
    fn test_filter_results_and_banner() {
        let mut state = state();
        state.filter.max_age = 7;
        state.filter.sort.by_rating = true;
        // Dark (16+) fails the ceiling, Old Dark House (1950) fails the year floor.
        assert_eq!(state.filter_results(), vec![2, 1]);
        assert_eq!(
            state.filter_banner(2),
            "There are 2 TV Shows with a rating of at least 2.0 and with a target age of +7."
        );
        state.filter.platform = PlatformChoice::Only(Platform::DisneyPlus);
        assert_eq!(state.filter_results(), vec![2]);
        assert!(state.filter_banner(1).ends_with(", you can find them in Disney+"));
    }

    #[test]
    fn test_same_platform_comparison_is_rejected() {
        let mut state = state();
        state.compare.first = Some(Platform::Netflix);
        state.compare.second = Some(Platform::Netflix);
        assert_eq!(state.compared_platforms(), Err(CompareError::SamePlatform));
    }

    #[test]
    fn test_download_link_is_data_uri() {
        let state = state();
        assert!(state
            .download_link()
            .unwrap()
            .starts_with("data:file/csv;base64,"));
    }

    #[test]
    fn test_summaries_computed_on_load() {
        let state = state();
        assert_eq!(state.summaries.len(), 4);
        assert_eq!(state.summaries[0].platform, Platform::Netflix);
        assert_eq!(state.summaries[0].show_count, 2);
    }
}
