use super::model::{Platform, Show, ShowDataset};

// ---------------------------------------------------------------------------
// Filter predicate: which shows a page displays
// ---------------------------------------------------------------------------

/// Platform constraint of a [`ShowFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformChoice {
    #[default]
    All,
    Only(Platform),
}

impl PlatformChoice {
    /// Dropdown options in display order.
    pub const OPTIONS: [PlatformChoice; 5] = [
        PlatformChoice::All,
        PlatformChoice::Only(Platform::Netflix),
        PlatformChoice::Only(Platform::PrimeVideo),
        PlatformChoice::Only(Platform::Hulu),
        PlatformChoice::Only(Platform::DisneyPlus),
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlatformChoice::All => "All",
            PlatformChoice::Only(p) => p.name(),
        }
    }
}

/// Predicates combined with logical AND. Every field defaults to "no
/// constraint", so `ShowFilter::default()` keeps all rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowFilter {
    /// Case-insensitive title substring. `Some("")` matches nothing.
    pub title: Option<String>,
    /// Keep shows rated at least this much.
    pub min_rating: Option<f64>,
    /// Let shows without a rating through the rating floor.
    pub include_unrated: bool,
    /// Keep shows whose `min_age` is at most this; all-ages shows always pass.
    pub max_age: Option<u32>,
    /// Keep shows released in or after this year.
    pub min_year: Option<i32>,
    pub platform: PlatformChoice,
}

impl ShowFilter {
    /// Filter for a title search.
    pub fn title(term: impl Into<String>) -> Self {
        ShowFilter {
            title: Some(term.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, show: &Show) -> bool {
        self.title_matches(show)
            && self.rating_matches(show)
            && self.age_matches(show)
            && self.year_matches(show)
            && self.platform_matches(show)
    }

    fn title_matches(&self, show: &Show) -> bool {
        match &self.title {
            None => true,
            Some(term) if term.is_empty() => false,
            Some(term) => show.title.to_lowercase().contains(&term.to_lowercase()),
        }
    }

    fn rating_matches(&self, show: &Show) -> bool {
        match (self.min_rating, show.rating) {
            (None, _) => true,
            (Some(floor), Some(rating)) => rating >= floor,
            (Some(_), None) => self.include_unrated,
        }
    }

    fn age_matches(&self, show: &Show) -> bool {
        match self.max_age {
            None => true,
            Some(ceiling) => show.min_age == 0 || show.min_age <= ceiling,
        }
    }

    fn year_matches(&self, show: &Show) -> bool {
        self.min_year.map_or(true, |floor| show.year >= floor)
    }

    fn platform_matches(&self, show: &Show) -> bool {
        match self.platform {
            PlatformChoice::All => true,
            PlatformChoice::Only(p) => show.is_on(p),
        }
    }
}

/// Return indices of shows that pass `filter`, in dataset order.
pub fn filtered_indices(dataset: &ShowDataset, filter: &ShowFilter) -> Vec<usize> {
    filter_view(dataset, &dataset.all_indices(), filter)
}

/// Narrow an existing view to the rows passing `filter`, keeping its order.
pub fn filter_view(dataset: &ShowDataset, view: &[usize], filter: &ShowFilter) -> Vec<usize> {
    view.iter()
        .copied()
        .filter(|&i| filter.matches(&dataset.shows[i]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;

    fn dataset() -> ShowDataset {
        let csv = ",Title,Year,Age,IMDb,Rotten Tomatoes,Netflix,Hulu,Prime Video,Disney+,type\n\
                   0,Stranger Things,2016,16+,8.7,93%,1,0,0,0,1\n\
                   1,The Mandalorian,2019,7+,8.7,93%,0,0,0,1,1\n\
                   2,The Boys,2019,18+,8.7,89%,0,0,1,0,1\n\
                   3,Bluey,2018,all,9.3,,0,0,0,1,1\n\
                   4,Stranger Island,1975,,7.2,,1,1,0,0,1\n\
                   5,Fresh Pilot,2021,13+,,,1,0,0,0,1\n";
        read_csv(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let ds = dataset();
        assert_eq!(filtered_indices(&ds, &ShowFilter::default()), ds.all_indices());
    }

    #[test]
    fn test_title_search_is_case_insensitive() {
        let ds = dataset();
        assert_eq!(filtered_indices(&ds, &ShowFilter::title("STRANGER")), vec![0, 4]);
        assert_eq!(filtered_indices(&ds, &ShowFilter::title("man")), vec![1]);
    }

    #[test]
    fn test_empty_title_matches_nothing() {
        let ds = dataset();
        assert!(filtered_indices(&ds, &ShowFilter::title("")).is_empty());
    }

    #[test]
    fn test_rating_floor_excludes_lower_and_unrated() {
        let ds = dataset();
        let filter = ShowFilter {
            min_rating: Some(7.5),
            ..Default::default()
        };
        let view = filtered_indices(&ds, &filter);
        assert!(!view.contains(&4), "7.2 is below the floor");
        assert!(!view.contains(&5), "unrated excluded by default");
        assert_eq!(view, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_include_unrated_lets_unrated_through() {
        let ds = dataset();
        let filter = ShowFilter {
            min_rating: Some(7.5),
            include_unrated: true,
            ..Default::default()
        };
        let view = filtered_indices(&ds, &filter);
        assert!(view.contains(&5));
        assert!(!view.contains(&4));
    }

    #[test]
    fn test_all_ages_passes_every_ceiling() {
        let ds = dataset();
        for ceiling in [0, 3, 7, 18] {
            let filter = ShowFilter {
                max_age: Some(ceiling),
                ..Default::default()
            };
            assert!(filtered_indices(&ds, &filter).contains(&3));
        }
    }

    #[test]
    fn test_age_ceiling_excludes_undefined_unless_unlimited() {
        let ds = dataset();
        let filter = ShowFilter {
            max_age: Some(18),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &filter), vec![0, 1, 2, 3, 5]);

        let filter = ShowFilter {
            max_age: Some(7),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &filter), vec![1, 3]);
    }

    #[test]
    fn test_year_and_platform() {
        let ds = dataset();
        let filter = ShowFilter {
            min_year: Some(2018),
            platform: PlatformChoice::Only(Platform::DisneyPlus),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &filter), vec![1, 3]);
    }

    #[test]
    fn test_predicates_commute() {
        let ds = dataset();
        let rating = ShowFilter {
            min_rating: Some(8.0),
            ..Default::default()
        };
        let platform = ShowFilter {
            platform: PlatformChoice::Only(Platform::Netflix),
            ..Default::default()
        };
        let a = filter_view(&ds, &filtered_indices(&ds, &rating), &platform);
        let b = filter_view(&ds, &filtered_indices(&ds, &platform), &rating);
        assert_eq!(a, b);
        assert_eq!(a, vec![0]);
    }

    #[test]
    fn test_filter_does_not_touch_dataset() {
        let ds = dataset();
        let before = ds.shows.clone();
        let _ = filtered_indices(&ds, &ShowFilter::title("the"));
        assert_eq!(ds.shows, before);
    }
}
