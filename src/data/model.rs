use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Platform – the fixed set of streaming services tracked by the dataset
// ---------------------------------------------------------------------------

/// A streaming platform with an availability flag column in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Platform {
    Netflix,
    Hulu,
    PrimeVideo,
    DisneyPlus,
}

impl Platform {
    /// Flag-column order of the source file. `Show::platforms` follows it.
    pub const ALL: [Platform; 4] = [
        Platform::Netflix,
        Platform::Hulu,
        Platform::PrimeVideo,
        Platform::DisneyPlus,
    ];

    /// Order used by the selectors and the comparison table.
    pub const DISPLAY_ORDER: [Platform; 4] = [
        Platform::Netflix,
        Platform::PrimeVideo,
        Platform::DisneyPlus,
        Platform::Hulu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Platform::Netflix => "Netflix",
            Platform::Hulu => "Hulu",
            Platform::PrimeVideo => "Prime Video",
            Platform::DisneyPlus => "Disney+",
        }
    }

    /// Position of this platform's flag in `Show::platform_flags`.
    pub fn flag_index(self) -> usize {
        match self {
            Platform::Netflix => 0,
            Platform::Hulu => 1,
            Platform::PrimeVideo => 2,
            Platform::DisneyPlus => 3,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("unknown platform: {s}"))
    }
}

// ---------------------------------------------------------------------------
// Target age labels
// ---------------------------------------------------------------------------

/// `min_age` of shows whose target-age label is missing or unparseable.
/// Large enough that such shows never pass a finite age ceiling.
pub const UNDEFINED_MIN_AGE: u32 = 150;

pub const ALL_AGES: &str = "All Ages";
pub const NOT_DEFINED: &str = "Not Defined";
pub const NOT_RATED: &str = "Not Rated";

/// Category order of the violin plot's x axis.
pub const TARGET_AGE_ORDER: [&str; 6] = [ALL_AGES, "7+", "13+", "16+", "18+", NOT_DEFINED];

// ---------------------------------------------------------------------------
// Show – one row of the dataset
// ---------------------------------------------------------------------------

/// A single TV show after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    /// Raw value of the source file's index column.
    pub label: String,
    pub title: String,
    pub year: i32,
    /// Age-gate label as found in the file (`"7+"`, `"all"`, ...).
    pub target_age_raw: Option<String>,
    /// Human label: `"All Ages"`, `"Not Defined"` or the raw label.
    pub target_age_display: String,
    /// Numeric floor age, `0` for all ages, [`UNDEFINED_MIN_AGE`] when unknown.
    pub min_age: u32,
    pub rating: Option<f64>,
    /// Rating rounded to two decimals, or `"Not Rated"`.
    pub rating_display: String,
    /// Availability flags indexed by [`Platform::flag_index`].
    pub platform_flags: [bool; 4],
    /// Platforms with a set flag, in [`Platform::ALL`] order.
    pub platforms: Vec<Platform>,
}

impl Show {
    pub fn is_on(&self, platform: Platform) -> bool {
        self.platform_flags[platform.flag_index()]
    }

    /// Comma separated platform names for tables and exports.
    pub fn platforms_label(&self) -> String {
        self.platforms
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ---------------------------------------------------------------------------
// ShowDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full normalized dataset. Never mutated after construction; queries
/// produce views (`Vec<usize>` of row indices) over it.
#[derive(Debug, Clone, Default)]
pub struct ShowDataset {
    pub shows: Vec<Show>,
    /// Inclusive release-year range, `None` for an empty dataset.
    pub year_range: Option<(i32, i32)>,
}

impl ShowDataset {
    pub fn from_shows(shows: Vec<Show>) -> Self {
        let year_range = shows.iter().fold(None, |acc, s| match acc {
            None => Some((s.year, s.year)),
            Some((lo, hi)) => Some((lo.min(s.year), hi.max(s.year))),
        });
        ShowDataset { shows, year_range }
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    /// View covering every row in file order.
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.shows.len()).collect()
    }

    /// Rows available on `platform`, in file order.
    pub fn platform_indices(&self, platform: Platform) -> Vec<usize> {
        self.shows
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_on(platform))
            .map(|(i, _)| i)
            .collect()
    }
}
