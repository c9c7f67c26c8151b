use std::collections::HashMap;

use super::model::{Platform, ShowDataset, NOT_DEFINED};

// ---------------------------------------------------------------------------
// Per-platform summary
// ---------------------------------------------------------------------------

/// Headline numbers for the shows available on one platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformSummary {
    pub platform: Platform,
    pub show_count: usize,
    /// Mean over rated shows only; `None` when none are rated.
    pub mean_rating: Option<f64>,
    pub most_frequent_target_age: Option<String>,
}

pub fn summarize(dataset: &ShowDataset, platform: Platform) -> PlatformSummary {
    let view = dataset.platform_indices(platform);
    PlatformSummary {
        platform,
        show_count: view.len(),
        mean_rating: mean_rating(dataset, &view),
        most_frequent_target_age: most_frequent_target_age(dataset, &view),
    }
}

/// Summary rows for every platform in [`Platform::DISPLAY_ORDER`].
pub fn summarize_all(dataset: &ShowDataset) -> Vec<PlatformSummary> {
    Platform::DISPLAY_ORDER
        .into_iter()
        .map(|p| summarize(dataset, p))
        .collect()
}

/// Mean rating of the view, skipping unrated shows.
pub fn mean_rating(dataset: &ShowDataset, view: &[usize]) -> Option<f64> {
    let (sum, n) = view
        .iter()
        .filter_map(|&i| dataset.shows[i].rating)
        .fold((0.0, 0usize), |(sum, n), r| (sum + r, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Most common target-age label in the view.
///
/// "Not Defined" is reported only when it is strictly more frequent than
/// every other label. Ties between other labels go to the one seen first.
pub fn most_frequent_target_age(dataset: &ShowDataset, view: &[usize]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for &i in view {
        let label = dataset.shows[i].target_age_display.as_str();
        let count = counts.entry(label).or_insert(0);
        if *count == 0 {
            first_seen.push(label);
        }
        *count += 1;
    }

    let best_defined = first_seen
        .iter()
        .filter(|label| **label != NOT_DEFINED)
        .fold(None, |best: Option<(&str, usize)>, &label| {
            let n = counts[label];
            match best {
                Some((_, m)) if m >= n => best,
                _ => Some((label, n)),
            }
        });

    let undefined = counts.get(NOT_DEFINED).copied().unwrap_or(0);
    match best_defined {
        Some((label, n)) if n >= undefined => Some(label.to_string()),
        _ if undefined > 0 => Some(NOT_DEFINED.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Comparison selection
// ---------------------------------------------------------------------------

/// Invalid platform choices on the comparison page.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareError {
    #[error("Select two different platforms to compare!")]
    SamePlatform,

    #[error("Select a first platform!")]
    MissingFirst,
}

/// Validate the two optional platform selections and return the platforms
/// to chart, first selection first.
pub fn selected_platforms(
    first: Option<Platform>,
    second: Option<Platform>,
) -> Result<Vec<Platform>, CompareError> {
    match (first, second) {
        (None, None) => Ok(Vec::new()),
        (None, Some(_)) => Err(CompareError::MissingFirst),
        (Some(a), Some(b)) if a == b => Err(CompareError::SamePlatform),
        (Some(a), None) => Ok(vec![a]),
        (Some(a), Some(b)) => Ok(vec![a, b]),
    }
}

/// Split the shows available on any of `platforms` into one group per
/// platform. A show on several selected platforms goes to the earliest one.
pub fn attributed_groups(dataset: &ShowDataset, platforms: &[Platform]) -> Vec<(Platform, Vec<usize>)> {
    let mut groups: Vec<(Platform, Vec<usize>)> =
        platforms.iter().map(|&p| (p, Vec::new())).collect();
    for (i, show) in dataset.shows.iter().enumerate() {
        if let Some(group) = groups.iter_mut().find(|(p, _)| show.is_on(*p)) {
            group.1.push(i);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;

    const HEADER: &str = ",Title,Year,Age,IMDb,Rotten Tomatoes,Netflix,Hulu,Prime Video,Disney+,type\n";

    fn load(rows: &str) -> ShowDataset {
        read_csv(format!("{HEADER}{rows}").as_bytes()).unwrap()
    }

    #[test]
    fn test_mean_rating_skips_unrated() {
        let ds = load(
            "0,A,2000,7+,8.0,,1,0,0,0,1\n\
             1,B,2000,7+,,,1,0,0,0,1\n\
             2,C,2000,7+,6.0,,1,0,0,0,1\n",
        );
        let summary = summarize(&ds, Platform::Netflix);
        assert_eq!(summary.show_count, 3);
        assert_eq!(summary.mean_rating, Some(7.0));
    }

    #[test]
    fn test_mean_rating_none_when_nothing_rated() {
        let ds = load("0,A,2000,7+,,,1,0,0,0,1\n");
        assert_eq!(mean_rating(&ds, &[0]), None);
        assert_eq!(mean_rating(&ds, &[]), None);
    }

    #[test]
    fn test_not_defined_loses_ties() {
        let ds = load(
            "0,A,2000,,8.0,,1,0,0,0,1\n\
             1,B,2000,,8.0,,1,0,0,0,1\n\
             2,C,2000,16+,8.0,,1,0,0,0,1\n\
             3,D,2000,16+,8.0,,1,0,0,0,1\n\
             4,E,2000,7+,8.0,,1,0,0,0,1\n",
        );
        assert_eq!(
            most_frequent_target_age(&ds, &ds.all_indices()).as_deref(),
            Some("16+")
        );
    }

    #[test]
    fn test_not_defined_reported_when_sole_mode() {
        let ds = load(
            "0,A,2000,,8.0,,1,0,0,0,1\n\
             1,B,2000,,8.0,,1,0,0,0,1\n\
             2,C,2000,16+,8.0,,1,0,0,0,1\n",
        );
        assert_eq!(
            most_frequent_target_age(&ds, &ds.all_indices()).as_deref(),
            Some("Not Defined")
        );
    }

    #[test]
    fn test_mode_ties_go_to_first_seen() {
        let ds = load(
            "0,A,2000,18+,8.0,,1,0,0,0,1\n\
             1,B,2000,all,8.0,,1,0,0,0,1\n\
             2,C,2000,all,8.0,,1,0,0,0,1\n\
             3,D,2000,18+,8.0,,1,0,0,0,1\n",
        );
        assert_eq!(
            most_frequent_target_age(&ds, &ds.all_indices()).as_deref(),
            Some("18+")
        );
        assert_eq!(most_frequent_target_age(&ds, &[]), None);
    }

    #[test]
    fn test_summaries_follow_display_order() {
        let ds = load("0,A,2000,7+,8.0,,1,1,1,1,1\n");
        let platforms: Vec<Platform> = summarize_all(&ds).iter().map(|s| s.platform).collect();
        assert_eq!(platforms, Platform::DISPLAY_ORDER.to_vec());
    }

    #[test]
    fn test_selection_validation() {
        use Platform::*;
        assert_eq!(
            selected_platforms(Some(Netflix), Some(Netflix)),
            Err(CompareError::SamePlatform)
        );
        assert_eq!(
            selected_platforms(None, Some(Hulu)),
            Err(CompareError::MissingFirst)
        );
        assert_eq!(selected_platforms(None, None), Ok(vec![]));
        assert_eq!(selected_platforms(Some(Hulu), None), Ok(vec![Hulu]));
        assert_eq!(
            selected_platforms(Some(Hulu), Some(DisneyPlus)),
            Ok(vec![Hulu, DisneyPlus])
        );
    }

    #[test]
    fn test_shared_shows_attributed_to_first_platform() {
        let ds = load(
            "0,A,2000,7+,8.0,,1,0,0,1,1\n\
             1,B,2000,7+,8.0,,0,0,0,1,1\n\
             2,C,2000,7+,8.0,,0,1,0,0,1\n\
             3,D,2000,7+,8.0,,1,0,0,0,1\n",
        );
        let groups = attributed_groups(&ds, &[Platform::DisneyPlus, Platform::Netflix]);
        assert_eq!(groups[0], (Platform::DisneyPlus, vec![0, 1]));
        assert_eq!(groups[1], (Platform::Netflix, vec![3]));
    }
}
