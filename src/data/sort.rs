use std::cmp::Ordering;

use super::model::{Show, ShowDataset};

/// Which sort keys are active. With both on, rating is the primary key and
/// year breaks ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortKeys {
    pub by_rating: bool,
    pub by_year: bool,
}

/// Descending by rating; shows without a rating come after every rated one.
fn cmp_rating_desc(a: &Show, b: &Show) -> Ordering {
    match (a.rating, b.rating) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_year_desc(a: &Show, b: &Show) -> Ordering {
    b.year.cmp(&a.year)
}

/// Return `view` reordered by `keys`. The sort is stable; with no key active
/// the input order is returned unchanged.
pub fn sorted_view(dataset: &ShowDataset, view: &[usize], keys: SortKeys) -> Vec<usize> {
    let mut sorted = view.to_vec();
    let shows = &dataset.shows;

    match (keys.by_rating, keys.by_year) {
        (true, true) => sorted.sort_by(|&a, &b| {
            cmp_rating_desc(&shows[a], &shows[b]).then_with(|| cmp_year_desc(&shows[a], &shows[b]))
        }),
        (true, false) => sorted.sort_by(|&a, &b| cmp_rating_desc(&shows[a], &shows[b])),
        (false, true) => sorted.sort_by(|&a, &b| cmp_year_desc(&shows[a], &shows[b])),
        (false, false) => {}
    }
    sorted
}
