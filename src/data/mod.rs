/// Data layer: show model, loading, querying and aggregation.
///
/// Architecture:
/// ```text
///      tv_shows.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + normalize → ShowDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ ShowDataset  │  Vec<Show>, immutable after load
///   └─────────────┘
///        │
///        ├──────────────┬──────────────┬──────────────┐
///        ▼              ▼              ▼              ▼
///   ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
///   │  filter   │→ │   sort    │   │ compare   │   │  export   │
///   └──────────┘   └──────────┘   └──────────┘   └──────────┘
///     views (row indices)          per-platform    CSV / JSON
///                                  summaries, stats
/// ```

pub mod compare;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;
pub mod stats;
