use std::io::Read;
use std::path::Path;

use super::error::{LoadError, LoadResult};
use super::model::{
    Platform, Show, ShowDataset, ALL_AGES, NOT_DEFINED, NOT_RATED, UNDEFINED_MIN_AGE,
};

/// Source columns discarded on load, matched by header name.
pub const DROPPED_COLUMNS: [&str; 2] = ["type", "Rotten Tomatoes"];

/// Names given, by position, to the columns left after the index column and
/// [`DROPPED_COLUMNS`] are removed.
pub const COLUMN_NAMES: [&str; 8] = [
    "Title",
    "Year",
    "Target Age",
    "Rating",
    "Netflix",
    "Hulu",
    "Prime Video",
    "Disney+",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a show dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` – index column, then the show columns described by
///   [`COLUMN_NAMES`] interleaved with the [`DROPPED_COLUMNS`]
pub fn load_file(path: &Path) -> LoadResult<ShowDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

fn load_csv(path: &Path) -> LoadResult<ShowDataset> {
    let file = std::fs::File::open(path)?;
    let dataset = read_csv(file)?;
    log::info!(
        "Loaded {} shows from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Parse and normalize CSV text.
///
/// Layout: header row; first column is the row index; `type` and
/// `Rotten Tomatoes` are dropped by name; the remaining eight columns are
/// renamed positionally to [`COLUMN_NAMES`], so their order must match.
pub fn read_csv<R: Read>(input: R) -> LoadResult<ShowDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let data_columns = select_columns(&headers)?;

    let mut shows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let fields: Vec<&str> = data_columns
            .iter()
            .map(|&idx| record.get(idx).unwrap_or(""))
            .collect();
        let label = record.get(0).unwrap_or("").to_string();
        shows.push(normalize_row(row_no, label, &fields)?);
    }

    log::debug!("Normalized {} rows", shows.len());
    Ok(ShowDataset::from_shows(shows))
}

/// Positions of the kept data columns, in file order.
fn select_columns(headers: &csv::StringRecord) -> LoadResult<Vec<usize>> {
    let mut dropped = Vec::with_capacity(DROPPED_COLUMNS.len());
    for name in DROPPED_COLUMNS {
        let pos = headers
            .iter()
            .skip(1)
            .position(|h| h.trim() == name)
            .ok_or(LoadError::MissingColumn(name))?;
        dropped.push(pos + 1);
    }

    let kept: Vec<usize> = (1..headers.len())
        .filter(|idx| !dropped.contains(idx))
        .collect();

    if kept.len() != COLUMN_NAMES.len() {
        return Err(LoadError::ColumnCount {
            expected: COLUMN_NAMES.len(),
            found: kept.len(),
        });
    }
    Ok(kept)
}

fn normalize_row(row: usize, label: String, fields: &[&str]) -> LoadResult<Show> {
    let title = fields[0].to_string();

    let year_field = fields[1].trim();
    let year = year_field.parse::<i32>().map_err(|_| LoadError::InvalidValue {
        row,
        column: COLUMN_NAMES[1],
        value: year_field.to_string(),
        expected: "year",
    })?;

    let target_age_raw = Some(fields[2].trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let rating = parse_rating(row, fields[3])?;

    let mut platform_flags = [false; 4];
    for platform in Platform::ALL {
        let idx = platform.flag_index();
        platform_flags[idx] = parse_flag(row, COLUMN_NAMES[4 + idx], fields[4 + idx])?;
    }

    let age = target_age_raw.as_deref();
    Ok(Show {
        label,
        title,
        year,
        target_age_display: target_age_display(age),
        min_age: min_age(age),
        target_age_raw,
        rating,
        rating_display: rating_display(rating),
        platforms: platforms_from_flags(&platform_flags),
        platform_flags,
    })
}

fn parse_rating(row: usize, field: &str) -> LoadResult<Option<f64>> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(None);
    }
    let value = field.parse::<f64>().map_err(|_| LoadError::InvalidValue {
        row,
        column: COLUMN_NAMES[3],
        value: field.to_string(),
        expected: "rating",
    })?;
    Ok(Some(value).filter(|v| !v.is_nan()))
}

/// Flag columns hold 0/1; anything numeric other than 1 counts as unset.
fn parse_flag(row: usize, column: &'static str, field: &str) -> LoadResult<bool> {
    let field = field.trim();
    field
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .map(|v| v == 1.0)
        .ok_or_else(|| LoadError::InvalidValue {
            row,
            column,
            value: field.to_string(),
            expected: "0/1 flag",
        })
}

// ---------------------------------------------------------------------------
// Derived columns
// ---------------------------------------------------------------------------

/// Platforms whose flag is set, in [`Platform::ALL`] order.
pub fn platforms_from_flags(flags: &[bool; 4]) -> Vec<Platform> {
    Platform::ALL
        .into_iter()
        .filter(|p| flags[p.flag_index()])
        .collect()
}

/// Numeric floor age of a target-age label.
///
/// `"<digits>+"` yields the digits, `"all"` yields 0, anything else
/// (missing included) yields [`UNDEFINED_MIN_AGE`].
pub fn min_age(label: Option<&str>) -> u32 {
    match label {
        Some("all") => 0,
        Some(s) => s
            .strip_suffix('+')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u32>().ok())
            .unwrap_or(UNDEFINED_MIN_AGE),
        None => UNDEFINED_MIN_AGE,
    }
}

pub fn target_age_display(label: Option<&str>) -> String {
    match label {
        None => NOT_DEFINED.to_string(),
        Some("all") => ALL_AGES.to_string(),
        Some(s) => s.to_string(),
    }
}

/// Rating rounded to two decimals, or `"Not Rated"`.
pub fn rating_display(rating: Option<f64>) -> String {
    match rating {
        None => NOT_RATED.to_string(),
        Some(r) => {
            let rounded = (r * 100.0).round() / 100.0;
            if rounded.fract() == 0.0 {
                format!("{rounded:.1}")
            } else {
                format!("{rounded}")
            }
        }
    }
}
