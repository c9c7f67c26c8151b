use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use base64::engine::general_purpose;
use base64::Engine as _;
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

use super::model::{Platform, ShowDataset};

/// Header of the exported table. Title leads as the index column.
pub const EXPORT_COLUMNS: [&str; 11] = [
    "Title",
    "Year",
    "Target Age",
    "Rating",
    "Netflix",
    "Hulu",
    "Prime Video",
    "Disney+",
    "Platforms",
    "Age",
    "Rating to show",
];

// ---------------------------------------------------------------------------
// CSV download
// ---------------------------------------------------------------------------

/// Write the rows of `view` as CSV.
pub fn write_csv<W: Write>(dataset: &ShowDataset, view: &[usize], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(EXPORT_COLUMNS)?;

    for &i in view {
        let show = &dataset.shows[i];
        let mut record = vec![
            show.title.clone(),
            show.year.to_string(),
            show.target_age_display.clone(),
            show.rating.map(|r| r.to_string()).unwrap_or_default(),
        ];
        record.extend(
            Platform::ALL
                .iter()
                .map(|&p| u8::from(show.is_on(p)).to_string()),
        );
        record.push(show.platforms_label());
        record.push(show.min_age.to_string());
        record.push(show.rating_display.clone());
        writer.write_record(&record)?;
    }

    writer.flush().context("flushing CSV writer")?;
    Ok(())
}

pub fn to_csv_string(dataset: &ShowDataset, view: &[usize]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(dataset, view, &mut buf)?;
    String::from_utf8(buf).context("CSV output is not UTF-8")
}

pub fn save_csv(dataset: &ShowDataset, view: &[usize], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(dataset, view, file)?;
    log::info!("Exported {} shows to {}", view.len(), path.display());
    Ok(())
}

/// Base64 `data:` URI carrying `csv`, usable as a download link target.
pub fn csv_data_uri(csv: &str) -> String {
    let b64 = general_purpose::STANDARD.encode(csv.as_bytes());
    format!("data:file/csv;base64,{b64}")
}

// ---------------------------------------------------------------------------
// JSON view of search results
// ---------------------------------------------------------------------------

/// Table in "split" orientation: column names, row labels and row values.
#[derive(Debug, Serialize)]
pub struct SplitTable {
    pub columns: Vec<&'static str>,
    pub index: Vec<String>,
    pub data: Vec<Vec<JsonValue>>,
}

/// Search-result table in "split" orientation, rows in `view` order.
pub fn search_results_json(dataset: &ShowDataset, view: &[usize]) -> SplitTable {
    let mut index = Vec::with_capacity(view.len());
    let mut data = Vec::with_capacity(view.len());

    for &i in view {
        let show = &dataset.shows[i];
        let shown_rating = match show.rating {
            Some(_) => show
                .rating_display
                .parse::<f64>()
                .map(|r| json!(r))
                .unwrap_or_else(|_| json!(show.rating_display)),
            None => json!(show.rating_display),
        };
        index.push(show.label.clone());
        data.push(vec![
            json!(show.title),
            json!(show.year),
            json!(show.target_age_display),
            json!(show.rating),
            shown_rating,
            json!(show.platforms.iter().map(|p| p.name()).collect::<Vec<_>>()),
        ]);
    }

    SplitTable {
        columns: vec!["Title", "Year", "Target Age", "Rating", "IMDb Rating", "Platforms"],
        index,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;

    fn dataset() -> ShowDataset {
        let csv = ",Title,Year,Age,IMDb,Rotten Tomatoes,Netflix,Hulu,Prime Video,Disney+,type\n\
                   10,Dark,2017,16+,8.8,94%,1,0,0,0,1\n\
                   11,\"Bluey, Season 1\",2018,all,,,0,0,1,1,1\n";
        read_csv(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_csv_export_layout() {
        let ds = dataset();
        let csv = to_csv_string(&ds, &ds.all_indices()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Title,Year,Target Age,Rating,Netflix,Hulu,Prime Video,Disney+,Platforms,Age,Rating to show"
        );
        assert_eq!(lines[1], "Dark,2017,16+,8.8,1,0,0,0,Netflix,16,8.8");
        assert_eq!(
            lines[2],
            "\"Bluey, Season 1\",2018,All Ages,,0,0,1,1,\"Prime Video, Disney+\",0,Not Rated"
        );
    }

    #[test]
    fn test_data_uri_decodes_back() {
        let uri = csv_data_uri("a,b\n1,2\n");
        let b64 = uri.strip_prefix("data:file/csv;base64,").unwrap();
        let decoded = general_purpose::STANDARD.decode(b64).unwrap();
        assert_eq!(decoded, b"a,b\n1,2\n");
    }

    #[test]
    fn test_search_results_json_split_orientation() {
        let ds = dataset();
        let table = search_results_json(&ds, &[1]);
        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value["index"], json!(["11"]));
        assert_eq!(value["columns"][4], json!("IMDb Rating"));
        assert_eq!(
            value["data"][0],
            json!(["Bluey, Season 1", 2018, "All Ages", null, "Not Rated", ["Prime Video", "Disney+"]])
        );
        let rated = serde_json::to_value(search_results_json(&ds, &[0])).unwrap();
        assert_eq!(rated["data"][0][4], json!(8.8));
    }
}
