use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::compare::PlatformSummary;
use crate::data::model::{Show, ShowDataset};

const ROW_HEIGHT: f32 = 20.0;

/// Columns a show table can display. The title is always shown first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowColumn {
    Year,
    TargetAge,
    ImdbRating,
    Platforms,
}

impl ShowColumn {
    fn header(self) -> &'static str {
        match self {
            ShowColumn::Year => "Year",
            ShowColumn::TargetAge => "Target Age",
            ShowColumn::ImdbRating => "IMDb Rating",
            ShowColumn::Platforms => "Platforms",
        }
    }

    fn cell(self, show: &Show) -> String {
        match self {
            ShowColumn::Year => show.year.to_string(),
            ShowColumn::TargetAge => show.target_age_display.clone(),
            ShowColumn::ImdbRating => show.rating_display.clone(),
            ShowColumn::Platforms => show.platforms_label(),
        }
    }
}

/// Render the rows of `view` with the given columns.
pub fn show_table(ui: &mut Ui, id: &str, dataset: &ShowDataset, view: &[usize], columns: &[ShowColumn]) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(260.0).at_least(160.0).clip(true))
            .columns(Column::auto().at_least(80.0), columns.len())
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("Title");
                });
                for col in columns {
                    header.col(|ui: &mut Ui| {
                        ui.strong(col.header());
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, view.len(), |mut row| {
                    let show = &dataset.shows[view[row.index()]];
                    row.col(|ui: &mut Ui| {
                        ui.label(&show.title);
                    });
                    for col in columns {
                        row.col(|ui: &mut Ui| {
                            ui.label(col.cell(show));
                        });
                    }
                });
            });
    });
}

/// Render the per-platform summary table.
pub fn summary_table(ui: &mut Ui, summaries: &[PlatformSummary]) {
    ui.push_id("platform_summary", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(120.0), 4)
            .header(ROW_HEIGHT, |mut header| {
                for title in [
                    "Platform",
                    "Number of Series",
                    "Mean Rating",
                    "Most Frequent Target Age",
                ] {
                    header.col(|ui: &mut Ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for summary in summaries {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.label(summary.platform.name());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(summary.show_count.to_string());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(
                                summary
                                    .mean_rating
                                    .map(|m| format!("{m:.4}"))
                                    .unwrap_or_else(|| "-".to_string()),
                            );
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(summary.most_frequent_target_age.as_deref().unwrap_or("-"));
                        });
                    });
                }
            });
    });
}
