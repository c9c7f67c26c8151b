use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::Platform;
use crate::data::sort::SortKeys;
use crate::state::{AppState, Page};
use crate::ui::plot;
use crate::ui::table::{self, ShowColumn};

const README_TITLE: &str = "The most popular TV Shows and Platforms";
const README_TEXT: &str = "Here you will find information on the best TV Shows such as the rating, \
release year, target age, and even the platform in which you can find them. \
Find a TV Show by its title using the whole title, a key word or even a piece of it. \
If you are thinking of subscribing to a platform but are not sure which to choose, \
compare the most popular platforms by their general characteristics and with a deeper analysis. \
Lastly, filter the TV Shows to find your next marathon for the weekend!";

/// Render the page selected in the side panel.
pub fn central_page(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let page = state.page;
            match page {
                Page::Description => description_page(ui, state),
                Page::Search => search_page(ui, state),
                Page::Compare => compare_page(ui, state),
                Page::Filter => filter_page(ui, state),
            }
        });
}

fn sort_checkboxes(ui: &mut Ui, sort: &mut SortKeys) {
    ui.label("Sort TV Shows by:");
    ui.columns(2, |cols| {
        cols[0].checkbox(&mut sort.by_rating, "Rating");
        cols[1].checkbox(&mut sort.by_year, "Released Year");
    });
}

// ---------------------------------------------------------------------------
// Description
// ---------------------------------------------------------------------------

fn description_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading(README_TITLE);
    ui.label(README_TEXT);
    ui.add_space(8.0);
    ui.checkbox(&mut state.description_grid, "Show grid");
    ui.strong("Evolution of the quality and volume of TV Shows over the years");
    plot::rating_evolution(ui, &state.dataset, state.description_grid);
}

// ---------------------------------------------------------------------------
// Search by title
// ---------------------------------------------------------------------------

fn search_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading(
        "By typing a key word from its title, a table describing the main characteristics of the TV Shows will show up",
    );
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Type in here");
        ui.text_edit_singleline(&mut state.search.term);
    });
    sort_checkboxes(ui, &mut state.search.sort);
    ui.checkbox(&mut state.search.show_json, "Show the table in a JSON format");

    if state.search.show_json {
        if let Some(text) = state.search_results_json() {
            ui.add(
                egui::TextEdit::multiline(&mut text.as_str())
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );
        }
    } else if let Some(view) = state.search_results() {
        table::show_table(
            ui,
            "search_results",
            &state.dataset,
            &view,
            &[
                ShowColumn::Year,
                ShowColumn::TargetAge,
                ShowColumn::ImdbRating,
                ShowColumn::Platforms,
            ],
        );
    }
}

// ---------------------------------------------------------------------------
// Compare platforms
// ---------------------------------------------------------------------------

fn platform_radio(ui: &mut Ui, title: &str, selection: &mut Option<Platform>) {
    ui.strong(title);
    ui.radio_value(selection, None, "---");
    for platform in Platform::DISPLAY_ORDER {
        ui.radio_value(selection, Some(platform), platform.name());
    }
}

fn compare_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Main Characteristics of the Platforms");
    table::summary_table(ui, &state.summaries);

    ui.add_space(12.0);
    ui.heading("Visual Comparisons");
    ui.label("Now select up to two platforms and choose which information to visualize for a deeper analysis.");

    let controls = &mut state.compare;
    ui.columns(2, |cols| {
        platform_radio(&mut cols[0], "Select First Platform", &mut controls.first);
        platform_radio(&mut cols[1], "Select Second Platform", &mut controls.second);
    });
    ui.columns(3, |cols| {
        cols[0].checkbox(&mut controls.show_violin, "Distribution of Ratings by Target Age");
        cols[1].checkbox(&mut controls.show_histogram, "Number of TV Shows by Rating");
        cols[2].checkbox(&mut controls.show_density, "Proportion of TV Shows by Rating");
    });
    ui.checkbox(&mut controls.grid, "Show grid");

    match state.compared_platforms() {
        Err(e) => {
            log::debug!("Comparison input rejected: {e}");
            ui.label(RichText::new(e.to_string()).color(Color32::RED));
        }
        Ok(platforms) if platforms.is_empty() => {}
        Ok(platforms) => {
            let names: Vec<&str> = platforms.iter().map(|p| p.name()).collect();
            ui.label(format!("Comparing: {}", names.join(" vs ")));

            let controls = &state.compare;
            if controls.show_violin {
                ui.strong("Distribution of Ratings by Target Age");
                plot::violin_plot(ui, &state.dataset, &platforms, &state.colors, controls.grid);
            }
            if controls.show_histogram {
                ui.strong("TV Shows Count by Rating");
                plot::rating_histogram(ui, &state.dataset, &platforms, &state.colors, controls.grid);
            }
            if controls.show_density {
                ui.strong("Proportional amount of TV Shows by Rating");
                plot::rating_density(ui, &state.dataset, &platforms, &state.colors, controls.grid);
            }
        }
    }

    ui.add_space(8.0);
    ui.label("Now that you have more information go to the Filter TV Shows option on the side panel and filter your next TV Show by platform!");
}

// ---------------------------------------------------------------------------
// Filter shows
// ---------------------------------------------------------------------------

fn filter_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter the TV Shows by rating, target age, year of release and finally select your platform");

    ui.checkbox(&mut state.filter.offer_download, "Download table in a .csv file");
    if state.filter.offer_download {
        ui.horizontal(|ui: &mut Ui| {
            if ui.button("Save CSV…").clicked() {
                crate::ui::panels::save_file_dialog(state);
            }
            if ui.button("Copy download link").clicked() {
                match state.download_link() {
                    Ok(link) => {
                        ui.ctx().copy_text(link);
                        state.status_message = Some("Download link copied to clipboard".to_string());
                    }
                    Err(e) => {
                        log::error!("Failed to build download link: {e:#}");
                        state.status_message = Some(format!("Error: {e:#}"));
                    }
                }
            }
        });
    }

    let view = state.filter_results();
    ui.label(RichText::new(state.filter_banner(view.len())).color(Color32::LIGHT_GREEN));

    sort_checkboxes(ui, &mut state.filter.sort);
    table::show_table(
        ui,
        "filter_results",
        &state.dataset,
        &view,
        &[
            ShowColumn::Platforms,
            ShowColumn::ImdbRating,
            ShowColumn::TargetAge,
            ShowColumn::Year,
        ],
    );
}
