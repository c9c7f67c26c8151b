use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::PlatformChoice;
use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Left side panel – mode selector and filter widgets
// ---------------------------------------------------------------------------

/// Render the left side panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("TV Shows");
    ui.separator();

    ui.strong("What do you want to do?");
    egui::ComboBox::from_id_salt("page")
        .selected_text(state.page.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for page in Page::ALL {
                ui.selectable_value(&mut state.page, page, page.label());
            }
        });

    if state.page == Page::Filter {
        ui.add_space(8.0);
        ui.separator();
        filter_widgets(ui, state);
    }
}

fn filter_widgets(ui: &mut Ui, state: &mut AppState) {
    let (min_year, max_year) = state
        .dataset
        .year_range
        .unwrap_or((state.filter.min_year, state.filter.min_year));
    let controls = &mut state.filter;

    ui.add(
        egui::Slider::new(&mut controls.min_rating, 0.0..=10.0)
            .step_by(0.5)
            .text("Rating"),
    );
    ui.add(egui::Slider::new(&mut controls.max_age, 0..=18).text("Minimum Age Recommendation"));
    ui.add(
        egui::Slider::new(&mut controls.min_year, min_year..=max_year)
            .step_by(1.0)
            .text("Released Year"),
    );

    ui.add_space(4.0);
    ui.strong("Platform");
    egui::ComboBox::from_id_salt("platform_filter")
        .selected_text(controls.platform.label())
        .show_ui(ui, |ui: &mut Ui| {
            for choice in PlatformChoice::OPTIONS {
                ui.selectable_value(&mut controls.platform, choice, choice.label());
            }
        });

    ui.add_space(8.0);
    ui.label("Some TV Shows are not rated yet, tick here to include them in your search");
    ui.checkbox(&mut controls.include_unrated, "Include not rated series");
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export table…").clicked() {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let source = state
            .source_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ui.label(format!("{} shows loaded {source}", state.dataset.len()));

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open TV shows dataset")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Switched to {} ({} shows)", path.display(), dataset.len());
                state.set_dataset(dataset, path);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export TV shows table")
        .add_filter("CSV", &["csv"])
        .set_file_name("tv_shows_table.csv")
        .save_file();

    if let Some(path) = file {
        state.save_table(&path);
    }
}
