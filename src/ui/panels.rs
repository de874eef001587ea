use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::color;
use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Application title line above the menu bar.
pub fn header(ui: &mut Ui) {
    ui.add_space(6.0);
    ui.label(
        RichText::new("Salary Dashboard")
            .size(28.0)
            .strong()
            .color(color::BRAND),
    );
    ui.add_space(2.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.  Returns a file the user asked to open.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) -> Option<PathBuf> {
    let mut requested = None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui
                .add_enabled(!state.loading, egui::Button::new("Open…"))
                .clicked()
            {
                requested = open_file_dialog();
                ui.close_menu();
            }
            if ui
                .add_enabled(!state.summaries.is_empty(), egui::Button::new("Copy summary as JSON"))
                .clicked()
            {
                copy_summary(ui, state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.view, View::Table, "Table");
        ui.selectable_value(&mut state.view, View::Charts, "Charts");

        ui.separator();

        if state.loading {
            ui.spinner();
            ui.label("Loading…");
        } else if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records, {} years",
                ds.len(),
                state.summaries.len()
            ));
            let rejected = state.rejected_count();
            if rejected > 0 {
                ui.label(
                    RichText::new(format!("{rejected} rows skipped"))
                        .color(Color32::from_rgb(0xd9, 0x8c, 0x1f)),
                )
                .on_hover_text("Rows whose salary_in_usd is not a number are left out.");
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    requested
}

fn copy_summary(ui: &Ui, state: &mut AppState) {
    match state.summaries_json() {
        Ok(json) => ui.ctx().copy_text(json),
        Err(e) => {
            log::error!("Failed to serialise summaries: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open salary data")
        .add_filter("CSV", &["csv"])
        .pick_file()
}
