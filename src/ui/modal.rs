use eframe::egui::{self, Id, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Job-title breakdown modal
// ---------------------------------------------------------------------------

/// Show the breakdown of the selected year, if any.  Escape, a click
/// outside, or the Close button discards it.
pub fn breakdown_modal(ctx: &egui::Context, state: &mut AppState) {
    let Some(breakdown) = &state.breakdown else {
        return;
    };

    let mut close_clicked = false;
    let mut export = None;
    let response = egui::Modal::new(Id::new("breakdown_modal")).show(ctx, |ui: &mut Ui| {
        ui.set_width(520.0);
        ui.heading(format!("Job titles in {}", breakdown.year));
        let total: usize = breakdown.entries.iter().map(|e| e.count).sum();
        ui.label(format!(
            "{} jobs, {} distinct titles",
            total,
            breakdown.entries.len()
        ));
        ui.separator();

        plot::breakdown_bars(ui, &breakdown.year, &breakdown.entries);
        ui.separator();

        ScrollArea::vertical()
            .max_height(260.0)
            .auto_shrink([false, true])
            .show(ui, |ui: &mut Ui| {
                egui::Grid::new("breakdown_grid")
                    .num_columns(2)
                    .striped(true)
                    .min_col_width(120.0)
                    .show(ui, |ui: &mut Ui| {
                        ui.strong("Job title");
                        ui.strong("Count");
                        ui.end_row();

                        for entry in &breakdown.entries {
                            if entry.jobname.is_empty() {
                                ui.label(RichText::new("(no title)").italics());
                            } else {
                                ui.label(&entry.jobname);
                            }
                            ui.label(entry.count.to_string());
                            ui.end_row();
                        }
                    });
            });

        ui.separator();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
            if ui
                .button("Copy records as JSON")
                .on_hover_text("All columns of every record in this year.")
                .clicked()
            {
                export = Some(state.year_records_json(&breakdown.year));
            }
        });
    });

    match export {
        Some(Ok(json)) => ctx.copy_text(json),
        Some(Err(e)) => {
            log::error!("Failed to serialise records: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
        None => {}
    }
    if close_clicked || response.should_close() {
        state.close_breakdown();
    }
}
