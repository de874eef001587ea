use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::sort::SortColumn;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Year summary table (central panel)
// ---------------------------------------------------------------------------

/// Render the sortable summary table.  Clicking a header sorts by it,
/// clicking a row opens the job-title breakdown of that year.
pub fn summary_table(ui: &mut Ui, state: &mut AppState) {
    if state.summaries.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            if state.loading {
                ui.spinner();
            } else {
                ui.heading("No salary data  (File → Open…)");
            }
        });
        return;
    }

    let mut sort_clicked = None;
    let mut year_clicked = None;
    let selected_year = state.breakdown.as_ref().map(|b| b.year.clone());

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::initial(160.0).at_least(80.0))
        .column(Column::initial(160.0).at_least(80.0))
        .column(Column::remainder().at_least(120.0))
        .header(28.0, |mut header| {
            for column in SortColumn::ALL {
                header.col(|ui: &mut Ui| {
                    let mut text = column.title().to_string();
                    if let Some(arrow) = state.sort.indicator(column) {
                        text.push(' ');
                        text.push_str(arrow);
                    }
                    let button = egui::Button::new(RichText::new(text).strong()).frame(false);
                    if ui.add(button).clicked() {
                        sort_clicked = Some(column);
                    }
                });
            }
        })
        .body(|mut body| {
            for summary in &state.summaries {
                body.row(24.0, |mut row| {
                    row.set_selected(selected_year.as_deref() == Some(summary.year.as_str()));
                    row.col(|ui: &mut Ui| {
                        ui.label(&summary.year);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(summary.total_jobs.to_string());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(summary.avg_salary_text());
                    });
                    if row.response().clicked() {
                        year_clicked = Some(summary.year.clone());
                    }
                });
            }
        });

    if let Some(column) = sort_clicked {
        state.toggle_sort(column);
    }
    if let Some(year) = year_clicked {
        state.select_year(&year);
    }
}
