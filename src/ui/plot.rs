use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color;
use crate::data::aggregate::{JobTitleCount, YearSummary};
use crate::data::sort::chronological;
use crate::state::AppState;

/// Titles shown as bars in the breakdown chart; the table lists all of them.
const MAX_BARS: usize = 10;

// ---------------------------------------------------------------------------
// Year charts (central panel)
// ---------------------------------------------------------------------------

/// Average salary and job count per year, one line chart each.
pub fn summary_charts(ui: &mut Ui, state: &AppState) {
    let points = chronological(&state.summaries);
    if points.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            if state.loading {
                ui.spinner();
            } else {
                ui.heading("No yearly data to chart  (File → Open…)");
            }
        });
        return;
    }

    let height = (ui.available_height() - ui.spacing().item_spacing.y * 4.0) / 2.0;

    ui.strong("Average salary by year");
    year_line_chart(
        ui,
        "avg_salary_plot",
        height - 20.0,
        "avgSalary",
        color::AVG_SALARY,
        &points,
        |s| s.avg_salary,
    );

    ui.strong("Jobs by year");
    year_line_chart(
        ui,
        "total_jobs_plot",
        height - 20.0,
        "totalJobs",
        color::TOTAL_JOBS,
        &points,
        |s| s.total_jobs as f64,
    );
}

fn year_line_chart(
    ui: &mut Ui,
    id: &str,
    height: f32,
    name: &str,
    color: Color32,
    points: &[(i64, &YearSummary)],
    value: impl Fn(&YearSummary) -> f64,
) {
    let series: Vec<[f64; 2]> = points
        .iter()
        .map(|(year, s)| [*year as f64, value(s)])
        .collect();

    Plot::new(id)
        .height(height.max(120.0))
        .legend(Legend::default())
        .x_axis_label("Year")
        .allow_scroll(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line: PlotPoints = series.iter().copied().collect();
            plot_ui.line(Line::new(line).name(name).color(color).width(2.0));

            let dots: PlotPoints = series.iter().copied().collect();
            plot_ui.points(Points::new(dots).name(name).color(color).radius(4.0));
        });
}

// ---------------------------------------------------------------------------
// Breakdown bar chart (modal)
// ---------------------------------------------------------------------------

/// Bars for the most frequent job titles, one colour per title.
/// `entries` must already be sorted most frequent first.
pub fn breakdown_bars(ui: &mut Ui, year: &str, entries: &[JobTitleCount]) {
    let shown = &entries[..entries.len().min(MAX_BARS)];
    let palette = color::generate_palette(shown.len());

    let bars: Vec<Bar> = shown
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, (entry, fill))| {
            let name = if entry.jobname.is_empty() {
                "(no title)"
            } else {
                entry.jobname.as_str()
            };
            Bar::new(i as f64, entry.count as f64)
                .name(name)
                .fill(fill)
                .width(0.7)
        })
        .collect();

    Plot::new(("breakdown_plot", year))
        .height(220.0)
        .y_axis_label("Jobs")
        .show_axes([false, true])
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
