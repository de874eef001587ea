use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use anyhow::Result;
use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::loader::load_dataset;
use crate::data::model::SalaryDataset;
use crate::state::{AppState, View};
use crate::ui::{modal, panels, plot, table};

/// Result of one background load, tagged with its request generation.
struct LoadMessage {
    generation: u64,
    result: Result<SalaryDataset>,
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalaryDashboardApp {
    pub state: AppState,
    load_tx: Sender<LoadMessage>,
    load_rx: Receiver<LoadMessage>,
}

impl SalaryDashboardApp {
    /// Create the app and start reading the configured dataset.
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let (load_tx, load_rx) = channel();
        let mut app = Self {
            state: AppState::default(),
            load_tx,
            load_rx,
        };
        app.start_load(&cc.egui_ctx, config.dataset_path);
        app
    }

    /// Read `path` on a worker thread.  The result is picked up by
    /// [`Self::poll_loads`]; if the window is gone by then the send fails
    /// and the result is dropped.
    fn start_load(&mut self, ctx: &egui::Context, path: PathBuf) {
        let generation = self.state.begin_load(&path);
        spawn_load(ctx.clone(), self.load_tx.clone(), generation, path);
    }

    /// Apply every finished load.  Stale ones are discarded by the state.
    fn poll_loads(&mut self) {
        while let Ok(msg) = self.load_rx.try_recv() {
            self.state.finish_load(msg.generation, msg.result);
        }
    }
}

fn spawn_load(ctx: egui::Context, tx: Sender<LoadMessage>, generation: u64, path: PathBuf) {
    thread::spawn(move || {
        let result = load_dataset(&path);
        if tx.send(LoadMessage { generation, result }).is_err() {
            log::debug!("Dashboard closed before {} finished loading", path.display());
            return;
        }
        ctx.request_repaint();
    });
}

impl eframe::App for SalaryDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loads();

        // ---- Top panel: header + menu bar ----
        let mut open_request = None;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::header(ui);
            open_request = panels::top_bar(ui, &mut self.state);
        });
        if let Some(path) = open_request {
            self.start_load(ctx, path);
        }

        // ---- Central panel: table or charts ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Table => table::summary_table(ui, &mut self.state),
            View::Charts => plot::summary_charts(ui, &self.state),
        });

        // ---- Drill-down modal ----
        modal::breakdown_modal(ctx, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn background_load_reports_with_its_generation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("salaries.csv");
        std::fs::write(&path, "work_year,job_title,salary_in_usd\n2020,A,10\n").unwrap();

        let (tx, rx) = channel();
        spawn_load(egui::Context::default(), tx, 7, path);
        let msg = rx.recv_timeout(Duration::from_secs(10)).unwrap();

        assert_eq!(msg.generation, 7);
        assert_eq!(msg.result.unwrap().len(), 1);
    }
}
