mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::SalaryDashboardApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_args(std::env::args());
    log::info!("Dataset: {}", config.dataset_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Salary Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(SalaryDashboardApp::new(cc, config)))),
    )
}
