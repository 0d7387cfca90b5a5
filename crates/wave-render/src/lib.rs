pub mod app;
pub mod array_view;
pub mod chart_view;
pub mod charts;
pub mod controller;
pub mod form;
pub mod readout;
pub mod state;
pub mod worker;

use app::WavepackApp;

/// Launch the application with eframe.
pub fn run() {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wavepack — Enclosure Designer")
            .with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Wavepack",
        native_options,
        Box::new(|cc| Ok(Box::new(WavepackApp::new(cc)))),
    )
    .expect("eframe::run_native failed");
}
