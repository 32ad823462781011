#![warn(clippy::all)]

//! Native entry point for the map controls demo.

fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Map Controls Workbench",
        native_options,
        Box::new(|cc| Ok(Box::new(map_controls::app::WorkbenchApp::new(cc)))),
    )
}
