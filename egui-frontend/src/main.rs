use eframe::egui;
use log::{error, info};

use college_life_egui::config::AppConfig;
use college_life_egui::ui::CollegeLifeApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting College Life egui application");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {:#}", e);
            return Err(eframe::Error::AppCreation(e.into()));
        }
    };

    // Phone-shaped window, the screens are laid out as a single column
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 600.0])
            .with_title("College Life")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "College Life",
        options,
        Box::new(|_cc| {
            let app = CollegeLifeApp::new(config);
            info!("Successfully initialized College Life app");
            Ok(Box::new(app))
        }),
    )
}
