use eframe::egui;
use review_pulse::app::ReviewPulseApp;
use review_pulse::config::Config;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Review Pulse – Reddit Movie Review Sentiment",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the logo and word clouds.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ReviewPulseApp::new(&config)))
        }),
    )
}
