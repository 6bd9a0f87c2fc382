#![forbid(unsafe_code)]
#![cfg_attr(not(debug_assertions), deny(warnings))] // Forbid warnings in release builds
#![warn(clippy::all, rust_2018_idioms)]

use anyhow::anyhow;
use eframe::egui::ViewportBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = topclock::settings::settings_path()?;
    let settings = topclock::settings::load_or_create(&path)?;

    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("TopClock")
            .with_decorations(false)
            .with_always_on_top()
            .with_resizable(false)
            // Placeholder size; the first frame measures the label and
            // applies the real geometry.
            .with_inner_size([240.0, 64.0]),
        ..Default::default()
    };
    eframe::run_native(
        "TopClock",
        native_options,
        Box::new(move |cc| Box::new(topclock::ClockApp::new(cc, settings))),
    )
    .map_err(|err| anyhow!("failed to start the clock window: {err}"))
}
