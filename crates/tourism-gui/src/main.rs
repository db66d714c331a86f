mod app;
mod panels;

use anyhow::{anyhow, Context};
use app::TourismApp;
use eframe::egui;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const WINDOW_SIZE: [f32; 2] = [900.0, 700.0];
const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];

fn main() -> anyhow::Result<()> {
    // Set up file logging to /tmp/tourism-planner.log
    let file_appender = tracing_appender::rolling::never("/tmp", "tourism-planner.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("tourism_core=debug,tourism_gui=info")
        }))
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    tracing::info!("Tourism Planner starting");

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_title(tourism_core::copy::TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "Tourism Planner",
        options,
        Box::new(|cc| Ok(Box::new(TourismApp::new(cc, handle)))),
    )
    .map_err(|e| anyhow!("GUI exited with error: {}", e))
}
