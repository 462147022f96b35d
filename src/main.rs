//! Influencer Desk - desktop app for influencer profile intake and bulk CSV management.

use std::path::{Path, PathBuf};

use clap::Parser;
use eframe::egui;
use influencer_desk as app;

use app::config::{AppConfig, ConfigLoadResult};
use app::session::Session;
use app::ui::App;

/// Desktop app for influencer profile intake and bulk CSV management.
#[derive(Parser)]
#[command(name = "influencer-desk")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = if cli.dev {
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };

    let (config, initial_error) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, None),
        ConfigLoadResult::Missing => (AppConfig::default(), None),
        ConfigLoadResult::Invalid(e) => {
            let message = format!("Config invalid, using defaults: {}", e);
            (AppConfig::default(), Some(message))
        }
    };

    // Logging goes to stderr and a daily file under the data directory
    let data_dir = config.data_dir();
    let _log_guard = init_logging(&data_dir);

    tracing::info!("Influencer Desk starting...");
    tracing::info!("Config path: {:?}", config_path);
    if let Some(e) = &initial_error {
        tracing::warn!("{}", e);
    }

    // Re-hydrate a persisted session, if any
    let session = Session::restore(Session::default_path(&data_dir));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Influencer Desk")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    eframe::run_native(
        "Influencer Desk",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(App::new(config, session, rt, initial_error)))
        }),
    )
}

/// Initialize tracing with stderr output plus a daily rolling log file.
fn init_logging(data_dir: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let log_dir = data_dir.join("logs");
    let _ = std::fs::create_dir_all(&log_dir);

    let file_appender = tracing_appender::rolling::daily(&log_dir, "influencer-desk.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    guard
}
