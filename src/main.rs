use clap::Parser;
use qr_refresh::domain::ports::ConfigProvider;
use qr_refresh::utils::{logger, validation::Validate};
use qr_refresh::{CliConfig, DisplayLoop, HttpBackend, PageSurface, RefreshController, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting qr-refresh display client");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.config.clone() {
        Some(path) => {
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Failed to load config file {}: {}", path.display(), e);
                    eprintln!("❌ Failed to load config file: {}", e);
                    std::process::exit(1);
                }
            };
            ensure_valid(&config);
            run_client(config).await;
        }
        None => {
            ensure_valid(&cli);
            run_client(cli).await;
        }
    }

    Ok(())
}

fn ensure_valid(config: &impl Validate) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run_client<C: ConfigProvider>(config: C) {
    let page_path = config.page_path().to_string();
    let duration = config.qr_duration();
    let interval = config.tick_interval();

    let surface = PageSurface::new(config.elements());
    let backend = HttpBackend::new(config);
    let controller = RefreshController::new(surface, backend, page_path, duration);

    tracing::info!("✅ Display attached, countdown running");
    DisplayLoop::new(controller, interval).run().await;
}
