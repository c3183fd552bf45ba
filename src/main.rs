use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use passforge::domain::ports::TokenStoragePort;
use passforge::infrastructure::{
    AppConfig, ClipboardService, ConfigFile, ConfigOverrides, HttpPasswordApi,
    KeyringTokenStorage, PreferencesTokenStorage, TokenBackend,
};
use passforge::presentation::{App, CliArgs, Command};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(overrides: &ConfigOverrides) -> Result<AppConfig> {
    let mut config = ConfigFile::locate(overrides.config.as_deref())?.load()?;
    config.merge_overrides(overrides);
    Ok(config)
}

fn token_storage(config: &AppConfig) -> Result<Arc<dyn TokenStoragePort>> {
    match config.session.token_backend {
        TokenBackend::Preferences => {
            let dir = config
                .effective_data_dir()
                .ok_or_else(|| eyre!("failed to determine data directory"))?;
            Ok(Arc::new(PreferencesTokenStorage::new(dir)))
        }
        TokenBackend::Keyring => Ok(Arc::new(KeyringTokenStorage::new())),
    }
}

fn create_app() -> Result<(App, Command)> {
    let args = CliArgs::parse();
    let config = load_config(&args.overrides)?;

    init_logging(&config)?;

    let api = Arc::new(HttpPasswordApi::with_options(
        &config.api.base_url,
        config.api.timeout(),
    )?);
    info!(
        version = passforge::VERSION,
        config = ?config.config,
        api = %api.base_url(),
        backend = ?config.session.token_backend,
        "Starting Passforge"
    );

    let storage = token_storage(&config)?;
    let clipboard = Arc::new(ClipboardService::new(config.clipboard.hold()));

    let app = App::new(api, storage, clipboard, config.register.success_policy);

    Ok((app, args.command))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let (app, command) = create_app()?;

    let mut stdout = std::io::stdout();
    let status = app.run(command, &mut stdout).await?;

    info!(?status, "Application exiting");
    Ok(status.into())
}
