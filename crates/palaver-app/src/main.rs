mod cli;
mod render;
mod repl;

use std::process::ExitCode;

use palaver_chat::{ChatController, HttpBackend};
use palaver_config::PalaverConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use tracing_subscriber::{EnvFilter, Registry};

/// Crates whose events are shown at the configured level.
const LOG_TARGETS: &[&str] = &["palaver", "palaver_chat", "palaver_config"];

/// Level used until the config file has been read.
const STARTUP_LOG_LEVEL: &str = "info";

type LogHandle = reload::Handle<EnvFilter, Registry>;

fn log_filter(level: &str) -> EnvFilter {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    for target in LOG_TARGETS {
        match format!("{target}={level}").parse::<Directive>() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("ignoring log level {level:?}: {e}"),
        }
    }
    filter
}

/// Log to stderr so events never interleave with the transcript on stdout.
/// The returned handle swaps the level once the config is known.
fn init_logging(level: &str) -> LogHandle {
    let (filter, handle) = reload::Layer::new(log_filter(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

fn load_config(args: &cli::Args) -> palaver_common::Result<PalaverConfig> {
    if let Some(ref path) = args.config {
        tracing::info!("using config override: {}", path.display());
    }
    let config = palaver_config::load_config(args.config.as_deref(), args.api_url.as_deref())?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    let log = init_logging(args.log_level.as_deref().unwrap_or(STARTUP_LOG_LEVEL));

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("palaver: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.log_level.is_none() {
        let level = config.logging.level.as_directive();
        if let Err(e) = log.reload(log_filter(level)) {
            tracing::warn!("could not apply log level {level}: {e}");
        }
    }

    if args.print_config {
        println!("{}", palaver_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    tracing::info!("Palaver v{} starting...", env!("CARGO_PKG_VERSION"));

    let backend = match HttpBackend::new(&config.backend.base_url) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(base_url = backend.base_url(), "using chat backend");

    let mut chat = ChatController::new(backend);

    if config.backend.probe_on_startup {
        match chat.probe_backend().await {
            Ok(()) => tracing::info!("backend reachable"),
            Err(e) => tracing::warn!("backend probe failed: {e}"),
        }
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    if let Err(e) = repl::run(&mut chat, &config.chat, stdin, &mut stdout).await {
        tracing::error!("chat loop error: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
