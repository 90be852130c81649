use {
    anyhow::Result,
    attribution_loss::{Cli, app},
    clap::Parser,
    std::panic,
};

#[tokio::main]
async fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("attribution_loss"), my_code_level)
        .parse_default_env() // RUST_LOG still wins when set
        .init();

    // Integration secrets may live in a local .env file
    if let Err(e) = dotenv::dotenv() {
        log::debug!("No .env loaded: {}", e);
    }

    let args = Cli::parse();
    app::run(args).await
}
