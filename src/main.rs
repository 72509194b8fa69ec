use anyhow::Context;
use clap::Parser;

use linkshort::config::{Args, StaticConfig, get_config, init_config_from};
use linkshort::runtime::modes::run_server;
use linkshort::system::logging::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Some(path) = args.generate_config {
        let sample =
            StaticConfig::generate_sample_config().context("Failed to render sample config")?;
        std::fs::write(&path, sample)
            .with_context(|| format!("Failed to write sample config to {}", path))?;
        println!("Sample configuration written to {}", path);
        return Ok(());
    }

    init_config_from(&args.config);
    let config = get_config();

    // guard 需要存活到进程结束，保证日志落盘
    let _log_guard = init_logging(&config.logging)?;

    run_server().await
}
