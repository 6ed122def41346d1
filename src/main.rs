use clap::Parser;
use cozycode::core::config::{self, LOG_LEVEL_ENV};
use cozycode::logging;
use cozycode::tui;
use log::{error, info};

#[derive(Parser)]
#[command(name = "cozycode", version, about = "Terminal menu for coding agents")]
struct Args {}

fn main() {
    Args::parse();

    // The log level comes from config, so config is read first and its
    // outcome is reported once the logger is installed
    let loaded = config::load_config();
    let env_level = std::env::var(LOG_LEVEL_ENV).ok();
    let default_config = config::GlowConfig::default();
    let file_config = loaded.as_ref().map_or(&default_config, |l| &l.config);
    let (resolved, rejected) = config::resolve(file_config, env_level.as_deref());

    let mut log_guard = logging::setup_log(resolved.log_level);
    info!("CozyCode starting up");
    config::report(&loaded, &rejected);

    match tui::run(&resolved) {
        Ok(exit) => {
            info!("Menu finished: {:?}", exit);
            let _ = log_guard.close();
        }
        Err(e) => {
            error!("{}", e);
            let _ = log_guard.close();
            eprintln!("cozycode: {e}");
            std::process::exit(-1);
        }
    }
}
