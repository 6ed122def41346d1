//! Config is read before the logger is installed; its outcome must still
//! reach the log file. The logger is process-global, so this binary holds a
//! single test.

use cozycode::core::config::{self, ConfigError, LOG_LEVEL_ENV};
use cozycode::logging;
use cozycode::tui::theme::Theme;
use log::LevelFilter;
use std::fs;

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_config_outcome_is_written_to_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[theme]\nheader_color = \"mauve-ish\"\n\n[log]\nlevel = \"chatty\"\n").unwrap();

    // Same order as startup: load and resolve, then install the logger
    let loaded = config::load_config_from(&config_path);
    let file_config = &loaded.as_ref().unwrap().config;
    let (resolved, rejected) = config::resolve(file_config, Some("loud"));
    assert_eq!(resolved.log_level, config::DEFAULT_LOG_LEVEL);
    assert!(matches!(rejected[0], ConfigError::InvalidLevel { origin, .. } if origin == LOG_LEVEL_ENV));

    let log_path = logging::log_file_path_in(&dir.path().join("cache"));
    let mut guard = logging::setup_log_at(&log_path, LevelFilter::Debug);
    assert!(guard.is_active());

    config::report(&loaded, &rejected);
    Theme::from_config(&resolved);
    guard.close().unwrap();

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains(&format!("Loaded config from {}", config_path.display())));
    let env_line = log
        .lines()
        .find(|line| line.contains("Ignoring invalid log level \"loud\" from GLOW_LOG"))
        .unwrap();
    assert!(env_line.contains("WARN"));
    assert!(log.contains("Ignoring invalid log level \"chatty\" from [log] level"));
    assert!(log.contains("Ignoring invalid header color \"mauve-ish\""));
}
