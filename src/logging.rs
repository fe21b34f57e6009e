// src/logging.rs

use crate::config::Config;
use crate::errors::{RaseedError, RaseedResult};
use crate::models::ApiCallLog;
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts the file logger. The terminal belongs to the UI, so nothing goes
/// to stdout or stderr. Keep the returned handle alive for the whole run.
pub fn init_logging(config: &Config) -> RaseedResult<LoggerHandle> {
    let handle = Logger::try_with_str(&config.log_level)
        .map_err(|e| RaseedError::logging_error(format!("Invalid log level: {}", e)))?
        .log_to_file(
            FileSpec::default()
                .directory(&config.log_dir)
                .basename("raseed_chat"),
        )
        .format(flexi_logger::detailed_format)
        .start()
        .map_err(|e| RaseedError::logging_error(format!("Failed to start logger: {}", e)))?;

    log::info!(
        "Logging started at level '{}' in '{}'",
        config.log_level,
        config.log_dir
    );
    Ok(handle)
}

/// Records a call to the coaching API.
pub fn log_api_call(log: &ApiCallLog) {
    log::info!(
        target: "raseed_chat::api",
        "[{}] {} - {} - Status: {} - Time: {}ms",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        log.response_status,
        log.response_time_ms
    );
}
