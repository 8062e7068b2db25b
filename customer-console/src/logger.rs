//! 文件日志
//!
//! 终端由 TUI 独占，日志只写入文件。

use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};
use fern::Dispatch;
use log::LevelFilter;

/// 初始化 fern 日志，追加写入 `log_file`
pub fn initialize(level: LevelFilter, log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = fern::log_file(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    Dispatch::new()
        .level(level)
        // reqwest/hyper 的连接细节过于冗长
        .level_for("hyper_util", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Info)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ));
        })
        .chain(file)
        .apply()
        .context("Failed to initialize logger")?;

    log::info!(
        "Logger initialized: level={level}, file={}",
        log_file.display()
    );
    Ok(())
}
