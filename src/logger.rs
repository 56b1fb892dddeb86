use std::{io, path::Path};

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

pub const LOG_ENV: &str = "SECRET_MESSAGE_LOG";

fn level_from_markers(dir: &Path) -> Option<LevelFilter> {
    if dir.join("trace").exists() {
        return Some(LevelFilter::Trace);
    }
    if dir.join("debug").exists() {
        return Some(LevelFilter::Debug);
    }
    None
}

fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

fn logging_level() -> LevelFilter {
    // Marker files next to the executable win over the environment.
    if let Some(level) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(level_from_markers))
    {
        return level;
    }
    level_from_env(std::env::var(LOG_ENV).ok().as_deref())
}

/// Routes `log` records to stdout. Stderr is left to the check diagnostics.
pub fn setup_logger() {
    let level_filter = logging_level();

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            let file = record.file().unwrap_or("unknown_file");
            let line = record.line().unwrap_or(0);

            if level_filter == LevelFilter::Info {
                out.finish(format_args!(
                    "[{}]: {} <{}:{}>",
                    record.level(),
                    message,
                    file,
                    line,
                ));
            } else {
                out.finish(format_args!(
                    "[{}][{}]: {} <{}:{}>",
                    Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                    record.level(),
                    message,
                    file,
                    line,
                ));
            }
        })
        .level(level_filter)
        .chain(io::stdout())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
