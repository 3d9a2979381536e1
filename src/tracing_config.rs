use std::path::{Path, PathBuf};

use tracing::{debug, error, subscriber::DefaultGuard};
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{Builder, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::LogLevel;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Environment variable that replaces the `-v` derived filter when set.
pub const FILTER_ENV: &str = "SPOTCTL_LOG";

/// Where log records go and how verbose they are.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Most verbose level emitted by this crate.
    pub level: LogLevel,

    /// Disable the console sink.
    pub quiet: bool,

    /// Append log records to this file as well.
    pub file: Option<PathBuf>,
}

/// Live logging setup for the current thread.
///
/// Holds the subscriber guard and the file writer's flush guard. Records are
/// only delivered while this value is alive; dropping it flushes the file sink.
pub struct LogContext {
    level: LogLevel,
    console: bool,
    file: Option<PathBuf>,
    _file_guard: Option<WorkerGuard>,
    _dispatch: DefaultGuard,
}

impl LogContext {
    /// Effective level for this crate's records.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether records are written to stdout.
    pub fn console_enabled(&self) -> bool {
        self.console
    }

    /// The log file in use, if one could be opened.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

/// Initialize tracing for the current thread
///
/// Builds a registry with an `EnvFilter` (from `SPOTCTL_LOG` or the requested
/// level), an optional stdout layer and an optional append-only file layer.
/// The subscriber is installed as the thread's scoped default rather than the
/// global one, so it lives exactly as long as the returned `LogContext`.
///
/// A log file that cannot be opened is reported through the remaining sinks
/// and otherwise ignored.
pub fn init(options: &LogOptions) -> LogContext {
    let crate_level = LevelFilter::from(options.level);
    let env_filter = EnvFilter::try_from_env(FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("error,spotctl={crate_level}")));

    let console_layer = (!options.quiet).then(|| {
        fmt::layer()
            .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stdout)
    });

    let mut file_error = None;
    let mut file_guard = None;
    let mut file_in_use = None;
    let file_layer = match options.file.as_deref().map(open_file_writer) {
        Some(Ok((writer, guard))) => {
            file_guard = Some(guard);
            file_in_use = options.file.clone();
            Some(
                fmt::layer()
                    .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
                    .with_target(false)
                    .with_level(true)
                    .with_ansi(false)
                    .with_writer(writer),
            )
        }
        Some(Err(e)) => {
            file_error = Some(e);
            None
        }
        None => None,
    };

    let dispatch = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .set_default();

    if !options.quiet {
        debug!("Added logging console handler.");
    }
    match (&file_in_use, file_error) {
        (Some(path), _) => debug!("Added logging file handler: {}.", path.display()),
        (None, Some(e)) => error!("Could not attach file handler: {e}"),
        (None, None) => {}
    }
    debug!("Loglevel is {}.", options.level);

    LogContext {
        level: options.level,
        console: !options.quiet,
        file: file_in_use,
        _file_guard: file_guard,
        _dispatch: dispatch,
    }
}

fn open_file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard), String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| format!("'{}' does not name a file", path.display()))?
        .to_string_lossy()
        .to_string();
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let appender = Builder::new()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|e| format!("'{}': {e}", path.display()))?;

    Ok(tracing_appender::non_blocking(appender))
}
