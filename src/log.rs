use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;
use std::time::Instant;

/// Initializes the process-wide logger. Records carry the time elapsed
/// since logger construction and are written to stdout, keeping stderr
/// free for error reporting.
pub fn build_logger_for_level(level: LevelFilter) {
    let start_time = Instant::now();

    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stdout)
        .format(move |buf, record| {
            let elapsed = start_time.elapsed().as_millis();
            writeln!(
                buf,
                "{:>6}.{:<03} [{}] {}",
                elapsed / 1000,
                elapsed % 1000,
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .init();
}

pub fn build_logger_for_verbosity(default_level: LevelFilter, verbosity: usize) {
    build_logger_for_level(level_from_verbosity(default_level, verbosity));
}

fn level_from_verbosity(default_level: LevelFilter, verbosity: usize) -> LevelFilter {
    let default_level = usize_from_level(default_level);
    try_level_from_usize(default_level + verbosity).unwrap_or(LevelFilter::Trace)
}

fn usize_from_level(value: LevelFilter) -> usize {
    match value {
        LevelFilter::Off => 0,
        LevelFilter::Error => 1,
        LevelFilter::Warn => 2,
        LevelFilter::Info => 3,
        LevelFilter::Debug => 4,
        LevelFilter::Trace => 5,
    }
}

fn try_level_from_usize(value: usize) -> Option<LevelFilter> {
    match value {
        0 => Some(LevelFilter::Off),
        1 => Some(LevelFilter::Error),
        2 => Some(LevelFilter::Warn),
        3 => Some(LevelFilter::Info),
        4 => Some(LevelFilter::Debug),
        5 => Some(LevelFilter::Trace),
        _ => None,
    }
}
