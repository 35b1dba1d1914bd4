use std::io::Write;

use log::LevelFilter;

/// Initializes the global logger with `level`, writing to stderr. Repeated calls are ignored,
/// so tests and binaries may call this freely.
pub fn build_logger_for_level(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:>5} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .parse_default_env()
        .try_init();
}

/// Raises `default` by one level per `verbosity` (e.g. number of `-v` flags)
pub fn level_for_verbosity(default: LevelFilter, verbosity: usize) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];

    let base = LEVELS.iter().position(|&l| l == default).unwrap_or(2);
    LEVELS[(base + verbosity).min(LEVELS.len() - 1)]
}

pub fn build_logger_for_verbosity(default: LevelFilter, verbosity: usize) {
    build_logger_for_level(level_for_verbosity(default, verbosity));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(LevelFilter::Warn, 10), LevelFilter::Trace);
        assert_eq!(level_for_verbosity(LevelFilter::Off, 1), LevelFilter::Error);
    }

    #[test]
    fn repeated_initialization() {
        build_logger_for_level(LevelFilter::Trace);
        build_logger_for_verbosity(LevelFilter::Warn, 1);
        ::log::info!("logger still usable");
    }
}
