//! Logger setup for the `pagesim` binary and tests.
//!
//! The library only emits through the `log` facade: `debug!` once per run
//! and `trace!` for every eviction. Nothing is printed unless a logger is
//! installed.

use std::io::Write;

use log::LevelFilter;

/// Install the `env_logger` backend.
///
/// `RUST_LOG` overrides `level` when set. Calling this twice is harmless.
pub fn init_logger(level: LevelFilter) {
    let _ = env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}:{} - {}",
                record.level(),
                record.target(),
                record.file().unwrap_or("<unknown>"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();
}

/// Logger for tests: captured by the test harness, evictions traced.
///
/// Usable from unit tests and from integration tests under `tests/`.
pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(LevelFilter::Info)
        .filter_module("pagesim::sim", LevelFilter::Trace)
        .try_init();
}
