use log::LevelFilter;

/// Sets up the global logger. Logs go to stderr so stdout only carries results.
/// `RUST_LOG` takes precedence over `debug_enabled` when set.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A logger may already be installed (tests)
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {:?} level", level);
    }
}
