//! Initialization that needs to be done on startup

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

static DECODING_HOOKS: Once = Once::new();

/// Performs any global state initialization that needs to be done before decoding images.
/// Safe to call more than once.
pub fn init() {
    DECODING_HOOKS.call_once(|| {
        #[cfg(feature = "jxl")]
        jxl_oxide::integration::register_image_decoding_hook();
    });
}

/// Maps the number of `-v` flags to a log level. Warnings and errors are always shown.
pub fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber writing to stderr, so that stdout stays clean.
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity_level(verbose).into())
        .from_env_lossy();
    // a subscriber may already be installed when running inside tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
