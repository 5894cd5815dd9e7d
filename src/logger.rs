use std::sync::OnceLock;

use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;

/// Owns the progress area log lines are printed above, so a ticking
/// spinner never garbles log output.
pub struct Logger {
    multi_progress: MultiProgress,
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

impl Logger {
    /// Set up the global logger once. Only warnings and errors are shown
    /// by default; enable more with e.g. `RUST_LOG=debug`.
    pub fn init() -> &'static Self {
        LOGGER.get_or_init(|| {
            let logger = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or("warn"),
            )
            .format_timestamp(None)
            .build();

            let level = logger.filter();
            let multi_progress = MultiProgress::new();

            // Fails only when another logger is already installed
            if LogWrapper::new(multi_progress.clone(), logger)
                .try_init()
                .is_ok()
            {
                log::set_max_level(level);
            }

            Self { multi_progress }
        })
    }

    pub fn multi_progress() -> &'static MultiProgress {
        &Self::init().multi_progress
    }
}
