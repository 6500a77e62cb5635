use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

use promptdoc_core::config::DEFAULT_LOG_LEVEL;

/// Environment variable checked before `RUST_LOG`.
const LOG_ENV: &str = "PROMPTDOC_LOG";

/// Lets the config's `log_level` replace the startup filter once it is loaded.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    /// `PROMPTDOC_LOG` or `RUST_LOG` was set; config never overrides it.
    from_env: bool,
    interactive: bool,
}

impl LogHandle {
    /// Switches to the configured level unless the environment or the TUI decided.
    pub fn apply_config_level(&self, level: &str) {
        if self.from_env || self.interactive {
            return;
        }
        if let Err(e) = self.filter.reload(EnvFilter::new(level)) {
            tracing::warn!(error = %e, "failed to apply configured log level");
        }
    }
}

/// Initializes stderr logging so stdout only ever carries the prompt.
///
/// Runs before the config is loaded so config resolution is traced too.
/// `interactive` silences logging unless a filter is set in the environment,
/// since stderr output would tear the alternate screen.
pub fn init_logging(interactive: bool) -> LogHandle {
    let (filter_layer, handle) = filter_layer(interactive);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    tracing::debug!("logging initialized");
    handle
}

fn filter_layer(interactive: bool) -> (reload::Layer<EnvFilter, Registry>, LogHandle) {
    let from_env = EnvFilter::try_from_env(LOG_ENV).or_else(|_| EnvFilter::try_from_default_env());

    let (env_filter, from_env) = match from_env {
        Ok(filter) => (filter, true),
        Err(_) => {
            let fallback = if interactive { "off" } else { DEFAULT_LOG_LEVEL };
            (EnvFilter::new(fallback), false)
        }
    };

    let (layer, filter) = reload::Layer::new(env_filter);
    let handle = LogHandle {
        filter,
        from_env,
        interactive,
    };
    (layer, handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(handle: &LogHandle) -> String {
        handle.filter.with_current(|f| f.to_string()).unwrap()
    }

    #[test]
    fn test_config_level_replaces_startup_filter() {
        let (layer, mut handle) = filter_layer(false);
        let _subscriber = tracing_subscriber::registry().with(layer);
        handle.from_env = false;

        handle.apply_config_level("debug");
        assert_eq!(current(&handle), "debug");
    }

    #[test]
    fn test_environment_filter_wins() {
        let (layer, mut handle) = filter_layer(false);
        let _subscriber = tracing_subscriber::registry().with(layer);
        handle.from_env = true;
        let before = current(&handle);

        handle.apply_config_level("trace");
        assert_eq!(current(&handle), before);
    }

    #[test]
    fn test_interactive_stays_quiet() {
        let (layer, mut handle) = filter_layer(true);
        let _subscriber = tracing_subscriber::registry().with(layer);
        handle.from_env = false;
        handle.filter.reload(EnvFilter::new("off")).unwrap();

        handle.apply_config_level("debug");
        assert_eq!(current(&handle), "off");
    }
}
