use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

const DEFAULT_DIRECTIVES: &str = "info";

/// Installs the global fmt subscriber once. `RUST_LOG` wins over `default_directives`.
pub fn init_logging_with(default_directives: &str) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_directives))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}

pub fn init_logging() {
    init_logging_with(DEFAULT_DIRECTIVES);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging_with("debug");
        init_logging();
        tracing::info!("logging initialised twice without panicking");
    }
}
