use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "tally=info";

/// Installs the global fmt subscriber, honouring `RUST_LOG` on top of `tally=info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let directive: Directive = DEFAULT_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::from_default_env().add_directive(directive);

        // A subscriber installed by the host application wins.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}
