use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

/// Installs the global subscriber. `RUST_LOG` wins over `--log-filter`.
pub fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if args.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
