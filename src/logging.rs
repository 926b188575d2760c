use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `debug` with
/// `--verbose` and only warnings without it.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "extractnum=debug" } else { "extractnum=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).without_time().init();
}
