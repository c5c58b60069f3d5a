use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber.
///
/// `PROVCHECK_LOG` takes precedence; otherwise `-v` selects debug output.
pub fn init(verbose: bool) {
    let default = if verbose { "provcheck=debug" } else { "provcheck=warn" };
    let filter = EnvFilter::try_from_env("PROVCHECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
