use studenthub_core::trace::TRACE_TARGET;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set. Otherwise warnings only, or everything at debug
/// with `--verbose`. Trace-hook records are always let through; they are
/// only produced when tracing is switched on for a view.
pub fn init(verbose: bool) {
    let default = if verbose {
        "debug".to_string()
    } else {
        format!("warn,{TRACE_TARGET}=debug")
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
