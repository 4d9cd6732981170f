use env_logger::{Builder, Env};
use log::LevelFilter;

/// Route `LogObserver` output to stderr.
///
/// `-v` turns on the per-visit trace (one debug line per doctor per tick,
/// plus forwarding and slot erasure).  Without it only the roster summary
/// and the end time are logged.  `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // A second init keeps the first logger.
    let _ = builder.try_init();
}
