//! Diagnostic logging on stderr
//!
//! Report lines go to stdout through the renderer; everything else goes
//! through `tracing` so it can be filtered with `-v`, `-q` or `RUST_LOG`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the default filter directive for the given verbosity flags
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "restyle=debug,warn"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the flags.
pub fn init_cli_logger(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    // A second init (e.g. from tests) is not an error worth surfacing
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_wins_over_quiet() {
        assert_eq!(default_directive(true, true), "restyle=debug,warn");
    }

    #[test]
    fn test_quiet_and_default_directives() {
        assert_eq!(default_directive(false, true), "error");
        assert_eq!(default_directive(false, false), "warn");
    }
}
