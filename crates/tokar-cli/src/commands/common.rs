//! Shared plumbing for command handlers.

use tokar_lib::Error;

/// Render `error` against its pattern on stderr and exit nonzero.
pub fn fail(error: &Error, pattern: &str, color: bool) -> ! {
    eprintln!(
        "{}",
        error.printer().source(pattern).colored(color).render()
    );
    std::process::exit(1);
}
