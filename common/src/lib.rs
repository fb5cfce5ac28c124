//! Diagnostics shared by all crates of the workspace

/// Writes a diagnostic line to stderr, but only in debug builds
///
/// In release builds the arguments are still borrowed (and never formatted), so values that exist
/// only to be traced do not turn into unused variables.
#[macro_export]
macro_rules! debug {
    ($str: expr) => {
        #[cfg(debug_assertions)]
        {
            eprintln!($str)
        }
    };
    ($str: expr, $($rest: expr),+) => {
        #[cfg(debug_assertions)]
        {
            eprintln!($str, $($rest),+)
        }
        #[cfg(not(debug_assertions))]
        {
            $(let _ = &$rest;)+
        }
    };
}
