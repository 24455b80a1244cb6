//! User interface module - progress and result reporting.
//!
//! Runs are non-interactive (CI), so there are no prompts; this module only
//! turns workflow values and errors into terminal output.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_status, display_success, display_summary, display_warning,
    format_summary,
};

/// Print an error together with its chain of causes.
pub fn display_error_chain(err: &anyhow::Error) {
    display_error(&err.to_string());
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
}
