//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text; `display_*` functions print it.

use console::style;

use crate::cli::WorkflowResult;
use crate::warning::GateWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning.
pub fn display_warning(warning: &GateWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Lines describing a finished run.
///
/// # Arguments
/// * `result` - Outcome of the release workflow
pub fn format_summary(result: &WorkflowResult) -> Vec<String> {
    let mut lines = vec![format!(
        "Version {} accepted ({})",
        result.version, result.comparison
    )];

    if result.merged {
        lines.push("Pull request merged".to_string());
    }

    if result.released {
        match &result.release_url {
            Some(url) => lines.push(format!("Release {} created: {}", result.tag, url)),
            None => lines.push(format!("Release {} created", result.tag)),
        }
    } else {
        lines.push(format!("Release {} not created", result.tag));
    }

    lines
}

/// Display the outcome of a finished run.
pub fn display_summary(result: &WorkflowResult) {
    println!("\n{}", style("Release summary:").bold());
    for line in format_summary(result) {
        println!("  {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SemanticVersion, VersionComparison};

    fn result(merged: bool, released: bool) -> WorkflowResult {
        WorkflowResult {
            version: SemanticVersion::new(1, 6, 0),
            comparison: VersionComparison::MinorBump,
            tag: "v1.6.0".to_string(),
            merged,
            released,
            release_url: released
                .then(|| "https://github.com/acme/widget/releases/tag/v1.6.0".to_string()),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_format_summary_full_run() {
        let lines = format_summary(&result(true, true));
        assert_eq!(lines[0], "Version 1.6.0 accepted (minor bump)");
        assert_eq!(lines[1], "Pull request merged");
        assert!(lines[2].starts_with("Release v1.6.0 created: https://"));
    }

    #[test]
    fn test_format_summary_dry_run() {
        let lines = format_summary(&result(false, false));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Release v1.6.0 not created");
    }

    #[test]
    fn test_display_functions_do_not_panic() {
        display_error("test error");
        display_success("test success");
        display_status("test status");
        display_warning(&GateWarning::DryRun {
            version: "1.0.0".to_string(),
        });
    }
}
