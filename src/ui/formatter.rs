//! Pure formatting functions for UI output.
//!
//! Status lines go to stderr so stdout carries only the version list and
//! stays usable from scripts.

use console::style;

use crate::boundary::ScanWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a scan warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
///
/// # Arguments
/// * `warning` - The scan warning to display
pub fn display_scan_warning(warning: &ScanWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render versions newest first, one per line.
pub fn format_versions(versions: &[String]) -> String {
    versions
        .iter()
        .map(|v| format!("{}\n", v))
        .collect::<String>()
}

/// Print versions newest first, one per line, to stdout.
///
/// # Arguments
/// * `versions` - Sorted versions to print
pub fn display_versions(versions: &[String]) {
    print!("{}", format_versions(versions));
}
