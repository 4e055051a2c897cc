//! User interface module - terminal output for the `relver` binary.

pub mod formatter;

pub use formatter::{
    display_error, display_scan_warning, display_status, display_success, display_versions,
    format_versions,
};
