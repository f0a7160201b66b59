//! Report rendering.
//!
//! Renderers turn the provisioning reports plus the verification result
//! into a printable string. The terminal renderer is for humans; the JSON
//! renderer produces a stable document for scripting around the tool.

pub mod json;
pub mod terminal;

use crate::provision::LocationReport;
use crate::verify::VerificationReport;

/// Renders a provisioning run's results to a string.
pub trait OutputRenderer {
    fn render(&self, reports: &[LocationReport], verification: &VerificationReport) -> String;
}
