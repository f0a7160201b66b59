//! JSON renderer: a single document with per-location outcomes and the
//! verification block, for scripting around the tool.

use serde_json::json;

use crate::provision::{LocationReport, Summary};
use crate::verify::VerificationReport;

use super::OutputRenderer;

/// Machine-readable JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, reports: &[LocationReport], verification: &VerificationReport) -> String {
        let document = json!({
            "locations": reports,
            "summary": Summary::from_reports(reports),
            "verification": {
                "complete": verification.is_complete(),
                "missing": verification.missing,
            },
        });
        // Pretty-printing a Value of our own types cannot fail.
        let mut rendered =
            serde_json::to_string_pretty(&document).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}
