//! Terminal renderer: one styled line per location plus a summary and
//! the verification verdict.

use colored::Colorize;

use crate::provision::{LocationReport, Outcome, Summary};
use crate::verify::VerificationReport;

use super::OutputRenderer;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, reports: &[LocationReport], verification: &VerificationReport) -> String {
        let mut output = String::new();

        for report in reports {
            let (icon, status) = match &report.outcome {
                Outcome::Generated => (
                    "✔".green().bold().to_string(),
                    "generated".green().to_string(),
                ),
                Outcome::Skipped => (
                    "↷".cyan().bold().to_string(),
                    "skipped (already present)".cyan().to_string(),
                ),
                Outcome::Failed { reason, .. } => (
                    "✖".red().bold().to_string(),
                    format!("{} {}", "failed:".red().bold(), reason.red()),
                ),
            };
            output.push_str(&format!(
                " {} {} {}\n   {}\n",
                icon,
                report.location.service.bold(),
                status,
                report.location.path.dimmed(),
            ));
        }

        let summary = Summary::from_reports(reports);
        output.push_str(&format!(
            "{}\n",
            "───────────────────────────────────".dimmed()
        ));
        output.push_str(&format!(
            " {} location(s): {} generated, {} skipped, {} failed\n",
            reports.len().to_string().bold(),
            summary.generated.to_string().green().bold(),
            summary.skipped.to_string().cyan().bold(),
            summary.failed.to_string().red().bold(),
        ));

        if verification.is_complete() {
            output.push_str(&format!(
                " {} {}\n",
                "✔".green().bold(),
                "All locations hold a complete key pair.".green(),
            ));
        } else {
            output.push_str(&format!(
                " {} {}\n",
                "✖".red().bold(),
                "Key material is incomplete:".red().bold(),
            ));
            for missing in &verification.missing {
                let mut files = Vec::new();
                if missing.private_missing {
                    files.push(crate::constants::PRIVATE_KEY_FILENAME);
                }
                if missing.public_missing {
                    files.push(crate::constants::PUBLIC_KEY_FILENAME);
                }
                output.push_str(&format!(
                    "   {} missing {}\n",
                    missing.location.path.bold(),
                    files.join(", ").red(),
                ));
            }
        }

        output
    }
}
