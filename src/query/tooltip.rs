//! Tooltip rendering sink.

use super::MissingRequirement;

/// Renders unmet requirements for display.
pub trait TooltipFormatter {
    /// Format `missing`, which is grouped by action in evaluation order.
    fn format(&self, missing: &[MissingRequirement]) -> String;
}

/// Plain-text formatter: one header per action, one line per requirement.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTooltip;

impl TooltipFormatter for PlainTooltip {
    fn format(&self, missing: &[MissingRequirement]) -> String {
        let mut lines = Vec::new();
        let mut current = None;

        for requirement in missing {
            if current != Some(requirement.kind) {
                lines.push(format!("{} requirements:", requirement.kind));
                current = Some(requirement.kind);
            }
            lines.push(format!("  {}: {}", requirement.label, requirement.required));
        }

        lines.join("\n")
    }
}
