//! Output formatting utilities

use crate::application::RetagReport;
use crate::domain::RetagDirective;

/// Audit line printed before each directive is acted on
pub fn format_directive(directive: &RetagDirective) -> String {
    format!(
        "RETAG_SNAPSHOT_NAME={} COMPONENT_NAME={} RETAG_REPO={} RETAG_QUAY_COMPONENT_TAG={} RETAG_GITHUB_SHA={} RETAG_DRY_RUN={} repo-type={}",
        directive.snapshot_name,
        directive.component_name,
        directive.repository,
        directive.quay_component_tag,
        directive.github_sha,
        directive.dry_run,
        directive.target_system
    )
}

/// Format the end-of-run summary
pub fn format_report(report: &RetagReport) -> String {
    if report.planned == 0 {
        return "No eligible manifest entries".to_string();
    }

    if report.plan_only {
        return format!("Plan: {} image(s) would be retagged.", report.planned);
    }

    format!(
        "Retagged {} image(s), skipped {}.",
        report.invoked, report.skipped
    )
}
