//! Retag release use case

use crate::domain::{RetagDirective, TargetSystem};
use crate::error::Result;
use crate::infrastructure::{BuildInvocation, TaskRunner};

/// Components that are never retagged on the source-control host
pub const GIT_DENYLIST: [&str; 2] = ["origin-oauth-proxy", "grafana"];

#[derive(Debug, Clone, Default)]
pub struct RetagOptions {
    /// Report directives without running the build tool
    pub plan_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetagReport {
    pub planned: usize,
    pub invoked: usize,
    pub skipped: usize,
    pub plan_only: bool,
    /// Components the build tool ran for, in order
    pub invoked_components: Vec<String>,
}

/// Build the invocation for a directive, or None when the directive is
/// denylisted for its target.
pub fn invocation_for(directive: &RetagDirective) -> Option<BuildInvocation> {
    let target = directive.target_system.build_target();
    match directive.target_system {
        TargetSystem::Git => {
            if GIT_DENYLIST.contains(&directive.component_name.as_str()) {
                return None;
            }
            Some(
                BuildInvocation::new(target)
                    .var("RETAG_SNAPSHOT_NAME", directive.snapshot_name.as_str())
                    .var("RETAG_REPO", directive.repository.as_str())
                    .var(
                        "RETAG_QUAY_COMPONENT_TAG",
                        directive.quay_component_tag.as_str(),
                    )
                    .var("RETAG_GITHUB_SHA", directive.github_sha.as_str())
                    .var("RETAG_DRY_RUN", directive.dry_run.as_str()),
            )
        }
        TargetSystem::Quay => Some(
            BuildInvocation::new(target)
                .var("RETAG_SNAPSHOT_NAME", directive.snapshot_name.as_str())
                .var("COMPONENT_NAME", directive.component_name.as_str())
                .var(
                    "RETAG_QUAY_COMPONENT_TAG",
                    directive.quay_component_tag.as_str(),
                )
                .var("RETAG_GITHUB_SHA", directive.github_sha.as_str())
                .var("RETAG_DRY_RUN", directive.dry_run.as_str()),
        ),
    }
}

/// Service that turns retag directives into build tool runs
pub struct RetagReleaseService<R: TaskRunner> {
    runner: R,
}

impl<R: TaskRunner> RetagReleaseService<R> {
    /// Create a new retag service
    pub fn new(runner: R) -> Self {
        RetagReleaseService { runner }
    }

    /// Run every directive in order, stopping at the first failure.
    ///
    /// `on_directive` sees each directive before anything runs for it.
    pub fn execute<I, F>(
        &self,
        directives: I,
        options: &RetagOptions,
        mut on_directive: F,
    ) -> Result<RetagReport>
    where
        I: IntoIterator<Item = RetagDirective>,
        F: FnMut(&RetagDirective),
    {
        let mut report = RetagReport {
            plan_only: options.plan_only,
            ..RetagReport::default()
        };

        for directive in directives {
            on_directive(&directive);
            report.planned += 1;

            if options.plan_only {
                continue;
            }

            match invocation_for(&directive) {
                Some(invocation) => {
                    self.runner.run(&invocation)?;
                    report.invoked += 1;
                    report
                        .invoked_components
                        .push(directive.component_name.clone());
                }
                None => {
                    tracing::debug!(
                        component = %directive.component_name,
                        "skipping denylisted component on git"
                    );
                    report.skipped += 1;
                }
            }
        }

        Ok(report)
    }
}
