pub mod create;
pub mod delete;
pub mod redeploy;
pub mod status;

use colored::Colorize;
use formflow_cloud::{LifecycleError, StackLifecycle};
use formflow_cloud_aws::CloudFormation;
use formflow_config::ResourceDir;
use std::path::Path;
use std::sync::Arc;

/// Build an orchestrator from a resource directory. The template is
/// only read for operations that can issue a create request.
pub(crate) async fn build_lifecycle(
    stack_name: &str,
    resource_dir: &Path,
    with_template: bool,
) -> anyhow::Result<StackLifecycle> {
    let dir = ResourceDir::new(resource_dir);
    let settings = dir.settings()?;
    let client = CloudFormation::from_settings(
        settings.region,
        settings.access_key_id,
        settings.secret_access_key,
    )
    .await;

    let mut stack = StackLifecycle::new(stack_name, Arc::new(client));
    if with_template {
        stack = stack.with_template(dir.template_body()?);
    }
    Ok(stack)
}

/// Print the failure history, then hand the final error to `main` as
/// the process exit error.
pub(crate) fn fail(stack: &StackLifecycle, err: LifecycleError) -> anyhow::Error {
    for recorded in stack.errors() {
        eprintln!("{}", recorded.to_string().red());
    }
    anyhow::Error::new(err)
}
