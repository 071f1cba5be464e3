//! CloudFormation-backed ProvisioningClient

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_cloudformation::config::{Credentials, Region};
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use formflow_cloud::{ClientError, ClientResult, ProvisioningClient, StackStatus, StackSummary};

/// CloudFormation client wrapper.
pub struct CloudFormation {
    client: aws_sdk_cloudformation::Client,
}

impl CloudFormation {
    pub fn new(client: aws_sdk_cloudformation::Client) -> Self {
        Self { client }
    }

    /// Build a client from explicit credentials, as read from a
    /// resource directory's `config.json`.
    pub async fn from_settings(
        region: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        let credentials = Credentials::new(
            access_key_id.into(),
            secret_access_key.into(),
            None,
            None,
            "formflow-resource-dir",
        );
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.into()))
            .credentials_provider(credentials)
            .load()
            .await;

        Self::new(aws_sdk_cloudformation::Client::new(&config))
    }

    /// Build a client from the ambient AWS environment (env vars,
    /// shared profile, instance metadata).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(aws_sdk_cloudformation::Client::new(&config))
    }
}

/// Map an SDK error onto the provisioning error taxonomy. The
/// `ValidationError` code is what CloudFormation uses for "no stack by
/// this name" on describe calls.
fn classify<E, R>(err: SdkError<E, R>) -> ClientError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let code = err.code().map(str::to_owned);
    let message = err.message().map(str::to_owned);
    let is_transport = matches!(
        err,
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)
    );
    let rendered = DisplayErrorContext(err).to_string();

    match code.as_deref() {
        Some("ValidationError") => ClientError::Validation(message.unwrap_or(rendered)),
        Some(
            "AccessDenied" | "InvalidClientTokenId" | "SignatureDoesNotMatch" | "ExpiredToken",
        ) => ClientError::AuthenticationFailed(message.unwrap_or(rendered)),
        _ if is_transport => ClientError::Transport(rendered),
        _ => ClientError::Api(rendered),
    }
}

#[async_trait]
impl ProvisioningClient for CloudFormation {
    async fn describe_stack(&self, name: &str) -> ClientResult<Vec<StackSummary>> {
        tracing::debug!(stack = name, "DescribeStacks");
        let output = self
            .client
            .describe_stacks()
            .stack_name(name)
            .send()
            .await
            .map_err(classify)?;

        let summaries = output
            .stacks
            .unwrap_or_default()
            .into_iter()
            .map(|stack| StackSummary {
                name: stack
                    .stack_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| name.to_string()),
                status: stack
                    .stack_status()
                    .map(|status| StackStatus::from(status.as_str()))
                    .unwrap_or_else(|| StackStatus::Other("UNKNOWN".to_string())),
            })
            .collect();

        Ok(summaries)
    }

    async fn create_stack(&self, name: &str, template_body: &str) -> ClientResult<()> {
        tracing::debug!(stack = name, "CreateStack");
        self.client
            .create_stack()
            .stack_name(name)
            .template_body(template_body)
            .send()
            .await
            .map_err(classify)?;

        Ok(())
    }

    async fn delete_stack(&self, name: &str) -> ClientResult<()> {
        tracing::debug!(stack = name, "DeleteStack");
        self.client
            .delete_stack()
            .stack_name(name)
            .send()
            .await
            .map_err(classify)?;

        Ok(())
    }
}
