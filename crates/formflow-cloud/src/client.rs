//! Provisioning client capability trait

use crate::status::StackStatus;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a provisioning client can report.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The provider rejected the request as referring to something that
    /// does not exist or is malformed. On a describe call this is the
    /// recognized "no stack by this name" signal.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("transport error: {0}")]
    Transport(String),
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// One remote stack record as returned by a describe call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackSummary {
    pub name: String,
    pub status: StackStatus,
}

/// Capability interface to the remote provisioning service.
///
/// Implementations (AWS CloudFormation, in-memory test doubles) are
/// injected into the orchestrator at construction; the core never
/// builds its own client.
#[async_trait]
pub trait ProvisioningClient: Send + Sync {
    /// Describe the stack with the given name.
    ///
    /// Absence is reported as [`ClientError::Validation`], mirroring
    /// the provider wire behavior; it is the status resolver's job to
    /// turn that into [`StackStatus::NotFound`].
    async fn describe_stack(&self, name: &str) -> ClientResult<Vec<StackSummary>>;

    /// Submit a create request for `name` with the given template body.
    /// Returns once the request is accepted; completion is asynchronous.
    async fn create_stack(&self, name: &str, template_body: &str) -> ClientResult<()>;

    /// Submit a delete request for `name`. Returns once the request is
    /// accepted; completion is asynchronous.
    async fn delete_stack(&self, name: &str) -> ClientResult<()>;
}
