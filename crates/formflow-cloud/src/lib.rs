//! formflow stack lifecycle core
//!
//! This crate drives a named, template-defined infrastructure stack
//! through its remote state machine: create, delete, and the compound
//! delete-then-create "redeploy", polling the provisioning service
//! until a terminal status is reached.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  formflow CLI                    │
//! │        (create / delete / redeploy / status)     │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               formflow-cloud                     │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │           StackLifecycle                  │   │
//! │  │  status resolver · poller · error history │   │
//! │  └──────────────────┬───────────────────────┘   │
//! │  trait ProvisioningClient { describe/create/    │
//! │                             delete }            │
//! └───────────────────┬─────────────────────────────┘
//!                     │
//!           ┌─────────▼─────────┐
//!           │ formflow-cloud-aws │
//!           │  (CloudFormation)  │
//!           └───────────────────┘
//! ```
//!
//! The orchestrator holds no cached belief about remote state: every
//! decision point re-queries the service through the injected
//! [`ProvisioningClient`].

pub mod client;
pub mod error;
pub mod lifecycle;
pub mod status;

// Re-exports
pub use client::{ClientError, ClientResult, ProvisioningClient, StackSummary};
pub use error::{ErrorCollection, LifecycleError, LifecycleErrorKind, Provenance, Result};
pub use lifecycle::{PollConfig, StackLifecycle};
pub use status::StackStatus;
