//! AWS CloudFormation provisioning client for formflow
//!
//! Implements the `ProvisioningClient` trait on top of
//! `aws-sdk-cloudformation`. CloudFormation reports "no such stack" as
//! a `ValidationError` on DescribeStacks; this crate surfaces that as
//! [`formflow_cloud::ClientError::Validation`] so the core can resolve
//! it to `NOT_FOUND`.
//!
//! # Example
//!
//! ```ignore
//! use formflow_cloud::StackLifecycle;
//! use formflow_cloud_aws::CloudFormation;
//! use std::sync::Arc;
//!
//! let client = CloudFormation::from_env().await;
//! let mut stack = StackLifecycle::new("my-stack", Arc::new(client))
//!     .with_template(template_body);
//! stack.create_stack().await?;
//! ```

pub mod client;

pub use client::CloudFormation;
