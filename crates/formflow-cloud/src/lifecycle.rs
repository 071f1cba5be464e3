//! Stack lifecycle orchestration
//!
//! [`StackLifecycle`] drives one named stack through create, delete,
//! and the compound redeploy. Each operation is a guarded sequence:
//! resolve the current status, validate the precondition, issue the
//! provider request, then poll until a terminal status. Remote state is
//! never cached across decision points.

use crate::client::{ClientError, ProvisioningClient};
use crate::error::{ErrorCollection, LifecycleError, Result};
use crate::status::StackStatus;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, sleep};

/// Polling behavior for terminal-state waits.
///
/// The source behavior this tool replaces polled forever; here the wait
/// is bounded by `timeout` (a deliberate deviation), and expiry surfaces
/// as a failure of the operation that was waiting. Set `timeout` to
/// `None` to restore the unbounded behavior.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between consecutive status checks.
    pub interval: Duration,
    /// Upper bound on the total wait, `None` for unbounded.
    pub timeout: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(3000),
            timeout: Some(Duration::from_secs(60 * 60)),
        }
    }
}

enum PollEnd {
    Satisfied(StackStatus),
    TimedOut { last: StackStatus, waited: Duration },
}

/// Orchestrates the lifecycle of one named stack.
///
/// Lifecycle methods take `&mut self`: one instance serves one caller
/// at a time, and the failure history in [`StackLifecycle::errors`] is
/// ordered by that single thread of control. There is no locking or
/// idempotency token toward the remote service; two processes driving
/// the same stack name can still race each other remotely.
pub struct StackLifecycle {
    name: String,
    template_body: Option<String>,
    client: Arc<dyn ProvisioningClient>,
    poll: PollConfig,
    errors: ErrorCollection,
}

impl StackLifecycle {
    pub fn new(name: impl Into<String>, client: Arc<dyn ProvisioningClient>) -> Self {
        Self {
            name: name.into(),
            template_body: None,
            client,
            poll: PollConfig::default(),
            errors: ErrorCollection::new(),
        }
    }

    /// Attach the opaque template body sent with create requests.
    /// The body is never inspected, only forwarded.
    pub fn with_template(mut self, template_body: impl Into<String>) -> Self {
        self.template_body = Some(template_body.into());
        self
    }

    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Failure history for this instance, in raise order.
    pub fn errors(&self) -> &[LifecycleError] {
        self.errors.snapshot()
    }

    /// Resolve the current status of the stack.
    ///
    /// Absence is a normal outcome and maps to
    /// [`StackStatus::NotFound`]; any other describe failure, including
    /// an Ok response carrying zero stack records, is a
    /// `StatusRetrievalFailure`.
    pub async fn stack_status(&mut self) -> Result<StackStatus> {
        let described = self.client.describe_stack(&self.name).await;
        match described {
            Ok(summaries) => match summaries.into_iter().next() {
                Some(summary) => Ok(summary.status),
                // An Ok response with no records is malformed, not absence.
                None => Err(self.record(LifecycleError::status_retrieval(
                    &self.name,
                    "describe returned no stack records; check the stack name and region",
                ))),
            },
            Err(ClientError::Validation(_)) => Ok(StackStatus::NotFound),
            Err(err) => Err(self.record(LifecycleError::status_retrieval(
                &self.name,
                err.to_string(),
            ))),
        }
    }

    /// Create the stack and wait until it reaches `CREATE_COMPLETE`.
    ///
    /// If a creation is already in progress the request is not
    /// re-issued; the call joins the wait. Any other existing status is
    /// a precondition violation and no request is sent.
    pub async fn create_stack(&mut self) -> Result<()> {
        let status = self.stack_status().await?;

        match status {
            StackStatus::CreateInProgress => {
                tracing::info!(stack = %self.name, "creation already in progress, waiting");
            }
            StackStatus::NotFound => {
                let Some(template_body) = self.template_body.clone() else {
                    return Err(self.record(LifecycleError::creation(
                        &self.name,
                        "no template body configured for this stack",
                    )));
                };

                let requested = self.client.create_stack(&self.name, &template_body).await;
                if let Err(err) = requested {
                    return Err(self.record(LifecycleError::creation(
                        &self.name,
                        format!("provider rejected the create request: {err}"),
                    )));
                }
                tracing::info!(stack = %self.name, "create request accepted");
            }
            other => {
                return Err(self.record(LifecycleError::creation(
                    &self.name,
                    format!("a stack with this name already exists (status {other})"),
                )));
            }
        }

        match self
            .poll_until(|status| *status != StackStatus::CreateComplete)
            .await?
        {
            PollEnd::Satisfied(_) => Ok(()),
            PollEnd::TimedOut { last, waited } => Err(self.record(LifecycleError::creation(
                &self.name,
                format!(
                    "timed out after {}s waiting for CREATE_COMPLETE (last status {last})",
                    waited.as_secs()
                ),
            ))),
        }
    }

    /// Delete the stack and wait until the service reports it absent.
    pub async fn delete_stack(&mut self) -> Result<()> {
        let status = self.stack_status().await?;

        if status == StackStatus::NotFound {
            return Err(self.record(LifecycleError::not_found(
                &self.name,
                "no stack with this name exists, nothing to delete",
            )));
        }

        let requested = self.client.delete_stack(&self.name).await;
        if let Err(err) = requested {
            return Err(self.record(LifecycleError::deletion(
                &self.name,
                format!("provider rejected the delete request: {err}"),
            )));
        }
        tracing::info!(stack = %self.name, "delete request accepted");

        match self
            .poll_until(|status| *status != StackStatus::NotFound)
            .await?
        {
            PollEnd::Satisfied(_) => Ok(()),
            PollEnd::TimedOut { last, waited } => Err(self.record(LifecycleError::deletion(
                &self.name,
                format!(
                    "timed out after {}s waiting for the stack to be gone (last status {last})",
                    waited.as_secs()
                ),
            ))),
        }
    }

    /// Delete the stack if present, then create it again.
    ///
    /// Compound and non-atomic: the first failing sub-step aborts the
    /// sequence, and partial progress (deleted but not yet recreated)
    /// is left for the caller to observe and re-invoke on. Statuses
    /// with no defined transition fail fast instead of guessing.
    pub async fn redeploy(&mut self) -> Result<()> {
        let status = self.stack_status().await?;

        match status {
            StackStatus::NotFound | StackStatus::CreateInProgress => self.create_stack().await,
            StackStatus::CreateComplete | StackStatus::DeleteInProgress => {
                self.delete_stack().await?;
                self.create_stack().await
            }
            other => Err(self.record(LifecycleError::creation(
                &self.name,
                format!("no redeploy transition defined from status {other}"),
            ))),
        }
    }

    /// Re-resolve the status at a fixed interval while `keep_waiting`
    /// holds. Resolution failures abort the poll immediately; only
    /// status checks are retried here, never mutating requests.
    async fn poll_until(&mut self, keep_waiting: impl Fn(&StackStatus) -> bool) -> Result<PollEnd> {
        let started = Instant::now();
        let mut status = self.stack_status().await?;

        while keep_waiting(&status) {
            if let Some(timeout) = self.poll.timeout {
                if started.elapsed() >= timeout {
                    return Ok(PollEnd::TimedOut {
                        last: status,
                        waited: started.elapsed(),
                    });
                }
            }
            tracing::info!(stack = %self.name, status = %status, "waiting for stack");
            sleep(self.poll.interval).await;
            status = self.stack_status().await?;
        }

        Ok(PollEnd::Satisfied(status))
    }

    fn record(&mut self, error: LifecycleError) -> LifecycleError {
        self.errors.record(error.clone());
        error
    }
}
