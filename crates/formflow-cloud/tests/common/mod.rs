//! In-memory provisioning client for lifecycle tests.

use async_trait::async_trait;
use formflow_cloud::{ClientError, ClientResult, ProvisioningClient, StackStatus, StackSummary};
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Describe,
    Create,
    Delete,
}

/// What one describe call should observe.
#[derive(Debug, Clone)]
pub enum Describe {
    /// The stack exists with this status.
    Found(StackStatus),
    /// The provider's validation-class "no such stack" error.
    Absent,
    /// An Ok response carrying zero stack records.
    Empty,
    /// A non-absence failure, e.g. a broken or misconfigured connection.
    Fail(String),
}

/// Replays a fixed describe script; the final step repeats forever, so
/// a script can end in a steady state. Every call is logged.
pub struct ScriptedClient {
    calls: Mutex<Vec<Call>>,
    describes: Mutex<VecDeque<Describe>>,
    create_error: Option<String>,
    delete_error: Option<String>,
}

impl ScriptedClient {
    pub fn new(script: impl IntoIterator<Item = Describe>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            describes: Mutex::new(script.into_iter().collect()),
            create_error: None,
            delete_error: None,
        }
    }

    pub fn rejecting_create(mut self, message: &str) -> Self {
        self.create_error = Some(message.to_string());
        self
    }

    pub fn rejecting_delete(mut self, message: &str) -> Self {
        self.delete_error = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Create/delete requests only, in issue order.
    pub fn requests(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| *call != Call::Describe)
            .collect()
    }

    fn log(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_describe(&self) -> Describe {
        let mut script = self.describes.lock().unwrap();
        if script.len() > 1 {
            script.pop_front().expect("script is non-empty")
        } else {
            script.front().expect("describe script exhausted").clone()
        }
    }
}

#[async_trait]
impl ProvisioningClient for ScriptedClient {
    async fn describe_stack(&self, name: &str) -> ClientResult<Vec<StackSummary>> {
        self.log(Call::Describe);
        match self.next_describe() {
            Describe::Found(status) => Ok(vec![StackSummary {
                name: name.to_string(),
                status,
            }]),
            Describe::Absent => Err(ClientError::Validation(format!(
                "Stack with id {name} does not exist"
            ))),
            Describe::Empty => Ok(Vec::new()),
            Describe::Fail(message) => Err(ClientError::Transport(message)),
        }
    }

    async fn create_stack(&self, _name: &str, _template_body: &str) -> ClientResult<()> {
        self.log(Call::Create);
        match &self.create_error {
            Some(message) => Err(ClientError::Api(message.clone())),
            None => Ok(()),
        }
    }

    async fn delete_stack(&self, _name: &str) -> ClientResult<()> {
        self.log(Call::Delete);
        match &self.delete_error {
            Some(message) => Err(ClientError::Api(message.clone())),
            None => Ok(()),
        }
    }
}
