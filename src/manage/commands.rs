//! Server-side command execution.

use serde::Serialize;
use serde_json::Value;

use crate::Error;
use crate::client::Client;

/// Client for running administrative commands on the service.
///
/// Access via `client.commands()`. Commands run asynchronously on the server;
/// the response describes the queued execution.
#[derive(Clone)]
pub struct CommandsClient {
    client: Client,
}

impl CommandsClient {
    /// Creates a new commands client.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Queues a command for execution.
    pub async fn run(&self, request: RunCommandRequest) -> Result<Value, Error> {
        self.client.inner().post("/manage/commands", &request).await
    }
}

impl std::fmt::Debug for CommandsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandsClient").finish_non_exhaustive()
    }
}

/// Request to run a command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunCommandRequest {
    /// Command name.
    pub command: String,
    /// Positional parameters passed to the command.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
}

impl RunCommandRequest {
    /// Creates a new request with no parameters.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            parameters: Vec::new(),
        }
    }

    /// Appends a positional parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameters.push(parameter.into());
        self
    }
}
