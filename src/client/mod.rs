use crate::error::{McpError, Result};
use crate::mcp::types::{
    HealthStatus, McpRequest, McpResponse, PingData, ResourceList, ServerInfo, ToolCallResult,
    ToolList,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

/// The local development address the original mobile app pointed at.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7071/api";

/// Typed client for the BOTWorks MCP backend.
///
/// Explicitly constructed and explicitly passed, never a process-wide
/// singleton. One HTTP round trip per call; no retry, no timeout, no
/// caching. Faithfulness to the original client means preserving that
/// absence.
#[derive(Debug, Clone)]
pub struct McpClient {
    http: Client,
    base_url: String,
}

impl Default for McpClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl McpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Point the client at a different backend at runtime.
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether the backend is up. Hits the standalone health endpoint;
    /// the result is not wrapped in [`McpResponse`].
    pub async fn health_check(&self) -> Result<HealthStatus> {
        let endpoint = format!("{}/health", self.base_url);
        debug!("Health check against {}", endpoint);

        let response = self.http.get(&endpoint).send().await?;
        if !response.status().is_success() {
            return Err(McpError::UnexpectedStatus {
                endpoint,
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    /// Ping the MCP server.
    pub async fn ping(&self) -> Result<McpResponse<PingData>> {
        self.send_request("ping", None).await
    }

    /// Get the static server identity.
    pub async fn get_server_info(&self) -> Result<McpResponse<ServerInfo>> {
        self.send_request("getServerInfo", None).await
    }

    /// List the resources the server advertises.
    pub async fn list_resources(&self) -> Result<McpResponse<ResourceList>> {
        self.send_request("listResources", None).await
    }

    /// List the tools the server advertises.
    pub async fn list_tools(&self) -> Result<McpResponse<ToolList>> {
        self.send_request("listTools", None).await
    }

    /// Invoke a named tool with free-form arguments.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<McpResponse<ToolCallResult>> {
        let params = json!({"name": name, "arguments": arguments});
        self.send_request("callTool", Some(params)).await
    }

    /// Serialize `{method, params?}`, perform one POST round trip against the
    /// dispatch endpoint, and parse the typed envelope. Dispatch-level
    /// failures stay in-band; transport failures and non-2xx statuses are
    /// `Err`.
    async fn send_request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<Value>,
    ) -> Result<McpResponse<T>> {
        let endpoint = format!("{}/mcp-handler", self.base_url);
        let request = McpRequest {
            method: method.to_string(),
            params,
        };

        debug!("Sending MCP request '{}' to {}", method, endpoint);

        let response = self.http.post(&endpoint).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(McpError::UnexpectedStatus {
                endpoint,
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}
