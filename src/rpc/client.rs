//! Client wrapper around a single channel to a remote json service

use crate::config::types::{ClientSettings, DEFAULT_CONNECT_TIMEOUT_SECS};
use crate::error::RpcError;
use crate::rpc::member::{
    json_service_client::JsonServiceClient, member_service_client::MemberServiceClient,
    GetVersionRequest, JsonRequest,
};
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

/// Owns one plaintext channel to `<address>:<port>` and the stub bound to it.
/// The channel is released when the client is dropped or closed.
pub struct RpcClient {
    address: String,
    channel: Channel,
    client: JsonServiceClient<Channel>,
}

impl RpcClient {
    /// Dial `address` on `port` with the default 10 second connect timeout
    pub async fn connect(address: &str, port: u16) -> Result<Self, RpcError> {
        Self::connect_with_timeout(
            address,
            port,
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        )
        .await
    }

    /// Dial `address` using the port and timeout from the `[client]` settings
    pub async fn from_settings(address: &str, settings: &ClientSettings) -> Result<Self, RpcError> {
        Self::connect_with_timeout(address, settings.port, settings.connect_timeout()).await
    }

    /// The timeout only applies to this dial, no state is shared with other clients.
    pub async fn connect_with_timeout(
        address: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<Self, RpcError> {
        let address = format!("{}:{}", address, port);
        let endpoint = Endpoint::from_shared(format!("http://{}", address))
            .map_err(|e| RpcError::InvalidAddress(format!("{}: {}", address, e)))?
            .connect_timeout(timeout);

        let channel = dial(&address, timeout, endpoint.connect()).await?;

        info!(method = "connect", address = %address, "Connected to remote endpoint");

        Ok(Self {
            address,
            client: JsonServiceClient::new(channel.clone()),
            channel,
        })
    }

    /// Resolved `<address>:<port>` this client is connected to
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Send one json payload and return the payload of the reply
    pub async fn send(&mut self, payload: impl Into<String>) -> Result<String, RpcError> {
        let request = tonic::Request::new(JsonRequest {
            json: payload.into(),
        });
        let response = self.client.send(request).await?;

        Ok(response.into_inner().json)
    }

    /// Ask the remote member service for its version
    pub async fn get_version(&mut self) -> Result<String, RpcError> {
        let mut client = MemberServiceClient::new(self.channel.clone());
        let response = client
            .get_version(tonic::Request::new(GetVersionRequest {}))
            .await?;

        Ok(response.into_inner().version)
    }

    /// Release the connection
    pub fn close(self) {
        debug!(method = "close", address = %self.address, "Releasing connection");
    }
}

/// Bounds a whole dial by `timeout`.
/// connect_timeout only covers each tcp connect attempt, not name resolution.
async fn dial<F, E>(address: &str, timeout: Duration, connect: F) -> Result<Channel, RpcError>
where
    F: Future<Output = Result<Channel, E>>,
    E: fmt::Display,
{
    tokio::time::timeout(timeout, connect)
        .await
        .map_err(|_| RpcError::Connect(format!("{}: timed out after {:?}", address, timeout)))?
        .map_err(|e| RpcError::Connect(format!("{}: {}", address, e)))
}
