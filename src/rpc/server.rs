//! RPC server hosting the member and json services

use crate::config::{RpcSettings, Settings};
use crate::error::RpcError;
use crate::rpc::service::{JsonServiceImpl, MemberServiceImpl};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::{error, info};

use super::member::json_service_server::JsonServiceServer;
use super::member::member_service_server::MemberServiceServer;

/// RPC server for the member services
pub struct RpcServer {
    listen_address: String,
    port: u16,
}

impl RpcServer {
    /// Create a new RPC server instance from the global settings
    pub fn new() -> Self {
        Self::from_settings(Settings::get_rpc())
    }

    pub fn from_settings(rpc_config: &RpcSettings) -> Self {
        Self {
            listen_address: rpc_config.listen_address.clone(),
            port: rpc_config.port,
        }
    }

    fn socket_addr(&self) -> Result<SocketAddr, RpcError> {
        let addr = format!("{}:{}", self.listen_address, self.port);
        addr.parse()
            .map_err(|e| RpcError::InvalidAddress(format!("{}: {}", addr, e)))
    }

    /// Start the RPC server, runs until the transport fails
    pub async fn start(&self) -> Result<(), RpcError> {
        let addr = self.socket_addr()?;

        info!("Starting RPC server on {}", addr);

        let server = Server::builder()
            .add_service(MemberServiceServer::new(MemberServiceImpl::new()))
            .add_service(JsonServiceServer::new(JsonServiceImpl))
            .serve(addr);

        if let Err(e) = server.await {
            error!("RPC server error: {}", e);
            return Err(RpcError::Serve(e.to_string()));
        }

        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve_with_listener<F>(listener: TcpListener, shutdown: F) -> Result<(), RpcError>
    where
        F: Future<Output = ()>,
    {
        if let Ok(addr) = listener.local_addr() {
            info!("Starting RPC server on {}", addr);
        }

        Server::builder()
            .add_service(MemberServiceServer::new(MemberServiceImpl::new()))
            .add_service(JsonServiceServer::new(JsonServiceImpl))
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
            .await
            .map_err(|e| {
                error!("RPC server error: {}", e);
                RpcError::Serve(e.to_string())
            })
    }

    /// Check if RPC server is enabled
    pub fn is_enabled() -> bool {
        Settings::get_rpc().enabled
    }
}

impl Default for RpcServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_settings_default() {
        let settings = RpcSettings::default();
        assert!(settings.enabled);
        assert_eq!(settings.listen_address, "127.0.0.1");
        assert_eq!(settings.port, 50051);
    }

    #[test]
    fn test_server_from_settings() {
        let server = RpcServer::from_settings(&RpcSettings {
            enabled: true,
            listen_address: "localhost".to_string(),
            port: 8080,
        });

        assert_eq!(server.listen_address, "localhost");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_address_formatting() {
        let server = RpcServer {
            listen_address: "127.0.0.1".to_string(),
            port: 50051,
        };

        let addr = server.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:50051");
    }

    #[tokio::test]
    async fn test_invalid_listen_address() {
        let server = RpcServer {
            listen_address: "not an address".to_string(),
            port: 50051,
        };

        let result = server.start().await;
        assert!(matches!(result, Err(RpcError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn test_port_in_use_is_serve_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let server = RpcServer {
            listen_address: "127.0.0.1".to_string(),
            port: taken.local_addr().unwrap().port(),
        };

        let result = server.start().await;
        assert!(matches!(result, Err(RpcError::Serve(_))));
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let result = RpcServer::serve_with_listener(listener, async {}).await;
        assert!(result.is_ok());
    }
}
