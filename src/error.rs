use std::fmt;

#[derive(Debug)]
pub enum RpcError {
    /// `<address>:<port>` is not a usable URI
    InvalidAddress(String),
    /// Dialing the endpoint failed or timed out
    Connect(String),
    /// The remote call returned a non-OK status
    Call(tonic::Status),
    /// The server could not bind or its transport failed while serving
    Serve(String),
    /// Settings file could not be parsed
    Config(String),
    /// Filesystem error while preparing the settings directory
    Io(String),
}

impl std::error::Error for RpcError {}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcError::InvalidAddress(addr) => write!(f, "Invalid address: {addr}"),
            RpcError::Connect(e) => write!(f, "Connection failed: {e}"),
            RpcError::Call(status) => write!(
                f,
                "Remote call failed: {} ({:?})",
                status.message(),
                status.code()
            ),
            RpcError::Serve(e) => write!(f, "RPC server error: {e}"),
            RpcError::Config(e) => write!(f, "Configuration error: {e}"),
            RpcError::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl From<tonic::Status> for RpcError {
    fn from(status: tonic::Status) -> Self {
        RpcError::Call(status)
    }
}

impl From<toml::de::Error> for RpcError {
    fn from(e: toml::de::Error) -> Self {
        RpcError::Config(e.to_string())
    }
}

impl From<std::io::Error> for RpcError {
    fn from(e: std::io::Error) -> Self {
        RpcError::Io(e.to_string())
    }
}
