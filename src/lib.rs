//! Member rpc
//!
//! A tonic gRPC server hosting a version reporting member service and a json
//! relay service, plus a client wrapper that dials a remote host on the
//! configured port and forwards json payloads.

pub mod cli;
pub mod config;
pub mod error;
pub mod rpc;

pub use error::RpcError;
