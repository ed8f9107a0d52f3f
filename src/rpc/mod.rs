//! gRPC plumbing for the member service
//!
//! The server side hosts `MemberService` (version reporting) and `JsonService`
//! (relays a JSON document back to the caller). The client side dials a remote
//! host on the configured port and forwards JSON payloads over `JsonService`.

pub mod client;
pub mod server;
pub mod service;

pub use client::RpcClient;
pub use server::RpcServer;

// Include the generated protobuf code
pub mod member {
    tonic::include_proto!("member.v1");
}
