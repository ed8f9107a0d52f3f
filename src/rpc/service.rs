//! RPC service implementations

use crate::rpc::member::{
    json_service_server::JsonService, member_service_server::MemberService, GetVersionRequest,
    GetVersionResponse, JsonRequest, JsonResponse,
};
use std::collections::HashMap;
use tonic::{Request, Response, Status};
use tracing::debug;

/// Version reported by `GetVersion`
pub const SERVICE_VERSION: &str = "1.0.0";

/// Implementation of the MemberService gRPC service
#[derive(Debug, Default)]
pub struct MemberServiceImpl {
    // Placeholder for per-member session state, nothing populates it yet
    members: HashMap<String, String>,
}

impl MemberServiceImpl {
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
        }
    }

    pub fn members(&self) -> &HashMap<String, String> {
        &self.members
    }
}

#[tonic::async_trait]
impl MemberService for MemberServiceImpl {
    async fn get_version(
        &self,
        _request: Request<GetVersionRequest>,
    ) -> Result<Response<GetVersionResponse>, Status> {
        Ok(Response::new(GetVersionResponse {
            version: SERVICE_VERSION.to_string(),
        }))
    }
}

/// Server side of `JsonService`, hands the payload straight back
#[derive(Debug, Default)]
pub struct JsonServiceImpl;

#[tonic::async_trait]
impl JsonService for JsonServiceImpl {
    async fn send(&self, request: Request<JsonRequest>) -> Result<Response<JsonResponse>, Status> {
        let req = request.into_inner();
        debug!(method = "send", bytes = req.json.len(), "Received json payload");

        Ok(Response::new(JsonResponse { json: req.json }))
    }
}
