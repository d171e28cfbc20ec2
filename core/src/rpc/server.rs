//! Method dispatch over JSON params

use super::{GoalRequest, GoalRequestHandler, RpcError, RpcResult};
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::warn;

/// Method name of the diagram request
pub const GET_EUCLIDEAN_GOAL: &str = "getEuclideanGoal";

/// Routes JSON calls to the goal handler
///
/// Every call is independent; concurrent calls share only the read-only
/// context snapshot held by the handler.
#[derive(Clone)]
pub struct RpcServer {
    handler: Arc<GoalRequestHandler>,
}

impl RpcServer {
    pub fn new(handler: GoalRequestHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    pub fn handler(&self) -> &GoalRequestHandler {
        &self.handler
    }

    pub async fn dispatch(&self, method: &str, params: Value) -> RpcResult<Value> {
        match method {
            GET_EUCLIDEAN_GOAL => {
                let request: GoalRequest =
                    serde_json::from_value(params).map_err(RpcError::InvalidParams)?;
                let response = self.handler.handle(&request).await?;
                serde_json::to_value(response).map_err(RpcError::Encode)
            }
            other => {
                warn!(method = other, "Unknown RPC method");
                Err(RpcError::UnknownMethod(other.to_string()))
            }
        }
    }

    /// Run one call as its own task
    pub fn spawn_dispatch(&self, method: String, params: Value) -> JoinHandle<RpcResult<Value>> {
        let server = self.clone();
        tokio::spawn(async move { server.dispatch(&method, params).await })
    }
}
