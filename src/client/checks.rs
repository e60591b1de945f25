use serde::Serialize;

use crate::{
    client::{ApiMethod, ClientCtx},
    client::model::{Check, CreateCheckParams, GetChecksParams},
    error::ApiClientError,
};

#[derive(Serialize)]
struct DeleteCheckParams {
    check_id: u64,
}

#[derive(Clone)]
pub struct ChecksClient {
    ctx: ClientCtx,
}

impl ChecksClient {
    pub(super) fn new(ctx: ClientCtx) -> Self {
        Self { ctx }
    }

    /// Creates a redeemable check, optionally pinned to a single user.
    pub async fn create(&self, params: CreateCheckParams) -> Result<Check, ApiClientError> {
        self.ctx.call(ApiMethod::CreateCheck, Some(&params)).await
    }

    /// Deletes a check by id. Returns `true` on success.
    pub async fn delete(&self, check_id: u64) -> Result<bool, ApiClientError> {
        self.ctx
            .call(ApiMethod::DeleteCheck, Some(&DeleteCheckParams { check_id }))
            .await
    }

    /// Lists checks, optionally filtered by asset, status, ids, or
    /// offset/count pagination.
    pub async fn list(&self, params: Option<GetChecksParams>) -> Result<Vec<Check>, ApiClientError> {
        match params {
            Some(params) => self.ctx.call(ApiMethod::GetChecks, Some(&params)).await,
            None => self.ctx.call_no_params(ApiMethod::GetChecks).await,
        }
    }
}
