use crate::{
    client::{ApiMethod, ClientCtx},
    client::model::{GetTransfersParams, Transfer, TransferParams},
    error::ApiClientError,
};

#[derive(Clone)]
pub struct TransfersClient {
    ctx: ClientCtx,
}

impl TransfersClient {
    pub(super) fn new(ctx: ClientCtx) -> Self {
        Self { ctx }
    }

    /// Sends coins to a user. `params.spend_id` is the caller-generated
    /// idempotency token; the processor treats a repeated token on the same
    /// semantic request as a retry of the same transfer, so never reuse one
    /// for a new transfer. Not retried automatically.
    pub async fn send(&self, params: TransferParams) -> Result<Transfer, ApiClientError> {
        self.ctx.call(ApiMethod::Transfer, Some(&params)).await
    }

    /// Lists completed transfers, optionally filtered by asset, ids,
    /// spend id, or offset/count pagination.
    pub async fn list(
        &self,
        params: Option<GetTransfersParams>,
    ) -> Result<Vec<Transfer>, ApiClientError> {
        match params {
            Some(params) => self.ctx.call(ApiMethod::GetTransfers, Some(&params)).await,
            None => self.ctx.call_no_params(ApiMethod::GetTransfers).await,
        }
    }
}
