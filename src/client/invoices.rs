use serde::Serialize;

use crate::{
    client::{ApiMethod, ClientCtx},
    client::model::{CreateInvoiceParams, GetInvoicesParams, Invoice},
    error::ApiClientError,
};

#[derive(Serialize)]
struct DeleteInvoiceParams {
    invoice_id: u64,
}

#[derive(Clone)]
pub struct InvoicesClient {
    ctx: ClientCtx,
}

impl InvoicesClient {
    pub(super) fn new(ctx: ClientCtx) -> Self {
        Self { ctx }
    }

    /// Creates a new invoice. The returned record carries the payment URLs
    /// to hand to the payer; status transitions are server-driven.
    pub async fn create(&self, params: CreateInvoiceParams) -> Result<Invoice, ApiClientError> {
        self.ctx.call(ApiMethod::CreateInvoice, Some(&params)).await
    }

    /// Deletes an invoice by id. Returns `true` on success.
    pub async fn delete(&self, invoice_id: u64) -> Result<bool, ApiClientError> {
        self.ctx
            .call(ApiMethod::DeleteInvoice, Some(&DeleteInvoiceParams { invoice_id }))
            .await
    }

    /// Lists invoices, optionally filtered by asset, status, ids, or
    /// offset/count pagination.
    pub async fn list(
        &self,
        params: Option<GetInvoicesParams>,
    ) -> Result<Vec<Invoice>, ApiClientError> {
        match params {
            Some(params) => self.ctx.call(ApiMethod::GetInvoices, Some(&params)).await,
            None => self.ctx.call_no_params(ApiMethod::GetInvoices).await,
        }
    }
}
