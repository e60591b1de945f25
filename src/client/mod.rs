use std::sync::Arc;

use log::{debug, warn};
use reqwest::{Client as HttpClient, header::CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};

use crate::{config::Config, error::ApiClientError};

use self::{
    app::AppClient, checks::ChecksClient, invoices::InvoicesClient, model::ApiResponse,
    transfers::TransfersClient,
};

pub mod app;
pub mod checks;
pub mod invoices;
pub mod model;
pub mod transfers;

/// Header carrying the merchant app token on every request.
pub const API_TOKEN_HEADER: &str = "Crypto-Pay-API-Token";

/// Closed set of remote method names; one variant per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    GetMe,
    CreateInvoice,
    DeleteInvoice,
    GetInvoices,
    CreateCheck,
    DeleteCheck,
    GetChecks,
    Transfer,
    GetTransfers,
    GetBalance,
    GetExchangeRates,
    GetCurrencies,
    GetStats,
}

impl ApiMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetMe => "getMe",
            Self::CreateInvoice => "createInvoice",
            Self::DeleteInvoice => "deleteInvoice",
            Self::GetInvoices => "getInvoices",
            Self::CreateCheck => "createCheck",
            Self::DeleteCheck => "deleteCheck",
            Self::GetChecks => "getChecks",
            Self::Transfer => "transfer",
            Self::GetTransfers => "getTransfers",
            Self::GetBalance => "getBalance",
            Self::GetExchangeRates => "getExchangeRates",
            Self::GetCurrencies => "getCurrencies",
            Self::GetStats => "getStats",
        }
    }
}

struct Inner {
    cfg: Config,
    http: HttpClient,
}

#[derive(Clone)]
pub(crate) struct ClientCtx(Arc<Inner>);

impl ClientCtx {
    fn new(cfg: Config) -> Self {
        Self(Arc::new(Inner {
            cfg,
            http: HttpClient::new(),
        }))
    }

    /// One logical operation = exactly one POST to `{base_url}/{method}`.
    /// Single attempt: no retry, no backoff, no timeout override.
    pub(crate) async fn call<P, T>(
        &self,
        method: ApiMethod,
        params: Option<&P>,
    ) -> Result<T, ApiClientError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!(
            "{}/{}",
            self.0.cfg.base_url.as_str().trim_end_matches('/'),
            method.as_str()
        );
        debug!("POST {url}");

        let mut request = self
            .0
            .http
            .post(&url)
            .header(API_TOKEN_HEADER, &self.0.cfg.api_token)
            .header(CONTENT_TYPE, "application/json");
        if let Some(params) = params {
            request = request.json(params);
        }

        let response = request.send().await.map_err(|e| {
            warn!("{} transport failure: {e}", method.as_str());
            ApiClientError::Transport(e)
        })?;
        let status = response.status();
        let body = response.bytes().await?;

        let envelope: ApiResponse<T> = serde_json::from_slice(&body)?;
        envelope.into_result(status)
    }

    pub(crate) async fn call_no_params<T>(&self, method: ApiMethod) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        self.call(method, None::<&()>).await
    }
}

/// Entry point to the Crypto Pay API, split into per-area sub-clients.
///
/// Cloning is cheap; clones share one HTTP connection pool, so independent
/// reads can be dispatched concurrently with `tokio::join!`.
#[derive(Clone)]
pub struct Client {
    pub app: AppClient,
    pub invoices: InvoicesClient,
    pub checks: ChecksClient,
    pub transfers: TransfersClient,
}

impl Client {
    pub fn new(cfg: Config) -> Self {
        let ctx = ClientCtx::new(cfg);

        Self {
            app: AppClient::new(ctx.clone()),
            invoices: InvoicesClient::new(ctx.clone()),
            checks: ChecksClient::new(ctx.clone()),
            transfers: TransfersClient::new(ctx),
        }
    }
}
