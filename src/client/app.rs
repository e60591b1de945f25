use crate::{
    client::{ApiMethod, ClientCtx},
    client::model::{AppInfo, AppStats, Balance, Currencies, ExchangeRate, GetStatsParams},
    error::ApiClientError,
};

/// Read-only, account-level queries: identity, balances, rates, stats.
/// All of these are independent and idempotent; a dashboard typically fires
/// them concurrently on connect and handles each result on its own.
#[derive(Clone)]
pub struct AppClient {
    ctx: ClientCtx,
}

impl AppClient {
    pub(super) fn new(ctx: ClientCtx) -> Self {
        Self { ctx }
    }

    /// Basic information about the merchant app the token belongs to.
    /// Cheap to call, so also the conventional token-validity probe.
    pub async fn get_me(&self) -> Result<AppInfo, ApiClientError> {
        self.ctx.call_no_params(ApiMethod::GetMe).await
    }

    pub async fn get_balance(&self) -> Result<Vec<Balance>, ApiClientError> {
        self.ctx.call_no_params(ApiMethod::GetBalance).await
    }

    pub async fn get_exchange_rates(&self) -> Result<Vec<ExchangeRate>, ApiClientError> {
        self.ctx.call_no_params(ApiMethod::GetExchangeRates).await
    }

    pub async fn get_currencies(&self) -> Result<Currencies, ApiClientError> {
        self.ctx.call_no_params(ApiMethod::GetCurrencies).await
    }

    /// Aggregate statistics over an optional date range.
    pub async fn get_stats(
        &self,
        params: Option<GetStatsParams>,
    ) -> Result<AppStats, ApiClientError> {
        match params {
            Some(params) => self.ctx.call(ApiMethod::GetStats, Some(&params)).await,
            None => self.ctx.call_no_params(ApiMethod::GetStats).await,
        }
    }
}
