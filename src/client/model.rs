use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::ApiClientError;

/// Wire envelope returned by every Crypto Pay method. `ok: true` carries the
/// method-specific payload in `result`; `ok: false` carries a human-readable
/// message in `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self, status: StatusCode) -> Result<T, ApiClientError> {
        match self {
            Self {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            Self {
                ok: true,
                result: None,
                ..
            } => Err(ApiClientError::Api {
                status,
                message: "missing result in response".to_string(),
            }),
            Self { error, .. } => Err(ApiClientError::Api {
                status,
                message: error.unwrap_or_else(|| "unknown error".to_string()),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyType {
    Crypto,
    Fiat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Active,
    Paid,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Active,
    Activated,
}

/// Transfers complete synchronously; no intermediate state is ever observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Completed,
}

/// Button shown to the payer once an invoice is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaidButton {
    ViewItem,
    OpenChannel,
    OpenBot,
    Callback,
}

/// All monetary amounts and rates are decimal strings on the wire; they are
/// kept as strings here so no precision is lost between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: u64,
    pub hash: String,
    pub currency_type: CurrencyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiat: Option<String>,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_fiat_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_assets: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_amount: Option<f64>,
    pub bot_invoice_url: String,
    pub mini_app_invoice_url: String,
    pub web_app_invoice_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: InvoiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_swapped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapped_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapped_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapped_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapped_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapped_usd_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swapped_usd_rate: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_usd_rate: Option<String>,
    pub allow_comments: bool,
    pub allow_anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_anonymously: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_btn_name: Option<PaidButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_btn_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    pub transfer_id: u64,
    pub spend_id: String,
    pub user_id: String,
    pub asset: String,
    pub amount: String,
    pub status: TransferStatus,
    pub completed_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Check {
    pub check_id: u64,
    pub hash: String,
    pub asset: String,
    pub amount: String,
    pub bot_check_url: String,
    pub status: CheckStatus,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    pub currency_code: String,
    pub available: String,
    pub onhold: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub is_valid: bool,
    pub is_crypto: bool,
    pub is_fiat: bool,
    pub source: String,
    pub target: String,
    pub rate: String,
}

/// Currency codes supported by the processor, split by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currencies {
    pub fiat: Vec<String>,
    pub crypto: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppStats {
    pub volume: f64,
    pub conversion: f64,
    pub unique_users_count: u64,
    pub created_invoice_count: u64,
    pub paid_invoice_count: u64,
    pub start_at: String,
    pub end_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppInfo {
    pub app_id: u64,
    pub name: String,
    pub payment_processing_bot_username: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateInvoiceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_type: Option<CurrencyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_assets: Option<String>,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_btn_name: Option<PaidButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_btn_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_anonymous: Option<bool>,
    /// Invoice lifetime in seconds, 1..=2678400.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCheckParams {
    pub asset: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_to_user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_to_username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferParams {
    pub user_id: u64,
    pub asset: String,
    pub amount: String,
    /// Caller-generated idempotency token, unique per transfer attempt.
    /// See [`crate::generate_spend_id`].
    pub spend_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_send_notification: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetInvoicesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiat: Option<String>,
    /// Comma-separated invoice ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetChecksParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    /// Comma-separated check ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CheckStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetTransfersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    /// Comma-separated transfer ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spend_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetStatsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,
}
