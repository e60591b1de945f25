pub mod client;
pub mod config;
pub mod error;
pub mod store;
mod util;
mod validators;

pub use client::model::{
    ApiResponse, AppInfo, AppStats, Balance, Check, CheckStatus, CreateCheckParams,
    CreateInvoiceParams, Currencies, CurrencyType, ExchangeRate, GetChecksParams,
    GetInvoicesParams, GetStatsParams, GetTransfersParams, Invoice, InvoiceStatus, PaidButton,
    Transfer, TransferParams, TransferStatus,
};
pub use client::{ApiMethod, Client};
pub use config::{Config, ConfigBuilder, MAINNET_BASE_URL, TESTNET_BASE_URL};
pub use error::{ApiClientError, ConfigError, StoreError};
pub use reqwest::StatusCode;
pub use store::{Credential, CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use util::generate_spend_id;
