use url::Url;

use crate::{
    error::ConfigError,
    store::Credential,
    validators::{validate_api_token, validate_url},
};

/// Production endpoint of the Crypto Pay API.
pub const MAINNET_BASE_URL: &str = "https://pay.crypt.bot/api";
/// Test-network endpoint of the Crypto Pay API.
pub const TESTNET_BASE_URL: &str = "https://testnet-pay.crypt.bot/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub testnet: bool,
    pub base_url: Url,
}

pub struct ConfigBuilder {
    api_token: Option<String>,
    testnet: Option<bool>,
    base_url: Option<String>,
}

impl ConfigBuilder {
    fn empty() -> Self {
        Self {
            api_token: None,
            testnet: None,
            base_url: None,
        }
    }

    pub fn api_token(mut self, api_token: String) -> Self {
        self.api_token = Some(api_token);
        self
    }

    /// Select the test-network endpoint instead of production.
    pub fn testnet(mut self, testnet: bool) -> Self {
        self.testnet = Some(testnet);
        self
    }

    /// If not provided, the endpoint is chosen from the testnet flag.
    /// You normally don't need to provide this!
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Adopt a credential loaded from a [`crate::store::CredentialStore`].
    pub fn credential(self, credential: Credential) -> Self {
        self.api_token(credential.api_token)
            .testnet(credential.testnet)
    }

    pub fn from_env(mut self) -> Self {
        if let Ok(v) = std::env::var("CRYPTOPAY_API_TOKEN") {
            self = self.api_token(v);
        }
        if let Ok(v) = std::env::var("CRYPTOPAY_TESTNET") {
            self = self.testnet(v == "true");
        }
        if let Ok(v) = std::env::var("CRYPTOPAY_BASE_URL") {
            self = self.base_url(v);
        }
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let api_token = Self::required(self.api_token, "api_token")?;
        let api_token =
            validate_api_token(&api_token).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let testnet = self.testnet.unwrap_or(false);
        let base_url = match self.base_url {
            Some(raw) => raw,
            None if testnet => TESTNET_BASE_URL.to_string(),
            None => MAINNET_BASE_URL.to_string(),
        };
        let base_url =
            validate_url(&base_url).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        Ok(Config {
            api_token,
            testnet,
            base_url,
        })
    }

    fn required(value: Option<String>, field: &str) -> Result<String, ConfigError> {
        value.ok_or_else(|| ConfigError::Missing(field.to_string()))
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VALID_TOKEN: &str = "12345:AAzQcDE6ah7Xz9kLmN";

    #[test]
    fn test_build_with_required_fields_only() {
        let config = ConfigBuilder::default()
            .api_token(VALID_TOKEN.to_string())
            .build();

        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api_token, VALID_TOKEN);
        assert!(!config.testnet);
        assert_eq!(config.base_url.as_str(), MAINNET_BASE_URL);
    }

    #[test]
    fn test_testnet_flag_selects_testnet_endpoint() {
        let config = ConfigBuilder::default()
            .api_token(VALID_TOKEN.to_string())
            .testnet(true)
            .build()
            .unwrap();

        assert!(config.testnet);
        assert_eq!(config.base_url.as_str(), TESTNET_BASE_URL);
    }

    #[test]
    fn test_explicit_base_url_wins_over_testnet_flag() {
        let config = ConfigBuilder::default()
            .api_token(VALID_TOKEN.to_string())
            .testnet(true)
            .base_url("http://localhost:3000/api".to_string())
            .build()
            .unwrap();

        assert_eq!(config.base_url.as_str(), "http://localhost:3000/api");
    }

    #[test]
    fn test_build_missing_api_token() {
        let config = ConfigBuilder::default().build();

        assert!(config.is_err());
        match config.unwrap_err() {
            ConfigError::Missing(field) => assert_eq!(field, "api_token"),
            _ => panic!("Expected Missing error"),
        }
    }

    #[test]
    fn test_build_blank_api_token() {
        let config = ConfigBuilder::default()
            .api_token("   ".to_string())
            .build();

        assert!(config.is_err());
        match config.unwrap_err() {
            ConfigError::InvalidValue(msg) => assert!(msg.contains("invalid API token")),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_build_invalid_base_url() {
        let config = ConfigBuilder::default()
            .api_token(VALID_TOKEN.to_string())
            .base_url("not-a-valid-url".to_string())
            .build();

        assert!(config.is_err());
        match config.unwrap_err() {
            ConfigError::InvalidValue(msg) => assert!(msg.contains("invalid URL")),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_credential_fills_token_and_network() {
        let config = ConfigBuilder::default()
            .credential(Credential {
                api_token: VALID_TOKEN.to_string(),
                testnet: true,
            })
            .build()
            .unwrap();

        assert_eq!(config.api_token, VALID_TOKEN);
        assert!(config.testnet);
        assert_eq!(config.base_url.as_str(), TESTNET_BASE_URL);
    }

    #[test]
    #[serial]
    fn test_from_env_with_all_vars() {
        unsafe {
            std::env::set_var("CRYPTOPAY_API_TOKEN", VALID_TOKEN);
            std::env::set_var("CRYPTOPAY_TESTNET", "true");
            std::env::set_var("CRYPTOPAY_BASE_URL", "http://localhost:3000/api");
        }

        let config = ConfigBuilder::default().from_env().build();

        // Clean up
        unsafe {
            std::env::remove_var("CRYPTOPAY_API_TOKEN");
            std::env::remove_var("CRYPTOPAY_TESTNET");
            std::env::remove_var("CRYPTOPAY_BASE_URL");
        }

        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api_token, VALID_TOKEN);
        assert!(config.testnet);
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/api");
    }

    #[test]
    #[serial]
    fn test_from_env_override() {
        unsafe {
            std::env::set_var("CRYPTOPAY_API_TOKEN", "env-token");
        }

        let config = ConfigBuilder::default()
            .api_token(VALID_TOKEN.to_string())
            .from_env()
            .build();

        // Clean up
        unsafe {
            std::env::remove_var("CRYPTOPAY_API_TOKEN");
        }

        assert!(config.is_ok());
        // from_env should override the earlier value
        assert_eq!(config.unwrap().api_token, "env-token");
    }

    #[test]
    #[serial]
    fn test_from_env_testnet_must_be_exactly_true() {
        unsafe {
            std::env::set_var("CRYPTOPAY_API_TOKEN", VALID_TOKEN);
            std::env::set_var("CRYPTOPAY_TESTNET", "TRUE");
        }

        let config = ConfigBuilder::default().from_env().build();

        // Clean up
        unsafe {
            std::env::remove_var("CRYPTOPAY_API_TOKEN");
            std::env::remove_var("CRYPTOPAY_TESTNET");
        }

        assert!(!config.unwrap().testnet);
    }
}
