use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use crate::error::StoreError;

/// Storage key for the merchant app token.
pub const TOKEN_KEY: &str = "cryptopay_token";
/// Storage key for the network-selector flag, stored as `"true"`/`"false"`.
pub const TESTNET_KEY: &str = "cryptopay_testnet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub api_token: String,
    pub testnet: bool,
}

/// Persists at most one credential/network pair. Implementations are
/// injected wherever credentials are needed; the API client itself never
/// reads ambient state.
pub trait CredentialStore {
    /// Unconditionally overwrites both stored values.
    fn save(&self, credential: &Credential) -> Result<(), StoreError>;

    /// Returns the stored credential, or `None` if no token is stored.
    /// The testnet flag defaults to `false` unless the stored value is
    /// exactly `"true"`.
    fn load(&self) -> Result<Option<Credential>, StoreError>;

    /// Removes both stored values.
    fn clear(&self) -> Result<(), StoreError>;

    /// True iff a token value is currently stored.
    fn exists(&self) -> bool;
}

fn testnet_from_stored(raw: &str) -> bool {
    raw == "true"
}

/// Two files named after the fixed storage keys, under a caller-chosen
/// directory. The filesystem counterpart of the two browser-storage keys a
/// dashboard would use.
pub struct FileCredentialStore {
    dir: PathBuf,
}

impl FileCredentialStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_KEY)
    }

    fn testnet_path(&self) -> PathBuf {
        self.dir.join(TESTNET_KEY)
    }
}

fn read_value(path: &Path) -> Result<Option<String>, StoreError> {
    match fs::read_to_string(path) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn remove_value(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

impl CredentialStore for FileCredentialStore {
    fn save(&self, credential: &Credential) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.token_path(), &credential.api_token)?;
        fs::write(self.testnet_path(), credential.testnet.to_string())?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Credential>, StoreError> {
        let Some(api_token) = read_value(&self.token_path())? else {
            return Ok(None);
        };
        let testnet = read_value(&self.testnet_path())?
            .map(|raw| testnet_from_stored(&raw))
            .unwrap_or(false);

        Ok(Some(Credential { api_token, testnet }))
    }

    fn clear(&self) -> Result<(), StoreError> {
        remove_value(&self.token_path())?;
        remove_value(&self.testnet_path())?;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.token_path().is_file()
    }
}

/// In-process store keyed by the same fixed keys, for tests and embedders
/// that do not want persistence.
#[derive(Default)]
pub struct MemoryCredentialStore {
    values: Mutex<HashMap<&'static str, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<&'static str, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn save(&self, credential: &Credential) -> Result<(), StoreError> {
        let mut values = self.values();
        values.insert(TOKEN_KEY, credential.api_token.clone());
        values.insert(TESTNET_KEY, credential.testnet.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<Credential>, StoreError> {
        let values = self.values();
        let Some(api_token) = values.get(TOKEN_KEY).cloned() else {
            return Ok(None);
        };
        let testnet = values
            .get(TESTNET_KEY)
            .map(|raw| testnet_from_stored(raw))
            .unwrap_or(false);

        Ok(Some(Credential { api_token, testnet }))
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut values = self.values();
        values.remove(TOKEN_KEY);
        values.remove(TESTNET_KEY);
        Ok(())
    }

    fn exists(&self) -> bool {
        self.values().contains_key(TOKEN_KEY)
    }
}
