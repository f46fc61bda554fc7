//! Encrypted on-disk storage for the API token.
//!
//! The token returned by the login endpoint is the only credential kept on
//! disk; passwords are prompted for and forgotten.
//!
//! ## Format
//!
//! - **Cipher**: AES-256-CBC with PKCS#7 padding
//! - **Key Material**: key and IV embedded at build time by `build.rs`
//!   (`ENCRYPTION_KEY`, `ENCRYPTION_IV`)
//! - **Encoding**: base64, so the file stays plain text
//!
//! ## Lifecycle
//!
//! - `login` / `register` store a fresh token
//! - every task command loads it and asks the service to verify it
//! - a rejected token is cleared before the login prompt runs
//! - `logout` clears it; clearing a missing file is not an error

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use std::fs;
use std::path::{Path, PathBuf};

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    /// Creates a secret stored under `secret_name` in the application data directory.
    pub fn new(secret_name: &str) -> Self {
        let secret_file_path = DataStorage::new()
            .get_path(secret_name)
            .unwrap_or_else(|_| PathBuf::from(secret_name));
        Self::at(secret_file_path)
    }

    /// Creates a secret stored at an explicit path.
    pub fn at(secret_file_path: impl Into<PathBuf>) -> Self {
        Self {
            secret_file_path: secret_file_path.into(),
            key: APP_METADATA_ENCRYPTION_KEY.to_vec(),
            iv: APP_METADATA_ENCRYPTION_IV.to_vec(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.secret_file_path
    }

    pub fn exists(&self) -> bool {
        self.secret_file_path.is_file()
    }

    /// Decrypts and returns the stored value.
    pub fn load(&self) -> Result<String> {
        let encoded = fs::read_to_string(&self.secret_file_path)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let plaintext = cipher.decrypt_vec(&ciphertext)?;
        Ok(String::from_utf8(plaintext)?)
    }

    /// Encrypts `value` and replaces whatever was stored before.
    pub fn store(&self, value: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(value.as_bytes());

        if let Some(parent) = self.secret_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.secret_file_path, BASE64_STANDARD.encode(ciphertext))?;
        Ok(())
    }

    /// Removes the stored value. A missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.secret_file_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
