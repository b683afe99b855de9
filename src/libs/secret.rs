//! Encrypted storage for small secrets such as the API auth token.
//!
//! Values are encrypted with AES-256-CBC using keys embedded at build time
//! (see `build.rs`), base64 encoded and written to a file in the application
//! data directory.

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    secret_name: String,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(secret_name: &str) -> Self {
        Self {
            secret_name: secret_name.to_owned(),
            key: APP_METADATA_ENCRYPTION_KEY.to_vec(),
            iv: APP_METADATA_ENCRYPTION_IV.to_vec(),
        }
    }

    fn path(&self) -> Result<PathBuf> {
        DataStorage::new().get_path(&self.secret_name)
    }

    pub fn exists(&self) -> bool {
        self.path().map(|path| path.exists()).unwrap_or(false)
    }

    /// Decrypts and returns the stored value.
    ///
    /// # Errors
    ///
    /// Fails when nothing is stored or the file cannot be decrypted.
    pub fn read(&self) -> Result<String> {
        let mut file = File::open(self.path()?)?;
        let mut encoded = String::new();
        file.read_to_string(&mut encoded)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let plaintext = cipher.decrypt_vec(&ciphertext)?;
        Ok(String::from_utf8(plaintext)?)
    }

    /// Encrypts `value` and replaces whatever was stored before.
    pub fn write(&self, value: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(value.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        let path = self.path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(&path)?;
        file.write_all(encoded.as_bytes())?;
        Ok(())
    }

    pub fn delete(&self) -> Result<()> {
        DataStorage::new().remove(&self.secret_name)
    }
}
