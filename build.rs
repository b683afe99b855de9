use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

/// Writes `OUT_DIR/app_metadata.rs`, included by `src/libs/secret.rs`.
struct AppMetadata {
    file: File,
}

impl AppMetadata {
    fn new() -> io::Result<Self> {
        let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
        let file = File::create(Path::new(&out_dir).join("app_metadata.rs"))?;
        Ok(Self { file })
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &str = {:?};",
            key.to_uppercase(),
            value
        )
    }

    fn write_bytes(&mut self, key: &str, value: &[u8]) -> io::Result<()> {
        let bytes = value.iter().map(|b| b.to_string()).collect::<Vec<_>>().join(", ");
        writeln!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &[u8; {}] = &[{}];",
            key.to_uppercase(),
            value.len(),
            bytes
        )
    }
}

/// Truncates or pads `seed` with `!` to exactly `len` bytes.
fn fit(seed: String, len: usize) -> Vec<u8> {
    let mut bytes = seed.into_bytes();
    bytes.resize(len, b'!');
    bytes
}

fn encryption_keys(package_name: &str) -> (Vec<u8>, Vec<u8>) {
    if let (Ok(key), Ok(iv)) = (env::var("ENCRYPTION_KEY"), env::var("ENCRYPTION_IV")) {
        if key.len() != KEY_LEN {
            panic!("ENCRYPTION_KEY must be exactly {} bytes long, got {} bytes", KEY_LEN, key.len());
        }
        if iv.len() != IV_LEN {
            panic!("ENCRYPTION_IV must be exactly {} bytes long, got {} bytes", IV_LEN, iv.len());
        }
        return (key.into_bytes(), iv.into_bytes());
    }

    println!("cargo:warning=ENCRYPTION_KEY or ENCRYPTION_IV not set, the auth token is encrypted with default keys.");
    println!("cargo:warning=Put a 32 byte ENCRYPTION_KEY and a 16 byte ENCRYPTION_IV into .env for release builds.");
    (
        fit(format!("{}_token_encryption_key", package_name), KEY_LEN),
        fit(format!("{}_token_iv", package_name), IV_LEN),
    )
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=ENCRYPTION_KEY");
    println!("cargo:rerun-if-env-changed=ENCRYPTION_IV");
    let _ = dotenv();

    let package_name = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "okr".to_string());
    let mut app_metadata = AppMetadata::new()?;
    app_metadata.write("NAME", &package_name)?;
    app_metadata.write("VERSION", &env::var("CARGO_PKG_VERSION").unwrap_or_default())?;

    let manifest = fs::read_to_string("Cargo.toml")?;
    let manifest: Value = toml::from_str(&manifest).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if let Some(metadata) = manifest.get("package").and_then(|pkg| pkg.get("metadata")).and_then(Value::as_table) {
        for (key, value) in metadata {
            if let Some(value) = value.as_str() {
                app_metadata.write(key, value)?;
            }
        }
    }

    let (key, iv) = encryption_keys(&package_name);
    app_metadata.write_bytes("ENCRYPTION_KEY", &key)?;
    app_metadata.write_bytes("ENCRYPTION_IV", &iv)?;

    Ok(())
}
