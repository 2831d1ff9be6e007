use keyring::Entry;
use tracing::{info, warn};

use crate::error::GatewayError;

/// Keyring service holding the Gemini API key.
pub const GEMINI_SERVICE: &str = "nutriai-gemini-api";
const ACCOUNT: &str = "nutriai";

#[tauri::command]
pub fn set_api_key(service: &str, key: &str) -> Result<(), String> {
    info!("Setting API key for service: {}", service);
    let entry = Entry::new(service, ACCOUNT).map_err(|e| {
        warn!("Failed to create keyring entry for {}: {}", service, e);
        e.to_string()
    })?;
    entry.set_password(key.trim()).map_err(|e| {
        warn!("Failed to set password for {}: {}", service, e);
        e.to_string()
    })
}

/// Reports whether a key is stored. The key itself never leaves the backend.
#[tauri::command]
pub fn get_api_key(service: &str) -> Result<Option<String>, String> {
    info!("Checking API key for service: {}", service);
    Ok(read_key(service)?.map(|_| "configured".to_string()))
}

#[tauri::command]
pub fn delete_api_key(service: &str) -> Result<(), String> {
    info!("Deleting API key for service: {}", service);
    let entry = Entry::new(service, ACCOUNT).map_err(|e| {
        warn!("Failed to create keyring entry for {}: {}", service, e);
        e.to_string()
    })?;
    match entry.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => {
            warn!("Failed to delete credential for {}: {}", service, e);
            Err(e.to_string())
        }
    }
}

fn read_key(service: &str) -> Result<Option<String>, GatewayError> {
    let entry = Entry::new(service, ACCOUNT).map_err(|e| {
        warn!("Failed to create keyring entry for {}: {}", service, e);
        GatewayError::Keychain(e.to_string())
    })?;
    match entry.get_password() {
        Ok(password) => Ok(Some(password)),
        Err(keyring::Error::NoEntry) => {
            info!("No API key found for service: {}", service);
            Ok(None)
        }
        Err(e) => {
            warn!("Failed to get password for {}: {}", service, e);
            Err(GatewayError::Keychain(e.to_string()))
        }
    }
}

/// The stored Gemini key, or `MissingApiKey`.
pub fn gemini_api_key() -> Result<String, GatewayError> {
    read_key(GEMINI_SERVICE)?
        .filter(|k| !k.trim().is_empty())
        .ok_or(GatewayError::MissingApiKey)
}
