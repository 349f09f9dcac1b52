//! Durable dye state.
//!
//! The record is a small JSON object. Reads are lenient (every field is
//! optional and falls back to the caller's default); writes are
//! fire-and-forget.

use crate::color::normalize_hue;
use crate::state::DyeState;
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// Key/value store holding one serialized dye record.
pub trait DyeStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError>;
}

/// Process-local store; used when the browser offers no persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl DyeStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
struct StoredDye {
    #[serde(default, deserialize_with = "lenient_number")]
    intensity: Option<f32>,
    #[serde(default, deserialize_with = "lenient_number")]
    x: Option<f32>,
    #[serde(default, deserialize_with = "lenient_number")]
    y: Option<f32>,
    #[serde(default, deserialize_with = "lenient_number")]
    hue: Option<f32>,
}

// Any non-number (string, null, object) reads as absent instead of failing the record.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .map(|v| v as f32)
        .filter(|v| v.is_finite()))
}

/// Parse a stored blob over `defaults`. Anything unreadable keeps the default.
pub fn decode_dye(raw: Option<&str>, defaults: DyeState) -> DyeState {
    let Some(raw) = raw else {
        return defaults;
    };
    let stored: StoredDye = match serde_json::from_str(raw) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[storage] ignoring malformed dye record: {}", e);
            return defaults;
        }
    };
    DyeState {
        intensity: stored
            .intensity
            .map_or(defaults.intensity, |v| v.clamp(0.0, 1.0)),
        x: stored.x.unwrap_or(defaults.x),
        y: stored.y.unwrap_or(defaults.y),
        hue: stored.hue.map_or(defaults.hue, normalize_hue),
    }
}

pub fn encode_dye(dye: &DyeState) -> String {
    // four finite floats cannot fail to serialize
    serde_json::to_string(dye).unwrap_or_default()
}

pub fn restore_dye(store: &dyn DyeStore, key: &str, defaults: DyeState) -> DyeState {
    decode_dye(store.load(key).as_deref(), defaults)
}

/// A restored hue of exactly 0 means "never chosen": take the accent hue.
pub fn seed_hue(mut dye: DyeState, accent_hue: f32) -> DyeState {
    if dye.hue == 0.0 {
        dye.hue = normalize_hue(accent_hue);
    }
    dye
}

/// Write the dye record; failures are logged and dropped.
pub fn persist_dye(store: &dyn DyeStore, key: &str, dye: &DyeState) {
    if let Err(e) = store.save(key, &encode_dye(dye)) {
        log::warn!("[storage] dye state not saved: {}", e);
    }
}
