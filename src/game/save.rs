//! Profile persistence.
//!
//! The profile lives in `localStorage` as camelCase JSON. Loading is
//! deliberately forgiving: saves written by older builds (array-shaped act
//! flags, malformed freshness fields) are repaired field-by-field rather
//! than rejected, and anything unreadable falls back to a fresh profile
//! with a warning. Only storing can genuinely fail.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::freshness::{DEFAULT_WINDOW, FreshnessMemory};

pub const STORAGE_KEY: &str = "bonzookaa_save_v1";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("browser storage unavailable")]
    StorageUnavailable,
    #[error("failed to serialize save data: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write save data to storage")]
    Write,
}

/// The persisted slice of a player profile this runtime consults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMeta {
    /// Seeds every procedural stream for this profile.
    pub world_seed: u64,
    pub acts_unlocked: BTreeMap<String, bool>,
    pub acts_completed: BTreeMap<String, bool>,
    pub freshness: Option<FreshnessMemory>,
}

impl ProfileMeta {
    /// Fresh profile with the first act open.
    pub fn new_profile(world_seed: u64) -> Self {
        let mut meta = Self {
            world_seed,
            ..Self::default()
        };
        meta.acts_unlocked.insert("act1".to_owned(), true);
        meta
    }

    pub fn act_unlocked(&self, act_id: &str) -> bool {
        self.acts_unlocked.get(act_id).copied().unwrap_or(false)
    }
}

/// Rebuilds a profile from arbitrary JSON, repairing legacy and malformed
/// shapes instead of failing.
pub fn repair(value: &Value) -> ProfileMeta {
    let Some(obj) = value.as_object() else {
        warn!("save data is not an object; starting a fresh profile");
        return ProfileMeta::new_profile(0);
    };
    let mut meta = ProfileMeta {
        world_seed: obj.get("worldSeed").and_then(Value::as_u64).unwrap_or(0),
        acts_unlocked: repair_flag_map(obj.get("actsUnlocked")),
        acts_completed: repair_flag_map(obj.get("actsCompleted")),
        freshness: repair_freshness(obj.get("freshness")),
    };
    if meta.acts_unlocked.is_empty() {
        meta.acts_unlocked.insert("act1".to_owned(), true);
    }
    meta
}

/// Older builds stored act flags as arrays of ids; current shape is a map.
fn repair_flag_map(value: Option<&Value>) -> BTreeMap<String, bool> {
    match value {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(k, v)| (k.clone(), v.as_bool().unwrap_or(true)))
            .collect(),
        Some(Value::Array(ids)) => {
            warn!("normalizing legacy array-shaped act flags");
            ids.iter()
                .filter_map(Value::as_str)
                .map(|id| (id.to_owned(), true))
                .collect()
        }
        _ => BTreeMap::new(),
    }
}

/// Field-wise freshness repair: a bad window falls back to the default
/// (floats floored), a bad history becomes empty, scalar history entries are
/// stringified and compound ones dropped. A non-object is treated as absent
/// so `ensure` re-initializes it lazily.
fn repair_freshness(value: Option<&Value>) -> Option<FreshnessMemory> {
    let obj = value?.as_object()?;
    let window = obj
        .get("window")
        .and_then(Value::as_f64)
        .map(|w| w.floor().max(1.0) as u32)
        .unwrap_or(DEFAULT_WINDOW);
    let recent = match obj.get("recent") {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|e| match e {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Some(FreshnessMemory { window, recent })
}

/// Loads the profile from browser storage. `None` means no save (or an
/// unreadable one, after a warning); the caller starts fresh.
pub fn load() -> Result<Option<ProfileMeta>, SaveError> {
    let storage = local_storage()?;
    let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) else {
        return Ok(None);
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => Ok(Some(repair(&value))),
        Err(err) => {
            warn!("save data unparseable ({err}); starting a fresh profile");
            Ok(None)
        }
    }
}

/// Writes the profile back in canonical shape.
pub fn store(meta: &ProfileMeta) -> Result<(), SaveError> {
    let storage = local_storage()?;
    let raw = serde_json::to_string(meta)?;
    storage
        .set_item(STORAGE_KEY, &raw)
        .map_err(|_| SaveError::Write)
}

fn local_storage() -> Result<web_sys::Storage, SaveError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(SaveError::StorageUnavailable)
}
