//! # Registry Data Model
//!
//! The registry holds exactly one kind of record: an [`AppEntry`] keyed by
//! its unique `appName`. Wire names are camelCase throughout.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A registry record: the unique name plus its data block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppEntry {
    /// Unique lookup key. Immutable after creation.
    pub app_name: String,
    pub app_data: AppDetails,
}

/// The data block of an entry.
///
/// `app_path` is immutable through the public contract; `app_owner` and
/// `is_valid` are the only fields an update may touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppDetails {
    pub app_path: String,
    pub app_owner: String,
    pub is_valid: bool,
}

impl AppDetails {
    /// Apply an allow-listed update: present fields overwrite, absent fields
    /// stay. Pure overwrite, so applying the same update twice is a no-op.
    pub fn apply(&mut self, update: &AppUpdate) {
        if let Some(owner) = &update.app_owner {
            self.app_owner = owner.clone();
        }
        if let Some(valid) = update.is_valid {
            self.is_valid = valid;
        }
    }
}

/// The fields an update is allowed to carry, already validated.
///
/// This is what the store receives. `app_name` and `app_path` are absent by
/// construction, so no store implementation can be tricked into writing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppUpdate {
    pub app_owner: Option<String>,
    pub is_valid: Option<bool>,
}

/// An update request body as received on the wire.
///
/// Deserialization keeps a side channel of every key that is not in the
/// allow-list, in the order the keys appeared in the document, so validation
/// can name all of them instead of silently dropping what a strict schema
/// would reject. Duplicate unknown keys collapse to their first occurrence,
/// matching JSON object semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppPatch {
    pub app_owner: Option<String>,
    pub is_valid: Option<bool>,
    /// Keys outside `{appOwner, isValid}` actually received, in input order.
    pub unknown_fields: Vec<String>,
}

impl AppPatch {
    /// The validated field set to hand to the store.
    pub fn to_update(&self) -> AppUpdate {
        AppUpdate {
            app_owner: self.app_owner.clone(),
            is_valid: self.is_valid,
        }
    }
}

impl<'de> Deserialize<'de> for AppPatch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PatchVisitor;

        impl<'de> Visitor<'de> for PatchVisitor {
            type Value = AppPatch;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an app update object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<AppPatch, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut patch = AppPatch::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "appOwner" => patch.app_owner = Some(map.next_value()?),
                        "isValid" => patch.is_valid = Some(map.next_value()?),
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                            if !patch.unknown_fields.contains(&key) {
                                patch.unknown_fields.push(key);
                            }
                        }
                    }
                }
                Ok(patch)
            }
        }

        deserializer.deserialize_map(PatchVisitor)
    }
}

/// A sparse search filter. Absent keys impose no constraint.
///
/// Present keys combine by conjunction. Only present keys serialize, so the
/// criteria echoed back to a caller contains exactly what was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
}

impl SearchCriteria {
    /// Whether an entry satisfies every present criterion.
    ///
    /// `app_name` and `app_owner` match by case-sensitive equality, never by
    /// substring. `is_valid` is exact boolean equality. An empty criteria set
    /// matches everything.
    pub fn matches(&self, entry: &AppEntry) -> bool {
        self.app_name
            .as_deref()
            .map_or(true, |name| entry.app_name == name)
            && self
                .app_owner
                .as_deref()
                .map_or(true, |owner| entry.app_data.app_owner == owner)
            && self
                .is_valid
                .map_or(true, |valid| entry.app_data.is_valid == valid)
    }

    /// True when no criterion is present.
    pub fn is_empty(&self) -> bool {
        self.app_name.is_none() && self.app_owner.is_none() && self.is_valid.is_none()
    }
}
