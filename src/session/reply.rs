//! Decoding of the model's structured reply.
//!
//! The model is told to answer with a JSON object tagged by `action`. Decoding
//! happens in two steps so that a well-formed object with an unknown action is
//! reported as such instead of as a generic parse failure.

use crate::error::ReplyError;
use crate::google::{EventPayload, TaskPayload};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;
use strum::{Display, EnumString, VariantNames};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
pub enum Action {
    Event,
    Todo,
    Advice,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
pub enum SaveFlag {
    Yes,
    #[default]
    No,
}

impl SaveFlag {
    /// Only an exact `"Yes"` asks for an export. Any other value, including a
    /// misspelling or a non-string, leaves the event unsaved instead of
    /// failing the whole reply.
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let flag = match Value::deserialize(deserializer)? {
            Value::String(raw) => Self::from_str(&raw).unwrap_or_default(),
            _ => Self::No,
        };
        Ok(flag)
    }
}

/// A decoded reply. Each variant carries only the fields valid for its action,
/// so a `save` flag on a Todo or Advice reply is dropped during decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action")]
pub enum StructuredReply {
    Event {
        dialog: String,
        #[serde(default, deserialize_with = "SaveFlag::deserialize_lenient")]
        save: SaveFlag,
        response: EventPayload,
    },
    Todo {
        dialog: String,
        #[serde(deserialize_with = "TaskPayload::deserialize_lenient")]
        response: TaskPayload,
    },
    Advice {
        dialog: String,
    },
}

impl StructuredReply {
    pub fn decode(text: &str) -> Result<Self, ReplyError> {
        let json = extract_json(text).unwrap_or(text);
        let value: Value =
            serde_json::from_str(json).map_err(|e| ReplyError::Malformed(e.to_string()))?;

        let tag = value
            .get("action")
            .ok_or_else(|| ReplyError::Malformed("missing \"action\" field".into()))?;
        let Some(tag) = tag.as_str() else {
            return Err(ReplyError::UnknownAction(tag.to_string()));
        };
        if Action::from_str(tag).is_err() {
            return Err(ReplyError::UnknownAction(tag.to_string()));
        }

        serde_json::from_value(value).map_err(|e| ReplyError::Malformed(e.to_string()))
    }

    pub fn action(&self) -> Action {
        match self {
            Self::Event { .. } => Action::Event,
            Self::Todo { .. } => Action::Todo,
            Self::Advice { .. } => Action::Advice,
        }
    }

    pub fn dialog(&self) -> &str {
        match self {
            Self::Event { dialog, .. } | Self::Todo { dialog, .. } | Self::Advice { dialog } => {
                dialog
            }
        }
    }

    /// Only an Event reply can request an export.
    pub fn wants_export(&self) -> bool {
        matches!(
            self,
            Self::Event {
                save: SaveFlag::Yes,
                ..
            }
        )
    }
}

/// Pull a JSON object out of a reply that wraps it in a code fence or prose.
fn extract_json(text: &str) -> Option<&str> {
    if let Some(start) = text.find("```json") {
        let rest = &text[start + "```json".len()..];
        if let Some(end) = rest.find("```") {
            let candidate = rest[..end].trim();
            if !candidate.is_empty() {
                return Some(candidate);
            }
        }
    }

    if let Some(start) = text.find("```\n{") {
        let rest = &text[start + "```\n".len()..];
        if let Some(end) = rest.find("```") {
            let candidate = rest[..end].trim();
            if !candidate.is_empty() {
                return Some(candidate);
            }
        }
    }

    let open = text.find('{')?;
    let close = text.rfind('}')?;
    (close > open).then(|| &text[open..=close])
}
