//! Localized UI text for the controls.
//!
//! Each control draws its tooltip text from a [`Messages`] catalog keyed by
//! [`MessageId`]. The catalog ships English defaults and can be overridden
//! wholesale or per-id from a JSON document, so hosts can plug in their own
//! translation pipeline without the controls knowing about it.

use serde::Deserialize;
use std::collections::HashMap;

/// Identifier for a localizable UI string.
///
/// The serde names match the message ids used by the hosting application's
/// translation catalogs (`"globe.maptext"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum MessageId {
    /// Globe toggle tooltip while the 3D globe is active.
    #[serde(rename = "globe.maptext")]
    GlobeMapText,
    /// Globe toggle tooltip while the 2D map is active.
    #[serde(rename = "globe.globetext")]
    GlobeGlobeText,
    /// Home button tooltip.
    #[serde(rename = "homebutton.buttontitle")]
    HomeButtonTitle,
}

impl MessageId {
    /// Built-in English text used when a catalog has no override.
    pub fn default_message(self) -> &'static str {
        match self {
            MessageId::GlobeMapText => "Switch to map (2D)",
            MessageId::GlobeGlobeText => "Switch to globe (3D)",
            MessageId::HomeButtonTitle => "Zoom to the initial extent",
        }
    }
}

/// Message catalog with per-id overrides over built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Messages {
    overrides: HashMap<MessageId, String>,
}

impl Messages {
    /// Catalog with no overrides; every lookup yields the default text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from a JSON object mapping message ids to strings.
    ///
    /// Ids absent from the document fall back to their defaults, so partial
    /// translations are fine.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Replaces the text for a single message id.
    pub fn set(&mut self, id: MessageId, text: impl Into<String>) {
        self.overrides.insert(id, text.into());
    }

    /// Resolves a message id to its localized text.
    pub fn format(&self, id: MessageId) -> &str {
        self.overrides
            .get(&id)
            .map(String::as_str)
            .unwrap_or_else(|| id.default_message())
    }
}
