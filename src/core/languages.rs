//! Language catalogs shown in the page selectors

use serde::Serialize;
use utoipa::ToSchema;

use crate::core::models::AUTO_DETECT;

/// Display name used for the auto-detect sentinel
pub const AUTO_DETECT_NAME: &str = "Auto-detect";

/// A single selectable language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LanguageEntry {
    /// Code sent to the provider
    pub code: String,
    /// Name shown to users
    pub name: String,
}

/// Ordered code -> display name mapping, immutable once built.
///
/// The target view is always computed from the full view, so the two can
/// never disagree about anything but the auto-detect entry.
#[derive(Debug, Clone, Default)]
pub struct LanguageCatalog {
    entries: Vec<LanguageEntry>,
}

impl LanguageCatalog {
    /// Build from a static `(code, name)` table, keeping its order
    pub fn from_table(table: &[(&str, &str)]) -> Self {
        Self {
            entries: table
                .iter()
                .map(|(code, name)| LanguageEntry {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    /// Full view, used for the source selector
    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    /// Full view minus the auto-detect sentinel, used for the target selector
    pub fn target_entries(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.entries.iter().filter(|e| e.code != AUTO_DETECT)
    }
}

/// Resolve user input to a code of `table`.
///
/// Accepts a code (case-insensitive) or a display name. When several codes
/// share a name the last one wins.
pub fn resolve_code(table: &'static [(&'static str, &'static str)], input: &str) -> Option<&'static str> {
    let wanted = input.trim().to_lowercase();

    table
        .iter()
        .find(|(code, _)| code.to_lowercase() == wanted)
        .or_else(|| {
            table
                .iter()
                .rev()
                .find(|(_, name)| name.to_lowercase() == wanted)
        })
        .map(|(code, _)| *code)
}
