// SPDX-License-Identifier: MPL-2.0

use crate::pdga::FetchError;
use crate::state::ProfilerSettings;
use std::fmt;

/// Absolute profile URL on the canonical origin.
///
/// Only constructed through [`ProfileRef::normalize`], so every instance has
/// already been resolved against the origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileRef(String);

impl ProfileRef {
    /// Resolve a link href (absolute, legacy-origin or root-relative) to the
    /// canonical origin. Normalizing an already normalized URL is a no-op.
    pub fn normalize(reference: &str, origin: &str, legacy_origin: &str) -> Result<Self, FetchError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(FetchError::EmptyReference);
        }

        if reference.starts_with(origin) {
            return Ok(Self(reference.to_string()));
        }

        let path = reference.strip_prefix(legacy_origin).unwrap_or(reference);
        let url = if path.starts_with('/') {
            format!("{origin}{path}")
        } else {
            format!("{origin}/{path}")
        };
        Ok(Self(url))
    }

    pub fn with_settings(reference: &str, settings: &ProfilerSettings) -> Result<Self, FetchError> {
        Self::normalize(reference, &settings.origin, &settings.legacy_origin)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The parts of a profile page shown in the popup.
///
/// Fields are raw, unsanitized markup from the remote page. A section that
/// is missing remotely is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRecord {
    /// Player name heading (outer markup, id rewritten)
    pub title: String,
    /// Photo pane (outer markup)
    pub photo: String,
    /// Whether the photo pane actually holds an image
    pub has_photo: bool,
    /// Player info pane (inner markup)
    pub info: String,
}

/// A player profile link found on a host page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLink {
    pub href: String,
    pub text: String,
    /// Class attribute the link carries once tagged as a player link
    pub class: String,
}
