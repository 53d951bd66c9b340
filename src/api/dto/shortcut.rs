//! DTOs for shortcut endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewShortcut, Shortcut};

/// Request body for `POST /`.
///
/// A missing `url` deserializes to an empty string so that it is reported by
/// validation together with any slug problems.
#[derive(Debug, Deserialize)]
pub struct CreateShortcutRequest {
    #[serde(default)]
    pub url: String,

    /// Desired slug; a random one is generated when absent.
    #[serde(default)]
    pub slug: Option<String>,
}

impl From<CreateShortcutRequest> for NewShortcut {
    fn from(req: CreateShortcutRequest) -> Self {
        NewShortcut::new(req.url, req.slug)
    }
}

/// JSON representation of a stored shortcut.
#[derive(Debug, Serialize)]
pub struct ShortcutResponse {
    pub slug: String,
    pub url: String,
    pub uses: i64,
}

impl From<Shortcut> for ShortcutResponse {
    fn from(shortcut: Shortcut) -> Self {
        Self {
            slug: shortcut.slug,
            url: shortcut.url,
            uses: shortcut.uses,
        }
    }
}
