//! Shortcut entity representing a slug → URL mapping.

use validator::Validate;

use crate::utils::slug_generator::{SLUG_REGEX, validate_not_reserved};

/// A stored shortcut.
///
/// `slug` and `url` never change after creation. `uses` starts at zero and is
/// incremented only by a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub slug: String,
    pub url: String,
    pub uses: i64,
}

impl Shortcut {
    /// Creates a new Shortcut instance.
    pub fn new(slug: String, url: String, uses: i64) -> Self {
        Self { slug, url, uses }
    }
}

/// Input data for creating a new shortcut.
///
/// `slug: None` asks the service to allocate one. Validation reports every
/// violated rule of every field at once.
#[derive(Debug, Clone, Validate)]
pub struct NewShortcut {
    #[validate(url(message = "Must be a valid absolute URL"))]
    pub url: String,

    #[validate(
        length(min = 2, message = "Slug must be at least 2 characters"),
        regex(
            path = "*SLUG_REGEX",
            message = "Slug must contain only alphanumeric characters and dashes"
        ),
        custom(function = "validate_not_reserved", message = "Slug is reserved")
    )]
    pub slug: Option<String>,
}

impl NewShortcut {
    pub fn new(url: impl Into<String>, slug: Option<String>) -> Self {
        Self {
            url: url.into(),
            slug,
        }
    }
}
