//! The snippet record and its form-input counterparts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored snippet, as read back from the `snippets` table.
///
/// A snippet is visible only while the current time is before `expires`;
/// the store's queries enforce this, so an expired row never reaches a
/// handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Snippet {
    /// Row id assigned by the store. Always positive.
    pub id: i64,
    /// Title, at most 100 Unicode scalar values.
    pub title: String,
    /// Body text, unbounded.
    pub content: String,
    /// Creation timestamp (UTC).
    pub created: DateTime<Utc>,
    /// Expiry timestamp (UTC): `created` plus 1, 7, or 365 days.
    pub expires: DateTime<Utc>,
}

/// Raw submission form fields, exactly as posted.
///
/// Missing fields decode to empty strings so that every absence surfaces
/// as a validation message rather than a form-decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SnippetInput {
    /// Raw title field.
    #[serde(default)]
    pub title: String,
    /// Raw content field.
    #[serde(default)]
    pub content: String,
    /// Raw expiry field; must parse to one of [`crate::EXPIRY_CHOICES`].
    #[serde(default)]
    pub expires: String,
}

/// A submission that has passed validation and is ready to persist.
///
/// Only [`crate::validate`] constructs this, so holding one is proof the
/// invariants (non-blank trimmed title within the length cap, non-blank
/// content, legal expiry window) were checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    /// Validated title (stored as submitted, not trimmed).
    pub title: String,
    /// Validated content.
    pub content: String,
    /// Expiry window in days: 1, 7, or 365.
    pub expires_days: i64,
}
