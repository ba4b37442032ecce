//! Core types and validation rules for Cortex Cache.
//!
//! This crate provides:
//! - The [`Snippet`] record as stored and served by the application
//! - The raw form input type and its validated counterpart
//! - The submission validation rules (pure, no I/O)
//!
//! The HTTP application lives in `cortex-web`; anything here must stay
//! usable without a running server or database.

mod snippet;
pub mod validate;

// ═══════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════

/// Maximum snippet title length, counted in Unicode scalar values.
pub const MAX_TITLE_CHARS: usize = 100;

/// The only legal expiry windows, in days. Ordered as presented in the
/// submission form (longest first).
pub const EXPIRY_CHOICES: [i64; 3] = [365, 7, 1];

pub use snippet::{NewSnippet, Snippet, SnippetInput};
pub use validate::{FieldErrors, validate};
