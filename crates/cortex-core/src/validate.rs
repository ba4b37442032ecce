//! Submission validation.
//!
//! Three fixed rules, applied per field; the first violated rule per
//! field wins. Pure function, no I/O.

use std::collections::BTreeMap;

use crate::{EXPIRY_CHOICES, MAX_TITLE_CHARS, NewSnippet, SnippetInput};

/// Field name → message for the first violated rule.
///
/// `BTreeMap` keeps iteration order stable so re-rendered forms list
/// errors deterministically.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

const MSG_BLANK: &str = "This field cannot be blank";
const MSG_TOO_LONG: &str = "This field cannot be more than 100 characters long";
const MSG_BAD_EXPIRY: &str = "This field must equal 1, 7 or 365";

/// Validate a raw submission.
///
/// Returns the typed [`NewSnippet`] when every rule passes, or the map of
/// field errors otherwise. Errors on different fields coexist; within a
/// field only the first violated rule is reported.
///
/// Title length is counted in Unicode scalar values, not bytes, so a
/// 100-character title survives regardless of script.
pub fn validate(input: SnippetInput) -> Result<NewSnippet, FieldErrors> {
    let mut errors = FieldErrors::new();

    if input.title.trim().is_empty() {
        errors.insert("title", MSG_BLANK);
    } else if input.title.chars().count() > MAX_TITLE_CHARS {
        errors.insert("title", MSG_TOO_LONG);
    }

    if input.content.trim().is_empty() {
        errors.insert("content", MSG_BLANK);
    }

    let expires_days = match input.expires.trim().parse::<i64>() {
        Ok(days) if EXPIRY_CHOICES.contains(&days) => Some(days),
        _ => {
            errors.insert("expires", MSG_BAD_EXPIRY);
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewSnippet {
        title: input.title,
        content: input.content,
        // errors is empty, so the expiry parse succeeded
        expires_days: expires_days.unwrap_or(EXPIRY_CHOICES[0]),
    })
}
