//! Flash messages over the per-request session.
//!
//! The session itself is an opaque key-value capability injected into
//! handlers by the session manager layer; this module owns the one key
//! the application uses.

use tower_sessions::Session;

use crate::error::WebError;

/// Session key for the one-shot confirmation message.
const FLASH_KEY: &str = "flash";

/// Store a one-shot message to display on the next rendered page.
pub async fn put_flash(session: &Session, message: &str) -> Result<(), WebError> {
    session.insert(FLASH_KEY, message.to_string()).await?;
    Ok(())
}

/// Take the pending message, if any, removing it from the session.
pub async fn take_flash(session: &Session) -> Result<Option<String>, WebError> {
    Ok(session.remove::<String>(FLASH_KEY).await?)
}
