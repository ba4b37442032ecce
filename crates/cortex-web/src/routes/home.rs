//! Listing page handler.

use axum::extract::State;
use maud::Markup;
use tower_sessions::Session;

use crate::error::WebError;
use crate::render;
use crate::session::take_flash;
use crate::state::AppState;

/// Render the snippet listing page with the latest unexpired snippets.
pub async fn home(State(state): State<AppState>, session: Session) -> Result<Markup, WebError> {
    let snippets = state.store.latest().await?;
    let flash = take_flash(&session).await?;

    Ok(render::home::render(
        &state.config.site_name,
        flash.as_deref(),
        &snippets,
    ))
}
