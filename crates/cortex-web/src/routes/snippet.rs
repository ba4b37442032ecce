//! Snippet detail and creation handlers.

use axum::Form;
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use maud::Markup;
use tower_sessions::Session;

use cortex_core::{FieldErrors, SnippetInput, validate};

use crate::error::WebError;
use crate::render;
use crate::session::{put_flash, take_flash};
use crate::state::AppState;

/// Flash message stored after a successful creation.
const CREATED_FLASH: &str = "Snippet successfully created!";

/// Render the detail page for one snippet.
///
/// The id segment is parsed here rather than by the extractor so that
/// non-numeric and non-positive values become a 404, not a 400: to the
/// client, `/snippet/view/abc` is just a page that does not exist.
pub async fn view(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Markup, WebError> {
    let id: i64 = id.parse().map_err(|_| WebError::NotFound)?;
    if id < 1 {
        return Err(WebError::NotFound);
    }

    let snippet = state.store.get(id).await?.ok_or(WebError::NotFound)?;
    let flash = take_flash(&session).await?;

    Ok(render::view::render(
        &state.config.site_name,
        flash.as_deref(),
        &snippet,
    ))
}

/// Render the empty submission form.
pub async fn create_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<Markup, WebError> {
    let flash = take_flash(&session).await?;

    // Preselect the longest expiry window.
    let input = SnippetInput {
        expires: "365".to_string(),
        ..SnippetInput::default()
    };

    Ok(render::create::render(
        &state.config.site_name,
        flash.as_deref(),
        &input,
        &FieldErrors::new(),
    ))
}

/// Validate a submission and create the snippet.
///
/// On field errors the form is re-rendered with inline messages and the
/// submitted values, status 422; nothing is persisted. On success the
/// client is redirected to the new snippet's page with 303 See Other.
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<SnippetInput>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(input) = form.map_err(|err| WebError::BadRequest(err.to_string()))?;

    let snippet = match validate(input.clone()) {
        Ok(snippet) => snippet,
        Err(errors) => {
            let page =
                render::create::render(&state.config.site_name, None, &input, &errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    let id = state.store.insert(&snippet).await?;
    put_flash(&session, CREATED_FLASH).await?;

    tracing::info!(id, "snippet created");

    Ok(Redirect::to(&format!("/snippet/view/{id}")).into_response())
}
