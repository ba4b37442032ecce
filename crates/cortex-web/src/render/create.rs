//! Submission form page, with inline validation messages.

use cortex_core::{EXPIRY_CHOICES, FieldErrors, SnippetInput};
use maud::{Markup, html};

use super::components::page_shell;

/// Human label for an expiry choice.
fn expiry_label(days: i64) -> &'static str {
    match days {
        365 => "One year",
        7 => "One week",
        _ => "One day",
    }
}

/// Render the snippet submission form.
///
/// `input` repopulates the fields on a failed submission; `errors` maps
/// field names to their messages. An empty form is rendered by passing a
/// default input (with the expiry preselected) and no errors.
pub fn render(
    site_name: &str,
    flash: Option<&str>,
    input: &SnippetInput,
    errors: &FieldErrors,
) -> Markup {
    let body = html! {
        div class="card" {
            form class="snippet-form" action="/snippet/create" method="post" {
                div {
                    label for="title" { "Title" }
                    @if let Some(message) = errors.get("title") {
                        span class="field-error" { (message) }
                    }
                    input type="text" id="title" name="title" value=(input.title);
                }
                div {
                    label for="content" { "Content" }
                    @if let Some(message) = errors.get("content") {
                        span class="field-error" { (message) }
                    }
                    textarea id="content" name="content" { (input.content) }
                }
                div {
                    label { "Delete in" }
                    @if let Some(message) = errors.get("expires") {
                        span class="field-error" { (message) }
                    }
                    div class="expiry-options" {
                        @for days in EXPIRY_CHOICES {
                            label {
                                input type="radio" name="expires" value=(days)
                                    checked[input.expires == days.to_string()];
                                (expiry_label(days))
                            }
                        }
                    }
                }
                button type="submit" class="submit" { "Publish snippet" }
            }
        }
    };

    page_shell(site_name, "Create a new snippet", flash, body)
}
