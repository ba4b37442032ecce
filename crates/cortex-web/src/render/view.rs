//! Detail page for a single snippet.

use cortex_core::Snippet;
use maud::{Markup, html};

use super::components::{format_time, page_shell};

/// Render the snippet detail page.
pub fn render(site_name: &str, flash: Option<&str>, snippet: &Snippet) -> Markup {
    let body = html! {
        div class="card" {
            div class="card-head" {
                h1 class="card-title" { (snippet.title) }
                span class="id-badge" { "#" (snippet.id) }
            }
            div class="content" { (snippet.content) }
            div class="card-meta" {
                span { "Created " (format_time(snippet.created)) }
                span { "Expires " (format_time(snippet.expires)) }
            }
        }
    };

    page_shell(site_name, &snippet.title, flash, body)
}
