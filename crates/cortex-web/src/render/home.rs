//! Listing page: the latest unexpired snippets.

use cortex_core::Snippet;
use maud::{Markup, html};

use super::components::{format_time, page_shell};

/// Render the snippet listing page.
pub fn render(site_name: &str, flash: Option<&str>, snippets: &[Snippet]) -> Markup {
    let body = html! {
        div class="card" {
            @if snippets.is_empty() {
                p class="empty" { "There's nothing to see here… yet!" }
            } @else {
                table class="listing" {
                    thead {
                        tr {
                            th { "Title" }
                            th { "Created" }
                            th { "ID" }
                        }
                    }
                    tbody {
                        @for snippet in snippets {
                            tr {
                                td {
                                    a href={ "/snippet/view/" (snippet.id) } { (snippet.title) }
                                }
                                td { (format_time(snippet.created)) }
                                td class="num" { "#" (snippet.id) }
                            }
                        }
                    }
                }
            }
        }
    };

    page_shell(site_name, "Home", flash, body)
}
