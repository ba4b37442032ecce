//! Shared page components: the document shell, inline styles, and
//! formatting helpers.

use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline CSS for all pages.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#0b7261;--accent-hover:#095c4e;--surface:#fff;--border:rgba(11,114,97,.18);--error:#b3261e;--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:680px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}

header.top{width:100%;max-width:680px;display:flex;align-items:baseline;gap:1.25rem;margin-bottom:1.5rem}
.brand{font-size:1.35rem;font-weight:800;letter-spacing:-.02em;color:var(--fg)}
.brand:hover{text-decoration:none;color:var(--accent)}
nav.links{display:flex;gap:1rem;font-size:.95rem}

.flash{width:100%;background:var(--accent);color:#fff;border-radius:8px;padding:.6rem 1rem;margin-bottom:1.25rem;font-size:.95rem}

.card{padding:1.5rem;border:1px solid var(--border);border-radius:10px;background:var(--surface);margin-bottom:1rem}
.card-head{display:flex;align-items:baseline;justify-content:space-between;gap:1rem;margin-bottom:.75rem}
.card-title{font-size:1.25rem;font-weight:700;letter-spacing:-.01em}
.id-badge{font-family:var(--mono);font-size:.78rem;color:var(--fg3);background:var(--bg);border:1px solid var(--border);border-radius:100px;padding:.15rem .6rem;white-space:nowrap}
.content{white-space:pre-wrap;word-break:break-word;font-size:1.02rem;line-height:1.7;color:var(--fg)}
.card-meta{display:flex;justify-content:space-between;gap:1rem;margin-top:1.25rem;padding-top:.85rem;border-top:1px solid var(--border);font-size:.82rem;color:var(--fg3)}

table.listing{width:100%;border-collapse:collapse;font-size:.95rem}
table.listing th{text-align:left;font-size:.78rem;text-transform:uppercase;letter-spacing:.05em;color:var(--fg3);padding:.4rem .5rem;border-bottom:1px solid var(--border)}
table.listing td{padding:.6rem .5rem;border-bottom:1px solid var(--border)}
table.listing td.num{font-family:var(--mono);font-size:.82rem;color:var(--fg3);text-align:right}
.empty{color:var(--fg2);padding:2rem 0;text-align:center}

form.snippet-form{display:flex;flex-direction:column;gap:1.1rem}
form.snippet-form label{font-weight:600;font-size:.92rem;display:block;margin-bottom:.3rem}
form.snippet-form input[type=text],form.snippet-form textarea{width:100%;font:inherit;padding:.55rem .7rem;border:1px solid var(--border);border-radius:6px;background:var(--surface);color:var(--fg)}
form.snippet-form textarea{min-height:9rem;resize:vertical}
.field-error{display:block;color:var(--error);font-size:.85rem;margin-bottom:.3rem}
.expiry-options{display:flex;gap:1.25rem;font-size:.95rem}
.expiry-options label{font-weight:400;display:inline-flex;align-items:center;gap:.35rem;margin:0}
button.submit{align-self:flex-start;font:inherit;font-weight:600;background:var(--accent);color:#fff;border:none;border-radius:6px;padding:.55rem 1.2rem;cursor:pointer}
button.submit:hover{background:var(--accent-hover)}

.footer{text-align:center;margin-top:1.5rem;padding-top:.75rem;font-size:.8rem;color:var(--fg3);width:100%;max-width:680px}

@media(prefers-color-scheme:dark){
:root{--bg:#0a0f0e;--fg:#e5e5e5;--fg2:#a0a0a0;--fg3:#666;--accent:#2dd4bf;--accent-hover:#5eead4;--surface:#111817;--border:rgba(45,212,191,.2);--error:#f2b8b5}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fafafa;color:#1a1a2e;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#666;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#0b7261}
@media(prefers-color-scheme:dark){
body{background:#0f1716;color:#e0e8e6}
.error-page p{color:#aaa}
.error-page a{color:#2dd4bf}
}
"#;

/// Content-Security-Policy header value.
///
/// Styles are inlined in each page; no scripts run anywhere.
pub const CSP_HEADER: &str = "default-src 'self'; style-src 'unsafe-inline'; img-src 'self' data:; script-src 'none'; form-action 'self'; frame-ancestors 'none'";

/// Render the full HTML page shell with head, nav, flash banner, and body.
pub fn page_shell(
    site_name: &str,
    page_title: &str,
    flash: Option<&str>,
    body_content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) " — " (site_name) }
                link rel="icon" type="image/svg+xml" href="/static/favicon.svg";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header class="top" {
                    a href="/" class="brand" { (site_name) }
                    nav class="links" {
                        a href="/" { "Home" }
                        a href="/snippet/create" { "New snippet" }
                    }
                }
                main {
                    @if let Some(message) = flash {
                        div class="flash" { (message) }
                    }
                    (body_content)
                }
                footer class="footer" {
                    "Snippets expire after 1, 7 or 365 days."
                }
            }
        }
    }
}

/// Format a timestamp for display, e.g. "07 Aug 2026 at 14:30".
pub fn format_time(ts: DateTime<Utc>) -> String {
    ts.format("%d %b %Y at %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn page_shell_contains_nav_and_title() {
        let page = page_shell("Cortex Cache", "Home", None, html! { p { "hi" } }).into_string();
        assert!(page.contains("Home — Cortex Cache"));
        assert!(page.contains(r#"href="/snippet/create""#));
        assert!(!page.contains("class=\"flash\""));
    }

    #[test]
    fn page_shell_shows_flash_when_present() {
        let page = page_shell(
            "Cortex Cache",
            "Home",
            Some("Snippet successfully created!"),
            html! {},
        )
        .into_string();
        assert!(page.contains("Snippet successfully created!"));
    }

    #[test]
    fn page_shell_escapes_dynamic_text() {
        let page = page_shell("Cortex Cache", "<b>sneaky</b>", None, html! {}).into_string();
        assert!(!page.contains("<b>sneaky</b>"));
        assert!(page.contains("&lt;b&gt;sneaky&lt;/b&gt;"));
    }

    #[test]
    fn format_time_is_stable() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 7, 14, 30, 0).unwrap();
        assert_eq!(format_time(ts), "07 Aug 2026 at 14:30");
    }
}
