//! Page shell: document head, sidebar selector and content area

use std::fmt::Write;

use crate::utils::escape_html;

use super::Page;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = r"
*{box-sizing:border-box}
body{margin:0;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;color:#262730;display:flex;min-height:100vh}
#sidebar{width:240px;flex-shrink:0;background:#f0f2f6;padding:24px 16px}
#sidebar h2{font-size:14px;font-weight:600;margin:0 0 12px}
#sidebar label{display:flex;align-items:center;gap:8px;padding:4px 0;cursor:pointer}
#sidebar a{color:inherit;text-decoration:none}
#main{flex:1;padding:32px 48px;max-width:1100px}
table{border-collapse:collapse;font-size:13px;margin:12px 0}
th,td{border:1px solid #e6e9ef;padding:4px 8px;text-align:left;white-space:nowrap}
th{background:#fafafa}
.table-wrap{overflow-x:auto}
.tabs input[type=radio]{display:none}
.tabs label.tab{display:inline-block;padding:8px 16px;cursor:pointer;border-bottom:2px solid transparent}
.tabs input[type=radio]:checked+label.tab{border-bottom-color:#ff4b4b;color:#ff4b4b}
.tab-panel{display:none;padding-top:16px}
#tab-0:checked~#panel-0,#tab-1:checked~#panel-1,#tab-2:checked~#panel-2{display:block}
form .field{margin-bottom:12px}
form label{display:block;font-size:14px;margin-bottom:4px}
form input,form select{width:100%;max-width:420px;padding:6px 8px;font-size:14px}
button{padding:8px 20px;font-size:14px;cursor:pointer}
.result{margin-top:24px}
";

/// Sidebar radio group linking the three views
fn sidebar(active: Page) -> String {
    let mut out = String::from("<nav id=\"sidebar\"><h2>Select page</h2>");
    for page in Page::ALL {
        let checked = if page == active { " checked" } else { "" };
        let _ = write!(
            out,
            "<a href=\"{path}\"><label><input type=\"radio\" name=\"page\" value=\"{value}\"{checked} \
             onclick=\"location.href='{path}'\">{label}</label></a>",
            path = page.path(),
            value = page.path().trim_start_matches('/'),
            label = page.label(),
        );
    }
    out.push_str("</nav>");
    out
}

/// Wrap view content into a complete HTML document
#[must_use]
pub fn page(active: Page, title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n\
         <title>{title}</title>\n<script src=\"{PLOTLY_JS}\"></script>\n<style>{STYLE}</style>\n\
         </head>\n<body>\n{sidebar}\n<main id=\"main\">\n{content}\n</main>\n</body>\n</html>\n",
        title = escape_html(title),
        sidebar = sidebar(active),
    )
}

/// Page shown when a view fails to render
#[must_use]
pub fn error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Error</title>\
         <style>{STYLE}</style></head>\n<body>\n<main id=\"main\"><h1>Something went wrong</h1>\
         <pre>{message}</pre></main>\n</body>\n</html>\n",
        message = escape_html(message),
    )
}
