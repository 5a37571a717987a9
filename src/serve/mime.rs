//! Content types by file extension

use std::path::Path;

pub const TEXT_PLAIN: &str = "text/plain";
pub const TEXT_HTML: &str = "text/html";
pub const APPLICATION_JSON: &str = "application/json";

/// Content type for a static resource; unknown or missing extensions are
/// served as plain text
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => TEXT_HTML,
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("json") => APPLICATION_JSON,
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        _ => TEXT_PLAIN,
    }
}
