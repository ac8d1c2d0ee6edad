use std::path::Path;

/// Turn a catalog image reference into a URI the image loaders understand.
///
/// Absolute URLs pass through; protocol-relative ones get https; anything
/// else is a path relative to the assets directory.
pub fn resolve_image(src: &str, assets_dir: &Path) -> String {
    let src = src.trim();
    if src.starts_with("http://")
        || src.starts_with("https://")
        || src.starts_with("file://")
        || src.starts_with("data:")
    {
        return src.to_string();
    }
    if let Some(rest) = src.strip_prefix("//") {
        return format!("https://{rest}");
    }
    let relative = src.trim_start_matches('/');
    format!("file://{}", assets_dir.join(relative).display())
}
