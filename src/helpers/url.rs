//! URL helper functions

/// Join a path onto the site base URL
///
/// # Examples
/// ```ignore
/// absolute_url("https://example.com", "/banner.png") // -> "https://example.com/banner.png"
/// ```
pub fn absolute_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');

    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Resolve an image or link value to an absolute URL
///
/// Values that already carry an "http" marker pass through unchanged;
/// everything else is prefixed with the site base URL.
pub fn ensure_absolute(base: &str, value: &str) -> String {
    if value.contains("http") {
        value.to_string()
    } else {
        absolute_url(base, value)
    }
}
