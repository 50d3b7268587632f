use std::path::MAIN_SEPARATOR;

/// Formats a path with ~ substitution for the home directory
///
/// Only whole leading segments are replaced: with `HOME=/home/al`, the path
/// `/home/alice` is left alone.
///
/// # Examples
///
/// ```no_run
/// use lcd::format_path_with_tilde;
///
/// // Returns "~/src/lcd" if the home directory is /home/alice
/// let formatted = format_path_with_tilde("/home/alice/src/lcd");
/// ```
pub fn format_path_with_tilde(path: &str) -> String {
    let home = dirs::home_dir().map(|home| home.to_string_lossy().into_owned());
    format_path_with_tilde_internal(path, home.as_deref())
}

/// Internal helper for path formatting with an explicit home (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &str, home: Option<&str>) -> String {
    let Some(home) = home.map(|h| h.trim_end_matches(MAIN_SEPARATOR)).filter(|h| !h.is_empty())
    else {
        return path.to_string();
    };

    match path.strip_prefix(home) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with(MAIN_SEPARATOR) => format!("~{}", rest),
        _ => path.to_string(),
    }
}
