//! Filesystem utilities

use std::path::Path;

/// Reduce a client-supplied file name to its final path component
///
/// Returns `None` for names that would escape the target directory or are empty.
pub fn sanitize_file_name(name: &str) -> Option<String> {
    // browsers on windows may send full paths with backslashes
    let name = name.rsplit(['/', '\\']).next().unwrap_or("").trim();

    if name.is_empty() || name == "." || name == ".." {
        return None;
    }

    Some(name.to_string())
}

/// Lowercase extension of a file name, if any
pub fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check if a file name has one of the allowed extensions
pub fn has_allowed_extension(name: &str, allowed: &[String]) -> bool {
    extension_of(name)
        .map(|ext| allowed.iter().any(|a| a == &ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("song.mp3").as_deref(), Some("song.mp3"));
        assert_eq!(
            sanitize_file_name("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            sanitize_file_name("C:\\Users\\Music\\test.mp3").as_deref(),
            Some("test.mp3")
        );
        assert_eq!(sanitize_file_name(".."), None);
        assert_eq!(sanitize_file_name("dir/"), None);
        assert_eq!(sanitize_file_name(""), None);
    }

    #[test]
    fn test_has_allowed_extension() {
        let allowed = vec!["mp3".to_string()];
        assert!(has_allowed_extension("test.mp3", &allowed));
        assert!(has_allowed_extension("test.MP3", &allowed));
        assert!(!has_allowed_extension("test.txt", &allowed));
        assert!(!has_allowed_extension("test", &allowed));
    }
}
