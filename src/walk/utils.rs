//! Shared helpers for entry classification

use std::path::Path;

use glob::Pattern;

/// Get the base name of a path as a string, empty when there is none.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Dot-prefixed names are hidden.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Check if a name matches any of the ignore patterns, exactly or as a glob.
pub fn matches_ignore_pattern(name: &str, ignore_patterns: &[String]) -> bool {
    ignore_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        // Basic patterns
        assert!(glob_match("*.rs", "main.rs"));
        assert!(!glob_match("*.rs", "main.py"));
        assert!(glob_match("test*", "test_foo"));
        assert!(!glob_match("test*", "foo_test"));

        // Single character wildcard
        assert!(glob_match("test?.rs", "test1.rs"));
        assert!(!glob_match("test?.rs", "test12.rs"));

        // Character classes
        assert!(glob_match("[abc].txt", "a.txt"));
        assert!(!glob_match("[abc].txt", "d.txt"));
    }

    #[test]
    fn test_invalid_glob_never_matches() {
        assert!(!glob_match("[", "["));
        // Exact names still match through the literal comparison
        assert!(matches_ignore_pattern("[", &["[".to_string()]));
    }

    #[test]
    fn test_hidden_names() {
        assert!(is_hidden_name(".git"));
        assert!(is_hidden_name(".hidden"));
        assert!(!is_hidden_name("visible.txt"));
        assert!(!is_hidden_name(""));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("a/b/c.txt")), "c.txt");
        assert_eq!(base_name(Path::new("/")), "");
    }
}
