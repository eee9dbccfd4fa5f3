//! Output styles for the final path list

use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

/// A rendering of the path list as a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// `(a b c)`
    Lisp,
    /// `a b c`
    Space,
    /// `a,b,c`
    Comma,
    /// `a\0b\0c`
    Null,
}

impl OutputStyle {
    /// Every style, in the order `-o help` lists them.
    pub const ALL: [OutputStyle; 4] = [
        OutputStyle::Lisp,
        OutputStyle::Space,
        OutputStyle::Comma,
        OutputStyle::Null,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputStyle::Lisp => "lisp",
            OutputStyle::Space => "space",
            OutputStyle::Comma => "comma",
            OutputStyle::Null => "null",
        }
    }

    fn separator(self) -> &'static [u8] {
        match self {
            OutputStyle::Lisp | OutputStyle::Space => b" ",
            OutputStyle::Comma => b",",
            OutputStyle::Null => b"\0",
        }
    }

    /// Render the paths as raw bytes, so names that are not UTF-8 survive.
    pub fn render<P: AsRef<Path>>(self, entries: &[P]) -> Vec<u8> {
        let mut out = Vec::new();
        if self == OutputStyle::Lisp {
            out.push(b'(');
        }
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                out.extend_from_slice(self.separator());
            }
            out.extend_from_slice(&path_bytes(entry.as_ref()));
        }
        if self == OutputStyle::Lisp {
            out.push(b')');
        }
        out
    }
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What `-o` asked for: a style to render with, or the list of styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSelection {
    Style(OutputStyle),
    Help,
}

impl FromStr for StyleSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "help" {
            return Ok(StyleSelection::Help);
        }
        OutputStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .map(StyleSelection::Style)
            .ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}

/// The `-o help` listing, one style name per line.
pub fn style_list() -> String {
    OutputStyle::ALL
        .iter()
        .map(|style| format!("{}\n", style.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entries(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_lisp() {
        assert_eq!(OutputStyle::Lisp.render(&entries(&["a", "b"])), b"(a b)");
        assert_eq!(OutputStyle::Lisp.render(&entries(&[])), b"()");
    }

    #[test]
    fn test_separators() {
        let ab = entries(&["a", "b"]);
        assert_eq!(OutputStyle::Space.render(&ab), b"a b");
        assert_eq!(OutputStyle::Comma.render(&ab), b"a,b");
        assert_eq!(OutputStyle::Null.render(&ab), b"a\0b");
    }

    #[test]
    fn test_empty_and_single() {
        for style in [OutputStyle::Space, OutputStyle::Comma, OutputStyle::Null] {
            assert!(style.render(&entries(&[])).is_empty());
            assert_eq!(style.render(&entries(&["only"])), b"only");
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_bytes_pass_through() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad = PathBuf::from(OsStr::from_bytes(b"bad\xffname.txt"));
        let good = PathBuf::from("ok.txt");
        assert_eq!(
            OutputStyle::Null.render(&[bad, good]),
            b"bad\xffname.txt\0ok.txt"
        );
    }

    #[test]
    fn test_parse_names() {
        for style in OutputStyle::ALL {
            assert_eq!(
                style.name().parse::<StyleSelection>().unwrap(),
                StyleSelection::Style(style)
            );
        }
        assert_eq!("help".parse::<StyleSelection>().unwrap(), StyleSelection::Help);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "bogus".parse::<StyleSelection>().unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(ref name) if name == "bogus"));
        // Names are case sensitive
        assert!("LISP".parse::<StyleSelection>().is_err());
    }

    #[test]
    fn test_style_list() {
        assert_eq!(style_list(), "lisp\nspace\ncomma\nnull\n");
    }
}
