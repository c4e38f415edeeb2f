//! Translation resource file-name convention
//!
//! Translation files are named `<domain>.<locale>.<format>`, e.g.
//! `messages.en.yaml`. The name must contain exactly two `.` separators and
//! end with a format made of word characters (`[A-Za-z0-9_]`).

/// A file name that follows the `<domain>.<locale>.<format>` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationFileName<'a> {
    domain: &'a str,
    locale: &'a str,
    format: &'a str,
}

impl<'a> TranslationFileName<'a> {
    /// Separator between the three parts
    pub const SEPARATOR: char = '.';

    /// Parse a bare file name (no directory part).
    ///
    /// Returns `None` when the name does not follow the convention or the
    /// locale segment is empty.
    pub fn parse(file_name: &'a str) -> Option<Self> {
        if file_name.matches(Self::SEPARATOR).count() != 2 {
            return None;
        }

        let mut parts = file_name.splitn(3, Self::SEPARATOR);
        let domain = parts.next()?;
        let locale = parts.next()?;
        let format = parts.next()?;

        if locale.is_empty() || !is_word(format) {
            return None;
        }

        Some(Self {
            domain,
            locale,
            format,
        })
    }

    pub fn domain(&self) -> &'a str {
        self.domain
    }

    pub fn locale(&self) -> &'a str {
        self.locale
    }

    pub fn format(&self) -> &'a str {
        self.format
    }
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
