//! Year tags taken from folder names

use std::fmt;
use std::path::Path;

/// A four digit year read from a directory name such as `1987`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTag([u8; 4]);

impl DateTag {
    /// Accepts exactly four ASCII digits and nothing else.
    pub fn parse(candidate: &str) -> Option<Self> {
        let bytes: [u8; 4] = candidate.as_bytes().try_into().ok()?;
        bytes.iter().all(u8::is_ascii_digit).then_some(Self(bytes))
    }

    /// Tag from the last component of `dir`, if it is a year.
    pub fn from_directory(dir: &Path) -> Option<Self> {
        dir.file_name()
            .and_then(|name| name.to_str())
            .and_then(Self::parse)
    }

    pub fn year(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// EXIF `DateTime` value. Month and day are unknown, so June 1st is used.
    pub fn exif_datetime(&self) -> String {
        format!("{}:06:01 00:00:00", self.year())
    }
}

impl fmt::Display for DateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_four_digits() {
        let tag = DateTag::parse("1987").unwrap();
        assert_eq!(tag.year(), "1987");
        assert_eq!(tag.exif_datetime(), "1987:06:01 00:00:00");
        assert_eq!(DateTag::parse("0000").map(|t| t.to_string()), Some("0000".to_string()));
    }

    #[test]
    fn test_rejects_everything_else() {
        for candidate in ["87", "19876", "19a7", "", "misc", " 987", "1987\n", "١٩٨٧"] {
            assert_eq!(DateTag::parse(candidate), None, "{:?}", candidate);
        }
    }

    #[test]
    fn test_from_directory() {
        assert_eq!(
            DateTag::from_directory(Path::new("images/1987")),
            DateTag::parse("1987")
        );
        assert_eq!(DateTag::from_directory(Path::new("images/1987/misc")), None);
        assert_eq!(DateTag::from_directory(Path::new("/")), None);
    }
}
