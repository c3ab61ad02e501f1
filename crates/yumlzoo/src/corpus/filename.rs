//! Zoo file name metadata

use serde::Serialize;
use std::fmt;

/// Kind of a diagram fragment file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    /// A single class cut out of a model
    Class,
    /// A single relation cut out of a model
    Rel,
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentKind::Class => write!(f, "class"),
            FragmentKind::Rel => write!(f, "rel"),
        }
    }
}

/// Whether a file holds a whole model or one numbered fragment of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ZooFileKind {
    Full,
    /// `number` saturates at `u64::MAX` for longer digit runs
    Fragment { fragment: FragmentKind, number: u64 },
}

impl fmt::Display for ZooFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZooFileKind::Full => write!(f, "full"),
            ZooFileKind::Fragment { fragment, number } => write!(f, "{}{}", fragment, number),
        }
    }
}

/// Metadata parsed from a zoo file name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ZooFileName {
    pub model: String,
    pub kind: ZooFileKind,
    /// Lowercased extension without the dot
    pub extension: String,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl ZooFileName {
    /// Parse `Model.ext` or `Model_class3.ext` / `Model_rel12.ext`.
    ///
    /// The fragment kind is matched case-insensitively. Returns `None` when
    /// the name has no usable extension.
    pub fn parse(file_name: &str) -> Option<Self> {
        let name = file_name.trim();
        let (stem, extension) = name.rsplit_once('.')?;
        if stem.is_empty() || extension.is_empty() || !extension.chars().all(is_word_char) {
            return None;
        }
        let extension = extension.to_lowercase();

        if let Some((model, fragment, number)) = Self::split_fragment(stem) {
            return Some(Self {
                model: model.to_string(),
                kind: ZooFileKind::Fragment { fragment, number },
                extension,
            });
        }

        Some(Self {
            model: stem.to_string(),
            kind: ZooFileKind::Full,
            extension,
        })
    }

    fn split_fragment(stem: &str) -> Option<(&str, FragmentKind, u64)> {
        let (model, tail) = stem.rsplit_once('_')?;
        if model.is_empty() {
            return None;
        }
        let tail = tail.to_lowercase();
        let (fragment, digits) = if let Some(digits) = tail.strip_prefix("class") {
            (FragmentKind::Class, digits)
        } else if let Some(digits) = tail.strip_prefix("rel") {
            (FragmentKind::Rel, digits)
        } else {
            return None;
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        // all ASCII digits, so overflow is the only failure
        let number = digits.parse().unwrap_or(u64::MAX);
        Some((model, fragment, number))
    }

    pub fn is_full(&self) -> bool {
        matches!(self.kind, ZooFileKind::Full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_model() {
        let parsed = ZooFileName::parse("Make.yuml").unwrap();
        assert_eq!(parsed.model, "Make");
        assert_eq!(parsed.kind, ZooFileKind::Full);
        assert_eq!(parsed.extension, "yuml");
        assert!(parsed.is_full());
    }

    #[test]
    fn test_fragment() {
        let parsed = ZooFileName::parse("RelationalDBSchema_class0.plantuml").unwrap();
        assert_eq!(parsed.model, "RelationalDBSchema");
        assert_eq!(
            parsed.kind,
            ZooFileKind::Fragment {
                fragment: FragmentKind::Class,
                number: 0
            }
        );
        assert_eq!(parsed.extension, "plantuml");
    }

    #[test]
    fn test_fragment_case_insensitive() {
        let parsed = ZooFileName::parse("  My_Model_REL12.PNG ").unwrap();
        assert_eq!(parsed.model, "My_Model");
        assert_eq!(
            parsed.kind,
            ZooFileKind::Fragment {
                fragment: FragmentKind::Rel,
                number: 12
            }
        );
        assert_eq!(parsed.extension, "png");
    }

    #[test]
    fn test_oversized_fragment_number_saturates() {
        let parsed = ZooFileName::parse("Make_rel123456789012345678901234.png").unwrap();
        assert_eq!(parsed.model, "Make");
        assert!(!parsed.is_full());
        assert_eq!(
            parsed.kind,
            ZooFileKind::Fragment {
                fragment: FragmentKind::Rel,
                number: u64::MAX
            }
        );
    }

    #[test]
    fn test_underscore_without_fragment_is_full() {
        let parsed = ZooFileName::parse("Java_classes.yuml").unwrap();
        assert_eq!(parsed.model, "Java_classes");
        assert!(parsed.is_full());

        let parsed = ZooFileName::parse("Make_class.yuml").unwrap();
        assert_eq!(parsed.model, "Make_class");
        assert!(parsed.is_full());
    }

    #[test]
    fn test_dotted_model_name() {
        let parsed = ZooFileName::parse("org.eclipse.Model.yuml").unwrap();
        assert_eq!(parsed.model, "org.eclipse.Model");
        assert_eq!(parsed.extension, "yuml");
    }

    #[test]
    fn test_rejects_names_without_extension() {
        assert_eq!(ZooFileName::parse("README"), None);
        assert_eq!(ZooFileName::parse(".yuml"), None);
        assert_eq!(ZooFileName::parse("Make."), None);
        assert_eq!(ZooFileName::parse("Make.tar-gz"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ZooFileKind::Full.to_string(), "full");
        let kind = ZooFileKind::Fragment {
            fragment: FragmentKind::Class,
            number: 3,
        };
        assert_eq!(kind.to_string(), "class3");
    }
}
