// Core record types shared by the parser, completion pass, and fallback
// generator.
//
// - `Convention` — which sub-entry layout a document follows (A: author,
//   cover, comment; B: author, comment)
// - `PartialRecord` — what the parser could read for one top-level entry
// - `Record` — a fully populated, ranked gallery entry
// - `DatasetOrigin` — whether a dataset came from the document or the
//   synthetic fallback
//
// `Record` serializes with camelCase keys (`coverUrl`) because that is the
// shape the page renderer reads.

use serde::{Deserialize, Serialize};

/// Sub-entry layout of a list document.
///
/// Exactly one convention is active for a given parse pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Legacy three-slot layout: author, cover path, comment.
    A,
    /// Current two-slot layout: author, comment. Covers derive from titles.
    #[default]
    B,
}

impl Convention {
    /// Number of positional sub-entries read per top-level entry.
    pub fn slot_count(self) -> usize {
        match self {
            Convention::A => 3,
            Convention::B => 2,
        }
    }

    /// Field a positional sub-entry fills, or `None` past the last slot.
    pub fn slot(self, index: usize) -> Option<Slot> {
        match (self, index) {
            (_, 0) => Some(Slot::Author),
            (Convention::A, 1) => Some(Slot::Cover),
            (Convention::A, 2) | (Convention::B, 1) => Some(Slot::Comment),
            _ => None,
        }
    }
}

impl std::str::FromStr for Convention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "legacy" => Ok(Convention::A),
            "b" | "current" => Ok(Convention::B),
            other => Err(format!("unknown convention '{other}' (expected a or b)")),
        }
    }
}

/// Field addressed by a positional sub-entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Author,
    Cover,
    Comment,
}

/// One top-level entry as read from the document, before completion.
///
/// `title` is always non-empty for partials that leave the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRecord {
    pub title: String,
    pub author: Option<String>,
    /// Raw cover path, already unquoted and slash-normalized. Only
    /// Convention A documents carry one.
    pub cover_path: Option<String>,
    pub comment: Option<String>,
}

impl PartialRecord {
    pub fn new(title: impl Into<String>) -> Self {
        PartialRecord {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// A finalized, fully populated gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// 1-based position in the dataset.
    pub rank: u32,
    /// `mad_`-prefixed slug of the title.
    pub id: String,
    pub title: String,
    pub author: String,
    /// Local image path or absolute URL.
    pub cover_url: String,
    pub comment: String,
    /// Empty for parsed records; 2-4 distinct tags for synthetic ones.
    pub tags: Vec<String>,
}

/// Where a dataset's records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetOrigin {
    Parsed,
    Fallback,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convention_slots() {
        assert_eq!(Convention::A.slot(0), Some(Slot::Author));
        assert_eq!(Convention::A.slot(1), Some(Slot::Cover));
        assert_eq!(Convention::A.slot(2), Some(Slot::Comment));
        assert_eq!(Convention::A.slot(3), None);

        assert_eq!(Convention::B.slot(0), Some(Slot::Author));
        assert_eq!(Convention::B.slot(1), Some(Slot::Comment));
        assert_eq!(Convention::B.slot(2), None);
    }

    #[test]
    fn slot_count_matches_slots() {
        for convention in [Convention::A, Convention::B] {
            let n = convention.slot_count();
            assert!(convention.slot(n - 1).is_some());
            assert!(convention.slot(n).is_none());
        }
    }

    #[test]
    fn convention_from_str() {
        assert_eq!("A".parse::<Convention>(), Ok(Convention::A));
        assert_eq!("current".parse::<Convention>(), Ok(Convention::B));
        assert!("c".parse::<Convention>().is_err());
        assert_eq!(Convention::default(), Convention::B);
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let record = Record {
            rank: 1,
            id: "mad_x".into(),
            title: "X".into(),
            author: "A".into(),
            cover_url: "/mad_imgs/X.png".into(),
            comment: "c".into(),
            tags: vec![],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["coverUrl"], "/mad_imgs/X.png");
        assert!(json.get("cover_url").is_none());
    }
}
