// Read-only views derived from a finished `Dataset`.
//
// The page's search box and rank ruler never modify records; they borrow the
// dataset and compute what to show.

use crate::Dataset;
use crate::types::Record;

/// Records whose title or author contains a keyword, case-insensitively.
///
/// An empty (or all-whitespace) keyword matches every record.
#[derive(Debug, Clone)]
pub struct SearchView<'a> {
    keyword: String,
    matches: Vec<&'a Record>,
}

impl<'a> SearchView<'a> {
    pub fn new(dataset: &'a Dataset, keyword: &str) -> Self {
        let keyword = keyword.trim().to_lowercase();
        let matches = dataset
            .iter()
            .filter(|record| matches_keyword(record, &keyword))
            .collect();
        SearchView { keyword, matches }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Ranks of the matching records, in dataset order.
    pub fn ranks(&self) -> Vec<u32> {
        self.matches.iter().map(|r| r.rank).collect()
    }
}

fn matches_keyword(record: &Record, keyword: &str) -> bool {
    keyword.is_empty()
        || record.title.to_lowercase().contains(keyword)
        || record.author.to_lowercase().contains(keyword)
}

/// Rank ruler marks: every tenth rank starting at 1, then the last rank.
pub fn nav_marks(len: usize) -> Vec<u32> {
    let Ok(last) = u32::try_from(len) else {
        return Vec::new();
    };
    let mut marks: Vec<u32> = (1..=last).step_by(10).collect();
    if last > 0 && marks.last() != Some(&last) {
        marks.push(last);
    }
    marks
}

/// Rank as displayed on a card: at least two digits.
pub fn rank_label(rank: u32) -> String {
    format!("{rank:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_marks_for_full_gallery() {
        assert_eq!(nav_marks(100), [1, 11, 21, 31, 41, 51, 61, 71, 81, 91, 100]);
    }

    #[test]
    fn nav_marks_small_and_empty() {
        assert!(nav_marks(0).is_empty());
        assert_eq!(nav_marks(1), [1]);
        assert_eq!(nav_marks(11), [1, 11]);
        assert_eq!(nav_marks(12), [1, 11, 12]);
    }

    #[test]
    fn rank_labels() {
        assert_eq!(rank_label(1), "01");
        assert_eq!(rank_label(42), "42");
        assert_eq!(rank_label(100), "100");
    }
}
