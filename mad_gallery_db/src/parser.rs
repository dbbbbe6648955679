// Line-oriented parser for indented list documents.
//
// A document is a flat run of top-level entries, each optionally followed by
// indented sub-entries:
//
//     - Title One
//       Author Name
//       A recommendation sentence.
//
// Indentation decides everything. A top-level entry has at most one leading
// space before its `- ` marker. A sub-entry has exactly two spaces or exactly
// one tab before its value; the `- ` marker after that prefix is optional.
// Anything deeper, or anything else, is skipped silently.
//
// Sub-entries fill fields positionally according to the active
// `Convention`; see `types.rs`. A partial record is flushed when the next
// top-level entry starts and at end of input, but only if its title is
// non-empty.

use crate::error::GalleryError;
use crate::types::{Convention, PartialRecord, Slot};

/// Classification of a single raw line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    /// Title text, trimmed. May be empty.
    Entry(&'a str),
    /// Sub-entry value, trimmed, marker removed.
    SubEntry(&'a str),
    Other,
}

fn classify(raw: &str) -> Line<'_> {
    let line = raw.strip_suffix('\r').unwrap_or(raw);
    if line.trim().is_empty() {
        return Line::Blank;
    }

    let body = line.strip_prefix(' ').unwrap_or(line);
    if let Some(title) = strip_marker(body) {
        return Line::Entry(title.trim());
    }

    let nested = line
        .strip_prefix("  ")
        .or_else(|| line.strip_prefix('\t'))
        .filter(|rest| !rest.starts_with(char::is_whitespace));
    if let Some(rest) = nested {
        let value = strip_marker(rest).unwrap_or(rest);
        return Line::SubEntry(value.trim());
    }

    Line::Other
}

/// Strip a leading `- ` list marker. A lone `-` is a marker with no text.
fn strip_marker(s: &str) -> Option<&str> {
    if let Some(rest) = s.strip_prefix("- ") {
        Some(rest)
    } else if s.trim_end() == "-" {
        Some("")
    } else {
        None
    }
}

/// Remove one matching pair of surrounding quotes and turn backslashes into
/// forward slashes.
pub fn clean_cover_path(value: &str) -> String {
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|&q| {
            value
                .strip_prefix(q)
                .and_then(|rest| rest.strip_suffix(q))
        })
        .unwrap_or(value);
    unquoted.replace('\\', "/")
}

/// Incremental parser state: the entry being built and its slot counter.
struct Builder {
    convention: Convention,
    current: Option<PartialRecord>,
    slot: usize,
    out: Vec<PartialRecord>,
}

impl Builder {
    fn new(convention: Convention) -> Self {
        Builder {
            convention,
            current: None,
            slot: 0,
            out: Vec::new(),
        }
    }

    fn flush(&mut self) {
        if let Some(partial) = self.current.take().filter(|p| !p.title.is_empty()) {
            self.out.push(partial);
        }
    }

    fn start_entry(&mut self, title: &str) {
        self.flush();
        self.slot = 0;
        if !title.is_empty() {
            self.current = Some(PartialRecord::new(title));
        }
    }

    fn sub_entry(&mut self, value: &str) {
        let Some(partial) = self.current.as_mut() else {
            return;
        };
        let index = self.slot;
        self.slot += 1;
        let value = value.to_string();
        match self.convention.slot(index) {
            Some(Slot::Author) => partial.author = Some(value),
            Some(Slot::Cover) => partial.cover_path = Some(clean_cover_path(&value)),
            Some(Slot::Comment) => partial.comment = Some(value),
            None => {}
        }
    }

    fn finish(mut self) -> Vec<PartialRecord> {
        self.flush();
        self.out
    }
}

/// Parse a list document into partial records, in document order.
///
/// Never fails: unrecognized lines are skipped and entries without a title
/// are dropped.
pub fn parse_document(text: &str, convention: Convention) -> Vec<PartialRecord> {
    let mut builder = Builder::new(convention);
    for raw in text.split('\n') {
        match classify(raw) {
            Line::Entry(title) => builder.start_entry(title),
            Line::SubEntry(value) => builder.sub_entry(value),
            Line::Blank | Line::Other => {}
        }
    }
    let partials = builder.finish();
    tracing::debug!(
        entries = partials.len(),
        ?convention,
        "parsed list document"
    );
    partials
}

/// Like `parse_document`, but reports a document with no usable entries as
/// `GalleryError::EmptyDocument`.
pub fn try_parse_document(
    text: &str,
    convention: Convention,
) -> Result<Vec<PartialRecord>, GalleryError> {
    let partials = parse_document(text, convention);
    if partials.is_empty() {
        return Err(GalleryError::EmptyDocument);
    }
    Ok(partials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(partials: &[PartialRecord]) -> Vec<&str> {
        partials.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn classify_indentation_levels() {
        assert_eq!(classify("- Title"), Line::Entry("Title"));
        assert_eq!(classify(" - Title"), Line::Entry("Title"));
        assert_eq!(classify("  - Jane"), Line::SubEntry("Jane"));
        assert_eq!(classify("  Jane"), Line::SubEntry("Jane"));
        assert_eq!(classify("\t- Jane"), Line::SubEntry("Jane"));
        assert_eq!(classify("\tJane"), Line::SubEntry("Jane"));
        assert_eq!(classify("   - Deep"), Line::Other);
        assert_eq!(classify("\t\t- Deep"), Line::Other);
        assert_eq!(classify("\t - Deep"), Line::Other);
        assert_eq!(classify("plain text"), Line::Other);
        assert_eq!(classify("   "), Line::Blank);
        assert_eq!(classify("\r"), Line::Blank);
    }

    #[test]
    fn classify_bare_markers() {
        assert_eq!(classify("- "), Line::Entry(""));
        assert_eq!(classify("-"), Line::Entry(""));
        assert_eq!(classify("-Title"), Line::Other);
    }

    #[test]
    fn convention_b_reads_author_then_comment() {
        let doc = "- Alpha Run\n  Jane\n  Great pacing.\n  ignored\n";
        let parsed = parse_document(doc, Convention::B);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].author.as_deref(), Some("Jane"));
        assert_eq!(parsed[0].comment.as_deref(), Some("Great pacing."));
        assert_eq!(parsed[0].cover_path, None);
    }

    #[test]
    fn convention_a_reads_three_slots() {
        let doc = "- Alpha\n  - Jane\n  - \"covers\\alpha.png\"\n  - Sharp cuts.\n  - extra\n";
        let parsed = parse_document(doc, Convention::A);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].author.as_deref(), Some("Jane"));
        assert_eq!(parsed[0].cover_path.as_deref(), Some("covers/alpha.png"));
        assert_eq!(parsed[0].comment.as_deref(), Some("Sharp cuts."));
    }

    #[test]
    fn same_document_differs_by_convention() {
        let doc = "- T\n  one\n  two\n  three\n";
        let a = parse_document(doc, Convention::A);
        let b = parse_document(doc, Convention::B);
        assert_eq!(a[0].cover_path.as_deref(), Some("two"));
        assert_eq!(a[0].comment.as_deref(), Some("three"));
        assert_eq!(b[0].cover_path, None);
        assert_eq!(b[0].comment.as_deref(), Some("two"));
    }

    #[test]
    fn empty_title_is_dropped_and_previous_kept() {
        let doc = "- First\n  A\n- \n  orphan\n- Second\n  B\n";
        let parsed = parse_document(doc, Convention::B);
        assert_eq!(titles(&parsed), ["First", "Second"]);
        assert_eq!(parsed[0].author.as_deref(), Some("A"));
        assert_eq!(parsed[1].author.as_deref(), Some("B"));
    }

    #[test]
    fn slot_counter_resets_per_entry() {
        let doc = "- One\n  a1\n  c1\n- Two\n  a2\n";
        let parsed = parse_document(doc, Convention::B);
        assert_eq!(parsed[1].author.as_deref(), Some("a2"));
        assert_eq!(parsed[1].comment, None);
    }

    #[test]
    fn sub_entries_before_any_entry_are_ignored() {
        let doc = "  stray\n- Title\n";
        let parsed = parse_document(doc, Convention::B);
        assert_eq!(parsed, vec![PartialRecord::new("Title")]);
    }

    #[test]
    fn deep_indent_does_not_consume_a_slot() {
        let doc = "- Title\n   - too deep\n  Author\n";
        let parsed = parse_document(doc, Convention::B);
        assert_eq!(parsed[0].author.as_deref(), Some("Author"));
    }

    #[test]
    fn crlf_line_endings() {
        let doc = "- Title\r\n  Author\r\n  Comment\r\n";
        let parsed = parse_document(doc, Convention::B);
        assert_eq!(parsed[0].title, "Title");
        assert_eq!(parsed[0].author.as_deref(), Some("Author"));
        assert_eq!(parsed[0].comment.as_deref(), Some("Comment"));
    }

    #[test]
    fn empty_document_is_an_error_only_through_try() {
        assert!(parse_document("", Convention::B).is_empty());
        assert!(matches!(
            try_parse_document("just prose\n- \n", Convention::B),
            Err(GalleryError::EmptyDocument)
        ));
    }

    #[test]
    fn clean_cover_path_quotes() {
        assert_eq!(clean_cover_path("\"a b.png\""), "a b.png");
        assert_eq!(clean_cover_path("'a.png'"), "a.png");
        // Unmatched quotes are left alone.
        assert_eq!(clean_cover_path("\"a.png'"), "\"a.png'");
        assert_eq!(clean_cover_path("dir\\sub\\a.png"), "dir/sub/a.png");
        assert_eq!(clean_cover_path("\""), "\"");
    }
}
