// MAD gallery dataset: list document in, ranked records out.
//
// Turns an indented list document into the immutable, fully populated
// sequence of `Record`s that the gallery page renders. No rendering, no
// network, no global state: the host calls one `Dataset` constructor at
// startup and passes the result to whatever draws the page.
//
// Architecture:
// - `types.rs`: `Record`, `PartialRecord`, `Convention`, `DatasetOrigin`
// - `parser.rs`: line classifier and positional sub-entry state machine
// - `complete.rs`: rank, id slug, placeholder defaults, cover resolution
// - `fallback.rs`: 100-record synthetic dataset
// - `pools.rs`: placeholder pools and the `Picker` random-choice seam
// - `probe.rs`: `ImageProbe` existence capability for title-derived covers
// - `config.rs`: `GalleryConfig`, JSON in, typed struct out
// - `error.rs`: `GalleryError`
// - `view.rs`: search and rank-ruler views over a finished dataset
// - `lib.rs` (this file): `Dataset`, the pipeline entry points
//
// Pipeline: document → `parser::try_parse_document` → `complete::complete_all`
// → `Dataset`. If the document can't be read or yields no titled entries,
// the failure is logged at warn level and `fallback::generate_fallback`
// supplies the records instead. Callers always get a non-empty dataset.
//
// The sample document in `data/mad_list.md` is embedded at compile time
// via `default_document()`.

pub mod complete;
pub mod config;
pub mod error;
pub mod fallback;
pub mod parser;
pub mod pools;
pub mod probe;
pub mod types;
pub mod view;

pub use config::GalleryConfig;
pub use error::GalleryError;
pub use pools::{FixedPick, Picker};
pub use probe::{AlwaysPresent, DirectoryProbe, ImageProbe};
pub use types::{Convention, DatasetOrigin, PartialRecord, Record};

use std::fs;
use std::path::Path;

use complete::CompletionContext;

/// The finalized gallery: records in rank order, never empty, never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
    origin: DatasetOrigin,
}

impl Dataset {
    /// Build from document text already in memory.
    pub fn from_document(
        text: &str,
        config: &GalleryConfig,
        picker: &mut dyn Picker,
        probe: &dyn ImageProbe,
    ) -> Self {
        let parsed = parser::try_parse_document(text, config.convention);
        Self::from_parse_result(parsed, config, picker, probe)
    }

    /// Build from the outcome of reading a document. A read error takes the
    /// same fallback path as an empty document.
    pub fn from_source(
        source: Result<String, GalleryError>,
        config: &GalleryConfig,
        picker: &mut dyn Picker,
        probe: &dyn ImageProbe,
    ) -> Self {
        let parsed =
            source.and_then(|text| parser::try_parse_document(&text, config.convention));
        Self::from_parse_result(parsed, config, picker, probe)
    }

    /// Read a document from disk and build from it.
    pub fn load_path(
        path: &Path,
        config: &GalleryConfig,
        picker: &mut dyn Picker,
        probe: &dyn ImageProbe,
    ) -> Self {
        let source = fs::read_to_string(path).map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        });
        Self::from_source(source, config, picker, probe)
    }

    /// The synthetic dataset on its own.
    pub fn fallback(picker: &mut dyn Picker, config: &GalleryConfig) -> Self {
        Dataset {
            records: fallback::generate_fallback(picker, config),
            origin: DatasetOrigin::Fallback,
        }
    }

    fn from_parse_result(
        parsed: Result<Vec<PartialRecord>, GalleryError>,
        config: &GalleryConfig,
        picker: &mut dyn Picker,
        probe: &dyn ImageProbe,
    ) -> Self {
        match parsed {
            Ok(partials) => {
                let mut ctx = CompletionContext {
                    config,
                    picker,
                    probe,
                };
                let records = complete::complete_all(partials, &mut ctx);
                tracing::debug!(records = records.len(), "gallery dataset built from document");
                Dataset {
                    records,
                    origin: DatasetOrigin::Parsed,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "list document unusable, using synthetic gallery");
                Self::fallback(picker, config)
            }
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn origin(&self) -> DatasetOrigin {
        self.origin
    }

    /// Record at a 1-based rank.
    pub fn get_by_rank(&self, rank: u32) -> Option<&Record> {
        let index = usize::try_from(rank).ok()?.checked_sub(1)?;
        self.records.get(index)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// The sample list document shipped with the crate.
pub fn default_document() -> &'static str {
    include_str!("../../data/mad_list.md")
}
