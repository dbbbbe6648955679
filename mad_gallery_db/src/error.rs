// Error taxonomy at the dataset boundary.
//
// Malformed lines and missing fields are never errors (the parser skips, the
// completion pass defaults). What remains is the document being unreadable,
// the document producing no records, and a broken configuration file. The
// first two are recovered by the fallback dataset; the config error is
// surfaced to the host.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid gallery configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("document contains no entries with a title")]
    EmptyDocument,
}
