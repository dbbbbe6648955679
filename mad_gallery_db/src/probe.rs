// Image existence capability for title-derived cover resolution.
//
// The resolver asks "does `<name><ext>` exist in the image directory?" for
// each candidate extension. Which answer it gets is up to the host:
// `AlwaysPresent` trusts the first candidate, `DirectoryProbe` checks a real
// directory, and any `Fn(&str) -> bool` can stand in for tests.

use std::path::PathBuf;

pub trait ImageProbe {
    /// Whether an image file with this name (no directory) exists.
    fn exists(&self, file_name: &str) -> bool;
}

impl<F> ImageProbe for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, file_name: &str) -> bool {
        self(file_name)
    }
}

/// Answers yes for every name, so the first candidate extension wins and the
/// placeholder branch is never taken.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysPresent;

impl ImageProbe for AlwaysPresent {
    fn exists(&self, _file_name: &str) -> bool {
        true
    }
}

/// Checks for regular files under a local image directory.
#[derive(Debug, Clone)]
pub struct DirectoryProbe {
    root: PathBuf,
}

impl DirectoryProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectoryProbe { root: root.into() }
    }
}

impl ImageProbe for DirectoryProbe {
    fn exists(&self, file_name: &str) -> bool {
        // Reject names that would escape the image directory.
        if file_name.contains(['/', '\\']) || file_name == ".." {
            return false;
        }
        self.root.join(file_name).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn always_present_says_yes() {
        assert!(AlwaysPresent.exists("anything.png"));
    }

    #[test]
    fn closures_are_probes() {
        let probe = |name: &str| name.ends_with(".jpg");
        assert!(probe.exists("a.jpg"));
        assert!(!probe.exists("a.png"));
    }

    #[test]
    fn directory_probe_checks_files() {
        let dir = std::env::temp_dir().join(format!("mad_gallery_probe_{}", std::process::id()));
        fs::create_dir_all(dir.join("nested.png")).unwrap();
        fs::write(dir.join("Alpha Run.webp"), b"img").unwrap();

        let probe = DirectoryProbe::new(&dir);
        assert!(probe.exists("Alpha Run.webp"));
        assert!(!probe.exists("Alpha Run.png"));
        // Directories are not images.
        assert!(!probe.exists("nested.png"));
        assert!(!probe.exists("../Alpha Run.webp"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
