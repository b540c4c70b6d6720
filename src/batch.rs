//! Parallel normalization of many files.
//!
//! Each normalization is an independent, single-threaded computation over one
//! file buffer, so files fan out over Rayon's thread pool with no shared
//! mutable state.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::Result;
use crate::model::NormalizeOutcome;
use crate::pipeline::NormalizeOptions;

/// The result of normalizing one file in a batch.
#[derive(Debug)]
pub struct BatchEntry {
    /// The file that was processed.
    pub path: PathBuf,
    /// The per-file outcome; I/O and format errors are carried here instead
    /// of aborting the batch.
    pub outcome: Result<NormalizeOutcome>,
}

/// Normalize many files in place, in parallel.
///
/// Returns one entry per input path, in input order. A failing file never
/// affects its siblings.
///
/// # Example
///
/// ```no_run
/// use svgnorm::batch::normalize_files;
/// use svgnorm::pipeline::NormalizeOptions;
///
/// let paths = vec!["a.svg", "b.svgz"];
/// let entries = normalize_files(&paths, &NormalizeOptions::default());
/// for entry in &entries {
///     match &entry.outcome {
///         Ok(outcome) => println!("{}: {:?}", entry.path.display(), outcome.dimensions),
///         Err(err) => eprintln!("{}: {}", entry.path.display(), err),
///     }
/// }
/// ```
pub fn normalize_files<P: AsRef<Path> + Sync>(
    paths: &[P],
    options: &NormalizeOptions,
) -> Vec<BatchEntry> {
    paths
        .par_iter()
        .map(|path| BatchEntry {
            path: path.as_ref().to_path_buf(),
            outcome: crate::normalize_file_with_options(path, options.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_batch_mixed_results() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.svg");
        let bad = dir.path().join("bad.svg");
        fs::write(&good, r#"<svg width="40" height="20"/>"#).unwrap();
        fs::write(&bad, "definitely not svg").unwrap();

        let entries = normalize_files(&[&good, &bad], &NormalizeOptions::default());
        assert_eq!(entries.len(), 2);
        assert!(entries[0].outcome.is_ok());
        assert!(entries[1].outcome.is_err());

        let outcome = entries[0].outcome.as_ref().unwrap();
        assert_eq!(outcome.dimensions.map(|d| (d.width, d.height)), Some((200, 100)));
    }

    #[test]
    fn test_batch_empty() {
        let paths: Vec<&Path> = Vec::new();
        assert!(normalize_files(&paths, &NormalizeOptions::default()).is_empty());
    }
}
