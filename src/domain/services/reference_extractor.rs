//! Reference extraction from template sources
//!
//! A line-by-line lexical scan for assembly directives of the form
//! `<#@ assembly name="PATH" #>`. This is not a template parser: a directive
//! that deviates from the exact wrapper tokens is not recognised.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::ItemFormat;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ReferencePath;

const DIRECTIVE_OPEN: &str = "<#@ assembly name=\"";
const DIRECTIVE_CLOSE: &str = "\" #>";

/// Extract reference paths from template text, in file order, duplicates kept
pub fn extract_references(text: &str) -> Vec<ReferencePath> {
    text.lines().filter_map(match_directive).collect()
}

fn match_directive(line: &str) -> Option<ReferencePath> {
    let path = line
        .trim()
        .strip_prefix(DIRECTIVE_OPEN)?
        .strip_suffix(DIRECTIVE_CLOSE)?;
    Some(ReferencePath::new(path))
}

/// Scans scan-eligible items for their declared references
pub struct ReferenceExtractor<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> ReferenceExtractor<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// References declared by the item at `path`.
    ///
    /// Empty when the format is not scan-eligible, the file cannot be read,
    /// or it declares nothing.
    pub fn references(&self, path: &Path, format: ItemFormat) -> Vec<ReferencePath> {
        if !format.is_scan_eligible() {
            return Vec::new();
        }
        match self.fs.read(path) {
            Ok(text) => extract_references(&text),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cannot scan template for references");
                Vec::new()
            }
        }
    }
}
