/// Bullet prefix of a dependency entry nested under a library
const DEPENDENCY_PREFIX: &str = "    -";

/// Bullet prefix of a top-level library header
const LIBRARY_PREFIX: &str = "  -";

/// LineKind value object classifying a raw lockfile line by its indentation
///
/// Classification looks only at the untrimmed prefix of the line. Indenting
/// deeper than a dependency entry puts a space where the dependency prefix
/// expects its dash, so such lines are unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `  - Name (version)` at the top level of the section
    LibraryHeader,
    /// `    - Name (constraint)` beneath a library header
    DependencyEntry,
    /// Blank lines, section headers and anything with unexpected indentation
    Unclassified,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        // A dependency line also starts with the library prefix, so check it first
        if line.starts_with(DEPENDENCY_PREFIX) {
            LineKind::DependencyEntry
        } else if line.starts_with(LIBRARY_PREFIX) {
            LineKind::LibraryHeader
        } else {
            LineKind::Unclassified
        }
    }
}

/// Extracts the entity name from a bullet line
///
/// The trimmed line is split on single spaces and the second piece is the
/// name; the first piece is the `-` bullet. Empty pieces are kept, so a
/// doubled space after the bullet yields an empty name.
///
/// # Returns
/// `None` when the line has fewer than two pieces
pub fn entity_name(line: &str) -> Option<&str> {
    line.trim().split(' ').nth(1)
}
