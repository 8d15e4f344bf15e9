use super::line_kind::{entity_name, LineKind};
use std::collections::{BTreeMap, BTreeSet};

/// Hierarchy aggregate: the flattened library → direct dependencies map
///
/// A lockfile lists every library once at the top level and, beneath each,
/// only its direct dependencies. The map keeps that two-level shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    libraries: BTreeMap<String, Vec<String>>,
}

/// Fold state while scanning lines: the committed map plus the library
/// that is still collecting dependency entries.
#[derive(Default)]
struct Accumulator {
    completed: BTreeMap<String, Vec<String>>,
    current_library: Option<String>,
    current_deps: Vec<String>,
}

impl Accumulator {
    fn step(mut self, line: &str) -> Self {
        let Some(name) = entity_name(line) else {
            return self;
        };

        match LineKind::classify(line) {
            LineKind::LibraryHeader => {
                self.commit();
                self.current_library = Some(name.to_string());
            }
            LineKind::DependencyEntry => {
                if self.current_library.is_some() {
                    self.current_deps.push(name.to_string());
                }
            }
            LineKind::Unclassified => {}
        }
        self
    }

    fn commit(&mut self) {
        let deps = std::mem::take(&mut self.current_deps);
        if let Some(library) = self.current_library.take() {
            // Repeated headers replace the earlier entry
            self.completed.insert(library, deps);
        }
    }

    fn finish(mut self) -> BTreeMap<String, Vec<String>> {
        self.commit();
        self.completed
    }
}

impl Hierarchy {
    /// Builds the hierarchy from the raw lines of a lockfile section
    ///
    /// Lines that yield no name or classify as [`LineKind::Unclassified`]
    /// are skipped. Dependency entries seen before any library header are
    /// dropped.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let libraries = lines
            .into_iter()
            .fold(Accumulator::default(), Accumulator::step)
            .finish();
        Self { libraries }
    }

    pub fn libraries(&self) -> &BTreeMap<String, Vec<String>> {
        &self.libraries
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    pub fn library_count(&self) -> usize {
        self.libraries.len()
    }

    pub fn dependencies_of(&self, library: &str) -> Option<&[String]> {
        self.libraries.get(library).map(Vec::as_slice)
    }

    /// Returns the first dependency that is never declared as a library itself
    ///
    /// Libraries are visited in map order and their dependencies in list order.
    pub fn first_undeclared_dependency(&self) -> Option<&str> {
        self.libraries
            .values()
            .flatten()
            .find(|dep| !self.libraries.contains_key(dep.as_str()))
            .map(String::as_str)
    }

    /// Returns all libraries that no other library depends on
    pub fn root_libraries(&self) -> Vec<&str> {
        let depended_on: BTreeSet<&str> = self
            .libraries
            .values()
            .flatten()
            .map(String::as_str)
            .collect();

        self.libraries
            .keys()
            .map(String::as_str)
            .filter(|library| !depended_on.contains(library))
            .collect()
    }
}
