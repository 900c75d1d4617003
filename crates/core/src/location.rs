//! Page location collaborator.
//!
//! The controller never touches a global address bar. It reads and replaces the query
//! string through [`Location`], which a browser binding, a terminal front end or a test
//! can implement.

use crate::url_state::href;

/// Read/replace access to the query string of the current page address.
pub trait Location {
    /// The current query string, without the leading `?`.
    fn current_query(&self) -> String;

    /// Replace the query string of the current address. Must not add history entries.
    fn replace_query(&mut self, query: &str);
}

/// A location kept in memory, recording every address it was given.
#[derive(Clone, Debug, Default)]
pub struct MemoryLocation {
    base_path: String,
    query: String,
    writes: Vec<String>,
}

impl MemoryLocation {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self::with_query(base_path, "")
    }

    /// A location opened on `query` (a leading `?` is accepted).
    pub fn with_query(base_path: impl Into<String>, query: &str) -> Self {
        Self {
            base_path: base_path.into(),
            query: query.strip_prefix('?').unwrap_or(query).to_string(),
            writes: Vec::new(),
        }
    }

    /// The full current address, e.g. `/?sort=fees`.
    pub fn href(&self) -> String {
        href(&self.base_path, &self.query)
    }

    /// Every address written through [`Location::replace_query`], oldest first.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl Location for MemoryLocation {
    fn current_query(&self) -> String {
        self.query.clone()
    }

    fn replace_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.writes.push(self.href());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_writes_as_full_addresses() {
        let mut location = MemoryLocation::with_query("/doctors", "?sort=fees");
        assert_eq!(location.current_query(), "sort=fees");
        assert!(location.writes().is_empty());

        location.replace_query("search=amy");
        location.replace_query("");
        assert_eq!(location.writes(), ["/doctors?search=amy", "/doctors"]);
        assert_eq!(location.href(), "/doctors");
    }
}
