//! Entry list management.
//!
//! One shared, ordered list of uniquely named entries, observed by both the
//! editing view and the wheel view.

use log::*;

/// A named item eligible for selection on the wheel.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
}

impl Entry {
    /// Return a new entry with the given name.
    ///
    pub fn new(name: impl Into<String>) -> Entry {
        Entry { name: name.into() }
    }
}

/// Houses the ordered collection of entries. Names are unique by exact,
/// case-sensitive match; newest entries appear first.
///
#[derive(Debug, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    /// Return a new empty list.
    ///
    pub fn new() -> EntryList {
        EntryList { entries: vec![] }
    }

    /// Split the raw input on commas and insert every non-empty candidate
    /// that is not already present at the front of the list. Duplicates and
    /// empty candidates are silently skipped. Returns the number of entries
    /// inserted.
    ///
    pub fn add(&mut self, raw_input: &str) -> usize {
        let mut added = 0;
        for candidate in raw_input.split(',') {
            if candidate.is_empty() {
                continue;
            }
            if self.contains(candidate) {
                debug!("Skipping duplicate entry '{}'...", candidate);
                continue;
            }
            self.entries.insert(0, Entry::new(candidate));
            added += 1;
        }
        added
    }

    /// Return whether an entry with exactly the given name is present.
    ///
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Remove all entries whose name equals the given name. Returns the
    /// number of entries removed.
    ///
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.name != name);
        before - self.entries.len()
    }

    /// Remove the entry at the given position, used from the wheel view.
    /// Out-of-range positions are a silent no-op.
    ///
    pub fn remove_at(&mut self, index: usize) -> Option<Entry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Return a view of all entries in order.
    ///
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Return the entry at the given position, if any.
    ///
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Return the number of entries.
    ///
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return whether the list is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &EntryList) -> Vec<&str> {
        list.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn add_places_new_entry_first() {
        let mut list = EntryList::new();
        assert_eq!(list.add("Alice"), 1);
        assert_eq!(list.add("Bob"), 1);
        assert_eq!(names(&list), vec!["Bob", "Alice"]);
    }

    #[test]
    fn add_skips_duplicates() {
        let mut list = EntryList::new();
        list.add("Alice");
        assert_eq!(list.add("Alice"), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_skips_empty_input() {
        let mut list = EntryList::new();
        assert_eq!(list.add(""), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn add_is_case_sensitive() {
        let mut list = EntryList::new();
        list.add("Alice");
        assert_eq!(list.add("alice"), 1);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn add_splits_on_commas_and_dedupes_within_submission() {
        let mut list = EntryList::new();
        assert_eq!(list.add("Alice,Bob,Alice"), 2);
        assert_eq!(names(&list), vec!["Bob", "Alice"]);
    }

    #[test]
    fn add_skips_empty_candidates_between_commas() {
        let mut list = EntryList::new();
        assert_eq!(list.add(",Alice,,Bob,"), 2);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_takes_all_occurrences() {
        let mut list = EntryList::new();
        list.add("Alice,Bob");
        // Duplicates cannot enter through add, so plant one directly.
        list.entries.push(Entry::new("Alice"));
        assert_eq!(list.remove("Alice"), 2);
        assert_eq!(names(&list), vec!["Bob"]);
    }

    #[test]
    fn remove_absent_name_is_noop() {
        let mut list = EntryList::new();
        list.add("Alice");
        assert_eq!(list.remove("Bob"), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_at_takes_entry_by_position() {
        let mut list = EntryList::new();
        list.add("Alice,Bob,Carol");
        let removed = list.remove_at(1);
        assert_eq!(removed.unwrap().name, "Bob");
        assert_eq!(names(&list), vec!["Carol", "Alice"]);
    }

    #[test]
    fn remove_at_out_of_range_is_noop() {
        let mut list = EntryList::new();
        list.add("Alice");
        assert!(list.remove_at(5).is_none());
        assert_eq!(list.len(), 1);
    }
}
