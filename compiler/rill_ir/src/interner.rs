//! String interner for identifier storage.
//!
//! Provides O(1) interning and lookup with thread-safe access. Interned
//! strings live for the lifetime of the process (one compilation), so the
//! interner hands out `&'static str` and never frees storage.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

/// Interner shared across compilation phases.
pub type SharedInterner = Arc<StringInterner>;

struct InternerState {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name::raw`.
    strings: Vec<&'static str>,
}

/// Thread-safe string interner.
///
/// Provides O(1) lookup and equality comparison for interned strings.
/// Can be wrapped in [`Arc`] for sharing across threads.
pub struct StringInterner {
    state: RwLock<InternerState>,
}

impl StringInterner {
    /// Create an interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        StringInterner {
            state: RwLock::new(InternerState {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Intern a string, returning its `Name`.
    ///
    /// Interning the same content twice returns the same `Name`.
    pub fn intern(&self, s: &str) -> Name {
        {
            let state = self.state.read();
            if let Some(&idx) = state.map.get(s) {
                return Name::from_raw(idx);
            }
        }

        let mut state = self.state.write();
        // Re-check under the write lock: another thread may have interned
        // the string between our read and write.
        if let Some(&idx) = state.map.get(s) {
            return Name::from_raw(idx);
        }

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let idx = u32::try_from(state.strings.len()).unwrap_or(u32::MAX);
        state.strings.push(leaked);
        state.map.insert(leaked, idx);
        Name::from_raw(idx)
    }

    /// Look up the string content for a `Name`.
    ///
    /// Returns the empty string for a `Name` this interner never produced.
    pub fn lookup(&self, name: Name) -> &'static str {
        let state = self.state.read();
        state
            .strings
            .get(name.raw() as usize)
            .copied()
            .unwrap_or("")
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.state.read().strings.len()
    }

    /// Whether only the pre-interned empty string is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_intern_dedup() {
        let interner = StringInterner::new();
        let a = interner.intern("point");
        let b = interner.intern("point");
        assert_eq!(a, b);
        assert_eq!(interner.lookup(a), "point");
    }

    #[test]
    fn test_empty_pre_interned() {
        let interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
        assert!(interner.is_empty());
    }

    #[test]
    fn test_distinct_strings_distinct_names() {
        let interner = StringInterner::new();
        let x = interner.intern("x");
        let y = interner.intern("y");
        assert_ne!(x, y);
        assert_eq!(interner.lookup(x), "x");
        assert_eq!(interner.lookup(y), "y");
        assert_eq!(interner.len(), 3);
    }

    #[test]
    fn test_unknown_name_lookup() {
        let interner = StringInterner::new();
        assert_eq!(interner.lookup(Name::from_raw(999)), "");
    }

    #[test]
    fn test_concurrent_intern_same_name() {
        let interner = Arc::new(StringInterner::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let interner = Arc::clone(&interner);
                std::thread::spawn(move || interner.intern("shared"))
            })
            .collect();
        let names: Vec<Name> = handles.into_iter().filter_map(|h| h.join().ok()).collect();
        assert_eq!(names.len(), 4);
        assert!(names.windows(2).all(|w| w[0] == w[1]));
    }
}
