//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type used for view and element identity.
//! Documents refer to views by name and to elements by a caller-chosen label;
//! both are interned once at load time so the pipeline can copy and compare
//! them cheaply for the rest of the run.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Efficient identifier type using string interning
///
/// Identifiers are `Copy` and compare in constant time. Two `Id`s created
/// from the same string are equal.
///
/// # Examples
///
/// ```
/// use placard_core::identifier::Id;
///
/// let view = Id::new("Level 1 Plan");
/// let element = Id::new("door-101");
///
/// assert_eq!(view, Id::new("Level 1 Plan"));
/// assert_eq!(element, "door-101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use placard_core::identifier::Id;
    ///
    /// let view_id = Id::new("Ceiling Plan - Level 2");
    /// ```
    pub fn new(name: &str) -> Self {
        let symbol = interner().get_or_intern(name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = interner();
        let str_value = guard
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let guard = interner();
        let self_str = guard
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    /// Allows direct comparison with string references: `id == &string`
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    /// Serializes the identifier as its plain string form.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Id {
    /// Deserializes an identifier from a plain string, interning it.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("Level 1");
        let id2 = Id::new("Level 1");
        let id3 = Id::new("Level 2");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "Level 1");
    }

    #[test]
    fn test_display() {
        let id = Id::new("wall-17");
        assert_eq!(id.to_string(), "wall-17");
    }

    #[test]
    fn test_str_comparison() {
        let id = Id::new("room-101");
        assert!(id == "room-101");
        assert!(id != "room-102");
    }

    #[test]
    fn test_from_str_slice() {
        let id: Id = "furniture-3".into();
        assert_eq!(id, "furniture-3");
    }

    #[test]
    fn test_serde_roundtrip() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            id: Id,
        }

        let wrapper = Wrapper {
            id: Id::new("Section A-A"),
        };
        let toml = toml::to_string(&wrapper).expect("serialize");
        let back: Wrapper = toml::from_str(&toml).expect("deserialize");
        assert_eq!(back.id, wrapper.id);
    }
}
