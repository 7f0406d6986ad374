//! Display names for panchanga elements.
//!
//! The derivation engine works only with numbers. Names are attached at the
//! end through a [`NameResolver`], so a localized or partial table can be
//! swapped in freely. Any lookup the table cannot answer falls back to
//! `"<Category>-<index>"`, e.g. `"Tithi-999"`.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::karana::Karana;
use crate::masa::{ALL_MASAS, ALL_RITUS};
use crate::nakshatra::ALL_NAKSHATRAS_27;
use crate::samvatsara::ALL_SAMVATSARAS;
use crate::tithi::ALL_TITHIS;
use crate::vaar::ALL_VAARS;
use crate::yoga::ALL_YOGAS;

/// Element categories with a name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameCategory {
    Masa,
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
    Vara,
    Samvatsara,
    Ritu,
}

const ALL_CATEGORIES: [NameCategory; 8] = [
    NameCategory::Masa,
    NameCategory::Tithi,
    NameCategory::Nakshatra,
    NameCategory::Yoga,
    NameCategory::Karana,
    NameCategory::Vara,
    NameCategory::Samvatsara,
    NameCategory::Ritu,
];

impl NameCategory {
    /// Capitalized label used in fallback names.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Masa => "Masa",
            Self::Tithi => "Tithi",
            Self::Nakshatra => "Nakshatra",
            Self::Yoga => "Yoga",
            Self::Karana => "Karana",
            Self::Vara => "Vara",
            Self::Samvatsara => "Samvatsara",
            Self::Ritu => "Ritu",
        }
    }

    pub const fn all() -> &'static [NameCategory] {
        &ALL_CATEGORIES
    }

    /// Deterministic name for an index the table does not know.
    pub fn fallback_name(self, index: i64) -> String {
        format!("{}-{index}", self.label())
    }
}

impl Display for NameCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NameCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown name category '{s}'"))
    }
}

/// Maps a category and 1-based index to a display string.
///
/// Implementations must never fail: unknown indices get
/// [`NameCategory::fallback_name`].
pub trait NameResolver: Send + Sync {
    fn resolve(&self, category: NameCategory, index: i64) -> String;
}

/// Resolver that knows no names at all; every lookup falls back.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackNames;

impl NameResolver for FallbackNames {
    fn resolve(&self, category: NameCategory, index: i64) -> String {
        category.fallback_name(index)
    }
}

/// Immutable name table, loaded once and shared by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    entries: HashMap<(NameCategory, i64), String>,
}

impl NameTable {
    /// An empty table; every lookup falls back.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in Sanskrit names for every category.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for t in ALL_TITHIS {
            table.insert(NameCategory::Tithi, t.number() as i64, t.name());
        }
        for n in ALL_NAKSHATRAS_27 {
            table.insert(NameCategory::Nakshatra, n.number() as i64, n.name());
        }
        for y in ALL_YOGAS {
            table.insert(NameCategory::Yoga, y.number() as i64, y.name());
        }
        for number in 1..=60u8 {
            if let Some(k) = Karana::from_number(number) {
                table.insert(NameCategory::Karana, number as i64, k.name());
            }
        }
        for v in ALL_VAARS {
            table.insert(NameCategory::Vara, v.number() as i64, v.name());
        }
        for m in ALL_MASAS {
            table.insert(NameCategory::Masa, m.number() as i64, m.name());
        }
        for s in ALL_SAMVATSARAS {
            table.insert(NameCategory::Samvatsara, s.number() as i64, s.name());
        }
        for r in ALL_RITUS {
            table.insert(NameCategory::Ritu, r.number() as i64, r.name());
        }
        table
    }

    /// Set or replace one entry.
    pub fn insert(&mut self, category: NameCategory, index: i64, name: impl Into<String>) {
        self.entries.insert((category, index), name.into());
    }

    /// Builder form of [`NameTable::insert`].
    pub fn with_override(
        mut self,
        category: NameCategory,
        index: i64,
        name: impl Into<String>,
    ) -> Self {
        self.insert(category, index, name);
        self
    }

    /// Table entry, without fallback.
    pub fn get(&self, category: NameCategory, index: i64) -> Option<&str> {
        self.entries.get(&(category, index)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NameResolver for NameTable {
    fn resolve(&self, category: NameCategory, index: i64) -> String {
        match self.get(category, index) {
            Some(name) => name.to_string(),
            None => category.fallback_name(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_format() {
        let table = NameTable::builtin();
        assert_eq!(table.resolve(NameCategory::Tithi, 999), "Tithi-999");
        for c in NameCategory::all() {
            assert_eq!(table.resolve(*c, 999), format!("{}-999", c.label()));
        }
        assert_eq!(FallbackNames.resolve(NameCategory::Ritu, -3), "Ritu--3");
    }

    #[test]
    fn builtin_is_complete() {
        let table = NameTable::builtin();
        assert_eq!(table.len(), 30 + 27 + 27 + 60 + 7 + 12 + 60 + 6);
        assert_eq!(table.resolve(NameCategory::Tithi, 15), "Purnima");
        assert_eq!(table.resolve(NameCategory::Karana, 1), "Kimstughna");
        assert_eq!(table.resolve(NameCategory::Karana, 60), "Naga");
        assert_eq!(table.resolve(NameCategory::Karana, 9), "Bava");
        assert_eq!(table.resolve(NameCategory::Vara, 2), "Somavara");
        assert_eq!(table.resolve(NameCategory::Samvatsara, 38), "Krodhi");
    }

    #[test]
    fn override_replaces_one_entry() {
        let table = NameTable::builtin().with_override(NameCategory::Vara, 1, "Bhanuvara");
        assert_eq!(table.resolve(NameCategory::Vara, 1), "Bhanuvara");
        assert_eq!(table.resolve(NameCategory::Vara, 2), "Somavara");
    }

    #[test]
    fn empty_table_falls_back() {
        let table = NameTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.resolve(NameCategory::Masa, 1), "Masa-1");
    }

    #[test]
    fn category_parse() {
        assert_eq!("tithi".parse::<NameCategory>().unwrap(), NameCategory::Tithi);
        assert_eq!(" VARA ".parse::<NameCategory>().unwrap(), NameCategory::Vara);
        assert!("hora".parse::<NameCategory>().is_err());
    }
}
