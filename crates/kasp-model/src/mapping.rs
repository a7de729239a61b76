//! Daughter plate to `Placa`/`Teste` mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The `Placa` and `Teste` values entered for one daughter plate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateTest {
    pub placa: String,
    pub teste: String,
}

impl PlateTest {
    pub fn new(placa: impl Into<String>, teste: impl Into<String>) -> Self {
        Self {
            placa: placa.into(),
            teste: teste.into(),
        }
    }
}

/// User-supplied mapping keyed by the raw `DaughterPlate` value.
///
/// Keys are matched with exact string equality: `"BT2"` and `"bt2 "` are
/// different plates. Empty `placa`/`teste` values are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlateTestMapping {
    entries: BTreeMap<String, PlateTest>,
}

impl PlateTestMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pair for a plate, replacing any previous entry.
    pub fn insert(&mut self, plate: impl Into<String>, pair: PlateTest) -> Option<PlateTest> {
        self.entries.insert(plate.into(), pair)
    }

    #[must_use]
    pub fn with(mut self, plate: impl Into<String>, pair: PlateTest) -> Self {
        self.insert(plate, pair);
        self
    }

    pub fn get(&self, plate: &str) -> Option<&PlateTest> {
        self.entries.get(plate)
    }

    pub fn contains(&self, plate: &str) -> bool {
        self.entries.contains_key(plate)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlateTest)> {
        self.entries
            .iter()
            .map(|(plate, pair)| (plate.as_str(), pair))
    }

    /// First plate in `plates` that has no entry.
    pub fn first_missing<'a, I>(&self, plates: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        plates.into_iter().find(|plate| !self.contains(plate))
    }
}

impl<K: Into<String>> FromIterator<(K, PlateTest)> for PlateTestMapping {
    fn from_iter<T: IntoIterator<Item = (K, PlateTest)>>(iter: T) -> Self {
        let entries = iter
            .into_iter()
            .map(|(plate, pair)| (plate.into(), pair))
            .collect();
        Self { entries }
    }
}
