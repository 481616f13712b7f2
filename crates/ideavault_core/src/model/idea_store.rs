//! Domain-to-ideas mapping, the only persisted state.
//!
//! # Responsibility
//! - Hold ideas per domain in insertion order.
//! - Define the JSON wire shape: `{"<domain>": ["idea", ...], ...}`.
//! - Carry stored entries it cannot type back to storage unchanged.
//!
//! # Invariants
//! - Typed keys are exact wire names of the fixed domains.
//! - A missing key reads as an empty sequence.
//! - Sequences are append-only.
//! - Any stored key/value that is not a known domain with a string array is
//!   kept verbatim in `passthrough` and written back on every save.

use crate::model::domain::Domain;
use crate::model::idea::Idea;
use log::warn;
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaStore {
    entries: BTreeMap<Domain, Vec<Idea>>,
    passthrough: Map<String, Value>,
}

impl IdeaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns typed ideas for `domain` in insertion order.
    ///
    /// Empty when the stored value for `domain` is kept as raw JSON; use
    /// [`IdeaStore::texts`] for display.
    pub fn ideas(&self, domain: Domain) -> &[Idea] {
        self.entries.get(&domain).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Display text of every entry under `domain`, raw entries included.
    ///
    /// Non-string elements of a raw array render as their JSON text.
    pub fn texts(&self, domain: Domain) -> Vec<Cow<'_, str>> {
        if let Some(ideas) = self.entries.get(&domain) {
            return ideas.iter().map(|idea| Cow::Borrowed(idea.as_str())).collect();
        }
        match self.passthrough.get(domain.as_str()) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(text) => Cow::Borrowed(text.as_str()),
                    other => Cow::Owned(other.to_string()),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Appends one idea, creating the domain sequence on first use.
    ///
    /// A raw stored array under `domain` keeps its elements and gets the idea
    /// pushed at the end. A raw non-array value is replaced.
    pub fn append(&mut self, domain: Domain, idea: Idea) {
        if let Some(Value::Array(items)) = self.passthrough.get_mut(domain.as_str()) {
            items.push(Value::String(idea.into_inner()));
            return;
        }
        if self.passthrough.remove(domain.as_str()).is_some() {
            warn!(
                "event=store_append module=model status=replaced reason=non_array_value domain={}",
                domain.as_str()
            );
        }
        self.entries.entry(domain).or_default().push(idea);
    }

    pub fn count(&self, domain: Domain) -> usize {
        match self.entries.get(&domain) {
            Some(ideas) => ideas.len(),
            None => match self.passthrough.get(domain.as_str()) {
                Some(Value::Array(items)) => items.len(),
                _ => 0,
            },
        }
    }

    pub fn total(&self) -> usize {
        Domain::ALL.into_iter().map(|domain| self.count(domain)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Domains that have a key in the mapping, even when the sequence is empty.
    pub fn domains(&self) -> impl Iterator<Item = Domain> + '_ {
        Domain::ALL.into_iter().filter(move |domain| {
            self.entries.contains_key(domain) || self.passthrough.contains_key(domain.as_str())
        })
    }

    /// Number of stored keys carried as raw JSON.
    pub fn passthrough_len(&self) -> usize {
        self.passthrough.len()
    }
}

impl Serialize for IdeaStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + self.passthrough.len()))?;
        for (domain, ideas) in &self.entries {
            map.serialize_entry(domain.as_str(), ideas)?;
        }
        for (key, value) in &self.passthrough {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IdeaStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let mut store = IdeaStore::new();
        for (key, value) in raw {
            let typed = Domain::from_wire(&key)
                .zip(Vec::<Idea>::deserialize(&value).ok());
            match typed {
                Some((domain, ideas)) => {
                    store.entries.insert(domain, ideas);
                }
                None => {
                    store.passthrough.insert(key, value);
                }
            }
        }
        if !store.passthrough.is_empty() {
            warn!(
                "event=store_decode module=model status=preserved reason=untyped_entries keys={}",
                store.passthrough.len()
            );
        }
        Ok(store)
    }
}
