//! Event Bag
//!
//! Per-turn mapping of events to boolean triggers. Recognized events are
//! kept in canonical order; names that match no event are kept aside so the
//! controller can report them instead of dropping them.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

use crate::event::Event;

/// Event name to trigger mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "BTreeMap<String, bool>")]
pub struct EventBag {
    flags: BTreeMap<Event, bool>,
    /// Unknown names currently set to true, first-seen order
    unrecognized: Vec<String>,
}

impl EventBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from open-ended string keys
    pub fn from_named<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut bag = Self::new();
        for (name, value) in entries {
            bag.set_named(name.as_ref(), value);
        }
        bag
    }

    /// Set a trigger. The last value set for an event wins.
    pub fn set(&mut self, event: Event, value: bool) {
        self.flags.insert(event, value);
    }

    /// Builder form of [`EventBag::set`]
    pub fn with(mut self, event: Event, value: bool) -> Self {
        self.set(event, value);
        self
    }

    /// Set a trigger by name; unknown names are remembered while true
    pub fn set_named(&mut self, name: &str, value: bool) {
        match name.parse::<Event>() {
            Ok(event) => self.set(event, value),
            Err(_) => {
                trace!(name, value, "Unrecognized event name");
                let known = self.unrecognized.iter().position(|n| n == name);
                match (known, value) {
                    (None, true) => self.unrecognized.push(name.to_string()),
                    (Some(idx), false) => {
                        self.unrecognized.remove(idx);
                    }
                    _ => {}
                }
            }
        }
    }

    /// Current trigger for an event, if it was set at all
    pub fn get(&self, event: Event) -> Option<bool> {
        self.flags.get(&event).copied()
    }

    /// True-valued recognized events, in canonical order
    pub fn triggered(&self) -> impl Iterator<Item = Event> + '_ {
        self.flags
            .iter()
            .filter(|&(_, &value)| value)
            .map(|(&event, _)| event)
    }

    /// Unknown names set to true
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    /// Overlay another bag; its values win
    pub fn merge(&mut self, other: EventBag) {
        self.flags.extend(other.flags);
        for name in other.unrecognized {
            if !self.unrecognized.contains(&name) {
                self.unrecognized.push(name);
            }
        }
    }

    /// Number of entries, recognized or not
    pub fn len(&self) -> usize {
        self.flags.len() + self.unrecognized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(Event, bool)> for EventBag {
    fn from_iter<T: IntoIterator<Item = (Event, bool)>>(iter: T) -> Self {
        let mut bag = Self::new();
        for (event, value) in iter {
            bag.set(event, value);
        }
        bag
    }
}

/// Reads entries in input order so unknown names keep first-seen order
struct EventBagVisitor;

impl<'de> Visitor<'de> for EventBagVisitor {
    type Value = EventBag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of event names to booleans")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut bag = EventBag::new();
        while let Some((name, value)) = map.next_entry::<String, bool>()? {
            bag.set_named(&name, value);
        }
        Ok(bag)
    }
}

impl<'de> Deserialize<'de> for EventBag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EventBagVisitor)
    }
}

impl From<EventBag> for BTreeMap<String, bool> {
    fn from(bag: EventBag) -> Self {
        let mut map: BTreeMap<String, bool> = bag
            .flags
            .into_iter()
            .map(|(event, value)| (event.name().to_string(), value))
            .collect();
        map.extend(bag.unrecognized.into_iter().map(|name| (name, true)));
        map
    }
}
