// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

use tracing::debug;

use super::ids::NoteId;

/// Direction-insensitive key of a connection.
///
/// The pair is order-normalized, so `key(a, b) == key(b, a)`. This is the
/// canonical identity of a connection; the legacy `"{from}-{to}"` string id
/// exists only at the wire boundary and is never parsed back, since note ids
/// may themselves contain `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionKey {
    lo: NoteId,
    hi: NoteId,
}

impl ConnectionKey {
    pub fn new(a: NoteId, b: NoteId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn touches(&self, id: &NoteId) -> bool {
        &self.lo == id || &self.hi == id
    }

    pub fn endpoints(&self) -> (&NoteId, &NoteId) {
        (&self.lo, &self.hi)
    }
}

/// A connection between two notes, keeping the creation-order direction.
///
/// Direction never affects identity (see [`ConnectionKey`]); it is preserved
/// only so rendering and serialization stay faithful to what the user drew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    from: NoteId,
    to: NoteId,
}

impl Connection {
    pub fn from(&self) -> &NoteId {
        &self.from
    }

    pub fn to(&self) -> &NoteId {
        &self.to
    }

    pub fn key(&self) -> ConnectionKey {
        ConnectionKey::new(self.from.clone(), self.to.clone())
    }
}

/// All connections of one board, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionSet {
    connections: Vec<Connection>,
}

impl ConnectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a connection. Self-links and pairs already linked in either
    /// direction are ignored; returns whether anything was inserted.
    pub fn add(&mut self, from: NoteId, to: NoteId) -> bool {
        if from == to {
            debug!(note_id = %from, "ignoring self-link");
            return false;
        }
        if self.contains(&from, &to) {
            debug!(from = %from, to = %to, "connection already exists");
            return false;
        }
        self.connections.push(Connection { from, to });
        true
    }

    /// Whether the pair is linked, in either direction.
    pub fn contains(&self, a: &NoteId, b: &NoteId) -> bool {
        let key = ConnectionKey::new(a.clone(), b.clone());
        self.connections.iter().any(|c| c.key() == key)
    }

    /// Removes the connection between the unordered pair, returning it.
    pub fn remove(&mut self, key: &ConnectionKey) -> Option<Connection> {
        let index = self.connections.iter().position(|c| &c.key() == key)?;
        Some(self.connections.remove(index))
    }

    pub fn remove_between(&mut self, a: &NoteId, b: &NoteId) -> Option<Connection> {
        self.remove(&ConnectionKey::new(a.clone(), b.clone()))
    }

    /// Drops every connection touching `note_id`, returning the removed
    /// connections. Invoked when a note is deleted.
    pub fn remove_all_for(&mut self, note_id: &NoteId) -> Vec<Connection> {
        let mut removed = Vec::new();
        self.connections.retain(|c| {
            if c.from() == note_id || c.to() == note_id {
                removed.push(c.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Insertion-ordered view, for deterministic re-render.
    pub fn all(&self) -> &[Connection] {
        &self.connections
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Connection> {
        self.connections.iter()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl<'a> IntoIterator for &'a ConnectionSet {
    type Item = &'a Connection;
    type IntoIter = std::slice::Iter<'a, Connection>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{ConnectionKey, ConnectionSet};
    use crate::model::NoteId;

    fn id(value: &str) -> NoteId {
        NoteId::new(value).expect("note id")
    }

    #[test]
    fn key_is_direction_insensitive() {
        assert_eq!(
            ConnectionKey::new(id("a"), id("b")),
            ConnectionKey::new(id("b"), id("a"))
        );
    }

    #[test]
    fn add_is_idempotent_across_directions() {
        let mut set = ConnectionSet::new();
        assert!(set.add(id("a"), id("b")));
        assert!(!set.add(id("a"), id("b")));
        assert!(!set.add(id("b"), id("a")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn add_rejects_self_links() {
        let mut set = ConnectionSet::new();
        assert!(!set.add(id("a"), id("a")));
        assert!(set.is_empty());
    }

    #[test]
    fn remove_works_from_either_direction() {
        let mut set = ConnectionSet::new();
        set.add(id("a"), id("b"));

        let removed = set.remove_between(&id("b"), &id("a")).expect("removed");
        assert_eq!(removed.from(), &id("a"));
        assert_eq!(removed.to(), &id("b"));
        assert!(set.is_empty());
    }

    #[test]
    fn dashed_ids_never_collide() {
        // "a-b" + "c" and "a" + "b-c" would collide under the legacy
        // string-concatenation id; the structured key keeps them distinct.
        let mut set = ConnectionSet::new();
        assert!(set.add(id("a-b"), id("c")));
        assert!(set.add(id("a"), id("b-c")));
        assert_eq!(set.len(), 2);

        set.remove_between(&id("a-b"), &id("c"));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&id("a"), &id("b-c")));
    }

    #[test]
    fn remove_all_for_only_touches_the_given_note() {
        let mut set = ConnectionSet::new();
        set.add(id("a"), id("b"));
        set.add(id("c"), id("a"));
        set.add(id("b"), id("c"));

        let removed = set.remove_all_for(&id("a"));
        assert_eq!(removed.len(), 2);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&id("b"), &id("c")));
    }

    #[test]
    fn all_preserves_insertion_order() {
        let mut set = ConnectionSet::new();
        set.add(id("n3"), id("n1"));
        set.add(id("n2"), id("n3"));

        let order: Vec<_> = set
            .all()
            .iter()
            .map(|c| (c.from().as_str(), c.to().as_str()))
            .collect();
        assert_eq!(order, vec![("n3", "n1"), ("n2", "n3")]);
    }
}
