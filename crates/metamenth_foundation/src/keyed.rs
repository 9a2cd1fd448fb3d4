//! Uniqueness keys for sub-entity collections.

use crate::uid::Uid;

/// How a collection decides two records are the same entry.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum UniqueKey {
    /// Compare by name. Records without a name fall back to uid.
    #[default]
    Name,
    /// Compare by uid.
    Uid,
}

/// A record that can be deduplicated by [`UniqueKey`].
pub trait Keyed {
    /// The record's name, if it has one.
    fn key_name(&self) -> Option<&str>;

    /// The record's uid.
    fn uid(&self) -> Uid;

    /// Returns true if `self` and `other` are the same entry under `key`.
    fn same_key(&self, other: &Self, key: UniqueKey) -> bool {
        match (key, self.key_name(), other.key_name()) {
            (UniqueKey::Name, Some(a), Some(b)) => a == b,
            _ => self.uid() == other.uid(),
        }
    }
}
