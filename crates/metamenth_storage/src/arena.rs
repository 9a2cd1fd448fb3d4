//! Generational arenas for building records.
//!
//! An `Arena` allocates slots from a free list when available, otherwise
//! appends. Destroying a record bumps the slot's generation so ids that
//! outlive their record are reported as stale instead of aliasing a newer one.

// Allow u64 to usize casts - we target 64-bit systems
#![allow(clippy::cast_possible_truncation)]

use std::marker::PhantomData;

use im::Vector;
use metamenth_foundation::{EntityId, Error, Result, TypedId};

/// Slot storage for one record kind, addressed by typed ids.
///
/// Backed by persistent vectors, so cloning an arena is O(1) and clones share
/// structure until written.
#[derive(Debug, Clone)]
pub struct Arena<I: TypedId, T: Clone> {
    /// Generation counter per slot. Even generations are free, odd are alive.
    generations: Vector<u32>,
    /// Record per slot; `None` for free slots.
    slots: Vector<Option<T>>,
    /// Indices available for reuse.
    free_list: Vector<u64>,
    /// Count of live records.
    live_count: usize,
    marker: PhantomData<fn() -> I>,
}

impl<I: TypedId, T: Clone> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: TypedId, T: Clone> Arena<I, T> {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            generations: Vector::new(),
            slots: Vector::new(),
            free_list: Vector::new(),
            live_count: 0,
            marker: PhantomData,
        }
    }

    /// Stores `record` and returns its id, reusing a free slot when available.
    pub fn insert(&mut self, record: T) -> I {
        self.live_count += 1;

        if let Some(index) = self.free_list.pop_back() {
            let idx = index as usize;
            let generation = self.generations[idx] + 1;
            self.generations.set(idx, generation);
            self.slots.set(idx, Some(record));
            I::from_raw(EntityId::new(index, generation))
        } else {
            let index = self.generations.len() as u64;
            self.generations.push_back(1);
            self.slots.push_back(Some(record));
            I::from_raw(EntityId::new(index, 1))
        }
    }

    /// Removes and returns the record for `id`.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` or `StaleEntity` if `id` is not live.
    pub fn remove(&mut self, id: I) -> Result<T> {
        self.validate(id)?;

        let idx = id.raw().index as usize;
        self.generations.set(idx, id.raw().generation + 1);
        let record = self.slots.set(idx, None);
        self.free_list.push_back(id.raw().index);
        self.live_count -= 1;

        record.ok_or_else(|| Error::internal(format!("live slot without record: {id:?}")))
    }

    /// Checks if `id` refers to a live record.
    #[must_use]
    pub fn exists(&self, id: I) -> bool {
        let raw = id.raw();
        self.generations
            .get(raw.index as usize)
            .is_some_and(|&generation| generation == raw.generation && generation % 2 == 1)
    }

    /// Validates that `id` refers to a live record.
    ///
    /// # Errors
    ///
    /// - `EntityNotFound` if the slot never existed or is free
    /// - `StaleEntity` if the slot was reused since `id` was issued
    pub fn validate(&self, id: I) -> Result<()> {
        let raw = id.raw();
        let Some(&current_gen) = self.generations.get(raw.index as usize) else {
            return Err(Error::entity_not_found(id.to_ref()));
        };

        if current_gen != raw.generation {
            return Err(Error::stale_entity(id.to_ref()));
        }

        if current_gen % 2 == 0 {
            return Err(Error::entity_not_found(id.to_ref()));
        }

        Ok(())
    }

    /// Returns the record for `id` if it is live.
    #[must_use]
    pub fn get(&self, id: I) -> Option<&T> {
        if !self.exists(id) {
            return None;
        }
        self.slots.get(id.raw().index as usize)?.as_ref()
    }

    /// Returns the record for `id` mutably if it is live.
    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        if !self.exists(id) {
            return None;
        }
        self.slots.get_mut(id.raw().index as usize)?.as_mut()
    }

    /// Returns the record for `id`.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` or `StaleEntity` if `id` is not live.
    pub fn try_get(&self, id: I) -> Result<&T> {
        self.validate(id)?;
        self.get(id)
            .ok_or_else(|| Error::internal(format!("live slot without record: {id:?}")))
    }

    /// Returns the record for `id` mutably.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` or `StaleEntity` if `id` is not live.
    pub fn try_get_mut(&mut self, id: I) -> Result<&mut T> {
        self.validate(id)?;
        self.get_mut(id)
            .ok_or_else(|| Error::internal(format!("live slot without record: {id:?}")))
    }

    /// Returns the number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// Returns true if there are no live records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Iterates over live records in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> + '_ {
        self.generations
            .iter()
            .zip(self.slots.iter())
            .enumerate()
            .filter_map(|(idx, (&generation, slot))| {
                let record = slot.as_ref()?;
                Some((I::from_raw(EntityId::new(idx as u64, generation)), record))
            })
    }

    /// Iterates mutably over live records in slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (I, &mut T)> + '_ {
        self.generations
            .iter()
            .zip(self.slots.iter_mut())
            .enumerate()
            .filter_map(|(idx, (&generation, slot))| {
                let record = slot.as_mut()?;
                Some((I::from_raw(EntityId::new(idx as u64, generation)), record))
            })
    }

    /// Iterates over live ids in slot order.
    pub fn ids(&self) -> impl Iterator<Item = I> + '_ {
        self.iter().map(|(id, _)| id)
    }
}
