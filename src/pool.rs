/// Fixed-capacity slot pools.
///
/// Every entity category lives in a pre-allocated array of slots; a slot is
/// either active (valid fields) or free (ignored by every scan). Acquiring
/// finds the first free slot by linear scan; when the pool is full the
/// caller's spawn or fire action is silently dropped. Pools never grow,
/// never queue, and make no ordering guarantee about slot reuse.

/// Implemented by every pooled entity type.
pub trait Slot {
    fn is_active(&self) -> bool;
    fn deactivate(&mut self);
}

#[derive(Clone, Debug)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Slot + Default> Pool<T> {
    /// Create a pool of `capacity` free slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Pool {
            slots: (0..capacity).map(|_| T::default()).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// First free slot, or `None` when the pool is full.
    ///
    /// The caller overwrites the returned slot wholesale (full struct
    /// assignment with the active flag set), so an active entity is never
    /// observable half-initialized.
    pub fn acquire(&mut self) -> Option<&mut T> {
        self.slots.iter_mut().find(|s| !s.is_active())
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.is_active())
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|s| s.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    /// Free every slot. Deactivation is idempotent.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.deactivate();
        }
    }
}
