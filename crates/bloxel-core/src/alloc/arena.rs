use std::fmt;
use std::num::NonZeroU64;

/// Stable handle into an [`Arena`].
///
/// The upper 32 bits hold the slot generation, the lower 32 bits the slot
/// index plus one so that the value is never zero.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(NonZeroU64);

impl SlotId {
    pub fn new(generation: u32, idx: u32) -> Self {
        let raw = ((generation as u64) << 32) | (idx as u64 + 1);
        // The low half is `idx + 1` computed in u64, so it is at least one.
        Self(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }

    pub fn generation(&self) -> u32 {
        (self.0.get() >> 32) as u32
    }

    pub fn index(&self) -> u32 {
        ((self.0.get() & u32::MAX as u64) - 1) as u32
    }

    pub fn to_bits(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index(), self.generation())
    }
}

struct Entry<T> {
    generation: u32,
    data: Option<T>,
}

/// Generational arena.
///
/// Removing a value bumps the slot generation, so ids handed out before the
/// removal stop resolving instead of aliasing whatever reuses the slot.
pub struct Arena<T> {
    entries: Vec<Entry<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, data: T) -> SlotId {
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            let entry = &mut self.entries[idx as usize];
            entry.data = Some(data);
            SlotId::new(entry.generation, idx)
        } else {
            let idx = self.entries.len() as u32;
            self.entries.push(Entry {
                generation: 0,
                data: Some(data),
            });
            SlotId::new(0, idx)
        }
    }

    fn entry(&self, id: SlotId) -> Option<&Entry<T>> {
        self.entries
            .get(id.index() as usize)
            .filter(|entry| entry.generation == id.generation())
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.entry(id).and_then(|entry| entry.data.as_ref())
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.entries
            .get_mut(id.index() as usize)
            .filter(|entry| entry.generation == id.generation())
            .and_then(|entry| entry.data.as_mut())
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let index = id.index();
        let entry = self
            .entries
            .get_mut(index as usize)
            .filter(|entry| entry.generation == id.generation())?;
        let data = entry.data.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(index);
        self.len -= 1;
        Some(data)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.entries.iter().enumerate().filter_map(|(idx, entry)| {
            entry
                .data
                .as_ref()
                .map(|data| (SlotId::new(entry.generation, idx as u32), data))
        })
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_eq_size!(SlotId, Option<SlotId>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_insert() {
        let mut arena = Arena::<u8>::new();
        let id = arena.insert(15);
        assert_eq!(id.generation(), 0);
        assert_eq!(id.index(), 0);
        assert_eq!(arena.get(id), Some(&15));
    }

    #[test]
    fn test_arena_stale_generation() {
        let mut arena = Arena::<u8>::new();
        let _ = arena.insert(15);
        let stale = SlotId::new(1, 0);
        assert_eq!(arena.get(stale), None);
    }

    #[test]
    fn test_arena_remove_reuses_slot() {
        let mut arena = Arena::<u8>::new();
        let id = arena.insert(15);
        assert_eq!(arena.remove(id), Some(15));
        let new_id = arena.insert(45);
        assert_eq!(id.index(), new_id.index());
        assert_ne!(id.generation(), new_id.generation());
        assert_eq!(arena.get(id), None);
    }

    #[test]
    fn test_arena_iter_skips_removed() {
        let mut arena = Arena::<u8>::new();
        let ids: Vec<_> = (0..100).map(|i| arena.insert(i)).collect();
        arena.remove(ids[0]);
        arena.remove(ids[1]);
        let collected: Vec<_> = arena.iter().map(|(_, v)| *v).collect();
        assert_eq!(collected.len(), 98);
        assert_eq!(collected[0], 2);
        assert_eq!(arena.len(), 98);
    }
}
