//! Record storage addressed by handles.
//!
//! Each slot carries the generation it will hand out next alongside the
//! record it currently holds. Vacated slots go on a free list and come back
//! under a bumped generation.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::ObjectRecord;
use crate::handle::{Generation, GridId, Handle, SlotId};

static NEXT_GRID_ID: AtomicU32 = AtomicU32::new(0);

#[derive(Debug, Default)]
struct Slot {
    generation: Generation,
    record: Option<ObjectRecord>,
}

#[derive(Debug)]
pub(crate) struct RecordTable {
    grid: GridId,
    slots: Vec<Slot>,
    free: Vec<SlotId>,
    len: usize,
}

impl RecordTable {
    pub(crate) fn new() -> Self {
        Self {
            grid: NEXT_GRID_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Store the record built by `make` and return the handle it was given.
    pub(crate) fn insert_with(&mut self, make: impl FnOnce(Handle) -> ObjectRecord) -> Handle {
        let slot = self.free.pop().unwrap_or_else(|| {
            self.slots.push(Slot::default());
            (self.slots.len() - 1) as SlotId
        });

        let entry = &mut self.slots[slot as usize];
        let handle = Handle::new(self.grid, slot, entry.generation);
        entry.record = Some(make(handle));
        self.len += 1;
        handle
    }

    pub(crate) fn get(&self, handle: Handle) -> Option<&ObjectRecord> {
        if handle.grid() != self.grid {
            return None;
        }
        let slot = self.slots.get(handle.slot() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.record.as_ref()
    }

    pub(crate) fn get_mut(&mut self, handle: Handle) -> Option<&mut ObjectRecord> {
        self.live_slot_mut(handle)?.record.as_mut()
    }

    /// Take the record out and retire the handle.
    pub(crate) fn remove(&mut self, handle: Handle) -> Option<ObjectRecord> {
        let slot = self.live_slot_mut(handle)?;
        let record = slot.record.take()?;
        slot.generation = slot.generation.next();

        self.free.push(handle.slot());
        self.len -= 1;
        Some(record)
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &ObjectRecord> + '_ {
        self.slots.iter().filter_map(|slot| slot.record.as_ref())
    }

    /// Drop every record. All outstanding handles become stale.
    pub(crate) fn clear(&mut self) {
        for slot in &mut self.slots {
            if slot.record.take().is_some() {
                slot.generation = slot.generation.next();
            }
        }
        self.free.clear();
        self.free.extend((0..self.slots.len() as SlotId).rev());
        self.len = 0;
    }

    fn live_slot_mut(&mut self, handle: Handle) -> Option<&mut Slot> {
        if handle.grid() != self.grid {
            return None;
        }
        let slot = self.slots.get_mut(handle.slot() as usize)?;
        (slot.generation == handle.generation()).then_some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(handle: Handle) -> ObjectRecord {
        ObjectRecord::new(handle, format!("r{}", handle.slot()), (0.0, 0.0), (1.0, 1.0))
    }

    #[test]
    fn test_insert_assigns_sequential_slots() {
        let mut table = RecordTable::new();

        let a = table.insert_with(record);
        let b = table.insert_with(record);

        assert_eq!(a.slot(), 0);
        assert_eq!(b.slot(), 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(b).unwrap().handle(), b);
    }

    #[test]
    fn test_removed_slot_returns_under_new_generation() {
        let mut table = RecordTable::new();

        let old = table.insert_with(record);
        assert_eq!(table.remove(old).unwrap().handle(), old);
        assert!(table.remove(old).is_none());
        assert_eq!(table.len(), 0);

        let new = table.insert_with(record);
        assert_eq!(new.slot(), old.slot());
        assert_ne!(new.generation(), old.generation());
        assert!(table.get(old).is_none());
        assert!(table.get_mut(old).is_none());
        assert!(table.get(new).is_some());
    }

    #[test]
    fn test_clear_retires_every_handle() {
        let mut table = RecordTable::new();
        let handles: Vec<_> = (0..4).map(|_| table.insert_with(record)).collect();
        table.remove(handles[1]);

        table.clear();

        assert_eq!(table.len(), 0);
        assert_eq!(table.iter().count(), 0);
        assert!(handles.iter().all(|&h| table.get(h).is_none()));

        // Slots are reused from the front after a clear.
        assert_eq!(table.insert_with(record).slot(), 0);
    }

    #[test]
    fn test_foreign_handle_does_not_resolve() {
        let mut first = RecordTable::new();
        let mut second = RecordTable::new();

        let handle = first.insert_with(record);
        second.insert_with(record);

        assert!(second.get(handle).is_none());
        assert!(second.remove(handle).is_none());
        assert_eq!(second.len(), 1);
    }
}
