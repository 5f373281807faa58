//! FrameSet - the fixed set of frame slots a policy fills.
//!
//! A [`FrameSet`] holds up to `capacity` pages, one per slot:
//! - Slot positions never move; they are the rows of the frame table
//! - Empty slots are filled lowest index first
//! - An eviction puts the new page in the victim's slot

use std::collections::HashMap;

use crate::common::{FrameId, PageId};

/// Fixed-capacity frame slots plus a reverse page table.
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────────┐
/// │                   FrameSet                     │
/// │  ┌──────────────┐   ┌───────────────────────┐  │
/// │  │ page_table   │   │ slots: Vec<Option<..>>│  │
/// │  │PageId → Fid  │──▶│ [ 7 ] [ 0 ] [ - ] ... │  │
/// │  └──────────────┘   └───────────────────────┘  │
/// └────────────────────────────────────────────────┘
/// ```
///
/// The page table makes residency checks O(1) and guarantees a page never
/// sits in two slots at once.
#[derive(Debug, Clone)]
pub struct FrameSet {
    /// One entry per frame; `None` means empty.
    slots: Vec<Option<PageId>>,

    /// Maps resident pages to their slot.
    page_table: HashMap<PageId, FrameId>,
}

impl FrameSet {
    /// Create an empty frame set.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            slots: vec![None; capacity],
            page_table: HashMap::with_capacity(capacity),
        }
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.page_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page_table.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Whether `page` is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.page_table.contains_key(&page)
    }

    /// Slot holding `page`, if resident.
    #[inline]
    pub fn frame_of(&self, page: PageId) -> Option<FrameId> {
        self.page_table.get(&page).copied()
    }

    /// Page held by `frame_id`, if any.
    #[inline]
    pub fn page_in(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots.get(frame_id.0).copied().flatten()
    }

    /// Place a non-resident page in the lowest empty slot.
    ///
    /// Returns the slot used, or `None` if every slot is occupied.
    pub fn admit(&mut self, page: PageId) -> Option<FrameId> {
        debug_assert!(!self.contains(page), "{} is already resident", page);

        let frame_id = FrameId::new(self.slots.iter().position(Option::is_none)?);
        self.slots[frame_id.0] = Some(page);
        self.page_table.insert(page, frame_id);
        Some(frame_id)
    }

    /// Put `page` into the slot currently holding `victim`.
    ///
    /// Returns the slot reused, or `None` if `victim` is not resident
    /// (nothing changes in that case).
    pub fn replace(&mut self, victim: PageId, page: PageId) -> Option<FrameId> {
        debug_assert!(!self.contains(page), "{} is already resident", page);

        let frame_id = self.page_table.remove(&victim)?;
        self.slots[frame_id.0] = Some(page);
        self.page_table.insert(page, frame_id);
        Some(frame_id)
    }

    /// Resident pages in slot order.
    pub fn resident(&self) -> impl Iterator<Item = PageId> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Slot contents in slot order.
    #[inline]
    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }

    /// Copy of the slot contents, used as a step snapshot.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}
