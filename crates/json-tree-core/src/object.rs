//! Open-addressing hash table backing a JSON object.

use crate::hash::djb2;
use crate::{JsonValue, Member, TreeError, INITIAL_CAPACITY};

/// Grow once `count >= capacity * LOAD_FACTOR_PERCENT / 100`. For the
/// initial capacity of 64 the trigger point is 38, so the 39th insertion
/// doubles the table.
const LOAD_FACTOR_PERCENT: usize = 60;

/// Linear probing: advance one slot per collision. Simple and sufficient;
/// exhibits primary clustering under high load, which the 60% load cap
/// keeps in check.
const PROBE_STEP: usize = 1;

/// Result of probing the slot table for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlotLookup {
    /// The key is already present at this slot.
    Occupied(usize),
    /// The key is absent; this is the first empty slot on its probe path.
    Vacant(usize),
}

/// Probe from the key's home slot until the key or an empty slot is found.
///
/// Shared by insertion, lookup, and resize so the duplicate-key policy is
/// applied identically everywhere. The table is never full (the load cap
/// guarantees empty slots), so the probe always terminates.
pub(crate) fn find_slot(slots: &[Option<Member>], key: &str) -> SlotLookup {
    debug_assert!(!slots.is_empty());
    let mut index = (djb2(key) % slots.len() as u64) as usize;
    loop {
        match &slots[index] {
            Some(member) if member.key() == key => return SlotLookup::Occupied(index),
            Some(_) => index = (index + PROBE_STEP) % slots.len(),
            None => return SlotLookup::Vacant(index),
        }
    }
}

fn alloc_slots(capacity: usize) -> Result<Box<[Option<Member>]>, TreeError> {
    let mut slots: Vec<Option<Member>> = Vec::new();
    slots.try_reserve_exact(capacity)?;
    slots.resize_with(capacity, || None);
    Ok(slots.into_boxed_slice())
}

/// Hash table mapping unique string keys to owned [`Member`]s; the backing
/// store of a JSON object.
///
/// Open addressing with linear probing over a slot table of
/// `Option<Member>`. The table is allocated lazily at capacity 64 on the
/// first insertion and doubles whenever the occupancy reaches 60%.
///
/// Iteration visits occupied slots in **physical slot order**, which is a
/// function of key hashes and resize history, NOT insertion order. This is
/// a documented, observable property of the type.
///
/// Keys are hashed unseeded (see [`crate::hash::djb2`]); adversarial key
/// sets can degrade probing to linear scans.
#[derive(Debug, Clone, Default)]
pub struct JsonObject {
    slots: Box<[Option<Member>]>,
    count: usize,
}

impl JsonObject {
    /// Create an empty object. Does not allocate.
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
            count: 0,
        }
    }

    /// Create an empty object with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, TreeError> {
        Ok(Self {
            slots: alloc_slots(capacity)?,
            count: 0,
        })
    }

    /// Number of stored members.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current slot count. `len() <= capacity()` always holds.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Insert a member, taking ownership of it.
    ///
    /// Fails with [`TreeError::DuplicateKey`] if the key is already present;
    /// the table is left untouched and the member is dropped (its key rides
    /// back in the error). Grows the table first when the load trigger is
    /// met; a failed growth returns [`TreeError::Alloc`] with the original
    /// table still intact and usable.
    pub fn insert(&mut self, member: Member) -> Result<(), TreeError> {
        if self.slots.is_empty() {
            self.slots = alloc_slots(INITIAL_CAPACITY)?;
        } else if self.count >= self.slots.len() * LOAD_FACTOR_PERCENT / 100 {
            self.resize()?;
        }

        match find_slot(&self.slots, member.key()) {
            SlotLookup::Occupied(_) => Err(TreeError::DuplicateKey(member.key().to_owned())),
            SlotLookup::Vacant(index) => {
                self.slots[index] = Some(member);
                self.count += 1;
                Ok(())
            }
        }
    }

    /// Look up a member's value by key.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.get_member(key).map(Member::value)
    }

    /// Look up a member by key.
    pub fn get_member(&self, key: &str) -> Option<&Member> {
        if self.slots.is_empty() {
            return None;
        }
        match find_slot(&self.slots, key) {
            SlotLookup::Occupied(index) => self.slots[index].as_ref(),
            SlotLookup::Vacant(_) => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get_member(key).is_some()
    }

    /// Iterate members in physical slot order (NOT insertion order).
    pub fn iter(&self) -> impl Iterator<Item = &Member> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Iterate keys in physical slot order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(Member::key)
    }

    /// Iterate values in physical slot order.
    pub fn values(&self) -> impl Iterator<Item = &JsonValue> + '_ {
        self.iter().map(Member::value)
    }

    /// Double the slot table and rehash every member into it.
    ///
    /// The new table is allocated before the old one is touched, so an
    /// allocation failure leaves the object exactly as it was. A duplicate
    /// key encountered during the rehash is impossible on a well-formed
    /// table and reported as [`TreeError::CorruptTable`].
    fn resize(&mut self) -> Result<(), TreeError> {
        let new_slots = alloc_slots(self.slots.len() * 2)?;
        let old_slots = std::mem::replace(&mut self.slots, new_slots);
        for member in old_slots.into_vec().into_iter().flatten() {
            match find_slot(&self.slots, member.key()) {
                SlotLookup::Vacant(index) => self.slots[index] = Some(member),
                SlotLookup::Occupied(_) => return Err(TreeError::CorruptTable),
            }
        }
        Ok(())
    }

    /// Move every member's value into `out`, leaving the object empty.
    pub(crate) fn drain_into(&mut self, out: &mut Vec<JsonValue>) {
        for slot in self.slots.iter_mut() {
            if let Some(member) = slot.take() {
                let (_key, value) = member.into_parts();
                out.push(value);
            }
        }
        self.count = 0;
    }
}

/// Order-insensitive member-set equality: two objects are equal when they
/// hold the same keys mapped to equal values, regardless of slot layout.
impl PartialEq for JsonObject {
    fn eq(&self, other: &Self) -> bool {
        if self.count != other.count {
            return false;
        }
        self.iter()
            .all(|member| other.get(member.key()) == Some(member.value()))
    }
}
