use fetch_ids::ArenaKey;

/// Generation-checked slot storage. Index 0 is reserved as the nil
/// sentinel so the first real key is 1; removing a slot bumps its
/// generation, invalidating stale keys that still point at it.
pub struct SlotArena<K: ArenaKey, T> {
    slots: Vec<Option<T>>,
    generations: Vec<u32>,
    free_indices: Vec<usize>,
    _key: std::marker::PhantomData<K>,
}

impl<K: ArenaKey, T> SlotArena<K, T> {
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(2);
        let mut generations = Vec::with_capacity(2);
        slots.push(None);
        generations.push(0);
        Self {
            slots,
            generations,
            free_indices: Vec::new(),
            _key: std::marker::PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        // +1 for the reserved nil sentinel slot at index 0.
        let mut slots = Vec::with_capacity(capacity.saturating_add(1));
        let mut generations = Vec::with_capacity(capacity.saturating_add(1));
        slots.push(None);
        generations.push(0);
        Self {
            slots,
            generations,
            free_indices: Vec::new(),
            _key: std::marker::PhantomData,
        }
    }

    /// Insert a value, returns a key with index and generation.
    pub fn insert(&mut self, value: T) -> K {
        // Reuse a previously freed slot in O(1).
        if let Some(index) = self.free_indices.pop() {
            self.slots[index] = Some(value);
            let generation = self.generations[index];
            return K::from_parts(index as u32, generation);
        }

        // No free slots, push to end
        let index = self.slots.len();
        self.slots.push(Some(value));
        self.generations.push(0);
        K::from_parts(index as u32, 0)
    }

    fn live(&self, key: K) -> bool {
        !key.is_nil()
            && key.index() != 0
            && (key.index() as usize) < self.slots.len()
            && self.generations[key.index() as usize] == key.generation()
    }

    /// Get a value by key, returns None if the generation doesn't match.
    pub fn get(&self, key: K) -> Option<&T> {
        if !self.live(key) {
            return None;
        }
        self.slots[key.index() as usize].as_ref()
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        if !self.live(key) {
            return None;
        }
        self.slots[key.index() as usize].as_mut()
    }

    /// Remove a value, bumping the generation counter.
    pub fn remove(&mut self, key: K) -> Option<T> {
        if !self.live(key) {
            return None;
        }

        let index = key.index() as usize;
        self.generations[index] = self.generations[index].wrapping_add(1);
        let removed = self.slots[index].take();
        if removed.is_some() {
            self.free_indices.push(index);
        }
        removed
    }

    pub fn contains(&self, key: K) -> bool {
        self.live(key) && self.slots[key.index() as usize].is_some()
    }

    /// Iterator over all live entries.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        self.slots.iter().enumerate().skip(1).filter_map(|(index, slot)| {
            slot.as_ref()
                .map(|v| (K::from_parts(index as u32, self.generations[index]), v))
        })
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.generations.clear();
        self.free_indices.clear();
        self.slots.push(None);
        self.generations.push(0);
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }
}

impl<K: ArenaKey, T> Default for SlotArena<K, T> {
    fn default() -> Self {
        Self::new()
    }
}
