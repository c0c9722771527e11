use std::{borrow::Borrow, hash::Hash};

use rustc_hash::FxHashMap;

#[derive(Debug)]
struct Slot<V> {
    value: V,
    /// Tick of the last access, larger is more recent
    used: u64,
}

/// Least recently used map with a fixed capacity.
///
/// Lookups are hash lookups, eviction scans the entries to find the oldest
/// one. Eviction only happens on insert into a full map.
#[derive(Debug)]
pub struct Lru<K: Hash + Eq, V> {
    cap: usize,
    tick: u64,
    map: FxHashMap<K, Slot<V>>,
}

impl<K: Hash + Eq, V> Lru<K, V> {
    pub fn new(cap: usize) -> Lru<K, V> {
        Lru {
            cap,
            tick: 0,
            map: FxHashMap::default(),
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Lookup a value and mark it as most recently used
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.tick += 1;
        let tick = self.tick;
        let slot = self.map.get_mut(key)?;
        slot.used = tick;
        Some(&slot.value)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Insert a value as the most recently used one.
    /// If the map is full the least recently used entry is removed and
    /// returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        if self.cap == 0 {
            return None;
        }

        self.tick += 1;
        let used = self.tick;

        if let Some(slot) = self.map.get_mut(&key) {
            slot.value = value;
            slot.used = used;
            return None;
        }

        let evicted = if self.map.len() >= self.cap {
            self.evict()
        } else {
            None
        };

        self.map.insert(key, Slot { value, used });
        evicted
    }

    fn evict(&mut self) -> Option<(K, V)>
    where
        K: Clone,
    {
        let oldest = self
            .map
            .iter()
            .min_by_key(|(_, slot)| slot.used)
            .map(|(key, _)| key.clone())?;
        let slot = self.map.remove(&oldest)?;
        log::trace!("LRU evicted entry used at tick {}", slot.used);
        Some((oldest, slot.value))
    }
}
