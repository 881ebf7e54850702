use super::{
    dyn_array,
    AllocError,
    DynArray,
    IndexOutOfBounds,
    StoreError,
    TryClone,
};
use core::{
    fmt,
    mem,
};

/// A single key to value association of a [`LinearMap`].
#[derive(Debug, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new association.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns a shared reference to the key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns a shared reference to the value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns an exclusive reference to the value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Decomposes the association into its key and value.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> TryClone for Entry<K, V>
where
    K: TryClone,
    V: TryClone,
{
    fn try_clone(&self) -> Result<Self, AllocError> {
        let key = self.key.try_clone()?;
        // A failed value copy drops the fresh key copy.
        let value = self.value.try_clone()?;
        Ok(Self { key, value })
    }
}

/// Errors that may occur when inserting into a [`LinearMap`].
#[derive(Debug, PartialEq, Eq)]
pub enum InsertError {
    /// An association with an equal key is already stored; the map is
    /// unchanged.
    DuplicateKey,
    /// The underlying array could not make room for the association.
    Store(StoreError),
}

impl From<StoreError> for InsertError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// A unique-key association table backed by a [`DynArray`] of entries.
///
/// Every keyed operation is a linear scan: O(n) lookup is a deliberate
/// simplicity trade-off for small tables. Keys are compared by value
/// equality ([`PartialEq`]) and are pairwise distinct at all times.
///
/// Positional indices returned by [`index_of`](Self::index_of) are
/// invalidated by any insert, remove or clear; removal relocates the last
/// association into the freed slot instead of shifting.
pub struct LinearMap<'buf, K, V> {
    entries: DynArray<'buf, Entry<K, V>>,
}

impl<K, V> Default for LinearMap<'_, K, V> {
    fn default() -> Self {
        Self {
            entries: DynArray::default(),
        }
    }
}

impl<'buf, K, V> LinearMap<'buf, K, V> {
    /// Creates an empty heap-mode map with the given initial capacity.
    ///
    /// # Errors
    ///
    /// If the allocator cannot provide the entry buffer.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self {
            entries: DynArray::with_capacity(capacity)?,
        })
    }

    /// Creates an empty static-mode map bound to caller-owned entry slots.
    ///
    /// The map never grows the buffer; inserting into a full static map
    /// fails with [`StoreError::CapacityExhausted`].
    pub fn with_buffer(buffer: &'buf mut [Option<Entry<K, V>>]) -> Self {
        Self {
            entries: DynArray::with_buffer(buffer),
        }
    }

    /// Returns the number of stored associations.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no associations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of associations the map can hold before it has
    /// to grow (heap mode) or reject inserts (static mode).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns `true` if the map owns its buffer and may grow it.
    #[inline]
    pub fn is_growable(&self) -> bool {
        self.entries.is_growable()
    }

    /// Returns a shared reference to the key at the given position.
    #[inline]
    pub fn key_at(&self, index: usize) -> Option<&K> {
        self.entries.get(index).map(Entry::key)
    }

    /// Returns a shared reference to the value at the given position.
    #[inline]
    pub fn value_at(&self, index: usize) -> Option<&V> {
        self.entries.get(index).map(Entry::value)
    }

    /// Replaces the value at the given position and returns the previous
    /// one. The key is untouched.
    ///
    /// # Errors
    ///
    /// If the index does not refer to a stored association.
    pub fn set_value_at(&mut self, index: usize, new_value: V) -> Result<V, IndexOutOfBounds> {
        match self.entries.get_mut(index) {
            Some(entry) => Ok(mem::replace(entry.value_mut(), new_value)),
            None => Err(IndexOutOfBounds),
        }
    }

    /// Removes the association at the given position by relocating the
    /// last stored association into its place, and returns it.
    ///
    /// Does not preserve insertion order and invalidates all previously
    /// obtained indices. Returns `None` if the index is not live.
    pub fn swap_remove(&mut self, index: usize) -> Option<Entry<K, V>> {
        self.entries.swap_remove(index)
    }

    /// Drops all associations. Capacity and buffer ownership mode are
    /// unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator yielding shared references to the key and value
    /// pairs in storage order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator yielding exclusive references to the values
    /// alongside their keys.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.entries.iter_mut(),
        }
    }
}

impl<'buf, K, V> LinearMap<'buf, K, V>
where
    K: PartialEq,
{
    /// Inserts a new association.
    ///
    /// # Errors
    ///
    /// If an association with an equal key is already stored the insert is
    /// rejected (duplicates are not overwritten) and the map is unchanged.
    /// Also fails if the underlying array cannot make room.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), InsertError> {
        if self.contains_key(&key) {
            return Err(InsertError::DuplicateKey)
        }
        self.entries.try_push(Entry::new(key, value))?;
        Ok(())
    }

    /// Returns the position of the association with the given key if any.
    ///
    /// The returned index is valid until the next insert, remove or clear.
    #[inline]
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key() == key)
    }

    /// Returns `true` if an association with the given key is stored.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.index_of(key).is_some()
    }

    /// Returns a shared reference to the value for the given key if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.key() == key)
            .map(Entry::value)
    }

    /// Returns an exclusive reference to the value for the given key if
    /// any.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|entry| entry.key() == key)
            .map(Entry::value_mut)
    }

    /// Removes the association with the given key and returns its value,
    /// or `None` if the key is absent.
    ///
    /// Uses swap-with-last removal and therefore invalidates all
    /// previously obtained indices.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.index_of(key)?;
        self.swap_remove(index).map(|entry| entry.into_pair().1)
    }
}

impl<K, V> TryClone for LinearMap<'_, K, V>
where
    K: TryClone,
    V: TryClone,
{
    /// Copy construction is all-or-nothing, delegated to the entry array.
    fn try_clone(&self) -> Result<Self, AllocError> {
        Ok(Self {
            entries: self.entries.try_clone()?,
        })
    }
}

impl<K, V> fmt::Debug for LinearMap<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, K, V> {
    inner: dyn_array::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.key(), entry.value()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub struct IterMut<'a, K, V> {
    inner: dyn_array::IterMut<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| {
            let Entry { key, value } = entry;
            (&*key, value)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> IntoIterator for &'a LinearMap<'_, K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut LinearMap<'_, K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
