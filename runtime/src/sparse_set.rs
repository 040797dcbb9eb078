//! Provides an implementation of a SparseSet as an alternative to HashSets
//! for tracking active automaton states.

pub struct SparseSet {
    dense: Vec<usize>,
    sparse: Vec<usize>,
}

impl SparseSet {
    /// Initializes a new set of taking a value representing the maximum size
    /// of the set.
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self {
            dense: Vec::with_capacity(max_len),
            sparse: vec![0; max_len],
        }
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Returns the largest value, exclusive, the set can hold without
    /// resizing.
    pub fn capacity(&self) -> usize {
        self.sparse.len()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Inserts a value into the set, returning `false` if it was already
    /// present.
    pub fn insert(&mut self, val: usize) -> bool {
        if self.contains(&val) {
            return false;
        }

        if self.sparse.len() <= val {
            // double the size.
            self.resize((val + 1) * 2)
        }

        self.sparse[val] = self.dense.len();
        self.dense.push(val);
        true
    }

    /// Returns `true` if the set contains a value.
    pub fn contains(&self, val: &usize) -> bool {
        self.sparse
            .get(*val)
            .map(|&dense_idx| self.dense.get(dense_idx) == Some(val))
            // if none, the bounds of the set are exceeded and thus doesn't
            // contain the value.
            .unwrap_or(false)
    }

    /// Iterates over members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.dense.iter().copied()
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        self.dense.clear();
    }

    fn resize(&mut self, new_len: usize) {
        self.sparse.resize_with(new_len, || 0)
    }
}

impl core::fmt::Debug for SparseSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SparseSet({:?})", &self.dense)
    }
}
