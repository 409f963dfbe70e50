//! Fixed-capacity bit vector over dictionary indices.
//!
//! The capacity is chosen at construction (normally the dictionary length) and
//! never changes. Bits past the capacity are always zero, so two sets with the
//! same members compare and hash equal. That property is what lets a set be
//! used directly as a memo key.

const BLOCK_BITS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    len: usize,
    blocks: Vec<u64>,
}

/// A set of words that are still possible solutions.
pub type CandidateSet = BitSet;

impl BitSet {
    /// An empty set able to hold indices `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            blocks: vec![0; len.div_ceil(BLOCK_BITS)],
        }
    }

    /// A set with every index in `0..len` present.
    pub fn full(len: usize) -> Self {
        let mut set = Self {
            len,
            blocks: vec![u64::MAX; len.div_ceil(BLOCK_BITS)],
        };
        set.clear_tail();
        set
    }

    pub fn from_indices<I>(len: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::new(len);
        for i in indices {
            set.insert(i);
        }
        set
    }

    fn clear_tail(&mut self) {
        let used = self.len % BLOCK_BITS;
        if used != 0 {
            if let Some(last) = self.blocks.last_mut() {
                *last &= u64::MAX >> (BLOCK_BITS - used);
            }
        }
    }

    /// Number of indices this set can hold.
    pub fn capacity(&self) -> usize {
        self.len
    }

    pub fn insert(&mut self, i: usize) {
        assert!(i < self.len, "index {} out of range for {} bits", i, self.len);
        self.blocks[i / BLOCK_BITS] |= 1 << (i % BLOCK_BITS);
    }

    pub fn remove(&mut self, i: usize) {
        if i < self.len {
            self.blocks[i / BLOCK_BITS] &= !(1 << (i % BLOCK_BITS));
        }
    }

    pub fn contains(&self, i: usize) -> bool {
        i < self.len && self.blocks[i / BLOCK_BITS] & (1 << (i % BLOCK_BITS)) != 0
    }

    /// Population count.
    pub fn count(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&b| b == 0)
    }

    /// `self &= other`
    pub fn intersect_with(&mut self, other: &BitSet) {
        debug_assert_eq!(self.len, other.len);
        for (a, b) in self.blocks.iter_mut().zip(&other.blocks) {
            *a &= b;
        }
    }

    /// `self &= !other`
    pub fn difference_with(&mut self, other: &BitSet) {
        debug_assert_eq!(self.len, other.len);
        for (a, b) in self.blocks.iter_mut().zip(&other.blocks) {
            *a &= !b;
        }
    }

    pub fn intersection(&self, other: &BitSet) -> BitSet {
        let mut out = self.clone();
        out.intersect_with(other);
        out
    }

    /// `(self & other).count()` without allocating.
    pub fn intersection_count(&self, other: &BitSet) -> usize {
        debug_assert_eq!(self.len, other.len);
        self.blocks
            .iter()
            .zip(&other.blocks)
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// First set index at or after `from`.
    pub fn next_set(&self, from: usize) -> Option<usize> {
        if from >= self.len {
            return None;
        }
        let mut block = from / BLOCK_BITS;
        let mut word = self.blocks[block] >> (from % BLOCK_BITS);
        if word != 0 {
            return Some(from + word.trailing_zeros() as usize);
        }
        loop {
            block += 1;
            word = *self.blocks.get(block)?;
            if word != 0 {
                return Some(block * BLOCK_BITS + word.trailing_zeros() as usize);
            }
        }
    }

    pub fn first(&self) -> Option<usize> {
        self.next_set(0)
    }

    /// Set indices in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { set: self, next: 0 }
    }
}

pub struct Iter<'a> {
    set: &'a BitSet,
    next: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let i = self.set.next_set(self.next)?;
        self.next = i + 1;
        Some(i)
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
