use std::hash::BuildHasherDefault;

use hashbrown::HashMap;

use crate::hash::StateKey;
use crate::state::Move;

type FastHasher = BuildHasherDefault<ahash::AHasher>;

/// Memo key: canonical position plus the (alpha, beta) window it was searched with.
pub type MemoKey = (StateKey, i8, i8);

/// Result of a max/min search from one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub value: i8,
    /// Move adopted at this node. At a terminal node, the last recorded move.
    pub best: Option<Move>,
}

pub trait MemoTable {
    fn get(&self, key: &MemoKey) -> Option<SearchOutcome>;
    fn put(&mut self, key: MemoKey, outcome: SearchOutcome);
    fn clear(&mut self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Hash-map memo keyed by full position content.
#[derive(Debug, Default)]
pub struct InMemoryMemo {
    map: HashMap<MemoKey, SearchOutcome, FastHasher>,
    puts: u64,
}

impl InMemoryMemo {
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(cap, FastHasher::default()),
            puts: 0,
        }
    }

    #[inline]
    pub fn puts(&self) -> u64 {
        self.puts
    }
}

impl MemoTable for InMemoryMemo {
    #[inline]
    fn get(&self, key: &MemoKey) -> Option<SearchOutcome> {
        self.map.get(key).copied()
    }

    #[inline]
    fn put(&mut self, key: MemoKey, outcome: SearchOutcome) {
        self.puts = self.puts.saturating_add(1);
        self.map.insert(key, outcome);
    }

    #[inline]
    fn clear(&mut self) {
        self.map.clear();
        self.puts = 0;
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }
}

/// Memo that never stores anything; searches with it explore the full tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMemo;

impl MemoTable for NoMemo {
    #[inline]
    fn get(&self, _key: &MemoKey) -> Option<SearchOutcome> {
        None
    }

    #[inline]
    fn put(&mut self, _key: MemoKey, _outcome: SearchOutcome) {}

    #[inline]
    fn clear(&mut self) {}

    #[inline]
    fn len(&self) -> usize {
        0
    }
}
