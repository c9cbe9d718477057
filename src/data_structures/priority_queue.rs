use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use crate::graph::Weight;
use crate::{Error, Result};

/// An item paired with the comparator that ranks it inside the heap
struct Ranked<T, F> {
    item: T,
    compare: F,
}

impl<T, F> PartialEq for Ranked<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, F> Eq for Ranked<T, F> where F: Fn(&T, &T) -> Ordering {}

impl<T, F> PartialOrd for Ranked<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, F> Ord for Ranked<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, other: &Self) -> Ordering {
        (self.compare)(&self.item, &other.item)
    }
}

/// A min-priority queue over `BinaryHeap` ordered by a comparator supplied at
/// construction.
///
/// The item type carries no ordering of its own, so the same entry type can be
/// queued under different policies. Push and pop are O(log k).
pub struct PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering + Copy,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<Ranked<T, F>>>,

    compare: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering + Copy,
{
    /// Creates a new empty priority queue ordered by `compare`
    pub fn new(compare: F) -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
            compare,
        }
    }

    /// Creates an empty queue with room for `capacity` items
    pub fn with_capacity(capacity: usize, compare: F) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
            compare,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts an item. Equal or duplicate items may coexist.
    pub fn push(&mut self, item: T) {
        self.heap.push(Reverse(Ranked {
            item,
            compare: self.compare,
        }));
    }

    /// Removes the smallest item, or returns `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(ranked)| ranked.item)
    }

    /// Removes the smallest item, failing with `EmptyFrontier` when empty
    pub fn pop_min(&mut self) -> Result<T> {
        self.pop().ok_or(Error::EmptyFrontier)
    }

    /// Returns the smallest item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(ranked)| &ranked.item)
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.heap.iter().map(|Reverse(ranked)| &ranked.item))
            .finish()
    }
}

/// A candidate vertex with its tentative distance from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry<W> {
    pub vertex: usize,
    pub distance: W,
}

impl<W> FrontierEntry<W> {
    pub fn new(vertex: usize, distance: W) -> Self {
        FrontierEntry { vertex, distance }
    }
}

/// Orders entries by distance ascending, breaking ties on the vertex index
pub fn by_distance<W: Weight>(a: &FrontierEntry<W>, b: &FrontierEntry<W>) -> Ordering {
    a.distance
        .cmp(&b.distance)
        .then_with(|| a.vertex.cmp(&b.vertex))
}

/// The frontier used by the relaxation loop
pub type Frontier<W> = PriorityQueue<FrontierEntry<W>, EntryOrder<W>>;

pub type EntryOrder<W> = fn(&FrontierEntry<W>, &FrontierEntry<W>) -> Ordering;

/// Creates an empty frontier ordered by [`by_distance`]
pub fn new_frontier<W: Weight>() -> Frontier<W> {
    PriorityQueue::new(by_distance::<W> as EntryOrder<W>)
}
