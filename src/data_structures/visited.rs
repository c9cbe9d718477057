/// Vertices whose shortest distance has been finalized during one search.
///
/// Membership only ever grows; a new set is created for every run.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    finalized: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    /// Creates an empty set over the vertex range `[0, vertex_count)`
    pub fn new(vertex_count: usize) -> Self {
        VisitedSet {
            finalized: vec![false; vertex_count],
            count: 0,
        }
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.finalized.get(vertex).copied().unwrap_or(false)
    }

    /// Marks a vertex as finalized. Returns false if it already was.
    pub fn insert(&mut self, vertex: usize) -> bool {
        match self.finalized.get_mut(vertex) {
            Some(slot) if !*slot => {
                *slot = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Number of finalized vertices
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
