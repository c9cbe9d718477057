pub mod priority_queue;
pub mod visited;

pub use priority_queue::{by_distance, new_frontier, Frontier, FrontierEntry, PriorityQueue};
pub use visited::VisitedSet;
