//! Graph layer — graph representations and depth-first reachability queries.

use std::sync::atomic::{AtomicU32, Ordering};

pub mod adjacency_map;
pub mod airport;
pub mod document;
pub mod queries;
pub mod traversal;
pub mod vertex;

/// Fresh tag for a new arena. Handles carry the tag of the arena that
/// issued them, so a handle from one graph is never accepted by another.
pub(crate) fn next_arena_tag() -> u32 {
    static NEXT: AtomicU32 = AtomicU32::new(0);
    NEXT.fetch_add(1, Ordering::Relaxed)
}
