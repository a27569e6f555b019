//! `sg-routing` — query layer over the immutable street network.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`reachable`] | Depth-first reachability in visit order                   |
//! | [`paths`]     | `minimize_intersections` (BFS), `fastest_path` (Dijkstra) |
//! | [`stats`]     | `path_info` aggregation, `PathInfo`                       |
//!
//! All queries take `&StreetNetwork` plus vertex ids and return plain
//! vectors; "no path" and "unknown vertex" surface as empty results, never
//! as errors.  Queries allocate only their own traversal state, so any
//! number can run concurrently over one network.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                           |
//! |---------|--------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `PathInfo`. |

pub mod paths;
pub mod reachable;
pub mod stats;

#[cfg(test)]
mod tests;

pub use paths::{fastest_path, minimize_intersections};
pub use reachable::reachable;
pub use stats::{PathInfo, path_info};
