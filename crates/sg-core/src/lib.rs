//! `sg-core` — foundational types for the streetgrid routing engine.
//!
//! This crate is a dependency of every other `sg-*` crate.  It intentionally
//! has no `sg-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                    |
//! |-----------|---------------------------------------------|
//! | [`ids`]   | `IntersectionId`, `BlockId`                 |
//! | [`coord`] | `Coord`, Euclidean distance                 |
//! | [`rng`]   | `TrafficRng` (seeded build-time sampling)   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod coord;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::Coord;
pub use ids::{BlockId, IntersectionId};
pub use rng::TrafficRng;
