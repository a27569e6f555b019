//! `sg-network` — street-network data model, map builder, and traffic model.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                |
//! |------------------|---------------------------------------------------------|
//! | [`records`]      | `StreetRecord`, `BlockRecord` — raw map input           |
//! | [`block`]        | `Block` — directed copy of one physical segment         |
//! | [`intersection`] | `Intersection` — graph vertex at one coordinate         |
//! | [`network`]      | `StreetNetwork` — immutable graph + R-tree index        |
//! | [`builder`]      | `StreetNetworkBuilder`, `build_network`                 |
//! | [`traffic`]      | `TrafficModel`, `GaussianTraffic`, `ConstantTraffic`    |
//! | [`surface`]      | `MapSurface` visualization hook, `NoopSurface`          |
//! | [`error`]        | `NetworkError`, `NetworkResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                      |
//! |-----------|-------------------------------------------------------------|
//! | `fx-hash` | FxHash for the coordinate dedup index (default: SipHash).   |
//! | `serde`   | Derives `Serialize`/`Deserialize` on the record types.      |

pub mod block;
pub mod builder;
pub mod error;
pub mod intersection;
pub mod network;
pub mod records;
pub mod surface;
pub mod traffic;


pub use block::Block;
pub use builder::{StreetNetworkBuilder, build_network};
pub use error::{NetworkError, NetworkResult};
pub use intersection::Intersection;
pub use network::StreetNetwork;
pub use records::{BlockRecord, StreetRecord};
pub use surface::{MapSurface, NoopSurface};
pub use traffic::{ConstantTraffic, GaussianTraffic, TrafficModel};
