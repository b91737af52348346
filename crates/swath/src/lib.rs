//! Visibility, count-capping, filtering and deterministic picking for SAR
//! swath footprints rendered by an external scene.
//!
//! [`SwathEngine`] owns all control-plane state and is the only writer of
//! visibility and style onto scene objects.

pub mod config;
pub mod debug;
pub mod engine;
pub mod filter;
pub mod lod;
pub mod mode;
pub mod picking;
pub mod plan;
pub mod properties;
pub mod scheduler;
pub mod style;
pub mod visibility;

pub use config::*;
pub use debug::*;
pub use engine::*;
pub use filter::*;
pub use lod::*;
pub use mode::*;
pub use picking::*;
pub use plan::*;
pub use properties::*;
pub use style::*;
