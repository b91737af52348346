pub mod components;
pub mod entity;
pub mod picking;
pub mod scene;
pub mod world;

pub use scene::*;
pub use world::*;
