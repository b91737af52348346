pub mod footprint;
pub mod properties;
pub mod style;

pub use footprint::*;
pub use properties::*;
pub use style::*;
