mod data_types;
mod engine;
mod health_computer;
mod simulate;
mod solve;
pub use self::{data_types::*, engine::*, health_computer::*};

#[cfg(feature = "javascript")]
mod javascript;
#[cfg(feature = "javascript")]
pub use self::javascript::*;
