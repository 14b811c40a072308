mod band;
#[allow(clippy::module_inception)]
mod health;

pub use band::*;
pub use health::*;
