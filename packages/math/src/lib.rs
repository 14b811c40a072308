mod error;
mod format;
mod overrides;

pub use self::{error::*, format::*, overrides::*};
