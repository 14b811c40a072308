pub use self::{account::*, error::*, health_factor::*, poller::*, querier::*, resolver::*};

mod account;
mod error;
mod health_factor;
mod poller;
mod querier;
mod resolver;
