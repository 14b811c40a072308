#![cfg(not(target_arch = "wasm32"))]

mod coin_info;

pub use coin_info::*;
