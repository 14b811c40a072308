pub mod asset;
pub mod config;
pub mod error;
pub mod health;
pub mod indexer;
pub mod position;
pub mod simulation;
