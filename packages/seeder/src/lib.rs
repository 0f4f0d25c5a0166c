pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod roles;
pub mod seed;
pub mod store;
pub mod utils;
