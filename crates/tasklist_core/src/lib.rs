pub mod clock;
pub mod config;
pub mod error;
pub mod filter;
pub mod ident;
pub mod model;
pub mod store;
