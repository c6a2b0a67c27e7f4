pub mod config;
pub mod entitlement;
pub mod error;
pub mod models;
pub mod requests;

pub use config::*;
pub use entitlement::*;
pub use error::*;
pub use models::*;
pub use requests::*;
