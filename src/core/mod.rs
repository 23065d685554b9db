pub mod config;
pub mod error;
pub mod ids;

pub use config::*;
pub use error::*;
pub use ids::*;
