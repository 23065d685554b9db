pub mod api;
pub mod core;
pub mod models;
pub mod pdf;
pub mod token;

// Re-export commonly used types
pub use models::{LineItem, Order};
pub use pdf::{InvoiceArtifact, InvoiceGenerator, Theme};
pub use token::{DownloadClaims, TokenError};
