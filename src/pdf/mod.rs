pub mod builder;
pub mod generator;
pub mod theme;

pub use builder::PageCanvas;
pub use generator::{InvoiceArtifact, InvoiceGenerator};
pub use theme::{Theme, THEMES};
