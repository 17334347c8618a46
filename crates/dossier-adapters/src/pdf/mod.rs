//! PDF renderer adapters.

pub mod minimal;

pub use minimal::MinimalPdfRenderer;
