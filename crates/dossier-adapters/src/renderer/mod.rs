//! View renderer adapters.

pub mod substitution;

pub use substitution::SubstitutionViewRenderer;
