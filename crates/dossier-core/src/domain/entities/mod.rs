//! Domain entities: the application aggregate and its lifecycle state.

pub mod application;
pub mod state;

pub use application::{
    Application, ApplicationBuilder, Fund, LegalEntity, Person, Product, Review,
};
pub use state::ApplicationState;
