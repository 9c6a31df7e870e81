pub mod loader;
pub mod model;
pub mod validate;

pub use model::Client;
pub use validate::{validate, ValidationError};
