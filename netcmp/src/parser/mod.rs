pub mod allegro;
pub mod schema;

// Re-export for convenience
pub use allegro::{AllegroParser, ParseError};
pub use schema::*;
