//! Daily selection and theming engine.
//!
//! Pure logic only: day-of-year computation, the entry data model, the
//! color/type lookup tables and the caption rotation. No IO, no clock reads;
//! every function takes its date explicitly so callers stay testable.

mod day_index;
pub mod entry;
pub mod message;
pub mod theme;

pub use day_index::day_index;
pub use entry::{Entry, PokemonRecord};
pub use message::{MessageError, MessageRotator};
pub use theme::{ColorTheme, Effect, ThemeError, ThemeResolver, TypeStyle, TypeStyleResolver};
