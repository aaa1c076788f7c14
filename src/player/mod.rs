//! Player state and command dispatch
//!
//! Operations return structured results; turning them into console
//! output is the front-end's job, so the domain logic stays testable
//! without capturing stdout.

mod controller;
mod selector;

pub use controller::{NowPlaying, Player};
pub use selector::Selector;
