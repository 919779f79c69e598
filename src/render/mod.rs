//! Writes the greeting block to any byte sink.

pub mod greeting;

pub use greeting::{Greeting, write_greeting};
