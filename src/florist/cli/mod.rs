//! Console client: argument parsing, prompting and table rendering.

pub mod args;
pub mod input;
pub mod menu;
mod render;
