//! Output side of the CLI: grid JSON and script text files.
pub mod grid;
pub mod script;
