//! Line input and output for the CLI client.

mod console;

pub use console::Console;
