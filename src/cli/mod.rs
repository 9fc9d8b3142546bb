//! Command line front end.

pub mod args;
pub mod run;

pub use args::{Args, Mode};
pub use run::execute;
