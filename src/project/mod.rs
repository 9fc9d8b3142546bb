//! Filesystem side of a run: configuration, sentence input and output
//! naming.

mod config;
mod input;
mod output;

pub use config::Config;
pub use input::{EndPoints, parse_sentences, read_sentences};
pub use output::{GraphKind, output_dir, output_file_name, output_path};
