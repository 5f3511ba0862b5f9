/// External process layer: spawn a tool, feed stdin, capture stdout.
pub mod errors;
pub mod runner;

pub use errors::ProcessError;
pub use runner::{CommandRunner, SystemRunner};
