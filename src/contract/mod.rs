/// Contract domain layer: key material, file access, encoding and format dispatch.
pub mod dispatch;
pub mod encoder;
pub mod errors;
pub mod files;
pub mod format;
pub mod hpcr;
pub mod keys;

pub use dispatch::{Destination, Emitted, Request, emit, process};
pub use encoder::Encoded;
pub use errors::ContractError;
pub use format::OutputFormat;
pub use hpcr::HpcrEncoder;
pub use keys::{KeyProvenance, acquire_private_key};
