mod bit_reader;
mod bit_writer;
mod error;
mod serde;

pub use bit_reader::BitReader;
pub use bit_writer::{BitWrite, BitWriter};
pub use error::BitStreamError;
pub use serde::Serde;
