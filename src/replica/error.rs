use thiserror::Error;

use crate::bitstream::BitStreamError;

/// Errors that can occur while building or decoding replica frames
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicaError {
    /// Object name does not fit the 8-bit length prefix
    #[error("Object name is {length} UTF-16 code units long, maximum representable is 255")]
    NameTooLong {
        length: usize,
    },

    /// A component with the same kind id is already attached
    #[error("Component id {component_id} is already attached to this object")]
    DuplicateComponent {
        component_id: u32,
    },

    /// Trailer marker bits did not match the fixed pattern (SECURITY:
    /// component payload boundaries cannot be trusted past this point)
    #[error("Frame trailer markers were ({first}, {second}, {third}), expected (true, false, false) (possible malformed or malicious frame)")]
    TrailerMismatch {
        first: bool,
        second: bool,
        third: bool,
    },

    /// A destruction frame carried payload bits where none are defined
    #[error("Destruction frame carried {bits_remaining} unexpected payload bits")]
    UnexpectedPayload {
        bits_remaining: usize,
    },

    /// Bit stream ended underneath a frame read
    #[error("Bit stream error: {0}")]
    BitStream(#[from] BitStreamError),
}
