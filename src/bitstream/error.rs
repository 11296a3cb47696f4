use thiserror::Error;

/// Errors that can occur while decoding a frame's bit stream
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitStreamError {
    /// Reader ran past the end of the received frame (possibly a truncated
    /// or malformed frame)
    #[error("Frame exhausted: needed {bits_requested} more bits, only {bits_remaining} remaining (possible truncated or malformed frame)")]
    BufferExhausted {
        bits_requested: usize,
        bits_remaining: usize,
    },
}
