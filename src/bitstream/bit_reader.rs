use crate::bitstream::error::BitStreamError;

/// Cursor over a received frame, the inverse of
/// [`BitWriter`](crate::BitWriter): bits come out of each byte LSB-first.
/// Running past the end of the buffer is a decode error, never a panic,
/// since frames arrive from the network.
pub struct BitReader<'b> {
    buffer: &'b [u8],
    bit_index: usize,
}

impl<'b> BitReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            bit_index: 0,
        }
    }

    /// Bits left in the buffer, including any zero padding the writer added
    /// to fill the final byte.
    pub fn bits_remaining(&self) -> usize {
        self.buffer.len() * 8 - self.bit_index
    }

    pub fn read_bit(&mut self) -> Result<bool, BitStreamError> {
        if self.bit_index >= self.buffer.len() * 8 {
            return Err(BitStreamError::BufferExhausted {
                bits_requested: 1,
                bits_remaining: 0,
            });
        }
        let byte = self.buffer[self.bit_index / 8];
        let bit = (byte >> (self.bit_index % 8)) & 1 != 0;
        self.bit_index += 1;
        Ok(bit)
    }

    pub fn read_byte(&mut self) -> Result<u8, BitStreamError> {
        let bits_remaining = self.bits_remaining();
        if bits_remaining < 8 {
            return Err(BitStreamError::BufferExhausted {
                bits_requested: 8,
                bits_remaining,
            });
        }
        let mut value = 0u8;
        for i in 0..8 {
            if self.read_bit()? {
                value |= 1 << i;
            }
        }
        Ok(value)
    }
}
