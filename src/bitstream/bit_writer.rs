/// Sink for bit-level writes. Frames and component payloads go through this
/// trait so components never depend on the concrete buffer type.
pub trait BitWrite {
    fn write_bit(&mut self, bit: bool);
    fn write_byte(&mut self, byte: u8);
}

/// A growable bit-packed frame writer. Bits fill each output byte LSB-first
/// and multi-byte values are written one byte at a time in little-endian
/// order, so a frame is parseable by [`BitReader`](crate::BitReader) with no
/// alignment assumptions.
pub struct BitWriter {
    scratch: u8,
    scratch_index: u8,
    buffer: Vec<u8>,
    bits_written: u32,
}

impl BitWriter {
    pub fn new() -> Self {
        Self {
            scratch: 0,
            scratch_index: 0,
            buffer: Vec::with_capacity(64),
            bits_written: 0,
        }
    }

    fn flush_scratch(&mut self) {
        if self.scratch_index > 0 {
            // high bits of a partial byte stay zero as padding
            self.buffer.push(self.scratch);
            self.scratch = 0;
            self.scratch_index = 0;
        }
    }

    /// Finish the frame, padding the final partial byte with zero bits.
    pub fn to_bytes(mut self) -> Vec<u8> {
        self.flush_scratch();
        self.buffer
    }

    pub fn bits_written(&self) -> u32 {
        self.bits_written
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BitWrite for BitWriter {
    fn write_bit(&mut self, bit: bool) {
        if bit {
            self.scratch |= 1 << self.scratch_index;
        }

        self.scratch_index += 1;
        self.bits_written += 1;

        if self.scratch_index == 8 {
            self.buffer.push(self.scratch);
            self.scratch_index = 0;
            self.scratch = 0;
        }
    }

    fn write_byte(&mut self, byte: u8) {
        // aligned bytes need no bit shuffling
        if self.scratch_index == 0 {
            self.buffer.push(byte);
            self.bits_written += 8;
            return;
        }

        let mut temp = byte;
        for _ in 0..8 {
            self.write_bit(temp & 1 != 0);
            temp >>= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_writer_byte() {
        let mut writer = BitWriter::new();

        writer.write_byte(0b10101010);

        let bytes = writer.to_bytes();
        assert_eq!(bytes.len(), 1);
        assert_eq!(bytes[0], 0b10101010);
    }

    #[test]
    fn test_bit_writer_bits_lsb_first() {
        let mut writer = BitWriter::new();

        // first written bit lands in the least significant position
        writer.write_bit(true);
        writer.write_bit(false);
        writer.write_bit(true);

        assert_eq!(writer.bits_written(), 3);
        let bytes = writer.to_bytes();
        assert_eq!(bytes.len(), 1);
        assert_eq!(bytes[0], 0b00000101);
    }

    #[test]
    fn test_bit_writer_unaligned_bytes() {
        let mut writer = BitWriter::new();

        writer.write_bit(true);
        writer.write_byte(0xFF);

        let bytes = writer.to_bytes();
        assert_eq!(bytes.len(), 2);
        assert_eq!(bytes[0], 0xFF);
        assert_eq!(bytes[1], 0x01);
    }

    #[test]
    fn test_write_byte_aligned_matches_bitwise() {
        // the aligned fast path must produce the same bytes as writing the
        // same value bit by bit
        let mut fast = BitWriter::new();
        fast.write_byte(0xC9);

        let mut bitwise = BitWriter::new();
        let mut temp = 0xC9u8;
        for _ in 0..8 {
            bitwise.write_bit(temp & 1 != 0);
            temp >>= 1;
        }

        assert_eq!(fast.to_bytes(), bitwise.to_bytes());
    }

    #[test]
    fn test_bit_writer_grows() {
        let mut writer = BitWriter::new();

        for _ in 0..10_000 {
            writer.write_byte(0xAB);
        }

        let bytes = writer.to_bytes();
        assert_eq!(bytes.len(), 10_000);
        assert!(bytes.iter().all(|&b| b == 0xAB));
    }
}
