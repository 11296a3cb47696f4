use crate::bitstream::{bit_reader::BitReader, bit_writer::BitWrite, error::BitStreamError};

/// Bit-exact serialization for the primitive wire values. Booleans occupy a
/// single bit; integers are written byte-by-byte in little-endian order.
/// `de` must consume exactly the bits `ser` produced.
pub trait Serde: Sized {
    fn ser(&self, writer: &mut dyn BitWrite);
    fn de(reader: &mut BitReader) -> Result<Self, BitStreamError>;
}

impl Serde for bool {
    fn ser(&self, writer: &mut dyn BitWrite) {
        writer.write_bit(*self);
    }

    fn de(reader: &mut BitReader) -> Result<Self, BitStreamError> {
        reader.read_bit()
    }
}

impl Serde for u8 {
    fn ser(&self, writer: &mut dyn BitWrite) {
        writer.write_byte(*self);
    }

    fn de(reader: &mut BitReader) -> Result<Self, BitStreamError> {
        reader.read_byte()
    }
}

impl Serde for u16 {
    fn ser(&self, writer: &mut dyn BitWrite) {
        for byte in self.to_le_bytes() {
            writer.write_byte(byte);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, BitStreamError> {
        let mut bytes = [0u8; 2];
        for byte in bytes.iter_mut() {
            *byte = reader.read_byte()?;
        }
        Ok(u16::from_le_bytes(bytes))
    }
}

impl Serde for u32 {
    fn ser(&self, writer: &mut dyn BitWrite) {
        for byte in self.to_le_bytes() {
            writer.write_byte(byte);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, BitStreamError> {
        let mut bytes = [0u8; 4];
        for byte in bytes.iter_mut() {
            *byte = reader.read_byte()?;
        }
        Ok(u32::from_le_bytes(bytes))
    }
}

impl Serde for u64 {
    fn ser(&self, writer: &mut dyn BitWrite) {
        for byte in self.to_le_bytes() {
            writer.write_byte(byte);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, BitStreamError> {
        let mut bytes = [0u8; 8];
        for byte in bytes.iter_mut() {
            *byte = reader.read_byte()?;
        }
        Ok(u64::from_le_bytes(bytes))
    }
}

impl Serde for i32 {
    fn ser(&self, writer: &mut dyn BitWrite) {
        for byte in self.to_le_bytes() {
            writer.write_byte(byte);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, BitStreamError> {
        let mut bytes = [0u8; 4];
        for byte in bytes.iter_mut() {
            *byte = reader.read_byte()?;
        }
        Ok(i32::from_le_bytes(bytes))
    }
}
