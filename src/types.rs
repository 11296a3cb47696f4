use std::fmt;

use crate::bitstream::{BitReader, BitStreamError, BitWrite, Serde};

/// Globally unique identity of a replicated object, assigned at creation
/// and stable for the object's lifetime. Identities never repeat among
/// simultaneously live objects.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ObjectId(u64);

impl ObjectId {
    pub fn new(value: u64) -> Self {
        ObjectId(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serde for ObjectId {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.0.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, BitStreamError> {
        Ok(ObjectId(u64::de(reader)?))
    }
}

/// Template ("LOT") reference into static object definition data. The
/// definition data itself is not modeled here.
pub type Lot = u32;
