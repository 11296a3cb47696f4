use crate::bitstream::{BitReader, BitStreamError, BitWrite};

use super::packet_type::PacketType;

/// A capability attached to a [`ReplicaObject`](super::ReplicaObject) that
/// contributes its own payload to outgoing frames and consumes the same
/// bits on the receiving side.
///
/// Payloads are self-delimited: the frame carries no per-component length
/// or id, and a peer parses them positionally in attach order. `read` must
/// therefore consume exactly the bits `write` produced for the same
/// [`PacketType`]. Components never write the object-level header fields.
pub trait ReplicaComponent {
    /// Kind identifier, unique within one object's component list.
    fn component_id(&self) -> u32;

    /// Append this component's payload for the given frame kind.
    fn write(&self, writer: &mut dyn BitWrite, packet_type: PacketType);

    /// Consume this component's payload for the given frame kind.
    fn read(
        &mut self,
        reader: &mut BitReader,
        packet_type: PacketType,
    ) -> Result<(), BitStreamError>;
}
