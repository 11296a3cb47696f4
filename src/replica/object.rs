use std::net::SocketAddr;

use log::{debug, warn};

use crate::{
    bitstream::{BitReader, BitWriter, Serde},
    registry::{RegistryError, ReplicaManager},
    types::{Lot, ObjectId},
};

use super::{component::ReplicaComponent, error::ReplicaError, packet_type::PacketType};

const LOG_TARGET: &str = "replica";

/// Maximum object name length in UTF-16 code units, fixed by the 8-bit
/// length prefix in the construction frame.
pub const MAX_NAME_CODE_UNITS: usize = u8::MAX as usize;

/// A game-world object replicated to remote peers.
///
/// Owns an ordered list of [`ReplicaComponent`]s. Attach order is
/// serialization order and never changes for the object's lifetime: a
/// receiving peer parses component payloads positionally, so construction
/// and every later serialization frame must visit components identically.
///
/// Every protocol operation targets exactly one peer. Fan-out across peers,
/// and the cadence of `serialize` calls, belong to the caller's scheduler.
/// Operations do not block or suspend; concurrent access from multiple
/// threads requires external locking.
pub struct ReplicaObject {
    object_id: ObjectId,
    lot: Lot,
    name: String,
    gm_level: i32,
    components: Vec<Box<dyn ReplicaComponent>>,
}

impl ReplicaObject {
    /// Create an object ready for component attachment.
    ///
    /// The name is measured in UTF-16 code units, its wire encoding. Names
    /// longer than [`MAX_NAME_CODE_UNITS`] are rejected, never truncated.
    pub fn new(
        object_id: ObjectId,
        lot: Lot,
        name: &str,
        gm_level: i32,
    ) -> Result<Self, ReplicaError> {
        let length = name.encode_utf16().count();
        if length > MAX_NAME_CODE_UNITS {
            return Err(ReplicaError::NameTooLong { length });
        }
        Ok(Self {
            object_id,
            lot,
            name: name.to_string(),
            gm_level,
            components: Vec::new(),
        })
    }

    pub fn object_id(&self) -> ObjectId {
        self.object_id
    }

    pub fn lot(&self) -> Lot {
        self.lot
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gm_level(&self) -> i32 {
        self.gm_level
    }

    /// Attach a component. Components must be attached before the first
    /// construction frame is sent, and kind ids must be unique within one
    /// object.
    pub fn attach_component(
        &mut self,
        component: Box<dyn ReplicaComponent>,
    ) -> Result<(), ReplicaError> {
        let component_id = component.component_id();
        if self.get_component(component_id).is_some() {
            return Err(ReplicaError::DuplicateComponent { component_id });
        }
        self.components.push(component);
        Ok(())
    }

    /// Look up an attached component by kind id. Absence is not an error.
    pub fn get_component(&self, component_id: u32) -> Option<&dyn ReplicaComponent> {
        self.components
            .iter()
            .find(|component| component.component_id() == component_id)
            .map(|component| component.as_ref())
    }

    pub fn get_component_mut(&mut self, component_id: u32) -> Option<&mut dyn ReplicaComponent> {
        self.components
            .iter_mut()
            .find(|component| component.component_id() == component_id)
            .map(|component| &mut **component as &mut dyn ReplicaComponent)
    }

    fn write_to_frame(&self, writer: &mut BitWriter, packet_type: PacketType) {
        if packet_type == PacketType::Construction {
            self.object_id.ser(writer);
            self.lot.ser(writer);

            let code_units: Vec<u16> = self.name.encode_utf16().collect();
            (code_units.len() as u8).ser(writer);
            for unit in &code_units {
                unit.ser(writer);
            }

            // reserved field + six per-object toggles, all unused
            0u32.ser(writer);
            for _ in 0..6 {
                false.ser(writer);
            }

            let has_gm_level = self.gm_level > 0;
            has_gm_level.ser(writer);
            if has_gm_level {
                self.gm_level.ser(writer);
            }
        }

        // fixed markers, historically "is client-owned object" plus two
        // reserved flags
        true.ser(writer);
        false.ser(writer);
        false.ser(writer);

        for component in &self.components {
            component.write(writer, packet_type);
        }
    }

    fn read_from_frame(
        &mut self,
        reader: &mut BitReader,
        packet_type: PacketType,
    ) -> Result<(), ReplicaError> {
        let first = bool::de(reader)?;
        let second = bool::de(reader)?;
        let third = bool::de(reader)?;
        if !first || second || third {
            return Err(ReplicaError::TrailerMismatch {
                first,
                second,
                third,
            });
        }

        for component in &mut self.components {
            component.read(reader, packet_type)?;
        }
        Ok(())
    }

    /// Build the construction frame for `peer` and mark this object in
    /// scope for it. Must precede any serialize or scope operation
    /// targeting a peer that has not yet seen this object.
    pub fn send_construction(&self, manager: &mut ReplicaManager, peer: SocketAddr) -> Vec<u8> {
        debug!(
            target: LOG_TARGET,
            "Send construction of '{}' to {}", self.name, peer
        );
        let mut writer = BitWriter::new();
        self.write_to_frame(&mut writer, PacketType::Construction);
        manager.set_scope(self.object_id, true, peer, false);
        writer.to_bytes()
    }

    /// Build the destruction notice for `peer`. The frame carries no
    /// payload; scope bookkeeping is driven by [`Self::destroy`], not by
    /// this frame.
    pub fn send_destruction(&self, peer: SocketAddr) -> Vec<u8> {
        debug!(
            target: LOG_TARGET,
            "Send destruction of '{}' to {}", self.name, peer
        );
        Vec::new()
    }

    /// Client role only: consume a destruction notice from `peer` and drop
    /// the local shadow scope for this identity. Payload bits in a
    /// destruction frame are a hard decode error.
    pub fn receive_destruction(
        &self,
        manager: &mut ReplicaManager,
        peer: SocketAddr,
        reader: &mut BitReader,
    ) -> Result<(), ReplicaError> {
        debug!(
            target: LOG_TARGET,
            "Receive destruction of '{}' from {}", self.name, peer
        );
        let bits_remaining = reader.bits_remaining();
        if bits_remaining > 0 {
            warn!(
                target: LOG_TARGET,
                "Destruction frame for '{}' from {} carried {} payload bits",
                self.name,
                peer,
                bits_remaining
            );
            return Err(ReplicaError::UnexpectedPayload { bits_remaining });
        }
        manager.set_scope(self.object_id, false, peer, false);
        Ok(())
    }

    /// Build a scope-change frame for `peer`: a single boolean, `true` when
    /// entering scope. Repeated "entering" frames must not duplicate the
    /// object client-side; that idempotence lives in
    /// [`ReplicaManager::set_scope`], not here.
    pub fn send_scope_change(&self, entering: bool, peer: SocketAddr) -> Vec<u8> {
        debug!(
            target: LOG_TARGET,
            "Send scope change ({}) of '{}' to {}",
            if entering { "entering" } else { "leaving" },
            self.name,
            peer
        );
        let mut writer = BitWriter::new();
        entering.ser(&mut writer);
        writer.to_bytes()
    }

    /// Decode a scope-change frame: `true` means entering scope.
    pub fn read_scope_change(reader: &mut BitReader) -> Result<bool, ReplicaError> {
        Ok(bool::de(reader)?)
    }

    /// Build a resynchronization frame for `peer`: the trailer markers and
    /// each component's payload in attach order, with none of the
    /// construction header fields.
    pub fn serialize(&self, peer: SocketAddr) -> Vec<u8> {
        debug!(
            target: LOG_TARGET,
            "Serialize '{}' for {}", self.name, peer
        );
        let mut writer = BitWriter::new();
        self.write_to_frame(&mut writer, PacketType::Serialization);
        writer.to_bytes()
    }

    /// Client role only: apply a serialization frame from `peer`, visiting
    /// components in the same order `serialize` wrote them. Marker or
    /// payload mismatches are hard decode errors; the caller should drop
    /// the frame or the object shadow.
    pub fn deserialize(
        &mut self,
        reader: &mut BitReader,
        peer: SocketAddr,
    ) -> Result<(), ReplicaError> {
        debug!(
            target: LOG_TARGET,
            "Deserialize '{}' from {}", self.name, peer
        );
        self.read_from_frame(reader, PacketType::Serialization)
            .map_err(|error| {
                warn!(
                    target: LOG_TARGET,
                    "Failed to deserialize '{}' from {}: {}", self.name, peer, error
                );
                error
            })
    }

    /// Client role only: apply the trailer and component payloads of a
    /// construction frame, after [`ConstructionHeader::de`] has consumed
    /// the header fields and the components have been attached.
    pub fn deserialize_construction(
        &mut self,
        reader: &mut BitReader,
        peer: SocketAddr,
    ) -> Result<(), ReplicaError> {
        debug!(
            target: LOG_TARGET,
            "Deserialize construction of '{}' from {}", self.name, peer
        );
        self.read_from_frame(reader, PacketType::Construction)
            .map_err(|error| {
                warn!(
                    target: LOG_TARGET,
                    "Failed to deserialize construction of '{}' from {}: {}",
                    self.name,
                    peer,
                    error
                );
                error
            })
    }

    /// Tear the object down: components first, then registry
    /// unregistration, then back-reference removal, in that order, so the
    /// registry never observes a dangling identity. Consuming `self` makes
    /// the dereference run exactly once even on error paths.
    pub fn destroy(mut self, manager: &mut ReplicaManager) -> Result<(), RegistryError> {
        debug!(
            target: LOG_TARGET,
            "Destroy '{}' ({})", self.name, self.object_id
        );
        self.components.clear();
        manager.unregister(self.object_id)?;
        manager.dereference(self.object_id)
    }
}

/// Header fields (identity through gm level) of a construction frame,
/// decoded on the client role before component payloads are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionHeader {
    pub object_id: ObjectId,
    pub lot: Lot,
    pub name: String,
    pub gm_level: i32,
}

impl ConstructionHeader {
    pub fn de(reader: &mut BitReader) -> Result<Self, ReplicaError> {
        let object_id = ObjectId::de(reader)?;
        let lot = Lot::de(reader)?;

        let length = u8::de(reader)?;
        let mut code_units = Vec::with_capacity(length as usize);
        for _ in 0..length {
            code_units.push(u16::de(reader)?);
        }
        let name = String::from_utf16_lossy(&code_units);

        // reserved field + six per-object toggles, ignored for forward
        // compatibility
        let _reserved = u32::de(reader)?;
        for _ in 0..6 {
            let _ = bool::de(reader)?;
        }

        let gm_level = if bool::de(reader)? {
            i32::de(reader)?
        } else {
            0
        };

        Ok(Self {
            object_id,
            lot,
            name,
            gm_level,
        })
    }
}
