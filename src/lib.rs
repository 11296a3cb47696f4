//! # Replica Core
//! Replication lifecycle for game-world objects: construction, scoping,
//! serialization and destruction frames shared between the authoritative
//! and client roles of a connection.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod bitstream;
mod registry;
mod replica;
mod types;

pub use bitstream::{BitReader, BitStreamError, BitWrite, BitWriter, Serde};
pub use registry::{ObjectRecord, RegistryError, ReplicaManager};
pub use replica::{
    ConstructionHeader, PacketType, ReplicaComponent, ReplicaError, ReplicaObject,
    MAX_NAME_CODE_UNITS,
};
pub use types::{Lot, ObjectId};
