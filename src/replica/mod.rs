mod component;
mod error;
mod object;
mod packet_type;

pub use component::ReplicaComponent;
pub use error::ReplicaError;
pub use object::{ConstructionHeader, ReplicaObject, MAX_NAME_CODE_UNITS};
pub use packet_type::PacketType;
