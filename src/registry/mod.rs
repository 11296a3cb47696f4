mod error;
mod manager;

pub use error::RegistryError;
pub use manager::{ObjectRecord, ReplicaManager};
