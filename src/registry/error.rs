use thiserror::Error;

use crate::types::ObjectId;

/// Errors that can occur during registry bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// An object with this identity is already registered
    #[error("Object id {object_id} is already registered")]
    DuplicateObjectId {
        object_id: ObjectId,
    },

    /// No live object has this identity
    #[error("Object id {object_id} is not registered")]
    ObjectNotFound {
        object_id: ObjectId,
    },

    /// The back-reference for this object was already removed
    #[error("Object id {object_id} was already dereferenced")]
    AlreadyDereferenced {
        object_id: ObjectId,
    },
}
