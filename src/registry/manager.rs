use std::{
    collections::{HashMap, HashSet},
    net::SocketAddr,
};

use log::{debug, warn};

use crate::{
    replica::ReplicaObject,
    types::{Lot, ObjectId},
};

use super::error::RegistryError;

const LOG_TARGET: &str = "replica";

/// Registry entry for a live object: the static facts the tracker keeps for
/// lookups and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    pub lot: Lot,
    pub name: String,
}

/// Tracks live object identities and which peers each object is currently
/// in scope for. Owns no object: replica operations query and command it,
/// one peer at a time, and the scheduler handles any multi-peer fan-out.
///
/// The per-object peer sets are the back-references removed by
/// [`Self::dereference`] during object destruction.
#[derive(Default)]
pub struct ReplicaManager {
    objects: HashMap<ObjectId, ObjectRecord>,
    scope: HashMap<ObjectId, HashSet<SocketAddr>>,
}

impl ReplicaManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly created object, before its first construction
    /// frame. Identities must be unique among simultaneously live objects.
    pub fn register(&mut self, object: &ReplicaObject) -> Result<(), RegistryError> {
        let object_id = object.object_id();
        if self.objects.contains_key(&object_id) {
            return Err(RegistryError::DuplicateObjectId { object_id });
        }
        self.objects.insert(
            object_id,
            ObjectRecord {
                lot: object.lot(),
                name: object.name().to_string(),
            },
        );
        self.scope.insert(object_id, HashSet::new());
        Ok(())
    }

    /// Look up a live object's record by identity.
    pub fn lookup(&self, object_id: ObjectId) -> Option<&ObjectRecord> {
        self.objects.get(&object_id)
    }

    /// Mark `object_id` in or out of scope for `peer`. Returns whether the
    /// scope state actually changed, which keeps repeated "entering" calls
    /// idempotent client-side. `use_timestamp` is forwarded transport
    /// policy and does not affect scope state.
    pub fn set_scope(
        &mut self,
        object_id: ObjectId,
        in_scope: bool,
        peer: SocketAddr,
        use_timestamp: bool,
    ) -> bool {
        let Some(peers) = self.scope.get_mut(&object_id) else {
            warn!(
                target: LOG_TARGET,
                "Scope change for unknown object {}", object_id
            );
            return false;
        };
        let changed = if in_scope {
            peers.insert(peer)
        } else {
            peers.remove(&peer)
        };
        if changed {
            debug!(
                target: LOG_TARGET,
                "Object {} now {} scope for {} (timestamped: {})",
                object_id,
                if in_scope { "in" } else { "out of" },
                peer,
                use_timestamp
            );
        }
        changed
    }

    /// Whether `peer` has received construction for `object_id` and has not
    /// since left scope.
    pub fn in_scope(&self, object_id: ObjectId, peer: SocketAddr) -> bool {
        self.scope
            .get(&object_id)
            .is_some_and(|peers| peers.contains(&peer))
    }

    /// Remove a destroyed object's identity. Subsequent lookups fail.
    pub fn unregister(&mut self, object_id: ObjectId) -> Result<ObjectRecord, RegistryError> {
        self.objects
            .remove(&object_id)
            .ok_or(RegistryError::ObjectNotFound { object_id })
    }

    /// Drop the back-reference held for `object_id`. Called exactly once
    /// during destruction, after [`Self::unregister`]; a second call is an
    /// error.
    pub fn dereference(&mut self, object_id: ObjectId) -> Result<(), RegistryError> {
        if self.scope.remove(&object_id).is_none() {
            return Err(RegistryError::AlreadyDereferenced { object_id });
        }
        Ok(())
    }
}
