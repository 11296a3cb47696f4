use std::net::SocketAddr;

use replica_core::{
    BitReader, BitStreamError, BitWrite, ConstructionHeader, ObjectId, PacketType,
    ReplicaComponent, ReplicaError, ReplicaManager, ReplicaObject, Serde,
};

fn peer() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

struct StatsComponent {
    component_id: u32,
    health: u32,
}

impl ReplicaComponent for StatsComponent {
    fn component_id(&self) -> u32 {
        self.component_id
    }

    fn write(&self, writer: &mut dyn BitWrite, _packet_type: PacketType) {
        self.health.ser(writer);
    }

    fn read(
        &mut self,
        reader: &mut BitReader,
        _packet_type: PacketType,
    ) -> Result<(), BitStreamError> {
        self.health = u32::de(reader)?;
        Ok(())
    }
}

fn stats(component_id: u32) -> Box<StatsComponent> {
    Box::new(StatsComponent {
        component_id,
        health: 100,
    })
}

#[test]
fn test_name_too_long_rejected() {
    let name = "a".repeat(300);
    let result = ReplicaObject::new(ObjectId::new(1), 1, &name, 0);

    match result {
        Err(ReplicaError::NameTooLong { length }) => assert_eq!(length, 300),
        _ => panic!("Expected NameTooLong error"),
    }
}

#[test]
fn test_duplicate_component_rejected() {
    let mut object = ReplicaObject::new(ObjectId::new(1), 1, "Dragon", 0).unwrap();
    object.attach_component(stats(4)).unwrap();

    let result = object.attach_component(stats(4));
    assert_eq!(
        result,
        Err(ReplicaError::DuplicateComponent { component_id: 4 })
    );

    // the original attachment survives the rejected one
    assert!(object.get_component(4).is_some());
}

#[test]
fn test_corrupted_trailer_markers_rejected() {
    let mut object = ReplicaObject::new(ObjectId::new(1), 1, "Dragon", 0).unwrap();
    object.attach_component(stats(4)).unwrap();

    let mut frame = object.serialize(peer());
    // flip the leading marker bit
    frame[0] ^= 0x01;

    let mut reader = BitReader::new(&frame);
    let result = object.deserialize(&mut reader, peer());
    assert_eq!(
        result,
        Err(ReplicaError::TrailerMismatch {
            first: false,
            second: false,
            third: false,
        })
    );
}

#[test]
fn test_truncated_serialization_frame_rejected() {
    let mut object = ReplicaObject::new(ObjectId::new(1), 1, "Dragon", 0).unwrap();
    object.attach_component(stats(4)).unwrap();

    let frame = object.serialize(peer());
    let truncated = &frame[..frame.len() - 1];

    let mut reader = BitReader::new(truncated);
    let result = object.deserialize(&mut reader, peer());
    match result {
        Err(ReplicaError::BitStream(BitStreamError::BufferExhausted { .. })) => {}
        other => panic!("Expected BufferExhausted error, got {other:?}"),
    }
}

#[test]
fn test_truncated_construction_header_rejected() {
    let manager = &mut ReplicaManager::new();
    let object = ReplicaObject::new(ObjectId::new(1), 1, "Dragon", 5).unwrap();
    manager.register(&object).unwrap();

    let frame = object.send_construction(manager, peer());
    let truncated = &frame[..10];

    let mut reader = BitReader::new(truncated);
    let result = ConstructionHeader::de(&mut reader);
    match result {
        Err(ReplicaError::BitStream(BitStreamError::BufferExhausted { .. })) => {}
        other => panic!("Expected BufferExhausted error, got {other:?}"),
    }
}

#[test]
fn test_destruction_frame_with_payload_rejected() {
    let manager = &mut ReplicaManager::new();
    let object = ReplicaObject::new(ObjectId::new(1), 1, "Dragon", 0).unwrap();
    manager.register(&object).unwrap();

    let bogus = vec![0xFF, 0xFF];
    let mut reader = BitReader::new(&bogus);
    let result = object.receive_destruction(manager, peer(), &mut reader);
    assert_eq!(
        result,
        Err(ReplicaError::UnexpectedPayload { bits_remaining: 16 })
    );
}

#[test]
fn test_truncated_scope_frame_rejected() {
    let mut reader = BitReader::new(&[]);
    let result = ReplicaObject::read_scope_change(&mut reader);
    match result {
        Err(ReplicaError::BitStream(BitStreamError::BufferExhausted { .. })) => {}
        other => panic!("Expected BufferExhausted error, got {other:?}"),
    }
}

#[test]
fn test_replica_error_display_messages() {
    let error = ReplicaError::NameTooLong { length: 300 };
    assert_eq!(
        error.to_string(),
        "Object name is 300 UTF-16 code units long, maximum representable is 255"
    );

    let error = ReplicaError::DuplicateComponent { component_id: 4 };
    assert_eq!(
        error.to_string(),
        "Component id 4 is already attached to this object"
    );

    let error = ReplicaError::UnexpectedPayload { bits_remaining: 16 };
    assert_eq!(
        error.to_string(),
        "Destruction frame carried 16 unexpected payload bits"
    );
}

#[test]
fn test_replica_error_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<ReplicaError>();
    assert_sync::<ReplicaError>();
}

#[test]
fn test_replica_error_is_std_error() {
    let error = ReplicaError::NameTooLong { length: 300 };
    let _: &dyn std::error::Error = &error;
}
