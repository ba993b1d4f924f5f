use bytes::Bytes;
use game_common::components::missile::{MissileFireData, MissileHitData, MissileSyncData};
use game_common::components::movement::{Direction, GameVelocity, MoveData, MovementSyncData};
use game_common::components::ship::{ShipDestroyedData, ShipSyncData, ShipTargetedData};
use game_net::proto::action::{Action, GameAction};
use game_net::proto::board::{
    AddNodeAction, BoardSetupAction, CompletedAction, GameBoardLocation,
};
use game_net::proto::{Error, InvalidEnumValue};
use game_net::stream::HEADER_SIZE;
use game_net::{decode_message, encode_message, BitReader, BitWriter};
use glam::{Mat4, Quat, Vec3};

/// One action of every kind that survives encoding without loss.
fn lossless_actions() -> Vec<Action> {
    vec![
        Action::GameAction(GameAction::JoyStickMoved(MoveData {
            velocity: GameVelocity::new(Vec3::new(-0.75, 0.0, 4.0)),
            direction: Some(Direction::Altitude),
            angular: -0.125,
        })),
        Action::GameAction(GameAction::HelicopterStartMoving(true)),
        Action::GameAction(GameAction::HelicopterStopMoving(false)),
        Action::GameAction(GameAction::ShipsPositionSync(vec![ShipSyncData {
            ship_id: "ship-1".to_owned(),
            position: Vec3::new(4.0, 0.0, -12.0),
            velocity: Vec3::new(0.0, 0.0, 0.5),
            rotation: Quat::from_rotation_y(2.0),
            is_alive: true,
            timestamp: 90.5,
        }])),
        Action::GameAction(GameAction::ShipDestroyed(ShipDestroyedData {
            ship_id: "ship-1".to_owned(),
            position: Vec3::new(4.0, 0.0, -11.0),
            timestamp: 95.0,
        })),
        Action::GameAction(GameAction::ShipTargeted(ShipTargetedData {
            ship_id: "ship-1".to_owned(),
            targeted: false,
            timestamp: 91.0,
        })),
        Action::GameAction(GameAction::MissileFired(MissileFireData {
            missile_id: "m-1".to_owned(),
            position: Vec3::new(0.0, 2.0, 0.0),
            velocity: Vec3::new(0.0, -1.0, -25.0),
            rotation: Quat::IDENTITY,
            target_ship_id: Some("ship-1".to_owned()),
            timestamp: 92.0,
        })),
        Action::GameAction(GameAction::MissilePositionUpdate(MissileSyncData {
            missile_id: "m-1".to_owned(),
            position: Vec3::new(0.0, 1.0, -6.0),
            velocity: Vec3::new(0.0, -1.0, -25.0),
            rotation: Quat::IDENTITY,
            is_active: true,
            timestamp: 92.5,
        })),
        Action::GameAction(GameAction::MissileHit(MissileHitData {
            missile_id: "m-1".to_owned(),
            ship_id: "ship-1".to_owned(),
            position: Vec3::new(4.0, 0.0, -11.0),
            timestamp: 95.0,
        })),
        Action::BoardSetup(BoardSetupAction::RequestBoardLocation),
        Action::BoardSetup(BoardSetupAction::BoardLocation(GameBoardLocation::Manual)),
        Action::BoardSetup(BoardSetupAction::BoardLocation(
            GameBoardLocation::WorldMapData(Bytes::from_static(b"\x00world map\xFF")),
        )),
        Action::AddNode(AddNodeAction {
            world_transform: Mat4::from_translation(Vec3::new(0.5, -1.0, 2.0)),
            euler_angles: Vec3::new(0.0, 0.25, 0.0),
        }),
        Action::Completed(CompletedAction {
            position: Vec3::new(7.0, 8.0, 9.0),
        }),
    ]
}

#[test]
fn joystick_moved_scenario() {
    let action = Action::GameAction(GameAction::JoyStickMoved(MoveData {
        velocity: GameVelocity::new(Vec3::new(1.0, 2.0, 3.0)),
        direction: Some(Direction::Forward),
        angular: 0.5,
    }));

    let decoded = decode_message::<Action>(encode_message(&action)).unwrap();

    let Action::GameAction(GameAction::JoyStickMoved(data)) = decoded else {
        panic!("unexpected action: {:?}", decoded);
    };
    assert_eq!(data.velocity.vector, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(data.angular, 0.5);
    assert_eq!(data.direction, Some(Direction::Forward));
}

#[test]
fn nested_manual_board_location() {
    let action = Action::BoardSetup(BoardSetupAction::BoardLocation(GameBoardLocation::Manual));

    let buf = encode_message(&action);
    // Outer tag (2 bits), board setup tag (1 bit) and location tag (1 bit).
    assert_eq!(&buf[..HEADER_SIZE], &4u32.to_le_bytes());
    assert_eq!(buf.len(), HEADER_SIZE + 1);

    assert_eq!(decode_message::<Action>(buf).unwrap(), action);
}

#[test]
fn lossless_roundtrip() {
    for action in lossless_actions() {
        let buf = encode_message(&action);
        assert_eq!(decode_message::<Action>(buf).unwrap(), action);
    }
}

#[test]
fn frame_length_matches_payload() {
    for action in lossless_actions() {
        let mut writer = BitWriter::new();
        game_net::proto::Encode::encode(&action, &mut writer);
        let bits = writer.bit_len();

        let buf = writer.pack();
        let mut header = [0; HEADER_SIZE];
        header.copy_from_slice(&buf[..HEADER_SIZE]);
        assert_eq!(u32::from_le_bytes(header) as usize, bits);
        assert_eq!(buf.len(), HEADER_SIZE + bits.div_ceil(8));

        let mut reader = BitReader::new(buf).unwrap();
        game_net::proto::Decode::decode(&mut reader)
            .map(|_: Action| ())
            .unwrap();
        assert!(reader.is_at_end());
    }
}

#[test]
fn truncation_is_detected() {
    for action in lossless_actions() {
        let buf = encode_message(&action);

        for len in 0..buf.len() {
            let truncated = buf.slice(..len);
            assert!(
                matches!(
                    decode_message::<Action>(truncated),
                    Err(Error::UnexpectedEndOfStream(_))
                ),
                "{:?} truncated to {} bytes",
                action,
                len
            );
        }
    }
}

#[test]
fn movement_sync_is_quantized() {
    let data = MovementSyncData {
        position: Vec3::new(-20.0, 1.5, 33.3),
        velocity: Vec3::new(3.0, 0.0, -3.0),
        rotation_axis: Vec3::Y,
        rotation_angle: -2.0,
        is_moving: true,
    };
    let action = Action::GameAction(GameAction::Movement(data));

    let decoded = decode_message::<Action>(encode_message(&action)).unwrap();
    let Action::GameAction(GameAction::Movement(decoded)) = decoded else {
        panic!("unexpected action: {:?}", decoded);
    };

    assert!(decoded.position.abs_diff_eq(data.position, 160.0 / 65535.0));
    assert!(decoded.velocity.abs_diff_eq(data.velocity, 100.0 / 65535.0));
    assert!(decoded.rotation_axis.abs_diff_eq(data.rotation_axis, 2.0 / 4095.0));
    assert!(decoded.is_moving);
}

#[test]
fn unknown_action_tag() {
    // The board setup tag is a single bit, so an invalid case can only be produced in a wider
    // tag. Game actions use 4 bits for 10 cases.
    let mut writer = BitWriter::new();
    writer.append_u32(0, 2);
    writer.append_u32(15, 4);

    assert_eq!(
        decode_message::<Action>(writer.pack()).unwrap_err(),
        Error::InvalidEnumValue(InvalidEnumValue {
            name: "GameActionKind",
            value: 15,
        })
    );
}

#[test]
fn invalid_utf8_id() {
    let mut writer = BitWriter::new();
    writer.append_u32(0, 2);
    writer.append_u32(5, 4);
    writer.append_data(&[0xF0, 0x28, 0x8C, 0x28]);
    writer.append_f32(0.0);
    writer.append_f32(0.0);
    writer.append_f32(0.0);
    writer.append_f64(1.0);

    assert!(matches!(
        decode_message::<Action>(writer.pack()),
        Err(Error::InvalidUtf8(_))
    ));
}
