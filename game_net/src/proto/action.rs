//! The action envelope
//!
//! Every message exchanged between peers carries a single [`Action`]. An action is encoded as its
//! [`ActionKind`] tag followed by the payload of that kind. Payloads may be enums themselves, in
//! which case their tag directly follows the outer tag.
//!
//! # Case tables
//!
//! | Ordinal | [`ActionKind`] | [`GameActionKind`]      |
//! | ------- | -------------- | ----------------------- |
//! | 0       | GameAction     | JoyStickMoved           |
//! | 1       | BoardSetup     | Movement                |
//! | 2       | AddNode        | HelicopterStartMoving   |
//! | 3       | Completed      | HelicopterStopMoving    |
//! | 4       |                | ShipsPositionSync       |
//! | 5       |                | ShipDestroyed           |
//! | 6       |                | ShipTargeted            |
//! | 7       |                | MissileFired            |
//! | 8       |                | MissilePositionUpdate   |
//! | 9       |                | MissileHit              |
//!
//! New cases must only be appended.

use game_common::components::missile::{MissileFireData, MissileHitData, MissileSyncData};
use game_common::components::movement::{MoveData, MovementSyncData};
use game_common::components::ship::{ShipDestroyedData, ShipSyncData, ShipTargetedData};

use crate::stream::{BitReader, BitWriter};

use super::board::{AddNodeAction, BoardSetupAction, CompletedAction};
use super::{Decode, Encode, Error};

#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    JoyStickMoved(MoveData),
    Movement(MovementSyncData),
    HelicopterStartMoving(bool),
    HelicopterStopMoving(bool),
    ShipsPositionSync(Vec<ShipSyncData>),
    ShipDestroyed(ShipDestroyedData),
    ShipTargeted(ShipTargetedData),
    MissileFired(MissileFireData),
    MissilePositionUpdate(MissileSyncData),
    MissileHit(MissileHitData),
}

impl GameAction {
    pub fn kind(&self) -> GameActionKind {
        match self {
            Self::JoyStickMoved(_) => GameActionKind::JoyStickMoved,
            Self::Movement(_) => GameActionKind::Movement,
            Self::HelicopterStartMoving(_) => GameActionKind::HelicopterStartMoving,
            Self::HelicopterStopMoving(_) => GameActionKind::HelicopterStopMoving,
            Self::ShipsPositionSync(_) => GameActionKind::ShipsPositionSync,
            Self::ShipDestroyed(_) => GameActionKind::ShipDestroyed,
            Self::ShipTargeted(_) => GameActionKind::ShipTargeted,
            Self::MissileFired(_) => GameActionKind::MissileFired,
            Self::MissilePositionUpdate(_) => GameActionKind::MissilePositionUpdate,
            Self::MissileHit(_) => GameActionKind::MissileHit,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameActionKind {
    JoyStickMoved,
    Movement,
    HelicopterStartMoving,
    HelicopterStopMoving,
    ShipsPositionSync,
    ShipDestroyed,
    ShipTargeted,
    MissileFired,
    MissilePositionUpdate,
    MissileHit,
}

wire_enum!(GameActionKind {
    JoyStickMoved = 0,
    Movement = 1,
    HelicopterStartMoving = 2,
    HelicopterStopMoving = 3,
    ShipsPositionSync = 4,
    ShipDestroyed = 5,
    ShipTargeted = 6,
    MissileFired = 7,
    MissilePositionUpdate = 8,
    MissileHit = 9,
});

impl Encode for GameAction {
    fn encode(&self, writer: &mut BitWriter) {
        self.kind().encode(writer);

        match self {
            Self::JoyStickMoved(data) => data.encode(writer),
            Self::Movement(data) => data.encode(writer),
            Self::HelicopterStartMoving(moving) => moving.encode(writer),
            Self::HelicopterStopMoving(moving) => moving.encode(writer),
            Self::ShipsPositionSync(ships) => ships.encode(writer),
            Self::ShipDestroyed(data) => data.encode(writer),
            Self::ShipTargeted(data) => data.encode(writer),
            Self::MissileFired(data) => data.encode(writer),
            Self::MissilePositionUpdate(data) => data.encode(writer),
            Self::MissileHit(data) => data.encode(writer),
        }
    }
}

impl Decode for GameAction {
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let kind = GameActionKind::decode(reader)?;

        match kind {
            GameActionKind::JoyStickMoved => {
                let data = MoveData::decode(reader)?;
                Ok(Self::JoyStickMoved(data))
            }
            GameActionKind::Movement => {
                let data = MovementSyncData::decode(reader)?;
                Ok(Self::Movement(data))
            }
            GameActionKind::HelicopterStartMoving => {
                let moving = bool::decode(reader)?;
                Ok(Self::HelicopterStartMoving(moving))
            }
            GameActionKind::HelicopterStopMoving => {
                let moving = bool::decode(reader)?;
                Ok(Self::HelicopterStopMoving(moving))
            }
            GameActionKind::ShipsPositionSync => {
                let ships = Vec::<ShipSyncData>::decode(reader)?;
                Ok(Self::ShipsPositionSync(ships))
            }
            GameActionKind::ShipDestroyed => {
                let data = ShipDestroyedData::decode(reader)?;
                Ok(Self::ShipDestroyed(data))
            }
            GameActionKind::ShipTargeted => {
                let data = ShipTargetedData::decode(reader)?;
                Ok(Self::ShipTargeted(data))
            }
            GameActionKind::MissileFired => {
                let data = MissileFireData::decode(reader)?;
                Ok(Self::MissileFired(data))
            }
            GameActionKind::MissilePositionUpdate => {
                let data = MissileSyncData::decode(reader)?;
                Ok(Self::MissilePositionUpdate(data))
            }
            GameActionKind::MissileHit => {
                let data = MissileHitData::decode(reader)?;
                Ok(Self::MissileHit(data))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    GameAction(GameAction),
    BoardSetup(BoardSetupAction),
    AddNode(AddNodeAction),
    Completed(CompletedAction),
}

impl Action {
    #[inline]
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::GameAction(_) => ActionKind::GameAction,
            Self::BoardSetup(_) => ActionKind::BoardSetup,
            Self::AddNode(_) => ActionKind::AddNode,
            Self::Completed(_) => ActionKind::Completed,
        }
    }
}

impl From<GameAction> for Action {
    #[inline]
    fn from(value: GameAction) -> Self {
        Self::GameAction(value)
    }
}

impl From<BoardSetupAction> for Action {
    #[inline]
    fn from(value: BoardSetupAction) -> Self {
        Self::BoardSetup(value)
    }
}

impl From<AddNodeAction> for Action {
    #[inline]
    fn from(value: AddNodeAction) -> Self {
        Self::AddNode(value)
    }
}

impl From<CompletedAction> for Action {
    #[inline]
    fn from(value: CompletedAction) -> Self {
        Self::Completed(value)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    GameAction,
    BoardSetup,
    AddNode,
    Completed,
}

wire_enum!(ActionKind {
    GameAction = 0,
    BoardSetup = 1,
    AddNode = 2,
    Completed = 3,
});

impl Encode for Action {
    fn encode(&self, writer: &mut BitWriter) {
        self.kind().encode(writer);

        match self {
            Self::GameAction(action) => action.encode(writer),
            Self::BoardSetup(action) => action.encode(writer),
            Self::AddNode(action) => action.encode(writer),
            Self::Completed(action) => action.encode(writer),
        }
    }
}

impl Decode for Action {
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let kind = ActionKind::decode(reader)?;

        match kind {
            ActionKind::GameAction => {
                let action = GameAction::decode(reader)?;
                Ok(Self::GameAction(action))
            }
            ActionKind::BoardSetup => {
                let action = BoardSetupAction::decode(reader)?;
                Ok(Self::BoardSetup(action))
            }
            ActionKind::AddNode => {
                let action = AddNodeAction::decode(reader)?;
                Ok(Self::AddNode(action))
            }
            ActionKind::Completed => {
                let action = CompletedAction::decode(reader)?;
                Ok(Self::Completed(action))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use game_common::components::movement::{Direction, GameVelocity, MoveData};
    use glam::Vec3;

    use crate::proto::{Decode, Encode, Error, InvalidEnumValue, WireEnum};
    use crate::stream::{BitReader, BitWriter};

    use super::{Action, ActionKind, GameAction, GameActionKind};

    #[test]
    fn tag_widths() {
        assert_eq!(ActionKind::BITS, 2);
        assert_eq!(GameActionKind::BITS, 4);
        assert_eq!(GameActionKind::CASES.len(), 10);
    }

    #[test]
    fn case_tables_are_dense() {
        for (index, case) in GameActionKind::CASES.iter().enumerate() {
            assert_eq!(case.ordinal() as usize, index);
        }
        for (index, case) in ActionKind::CASES.iter().enumerate() {
            assert_eq!(case.ordinal() as usize, index);
        }
    }

    #[test]
    fn helicopter_start_moving_layout() {
        let action = Action::GameAction(GameAction::HelicopterStartMoving(true));

        let mut writer = BitWriter::new();
        action.encode(&mut writer);
        assert_eq!(writer.bit_len(), 2 + 4 + 1);

        let mut reader = BitReader::new(writer.pack()).unwrap();
        assert_eq!(reader.read_u32(2).unwrap(), 0);
        assert_eq!(reader.read_u32(4).unwrap(), 2);
        assert!(reader.read_bool().unwrap());
    }

    #[test]
    fn joystick_moved_roundtrip() {
        let action = Action::GameAction(GameAction::JoyStickMoved(MoveData {
            velocity: GameVelocity::new(Vec3::new(1.0, 2.0, 3.0)),
            direction: Some(Direction::Forward),
            angular: 0.5,
        }));

        let mut writer = BitWriter::new();
        action.encode(&mut writer);

        let mut reader = BitReader::new(writer.pack()).unwrap();
        assert_eq!(Action::decode(&mut reader).unwrap(), action);
        assert!(reader.is_at_end());
    }

    #[test]
    fn unknown_game_action() {
        for ordinal in 10..16 {
            let mut writer = BitWriter::new();
            writer.append_enum(ActionKind::GameAction);
            writer.append_u32(ordinal, 4);

            let mut reader = BitReader::new(writer.pack()).unwrap();
            assert_eq!(
                Action::decode(&mut reader).unwrap_err(),
                Error::InvalidEnumValue(InvalidEnumValue {
                    name: "GameActionKind",
                    value: ordinal,
                })
            );
        }
    }
}
