//! Board setup
//!
//! A joining peer sends [`BoardSetupAction::RequestBoardLocation`]. The host answers with a
//! [`BoardSetupAction::BoardLocation`] that either contains its serialized world map, which the
//! joining peer uses to align its coordinate system, or instructs the peer to place the board
//! manually.

use bytes::Bytes;
use glam::{Mat4, Vec3};

use crate::stream::{BitReader, BitWriter};

use super::{Decode, Encode, EofError, Error};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameBoardLocation {
    /// An opaque, serialized world map.
    WorldMapData(Bytes),
    Manual,
}

impl GameBoardLocation {
    #[inline]
    pub fn kind(&self) -> GameBoardLocationKind {
        match self {
            Self::WorldMapData(_) => GameBoardLocationKind::WorldMapData,
            Self::Manual => GameBoardLocationKind::Manual,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameBoardLocationKind {
    WorldMapData,
    Manual,
}

wire_enum!(GameBoardLocationKind {
    WorldMapData = 0,
    Manual = 1,
});

impl Encode for GameBoardLocation {
    fn encode(&self, writer: &mut BitWriter) {
        self.kind().encode(writer);

        match self {
            Self::WorldMapData(data) => data.encode(writer),
            Self::Manual => (),
        }
    }
}

impl Decode for GameBoardLocation {
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        match GameBoardLocationKind::decode(reader)? {
            GameBoardLocationKind::WorldMapData => {
                let data = Bytes::decode(reader)?;
                Ok(Self::WorldMapData(data))
            }
            GameBoardLocationKind::Manual => Ok(Self::Manual),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoardSetupAction {
    RequestBoardLocation,
    BoardLocation(GameBoardLocation),
}

impl BoardSetupAction {
    #[inline]
    pub fn kind(&self) -> BoardSetupKind {
        match self {
            Self::RequestBoardLocation => BoardSetupKind::RequestBoardLocation,
            Self::BoardLocation(_) => BoardSetupKind::BoardLocation,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoardSetupKind {
    RequestBoardLocation,
    BoardLocation,
}

wire_enum!(BoardSetupKind {
    RequestBoardLocation = 0,
    BoardLocation = 1,
});

impl Encode for BoardSetupAction {
    fn encode(&self, writer: &mut BitWriter) {
        self.kind().encode(writer);

        match self {
            Self::RequestBoardLocation => (),
            Self::BoardLocation(location) => location.encode(writer),
        }
    }
}

impl Decode for BoardSetupAction {
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        match BoardSetupKind::decode(reader)? {
            BoardSetupKind::RequestBoardLocation => Ok(Self::RequestBoardLocation),
            BoardSetupKind::BoardLocation => {
                let location = GameBoardLocation::decode(reader)?;
                Ok(Self::BoardLocation(location))
            }
        }
    }
}

/// Places a node into the shared scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AddNodeAction {
    pub world_transform: Mat4,
    pub euler_angles: Vec3,
}

impl Encode for AddNodeAction {
    fn encode(&self, writer: &mut BitWriter) {
        self.world_transform.encode(writer);
        self.euler_angles.encode(writer);
    }
}

impl Decode for AddNodeAction {
    type Error = EofError;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let world_transform = Mat4::decode(reader)?;
        let euler_angles = Vec3::decode(reader)?;

        Ok(Self {
            world_transform,
            euler_angles,
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CompletedAction {
    pub position: Vec3,
}

impl Encode for CompletedAction {
    #[inline]
    fn encode(&self, writer: &mut BitWriter) {
        self.position.encode(writer);
    }
}

impl Decode for CompletedAction {
    type Error = EofError;

    #[inline]
    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let position = Vec3::decode(reader)?;
        Ok(Self { position })
    }
}
