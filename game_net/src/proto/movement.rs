use std::f32::consts::PI;

use game_common::components::movement::{Direction, GameVelocity, MoveData, MovementSyncData};
use glam::Vec3;

use crate::compress::FloatCompressor;
use crate::stream::{BitReader, BitWriter};

use super::{Decode, Encode, EofError, Error};

/// Helicopter position in meters from the board origin.
pub const POSITION: FloatCompressor = FloatCompressor::new(-80.0, 80.0, 16);

/// Helicopter velocity in meters per second.
pub const VELOCITY: FloatCompressor = FloatCompressor::new(-50.0, 50.0, 16);

/// Components of the unit rotation axis.
pub const ROTATION_AXIS: FloatCompressor = FloatCompressor::new(-1.0, 1.0, 12);

pub const ROTATION_ANGLE: FloatCompressor = FloatCompressor::new(-PI, PI, 14);

wire_enum!(Direction {
    Forward = 0,
    Altitude = 1,
    Rotation = 2,
    Side = 3,
});

impl Encode for GameVelocity {
    #[inline]
    fn encode(&self, writer: &mut BitWriter) {
        self.vector.encode(writer);
    }
}

impl Decode for GameVelocity {
    type Error = EofError;

    #[inline]
    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        Vec3::decode(reader).map(Self::new)
    }
}

impl Encode for MoveData {
    fn encode(&self, writer: &mut BitWriter) {
        self.velocity.encode(writer);
        self.direction.encode(writer);
        self.angular.encode(writer);
    }
}

impl Decode for MoveData {
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let velocity = GameVelocity::decode(reader)?;
        let direction = Option::<Direction>::decode(reader)?;
        let angular = f32::decode(reader)?;

        Ok(Self {
            velocity,
            direction,
            angular,
        })
    }
}

impl Encode for MovementSyncData {
    fn encode(&self, writer: &mut BitWriter) {
        POSITION.write_vec3(self.position, writer);
        VELOCITY.write_vec3(self.velocity, writer);
        ROTATION_AXIS.write_vec3(self.rotation_axis, writer);
        ROTATION_ANGLE.write(self.rotation_angle, writer);
        self.is_moving.encode(writer);
    }
}

impl Decode for MovementSyncData {
    type Error = EofError;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let position = POSITION.read_vec3(reader)?;
        let velocity = VELOCITY.read_vec3(reader)?;
        let rotation_axis = ROTATION_AXIS.read_vec3(reader)?;
        let rotation_angle = ROTATION_ANGLE.read(reader)?;
        let is_moving = bool::decode(reader)?;

        Ok(Self {
            position,
            velocity,
            rotation_axis,
            rotation_angle,
            is_moving,
        })
    }
}
