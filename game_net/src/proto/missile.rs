use game_common::components::missile::{MissileFireData, MissileHitData, MissileSyncData};
use glam::{Quat, Vec3};

use crate::stream::{BitReader, BitWriter};

use super::{Decode, Encode, Error};

impl Encode for MissileFireData {
    fn encode(&self, writer: &mut BitWriter) {
        self.missile_id.encode(writer);
        self.position.encode(writer);
        self.velocity.encode(writer);
        self.rotation.encode(writer);
        self.target_ship_id.encode(writer);
        self.timestamp.encode(writer);
    }
}

impl Decode for MissileFireData {
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let missile_id = String::decode(reader)?;
        let position = Vec3::decode(reader)?;
        let velocity = Vec3::decode(reader)?;
        let rotation = Quat::decode(reader)?;
        let target_ship_id = Option::<String>::decode(reader)?;
        let timestamp = f64::decode(reader)?;

        Ok(Self {
            missile_id,
            position,
            velocity,
            rotation,
            target_ship_id,
            timestamp,
        })
    }
}

impl Encode for MissileSyncData {
    fn encode(&self, writer: &mut BitWriter) {
        self.missile_id.encode(writer);
        self.position.encode(writer);
        self.velocity.encode(writer);
        self.rotation.encode(writer);
        self.is_active.encode(writer);
        self.timestamp.encode(writer);
    }
}

impl Decode for MissileSyncData {
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let missile_id = String::decode(reader)?;
        let position = Vec3::decode(reader)?;
        let velocity = Vec3::decode(reader)?;
        let rotation = Quat::decode(reader)?;
        let is_active = bool::decode(reader)?;
        let timestamp = f64::decode(reader)?;

        Ok(Self {
            missile_id,
            position,
            velocity,
            rotation,
            is_active,
            timestamp,
        })
    }
}

impl Encode for MissileHitData {
    fn encode(&self, writer: &mut BitWriter) {
        self.missile_id.encode(writer);
        self.ship_id.encode(writer);
        self.position.encode(writer);
        self.timestamp.encode(writer);
    }
}

impl Decode for MissileHitData {
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let missile_id = String::decode(reader)?;
        let ship_id = String::decode(reader)?;
        let position = Vec3::decode(reader)?;
        let timestamp = f64::decode(reader)?;

        Ok(Self {
            missile_id,
            ship_id,
            position,
            timestamp,
        })
    }
}
