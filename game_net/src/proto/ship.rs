use game_common::components::ship::{ShipDestroyedData, ShipSyncData, ShipTargetedData};
use glam::{Quat, Vec3};

use crate::stream::{BitReader, BitWriter};

use super::{Decode, Encode, Error};

impl Encode for ShipSyncData {
    fn encode(&self, writer: &mut BitWriter) {
        self.ship_id.encode(writer);
        self.position.encode(writer);
        self.velocity.encode(writer);
        self.rotation.encode(writer);
        self.is_alive.encode(writer);
        self.timestamp.encode(writer);
    }
}

impl Decode for ShipSyncData {
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let ship_id = String::decode(reader)?;
        let position = Vec3::decode(reader)?;
        let velocity = Vec3::decode(reader)?;
        let rotation = Quat::decode(reader)?;
        let is_alive = bool::decode(reader)?;
        let timestamp = f64::decode(reader)?;

        Ok(Self {
            ship_id,
            position,
            velocity,
            rotation,
            is_alive,
            timestamp,
        })
    }
}

impl Encode for ShipDestroyedData {
    fn encode(&self, writer: &mut BitWriter) {
        self.ship_id.encode(writer);
        self.position.encode(writer);
        self.timestamp.encode(writer);
    }
}

impl Decode for ShipDestroyedData {
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let ship_id = String::decode(reader)?;
        let position = Vec3::decode(reader)?;
        let timestamp = f64::decode(reader)?;

        Ok(Self {
            ship_id,
            position,
            timestamp,
        })
    }
}

impl Encode for ShipTargetedData {
    fn encode(&self, writer: &mut BitWriter) {
        self.ship_id.encode(writer);
        self.targeted.encode(writer);
        self.timestamp.encode(writer);
    }
}

impl Decode for ShipTargetedData {
    type Error = Error;

    fn decode(reader: &mut BitReader) -> Result<Self, Self::Error> {
        let ship_id = String::decode(reader)?;
        let targeted = bool::decode(reader)?;
        let timestamp = f64::decode(reader)?;

        Ok(Self {
            ship_id,
            targeted,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use game_common::components::ship::{ShipDestroyedData, ShipSyncData, ShipTargetedData};
    use glam::{Quat, Vec3};

    use crate::proto::{Decode, Encode, Error};
    use crate::stream::{BitReader, BitWriter};

    #[test]
    fn ship_sync_roundtrip() {
        let ships = vec![
            ShipSyncData {
                ship_id: "ship-0".to_owned(),
                position: Vec3::new(10.0, 0.0, -4.5),
                velocity: Vec3::new(0.25, 0.0, 1.0),
                rotation: Quat::from_rotation_y(0.3),
                is_alive: true,
                timestamp: 1024.125,
            },
            ShipSyncData {
                ship_id: "ship-1".to_owned(),
                position: Vec3::ZERO,
                velocity: Vec3::ZERO,
                rotation: Quat::IDENTITY,
                is_alive: false,
                timestamp: 0.0,
            },
        ];

        let mut writer = BitWriter::new();
        ships.encode(&mut writer);

        let mut reader = BitReader::new(writer.pack()).unwrap();
        assert_eq!(Vec::<ShipSyncData>::decode(&mut reader).unwrap(), ships);
        assert!(reader.is_at_end());
    }

    #[test]
    fn ship_events_roundtrip() {
        let destroyed = ShipDestroyedData {
            ship_id: "ship-7".to_owned(),
            position: Vec3::new(1.0, 2.0, 3.0),
            timestamp: 33.5,
        };
        let targeted = ShipTargetedData {
            ship_id: "ship-7".to_owned(),
            targeted: true,
            timestamp: 30.0,
        };

        let mut writer = BitWriter::new();
        targeted.encode(&mut writer);
        destroyed.encode(&mut writer);

        let mut reader = BitReader::new(writer.pack()).unwrap();
        assert_eq!(ShipTargetedData::decode(&mut reader).unwrap(), targeted);
        assert_eq!(ShipDestroyedData::decode(&mut reader).unwrap(), destroyed);
        assert!(reader.is_at_end());
    }

    #[test]
    fn ship_sync_invalid_id() {
        let mut writer = BitWriter::new();
        writer.append_data(&[0xC3]);

        let mut reader = BitReader::new(writer.pack()).unwrap();
        assert!(matches!(
            ShipSyncData::decode(&mut reader),
            Err(Error::InvalidUtf8(_))
        ));
    }
}
