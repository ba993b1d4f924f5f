use glam::Vec3;

/// The axis a joystick input is steering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Altitude,
    Rotation,
    Side,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GameVelocity {
    pub vector: Vec3,
}

impl GameVelocity {
    pub const ZERO: Self = Self { vector: Vec3::ZERO };

    #[inline]
    pub const fn new(vector: Vec3) -> Self {
        Self { vector }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.vector == Vec3::ZERO
    }
}

impl From<Vec3> for GameVelocity {
    #[inline]
    fn from(value: Vec3) -> Self {
        Self::new(value)
    }
}

/// A single joystick input sampled by the controlling peer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveData {
    pub velocity: GameVelocity,
    /// The steered axis, if the input is bound to one.
    pub direction: Option<Direction>,
    pub angular: f32,
}

/// The authoritative state of the helicopter, sent periodically by the host.
///
/// All fields except `is_moving` are quantized on the wire.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MovementSyncData {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Unit axis of the helicopter rotation.
    pub rotation_axis: Vec3,
    /// Rotation around `rotation_axis` in radians, in `-PI..=PI`.
    pub rotation_angle: f32,
    pub is_moving: bool,
}
