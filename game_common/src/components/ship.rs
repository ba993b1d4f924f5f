use glam::{Quat, Vec3};

/// Position update for a single enemy ship.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipSyncData {
    pub ship_id: String,
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Quat,
    pub is_alive: bool,
    /// Seconds since the start of the match.
    pub timestamp: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShipDestroyedData {
    pub ship_id: String,
    /// Where the ship was destroyed.
    pub position: Vec3,
    pub timestamp: f64,
}

/// A ship was locked on, or the lock was released.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipTargetedData {
    pub ship_id: String,
    pub targeted: bool,
    pub timestamp: f64,
}
