use glam::{Quat, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct MissileFireData {
    pub missile_id: String,
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Quat,
    /// The ship the missile is guided towards. Unguided missiles have no target.
    pub target_ship_id: Option<String>,
    pub timestamp: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MissileSyncData {
    pub missile_id: String,
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Quat,
    pub is_active: bool,
    pub timestamp: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MissileHitData {
    pub missile_id: String,
    pub ship_id: String,
    pub position: Vec3,
    pub timestamp: f64,
}
