//! Data-driven game balance
//!
//! Balance knobs live in one serde struct so sessions can be rebalanced from
//! JSON without recompiling. The host hands the JSON string in; the core
//! itself does no file I/O.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance. `Default` matches the shipped constants; any subset of
/// fields may be overridden from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Projectile muzzle speed (units/second)
    pub projectile_speed: f32,
    /// Projectile lifetime (seconds)
    pub projectile_ttl: f32,
    /// Hit radius (units)
    pub hit_radius: f32,
    /// Target shrink duration (seconds)
    pub shrink_duration: f32,
    /// Off-field interval before respawn (seconds)
    pub hidden_duration: f32,
    /// Target grow-back duration (seconds)
    pub grow_duration: f32,
    /// Respawn placement ranges
    pub respawn_x_min: f32,
    pub respawn_x_max: f32,
    pub respawn_z_min: f32,
    pub respawn_z_max: f32,
    /// Points per hit
    pub score_per_hit: u64,
    /// Haptic pulse on fire
    pub haptic_intensity: f32,
    pub haptic_duration_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            projectile_speed: PROJECTILE_SPEED,
            projectile_ttl: PROJECTILE_TTL,
            hit_radius: HIT_RADIUS,
            shrink_duration: SHRINK_DURATION,
            hidden_duration: HIDDEN_DURATION,
            grow_duration: GROW_DURATION,
            respawn_x_min: RESPAWN_X_MIN,
            respawn_x_max: RESPAWN_X_MAX,
            respawn_z_min: RESPAWN_Z_MIN,
            respawn_z_max: RESPAWN_Z_MAX,
            score_per_hit: SCORE_PER_HIT,
            haptic_intensity: HAPTIC_INTENSITY,
            haptic_duration_ms: HAPTIC_DURATION_MS,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
