//! Blast Range - gameplay core for a VR target-shooting range
//!
//! Core modules:
//! - `sim`: Deterministic simulation (projectiles, targets, collisions, score)
//! - `host`: Capability traits for the host collaborators (scene, audio,
//!   haptics, score display)
//! - `tuning`: Data-driven game balance

pub mod host;
pub mod sim;
pub mod tuning;

pub use sim::GameState;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Projectile muzzle speed (distance units per second)
    pub const PROJECTILE_SPEED: f32 = 10.0;
    /// Projectile lifetime (seconds)
    pub const PROJECTILE_TTL: f32 = 1.0;

    /// Distance below which a projectile/target pair counts as a hit
    pub const HIT_RADIUS: f32 = 1.0;

    /// Target shrink animation duration (seconds)
    pub const SHRINK_DURATION: f32 = 0.3;
    /// How long a destroyed target stays off the field (seconds)
    pub const HIDDEN_DURATION: f32 = 1.0;
    /// Target grow-back animation duration (seconds)
    pub const GROW_DURATION: f32 = 0.3;

    /// Respawn placement ranges; y never changes
    pub const RESPAWN_X_MIN: f32 = -5.0;
    pub const RESPAWN_X_MAX: f32 = 5.0;
    pub const RESPAWN_Z_MIN: f32 = -10.0;
    pub const RESPAWN_Z_MAX: f32 = -5.0;

    /// Points awarded per hit
    pub const SCORE_PER_HIT: u64 = 10;
    /// Largest value the score display can show
    pub const SCORE_DISPLAY_MAX: u64 = 9999;

    /// Haptic pulse requested with each shot
    pub const HAPTIC_INTENSITY: f32 = 0.6;
    pub const HAPTIC_DURATION_MS: u32 = 100;

    /// Default target layout (cone, cube, sphere of the starting scene)
    pub const DEFAULT_TARGETS: [[f32; 3]; 3] = [
        [0.4, 0.75, -1.5],
        [-0.8, 0.5, -1.5],
        [0.6, 0.4, -0.5],
    ];
}
