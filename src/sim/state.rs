//! Game state and core simulation types
//!
//! A single owned `GameState` replaces any process-wide registries: the frame
//! driver holds one and passes it into every frame step.

use glam::{Quat, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::score::ScoreCounter;
use crate::consts::DEFAULT_TARGETS;
use crate::tuning::Tuning;

/// A fired projectile
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub position: Vec3,
    /// Pose captured at spawn; only used to derive the initial direction
    pub orientation: Quat,
    /// World-space velocity, fixed after spawn
    pub velocity: Vec3,
    /// Remaining lifetime in seconds
    pub time_to_live: f32,
}

impl Projectile {
    /// Integrate one frame of motion
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.time_to_live -= dt;
    }

    /// Strictly negative TTL only: a projectile at exactly 0.0 stays live
    /// for one more frame
    pub fn is_expired(&self) -> bool {
        self.time_to_live < 0.0
    }
}

/// Destroy/respawn sequence phase.
///
/// Scheduled state advanced by `dt` every frame; nothing here blocks the
/// frame loop. Cycle: Visible -> Shrinking -> Hidden -> Growing -> Visible,
/// repeating for the session lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetPhase {
    /// Standing at full scale
    Visible,
    /// Scale animating 1 -> 0; still collidable until fully shrunk
    Shrinking { elapsed: f32 },
    /// Off the field, waiting out the respawn delay
    Hidden { elapsed: f32 },
    /// Back at a new position, scale animating 0 -> 1
    Growing { elapsed: f32 },
}

/// A destructible, respawning target
#[derive(Debug, Clone)]
pub struct Target {
    pub id: u32,
    /// x and z are rewritten on respawn; y is fixed for the session
    pub position: Vec3,
    pub visible: bool,
    /// Shrink/grow animation progress in [0, 1]
    pub scale: f32,
    pub phase: TargetPhase,
}

impl Target {
    pub fn new(id: u32, position: Vec3) -> Self {
        Self {
            id,
            position,
            visible: true,
            scale: 1.0,
            phase: TargetPhase::Visible,
        }
    }

    /// Eligible for collision this frame. Shrinking targets still count;
    /// hidden and growing state follows the `visible` flag.
    pub fn is_collidable(&self) -> bool {
        self.visible
    }

    /// Begin the shrink/hide/respawn sequence. A target already mid-sequence
    /// keeps its timers; the hit still scored, but the schedule is not
    /// restarted or duplicated.
    pub fn begin_destroy(&mut self) {
        if self.phase == TargetPhase::Visible {
            self.phase = TargetPhase::Shrinking { elapsed: 0.0 };
        }
    }

    /// Advance the destroy/respawn sequence by one frame, pushing any phase
    /// transitions into `events`.
    pub fn advance_phase(
        &mut self,
        dt: f32,
        rng: &mut Pcg32,
        tuning: &Tuning,
        events: &mut Vec<FrameEvent>,
    ) {
        match self.phase {
            TargetPhase::Visible => {}
            TargetPhase::Shrinking { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= tuning.shrink_duration {
                    self.scale = 0.0;
                    self.visible = false;
                    self.phase = TargetPhase::Hidden { elapsed: 0.0 };
                    events.push(FrameEvent::TargetHidden { id: self.id });
                } else {
                    self.scale = 1.0 - elapsed / tuning.shrink_duration;
                    self.phase = TargetPhase::Shrinking { elapsed };
                }
            }
            TargetPhase::Hidden { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= tuning.hidden_duration {
                    // Position may only be rewritten while hidden
                    self.position.x = rng.random_range(tuning.respawn_x_min..tuning.respawn_x_max);
                    self.position.z = rng.random_range(tuning.respawn_z_min..tuning.respawn_z_max);
                    self.visible = true;
                    self.scale = 0.0;
                    self.phase = TargetPhase::Growing { elapsed: 0.0 };
                    events.push(FrameEvent::TargetRespawned {
                        id: self.id,
                        position: self.position,
                    });
                } else {
                    self.phase = TargetPhase::Hidden { elapsed };
                }
            }
            TargetPhase::Growing { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= tuning.grow_duration {
                    self.scale = 1.0;
                    self.phase = TargetPhase::Visible;
                } else {
                    self.scale = elapsed / tuning.grow_duration;
                    self.phase = TargetPhase::Growing { elapsed };
                }
            }
        }
    }
}

/// Sound cues the host may play, fire-and-forget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Shot fired
    Blaster,
    /// Target hit, points scored
    Score,
}

/// Discrete transitions produced by one frame step, consumed by the host the
/// same frame. Continuous transforms (projectile positions, target scales)
/// are read straight off `GameState` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    ProjectileSpawned { id: u32, position: Vec3 },
    ProjectileExpired { id: u32 },
    TargetHit { projectile_id: u32, target_id: u32, distance: f32 },
    TargetHidden { id: u32 },
    TargetRespawned { id: u32, position: Vec3 },
    ScoreChanged { value: u64, display: String },
    HapticPulse { intensity: f32, duration_ms: u32 },
    Sound(SoundCue),
}

/// Complete session state (deterministic from seed + inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Session RNG; respawn placement draws from here
    pub rng: Pcg32,
    /// Seconds of simulated time accumulated so far
    pub time: f32,
    /// Live projectiles in spawn order
    pub projectiles: Vec<Projectile>,
    /// The fixed set of targets, in registry order
    pub targets: Vec<Target>,
    pub score: ScoreCounter,
    pub tuning: Tuning,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a session with the default target layout and balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time: 0.0,
            projectiles: Vec::new(),
            targets: Vec::new(),
            score: ScoreCounter::new(),
            tuning,
            next_id: 1,
        };
        for pos in DEFAULT_TARGETS {
            state.add_target(Vec3::from_array(pos));
        }
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Register a target at a fixed position (initialization only; later
    /// position writes happen inside the respawn sequence)
    pub fn add_target(&mut self, position: Vec3) -> u32 {
        let id = self.next_entity_id();
        self.targets.push(Target::new(id, position));
        id
    }

    /// Fire one projectile from the given pose. Direction is the local
    /// forward axis (-Z) rotated into world space by `orientation`.
    pub fn spawn_projectile(&mut self, position: Vec3, orientation: Quat) -> u32 {
        let id = self.next_entity_id();
        let direction = orientation * Vec3::NEG_Z;
        self.projectiles.push(Projectile {
            id,
            position,
            orientation,
            velocity: direction * self.tuning.projectile_speed,
            time_to_live: self.tuning.projectile_ttl,
        });
        id
    }

    /// Remove a projectile immediately (hit resolution)
    pub fn remove_projectile(&mut self, id: u32) {
        self.projectiles.retain(|p| p.id != id);
    }

    /// Currently collidable targets, in registry order. Restartable: the
    /// iterator can be cloned and rewound within a frame.
    pub fn visible_targets(&self) -> impl Iterator<Item = &Target> + Clone {
        self.targets.iter().filter(|t| t.is_collidable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> Tuning {
        Tuning::default()
    }

    #[test]
    fn test_spawn_direction_is_rotated_forward() {
        let mut state = GameState::new(1);
        let id = state.spawn_projectile(Vec3::ZERO, Quat::IDENTITY);
        let p = state.projectiles.iter().find(|p| p.id == id).unwrap();
        assert!((p.velocity - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-5);

        // Quarter turn about Y points the muzzle down -X
        let turned = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let id = state.spawn_projectile(Vec3::ZERO, turned);
        let p = state.projectiles.iter().find(|p| p.id == id).unwrap();
        assert!((p.velocity - Vec3::new(-10.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_ttl_zero_is_still_live() {
        let mut p = Projectile {
            id: 1,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            velocity: Vec3::new(0.0, 0.0, -10.0),
            time_to_live: 1.0,
        };
        p.advance(0.5);
        p.advance(0.5);
        assert_eq!(p.time_to_live, 0.0);
        assert!(!p.is_expired());
        p.advance(0.1);
        assert!(p.is_expired());
    }

    #[test]
    fn test_destroy_cycle_timing_and_respawn_range() {
        let tuning = tuning();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut target = Target::new(1, Vec3::new(0.4, 0.75, -1.5));
        let mut events = Vec::new();

        target.begin_destroy();
        assert!(matches!(target.phase, TargetPhase::Shrinking { .. }));
        assert!(target.is_collidable());

        // Shrink: 0.3s of accumulated dt
        let dt = 0.1;
        let mut invisible_time = 0.0;
        for _ in 0..3 {
            assert!(target.visible);
            target.advance_phase(dt, &mut rng, &tuning, &mut events);
        }
        assert!(!target.visible);
        assert_eq!(target.scale, 0.0);
        assert!(events.contains(&FrameEvent::TargetHidden { id: 1 }));

        // Hidden: a full 1.0s before the flag flips back
        while !target.visible {
            target.advance_phase(dt, &mut rng, &tuning, &mut events);
            invisible_time += dt;
        }
        assert!(invisible_time >= tuning.hidden_duration - 1e-5);

        // Respawned within the placement ranges, y untouched
        assert!(target.position.x >= -5.0 && target.position.x <= 5.0);
        assert!(target.position.z >= -10.0 && target.position.z <= -5.0);
        assert_eq!(target.position.y, 0.75);
        assert!(matches!(target.phase, TargetPhase::Growing { .. }));

        // Grow: 0.3s back to full scale
        for _ in 0..3 {
            target.advance_phase(dt, &mut rng, &tuning, &mut events);
        }
        assert_eq!(target.phase, TargetPhase::Visible);
        assert_eq!(target.scale, 1.0);
    }

    #[test]
    fn test_destroy_mid_sequence_keeps_timers() {
        let tuning = tuning();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut target = Target::new(1, Vec3::ZERO);
        let mut events = Vec::new();

        target.begin_destroy();
        target.advance_phase(0.2, &mut rng, &tuning, &mut events);
        let before = target.phase;

        // A second hit while shrinking must not restart the schedule
        target.begin_destroy();
        assert_eq!(target.phase, before);
    }

    #[test]
    fn test_remove_projectile() {
        let mut state = GameState::new(1);
        let a = state.spawn_projectile(Vec3::ZERO, Quat::IDENTITY);
        let b = state.spawn_projectile(Vec3::ZERO, Quat::IDENTITY);
        state.remove_projectile(a);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].id, b);
    }

    #[test]
    fn test_visible_targets_is_restartable() {
        let mut state = GameState::new(1);
        state.targets[1].visible = false;
        let it = state.visible_targets();
        assert_eq!(it.clone().count(), 2);
        // Rewound clone sees the same sequence
        let ids: Vec<u32> = it.map(|t| t.id).collect();
        assert_eq!(ids, vec![state.targets[0].id, state.targets[2].id]);
    }
}
