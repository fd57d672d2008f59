//! Per-frame simulation step
//!
//! The host's frame driver calls [`frame`] once per display refresh with the
//! seconds elapsed since the previous call and the controller state sampled
//! for this frame. Everything runs synchronously inside the call; multi-frame
//! timing (the target respawn sequence) lives in per-target scheduled state,
//! never in a blocking wait.

use glam::{Quat, Vec3};

use super::collision::find_hits;
use super::state::{FrameEvent, GameState, SoundCue};

/// Sampled state of the firing controller for one frame
#[derive(Debug, Clone, Copy)]
pub struct ControllerState {
    /// Trigger went from unpressed to pressed this frame
    pub trigger_fired: bool,
    /// World-space muzzle position
    pub position: Vec3,
    /// World-space muzzle orientation
    pub orientation: Quat,
}

/// Input for a single frame step
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Firing controller, if currently tracked. Untracked means no spawn
    /// origin: trigger pulls are silently skipped, not an error.
    pub controller: Option<ControllerState>,
}

/// Advance the simulation by one frame, returning the discrete transitions
/// for the host to forward to its collaborators.
///
/// Steps run in a fixed order so that a projectile spawned this frame already
/// moves, can expire, and can score within the same frame:
/// spawn, advance, expire, target animation, collide, react.
pub fn frame(state: &mut GameState, input: &FrameInput, dt: f32) -> Vec<FrameEvent> {
    let mut events = Vec::new();
    state.time += dt;

    // Spawn on a trigger edge
    if let Some(controller) = input.controller {
        if controller.trigger_fired {
            events.push(FrameEvent::HapticPulse {
                intensity: state.tuning.haptic_intensity,
                duration_ms: state.tuning.haptic_duration_ms,
            });
            events.push(FrameEvent::Sound(SoundCue::Blaster));
            let id = state.spawn_projectile(controller.position, controller.orientation);
            events.push(FrameEvent::ProjectileSpawned {
                id,
                position: controller.position,
            });
        }
    }

    // Advance every live projectile, including one spawned above: a fresh
    // projectile gets its partial first-frame move
    for projectile in &mut state.projectiles {
        projectile.advance(dt);
    }

    // Expire strictly-negative TTLs before collision, so each projectile is
    // removed at most once per frame
    state.projectiles.retain(|p| {
        if p.is_expired() {
            events.push(FrameEvent::ProjectileExpired { id: p.id });
            false
        } else {
            true
        }
    });

    // Target respawn schedules tick every frame, independent of hits
    let (targets, rng, tuning) = (&mut state.targets, &mut state.rng, &state.tuning);
    for target in targets.iter_mut() {
        target.advance_phase(dt, rng, tuning, &mut events);
    }

    // Collide post-move positions against targets still on the field
    let hits = find_hits(
        &state.projectiles,
        state.visible_targets(),
        state.tuning.hit_radius,
    );

    for hit in hits {
        log::debug!(
            "projectile {} hit target {} at {:.3}",
            hit.projectile_id,
            hit.target_id,
            hit.distance
        );
        state.remove_projectile(hit.projectile_id);
        if let Some(target) = state.targets.iter_mut().find(|t| t.id == hit.target_id) {
            target.begin_destroy();
        }
        state.score.increment(state.tuning.score_per_hit);
        events.push(FrameEvent::TargetHit {
            projectile_id: hit.projectile_id,
            target_id: hit.target_id,
            distance: hit.distance,
        });
        events.push(FrameEvent::ScoreChanged {
            value: state.score.value(),
            display: state.score.render(),
        });
        events.push(FrameEvent::Sound(SoundCue::Score));
    }

    events
}
