//! Capability boundary to the host collaborators
//!
//! The host environment owns rendering, audio playback, haptics, and the
//! in-world score display. The core only emits [`FrameEvent`]s; [`dispatch`]
//! forwards the discrete transitions to these traits, all fire-and-forget.
//! Continuous per-frame transforms (projectile positions, target scales) are
//! read straight off `GameState` by the renderer instead.

use glam::Vec3;

use crate::sim::{FrameEvent, SoundCue};

/// Kinds of scene objects the core asks the host to manage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Projectile,
    Target,
}

/// Scene graph operations, no return values consumed by the core
pub trait Scene {
    fn add_object(&mut self, kind: ObjectKind, id: u32, position: Vec3);
    fn remove_object(&mut self, id: u32);
    fn set_transform(&mut self, id: u32, position: Vec3, scale: f32);
    fn set_visible(&mut self, id: u32, visible: bool);
}

/// One-shot sound playback; the core never waits for completion
pub trait Audio {
    fn play_one_shot(&mut self, cue: SoundCue);
}

/// Controller haptic actuator. Absence is expected, not exceptional:
/// `dispatch` checks `supports_pulse` instead of handling a failure.
pub trait Haptics {
    fn supports_pulse(&self) -> bool;
    /// Intensity in [0, 1]
    fn pulse(&mut self, intensity: f32, duration_ms: u32);
}

/// The in-world score readout
pub trait ScoreDisplay {
    fn set_display_text(&mut self, text: &str);
}

/// Forward one frame's discrete transitions to the host collaborators.
pub fn dispatch(
    events: &[FrameEvent],
    scene: &mut impl Scene,
    audio: &mut impl Audio,
    haptics: &mut impl Haptics,
    display: &mut impl ScoreDisplay,
) {
    for event in events {
        match event {
            FrameEvent::ProjectileSpawned { id, position } => {
                scene.add_object(ObjectKind::Projectile, *id, *position);
            }
            FrameEvent::ProjectileExpired { id } => scene.remove_object(*id),
            FrameEvent::TargetHit { projectile_id, .. } => scene.remove_object(*projectile_id),
            FrameEvent::TargetHidden { id } => scene.set_visible(*id, false),
            FrameEvent::TargetRespawned { id, position } => {
                scene.set_transform(*id, *position, 0.0);
                scene.set_visible(*id, true);
            }
            FrameEvent::ScoreChanged { display: text, .. } => display.set_display_text(text),
            FrameEvent::HapticPulse {
                intensity,
                duration_ms,
            } => {
                if haptics.supports_pulse() {
                    haptics.pulse(*intensity, *duration_ms);
                }
            }
            FrameEvent::Sound(cue) => audio.play_one_shot(*cue),
        }
    }
}
