//! Blast Range headless demo
//!
//! Drives the simulation at a VR-style 72 Hz with a scripted controller and
//! logging host stubs, then prints the final score display. The real host
//! would replace the stubs with its renderer, audio mixer, haptic actuator,
//! and in-world text display.

use glam::{Quat, Vec3};

use blast_range::host::{self, Audio, Haptics, ObjectKind, Scene, ScoreDisplay};
use blast_range::sim::{ControllerState, FrameInput, GameState, SoundCue, frame};

struct LogScene;

impl Scene for LogScene {
    fn add_object(&mut self, kind: ObjectKind, id: u32, position: Vec3) {
        log::debug!("scene: add {kind:?} {id} at {position}");
    }
    fn remove_object(&mut self, id: u32) {
        log::debug!("scene: remove {id}");
    }
    fn set_transform(&mut self, id: u32, position: Vec3, scale: f32) {
        log::debug!("scene: transform {id} to {position} scale {scale:.2}");
    }
    fn set_visible(&mut self, id: u32, visible: bool) {
        log::info!("scene: {id} visible={visible}");
    }
}

struct LogAudio;

impl Audio for LogAudio {
    fn play_one_shot(&mut self, cue: SoundCue) {
        log::debug!("audio: {cue:?}");
    }
}

/// Demo controller has no actuator; pulses are skipped silently
struct NoHaptics;

impl Haptics for NoHaptics {
    fn supports_pulse(&self) -> bool {
        false
    }
    fn pulse(&mut self, _intensity: f32, _duration_ms: u32) {}
}

struct LogDisplay;

impl ScoreDisplay for LogDisplay {
    fn set_display_text(&mut self, text: &str) {
        log::info!("score display: {text}");
    }
}

/// Orientation pointing the local forward axis (-Z) from `from` toward `to`
fn aim_at(from: Vec3, to: Vec3) -> Quat {
    Quat::from_rotation_arc(Vec3::NEG_Z, (to - from).normalize())
}

fn main() {
    env_logger::init();

    let seed = 0xB1A57;
    log::info!("Blast Range (headless) starting, seed {seed}");

    let mut state = GameState::new(seed);
    let mut scene = LogScene;
    let mut audio = LogAudio;
    let mut haptics = NoHaptics;
    let mut display = LogDisplay;

    // Five simulated seconds at 72 Hz, firing twice a second at whatever
    // target is currently on the field
    let dt = 1.0 / 72.0;
    let muzzle = Vec3::new(0.0, 1.4, 0.3);
    for frame_index in 0..(5 * 72) {
        let fire = frame_index % 36 == 0;
        let aim = state.visible_targets().next().map(|t| t.position);
        let input = FrameInput {
            controller: aim.map(|target_pos| ControllerState {
                trigger_fired: fire,
                position: muzzle,
                orientation: aim_at(muzzle, target_pos),
            }),
        };

        let events = frame(&mut state, &input, dt);
        host::dispatch(&events, &mut scene, &mut audio, &mut haptics, &mut display);
    }

    log::info!(
        "session over: {} points, {} projectiles still in flight",
        state.score.value(),
        state.projectiles.len()
    );
    println!("final score: {}", state.score.render());
}
