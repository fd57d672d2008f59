//! Hit detection between projectiles and targets
//!
//! A plain nested scan over live projectiles and collidable targets using a
//! Euclidean distance threshold. No broadphase: the target count is tiny.

use super::state::{Projectile, Target};

/// A confirmed projectile/target hit, consumed within the frame it occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub projectile_id: u32,
    pub target_id: u32,
    pub distance: f32,
}

/// Scan projectiles against targets and report hit pairs.
///
/// Targets are tested in registry order and the first one strictly inside
/// `hit_radius` consumes the projectile; later targets are not tested that
/// frame, even if closer. Distance exactly equal to the radius is a miss.
/// Hidden targets are never eligible, even at distance zero.
pub fn find_hits<'a>(
    projectiles: &[Projectile],
    targets: impl Iterator<Item = &'a Target> + Clone,
    hit_radius: f32,
) -> Vec<Hit> {
    let mut hits = Vec::new();
    for projectile in projectiles {
        for target in targets.clone() {
            if !target.is_collidable() {
                continue;
            }
            let distance = projectile.position.distance(target.position);
            if distance < hit_radius {
                hits.push(Hit {
                    projectile_id: projectile.id,
                    target_id: target.id,
                    distance,
                });
                break;
            }
        }
    }
    hits
}
