use bevy::prelude::*;

use super::components::{AnimBlend, AnimTargets, LocalOwner, Player};
use crate::config::ConfigLoaded;

/// Smooths the presentation blend values toward the per-tick targets. The
/// animation layer reads `AnimBlend`; the smoothing time constant comes
/// from config.
pub fn smooth_anim_blend(
  mut players: Query<(&AnimTargets, &mut AnimBlend), (With<Player>, With<LocalOwner>)>,
  config: Res<ConfigLoaded>,
  time: Res<Time>,
) {
  let tau = config.animation.smoothing.max(f32::EPSILON);
  let k = (time.delta_secs() / tau).min(1.0);

  for (targets, mut blend) in &mut players {
    blend.speed += (targets.speed_param - blend.speed) * k;
    blend.horizontal += (targets.horizontal - blend.horizontal) * k;
    blend.vertical += (targets.vertical - blend.vertical) * k;
  }
}
