use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::components::{LeanBlend, LeanState};
use crate::config::ConfigLoaded;
use crate::input::{LeanLeft, LeanRight, PlayerInput, action_held};
use crate::player::components::{LocalOwner, Player};

/// Resolves the two lean keys to a [0, 1] axis target (0.5 centered) and
/// starts a blend whenever the target changes. A new request replaces any
/// running blend, restarting from the current value.
pub fn read_lean_input(
  mut commands: Commands,
  players: Query<
    (Entity, &Actions<PlayerInput>, &LeanState, Option<&LeanBlend>),
    (With<Player>, With<LocalOwner>),
  >,
  left_states: Query<&ActionState, With<Action<LeanLeft>>>,
  right_states: Query<&ActionState, With<Action<LeanRight>>>,
  config: Res<ConfigLoaded>,
) {
  for (entity, actions, lean, blend) in &players {
    let left = action_held::<LeanLeft>(actions, &left_states);
    let right = action_held::<LeanRight>(actions, &right_states);
    let target = if right {
      1.0
    } else if left {
      0.0
    } else {
      0.5
    };

    let pending = blend.map_or(lean.current, |b| b.target);
    if (target - pending).abs() > f32::EPSILON {
      commands
        .entity(entity)
        .insert(LeanBlend::new(lean.current, target, config.camera.lean_duration));
    }
  }
}

/// Advances the blend one tick; at completion the lean snaps exactly to the
/// target and the task removes itself.
pub fn tick_lean_blend(
  mut commands: Commands,
  mut players: Query<
    (Entity, &mut LeanState, &mut LeanBlend),
    (With<Player>, With<LocalOwner>),
  >,
  time: Res<Time>,
) {
  for (entity, mut lean, mut blend) in &mut players {
    lean.current = blend.advance(time.delta_secs());
    if blend.finished() {
      commands.entity(entity).remove::<LeanBlend>();
    }
  }
}
