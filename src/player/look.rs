use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::components::{LocalOwner, LookState, Player};
use crate::input::{Look, PlayerInput};

/// Accumulates the look delta into yaw/pitch, scaled by delta time and the
/// current sensitivity.
pub fn integrate_look(
  mut players: Query<(&Actions<PlayerInput>, &mut LookState), (With<Player>, With<LocalOwner>)>,
  look_actions: Query<(&Action<Look>, &ActionState)>,
  time: Res<Time>,
) {
  for (actions, mut look) in &mut players {
    for action_entity in actions.iter() {
      let Ok((action, action_state)) = look_actions.get(action_entity) else {
        continue;
      };
      if matches!(action_state, ActionState::Fired | ActionState::Ongoing) {
        look.integrate(**action, time.delta_secs());
      }
    }
  }
}
