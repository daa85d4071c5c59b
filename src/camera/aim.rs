use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::components::{AimState, RigKind, ViewRig};
use crate::config::ConfigLoaded;
use crate::input::{Aim, PlayerInput, action_held};
use crate::player::components::{LocalOwner, LookState, Player};

/// Aim is active while the aim action is held.
pub fn read_aim_input(
  mut players: Query<(&Actions<PlayerInput>, &mut AimState), (With<Player>, With<LocalOwner>)>,
  action_states: Query<&ActionState, With<Action<Aim>>>,
) {
  for (actions, mut aim) in &mut players {
    let held = action_held::<Aim>(actions, &action_states);
    if held != aim.active {
      aim.active = held;
    }
  }
}

/// Applies aim changes: flips the aim rig and pushes the matching look
/// sensitivity into the actor's own look state.
pub fn apply_aim_state(
  mut players: Query<
    (&AimState, &mut LookState),
    (With<Player>, With<LocalOwner>, Changed<AimState>),
  >,
  mut rigs: Query<&mut ViewRig>,
  config: Res<ConfigLoaded>,
) {
  for (aim, mut look) in &mut players {
    let sensitivity = if aim.active {
      config.look.aim_sensitivity
    } else {
      config.look.normal_sensitivity
    };
    look.set_sensitivity(sensitivity);

    for mut rig in &mut rigs {
      if rig.kind == RigKind::Aim {
        rig.enabled = aim.active;
      }
    }
  }
}
