use bevy::prelude::*;

use super::components::{LocalOwner, Locomotion, Player, SprintMonitor, Stance};

/// Continuous sprint guard, ticked once per FixedUpdate while the monitor
/// is live: sprint ends the instant a disqualifying condition appears, even
/// though it was entered validly. Removes itself once sprint is off.
pub fn tick_sprint_monitor(
  mut commands: Commands,
  mut players: Query<
    (Entity, &mut Locomotion),
    (With<Player>, With<LocalOwner>, With<SprintMonitor>),
  >,
) {
  for (entity, mut locomotion) in &mut players {
    if locomotion.move_input.y < 1.0 {
      locomotion.sprinting = false;
    }
    if locomotion.move_input.x != 0.0 {
      locomotion.sprinting = false;
    }
    if locomotion.stance != Stance::Standing {
      locomotion.sprinting = false;
    }

    if !locomotion.sprinting {
      commands.entity(entity).remove::<SprintMonitor>();
    }
  }
}
