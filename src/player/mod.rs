pub mod animation;
pub mod components;
pub mod locomotion;
pub mod look;
mod spawn;
pub mod sprint;


use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_systems(Startup, spawn::spawn_player)
      // Update: sample input and run the edge-triggered handlers so
      // FixedUpdate consumes the last sampled state.
      .add_systems(
        Update,
        (
          locomotion::sample_move_input,
          locomotion::handle_walk_toggle,
          locomotion::handle_sprint_toggle,
          locomotion::handle_stance_gesture,
          look::integrate_look,
        )
          .chain(),
      )
      // FixedUpdate: the monitor runs before movement so a disqualified
      // sprint never moves the actor at sprint speed.
      .add_systems(
        FixedUpdate,
        (sprint::tick_sprint_monitor, locomotion::apply_movement)
          .chain()
          .before(PhysicsSet::SyncBackend),
      )
      .add_systems(Update, animation::smooth_anim_blend);
  }
}
