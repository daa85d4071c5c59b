mod physics;
mod window;

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(physics::PhysicsPlugin)
      .add_systems(Startup, window::lock_cursor);
  }
}
