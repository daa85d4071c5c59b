pub mod aim;
pub mod components;
pub mod lean;
pub mod rig;

use bevy::prelude::*;
pub use components::{ActiveViewRig, AimState, GameCamera, LeanBlend, LeanState, RigKind, ViewRig};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
  fn build(&self, app: &mut App) {
    app
      .init_resource::<ActiveViewRig>()
      .add_systems(Startup, rig::setup_camera)
      .add_systems(
        Update,
        (
          (aim::read_aim_input, aim::apply_aim_state).chain(),
          lean::read_lean_input,
        ),
      )
      .add_systems(FixedUpdate, lean::tick_lean_blend)
      .add_systems(
        PostUpdate,
        (rig::place_view_rigs, rig::select_active_rig, rig::sync_camera_to_rig).chain(),
      );
  }
}
