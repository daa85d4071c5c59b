mod plugin;

use bevy::{asset::Asset, prelude::*, reflect::TypePath};
pub use plugin::ConfigPlugin;
use serde::Deserialize;

#[derive(Asset, TypePath, Deserialize, Debug, Clone)]
pub struct GameConfig {
  pub window: WindowConfig,
  pub ground: GroundConfig,
  pub player: PlayerConfig,
  pub look: LookConfig,
  pub camera: CameraConfig,
  pub animation: AnimationConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
  pub width: u32,
  pub height: u32,
  pub title: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GroundConfig {
  pub size: f32,
  pub color: [f32; 3],
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayerConfig {
  pub spawn_x: f32,
  pub spawn_y: f32,
  pub spawn_z: f32,
  pub collider_radius: f32,
  pub collider_height: f32,
  pub body_color: [f32; 3],
  pub crawl_speed: f32,
  pub crouch_speed: f32,
  pub walk_speed: f32,
  pub run_speed: f32,
  pub sprint_speed: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LookConfig {
  pub normal_sensitivity: f32,
  pub aim_sensitivity: f32,
  pub min_pitch: f32,
  pub max_pitch: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CameraConfig {
  pub eye_height: f32,
  pub follow_distance: f32,
  pub aim_distance: f32,
  pub rig_height: f32,
  pub shoulder_offset: f32,
  pub lean_duration: f32,
  pub fov_degrees: f32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AnimationConfig {
  /// Time constant for smoothing the presentation blend values.
  pub smoothing: f32,
}

#[derive(Resource)]
pub struct ConfigHandle(pub Handle<GameConfig>);

#[derive(Resource, Debug, Clone)]
pub struct ConfigLoaded {
  pub window: WindowConfig,
  pub ground: GroundConfig,
  pub player: PlayerConfig,
  pub look: LookConfig,
  pub camera: CameraConfig,
  pub animation: AnimationConfig,
}

impl From<GameConfig> for ConfigLoaded {
  fn from(config: GameConfig) -> Self {
    Self {
      window: config.window,
      ground: config.ground,
      player: config.player,
      look: config.look,
      camera: config.camera,
      animation: config.animation,
    }
  }
}
