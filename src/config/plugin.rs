use bevy::{asset::AssetEvent, ecs::message::MessageReader, prelude::*, window::PrimaryWindow};
use bevy_common_assets::toml::TomlAssetPlugin;

use super::{ConfigHandle, ConfigLoaded, GameConfig};
use crate::camera::AimState;
use crate::player::components::{LocalOwner, LookState, MovementConfig};

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(TomlAssetPlugin::<GameConfig>::new(&["config.toml"]))
      .add_systems(PreStartup, load_config_sync)
      .add_systems(
        Update,
        (
          watch_config_changes,
          update_window_on_config_change,
          update_player_on_config_change,
        ),
      );
  }
}

fn load_config_sync(mut commands: Commands, asset_server: Res<AssetServer>) {
  // Asset handle keeps hot-reload working; the synchronous read below makes
  // the config available to Startup systems on the very first frame.
  let handle: Handle<GameConfig> = asset_server.load("config/game.config.toml");
  commands.insert_resource(ConfigHandle(handle));

  let config_str =
    std::fs::read_to_string("assets/config/game.config.toml").expect("Failed to read config file");
  let config: GameConfig = toml::from_str(&config_str).expect("Failed to parse config file");

  commands.insert_resource(ConfigLoaded::from(config));
}

fn watch_config_changes(
  mut commands: Commands,
  config_handle: Res<ConfigHandle>,
  mut messages: MessageReader<AssetEvent<GameConfig>>,
  configs: Res<Assets<GameConfig>>,
) {
  for event in messages.read() {
    if let AssetEvent::Modified { id } = event {
      if config_handle.0.id() == *id {
        if let Some(config) = configs.get(&config_handle.0) {
          info!("Config reloaded!");
          commands.insert_resource(ConfigLoaded::from(config.clone()));
        }
      }
    }
  }
}

fn update_window_on_config_change(
  config: Res<ConfigLoaded>,
  mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
  if config.is_changed() {
    if let Ok(mut window) = windows.single_mut() {
      window
        .resolution
        .set(config.window.width as f32, config.window.height as f32);
      window.title.clone_from(&config.window.title);
    }
  }
}

fn update_player_on_config_change(
  config: Res<ConfigLoaded>,
  mut players: Query<(&AimState, &mut MovementConfig, &mut LookState), With<LocalOwner>>,
) {
  if config.is_changed() {
    for (aim, mut movement, mut look) in &mut players {
      let player = &config.player;
      movement.crawl_speed = player.crawl_speed;
      movement.crouch_speed = player.crouch_speed;
      movement.walk_speed = player.walk_speed;
      movement.run_speed = player.run_speed;
      movement.sprint_speed = player.sprint_speed;

      look.min_pitch = config.look.min_pitch;
      look.max_pitch = config.look.max_pitch;
      // Re-resolve sensitivity against the live aim state so a reload while
      // aiming keeps the aim value.
      look.set_sensitivity(if aim.active {
        config.look.aim_sensitivity
      } else {
        config.look.normal_sensitivity
      });
    }
  }
}
