use bevy::{
  prelude::*,
  window::{CursorGrabMode, CursorOptions, PrimaryWindow},
};

/// Captures and hides the pointer for mouse look.
pub fn lock_cursor(mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>) {
  let Ok(mut cursor) = cursors.single_mut() else {
    return;
  };
  cursor.grab_mode = CursorGrabMode::Locked;
  cursor.visible = false;
}
