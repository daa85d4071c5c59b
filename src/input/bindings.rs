use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::actions::{
  Aim, LeanLeft, LeanRight, Look, Move, PlayerInput, Sprint, StanceHold, StanceTap, Walk,
};

pub fn player_input_actions() -> impl Bundle {
  actions!(PlayerInput[
      (
          Action::<Move>::new(),
          Bindings::spawn(Cardinal::wasd_keys()),
      ),
      (
          Action::<Look>::new(),
          bindings![Binding::mouse_motion()],
      ),
      (
          Action::<Walk>::new(),
          bindings![KeyCode::KeyX],
      ),
      (
          Action::<Sprint>::new(),
          bindings![KeyCode::ShiftLeft],
      ),
      // One physical key, two gestures: a tap toggles crouch, a hold
      // toggles prone.
      (
          Action::<StanceTap>::new(),
          Tap::new(0.2),
          bindings![KeyCode::KeyC],
      ),
      (
          Action::<StanceHold>::new(),
          Hold::new(0.4),
          bindings![KeyCode::KeyC],
      ),
      (
          Action::<Aim>::new(),
          bindings![MouseButton::Right],
      ),
      (
          Action::<LeanLeft>::new(),
          bindings![KeyCode::KeyQ],
      ),
      (
          Action::<LeanRight>::new(),
          bindings![KeyCode::KeyE],
      ),
  ])
}
