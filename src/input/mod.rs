pub mod actions;
mod bindings;

pub use actions::{
  Aim, LeanLeft, LeanRight, Look, Move, PlayerInput, Sprint, StanceHold, StanceTap, Walk,
};
use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;
pub use bindings::player_input_actions;

pub struct InputPlugin;

impl Plugin for InputPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(EnhancedInputPlugin)
      .add_input_context::<PlayerInput>();
  }
}

/// True while `A`'s conditions hold on one of the context's action entities
/// (just fired or still ongoing).
pub fn action_held<A: InputAction>(
  actions: &Actions<PlayerInput>,
  states: &Query<&ActionState, With<Action<A>>>,
) -> bool {
  actions.iter().any(|action_entity| {
    states
      .get(action_entity)
      .is_ok_and(|state| matches!(state, ActionState::Fired | ActionState::Ongoing))
  })
}

/// True only on ticks where `A` reports `Fired`. Gesture conditions sit in
/// `Ongoing` from the first press (a tap waiting for release, a hold waiting
/// for its threshold), so held-state polling would trigger them early.
pub fn action_fired<A: InputAction>(
  actions: &Actions<PlayerInput>,
  states: &Query<&ActionState, With<Action<A>>>,
) -> bool {
  actions.iter().any(|action_entity| {
    states
      .get(action_entity)
      .is_ok_and(|state| matches!(state, ActionState::Fired))
  })
}
