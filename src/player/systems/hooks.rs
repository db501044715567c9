//! Player domain: message-backed world hooks.

use bevy::ecs::message::MessageWriter;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::player::{
    DestroyRequested, EffectRequest, EffectRequested, SignpostToggled, WorldHooks,
};

/// Turns controller callbacks into messages the level consumes later in the
/// frame.
#[derive(SystemParam)]
pub struct PlayerHooks<'w> {
    effects: MessageWriter<'w, EffectRequested>,
    destroys: MessageWriter<'w, DestroyRequested>,
    signposts: MessageWriter<'w, SignpostToggled>,
}

impl WorldHooks for PlayerHooks<'_> {
    fn add_effect(&mut self, effect: EffectRequest) {
        self.effects.write(EffectRequested { effect });
    }

    fn add_destroy_box(&mut self, target: Entity) {
        self.destroys.write(DestroyRequested { target });
    }

    fn set_message_visible(&mut self, signpost: Entity, visible: bool) {
        self.signposts.write(SignpostToggled { signpost, visible });
    }
}
