//! Player domain: system modules for input, contacts, and the frame step.

pub(crate) mod contacts;
pub(crate) mod hooks;
pub(crate) mod input;
pub(crate) mod update;

pub use contacts::{ContactRoute, route_contact};
pub use hooks::PlayerHooks;
pub(crate) use contacts::dispatch_player_contacts;
pub(crate) use input::read_player_input;
pub(crate) use update::{
    face_player_sprite, handle_player_lifecycle, sync_player_tuning, update_player_controller,
};
