//! Player domain: system modules for the per-tick update sequence.

pub(crate) mod camera;
pub(crate) mod crouch;
pub(crate) mod ground;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod state;

pub(crate) use camera::{apply_camera, handle_fov, handle_head_bob, handle_tilt, mouse_look};
pub(crate) use crouch::negotiate_crouch;
pub(crate) use ground::update_ground_sensor;
pub(crate) use input::read_input;
pub(crate) use movement::{apply_movement, halt_player};
pub(crate) use state::update_movement_state;
