//! UI components: the particle background and the app screens.

pub mod particle_field;
pub mod screens;
