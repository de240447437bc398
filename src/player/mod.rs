pub mod camera;
pub mod controller;
pub mod input;
pub mod physics;

pub use camera::Camera;
pub use controller::PlayerController;
pub use input::{MoveDirection, PlayerInput};
pub use physics::{Body, Grounding, PhysicsHandler};
