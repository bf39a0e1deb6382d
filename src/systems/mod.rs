mod animation;
mod integrate;
mod locomotion;
mod transform;

pub use animation::animation_system;
pub use integrate::frame_integrator_system;
pub use locomotion::{locomotion_frame_system, locomotion_input_system};
pub use transform::transform_propagation_system;
