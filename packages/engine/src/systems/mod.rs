pub mod collision;
pub mod integrator;
pub mod registry;
pub mod rigid_body;
