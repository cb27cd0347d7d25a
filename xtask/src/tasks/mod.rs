pub mod dist;
pub mod tooling;
