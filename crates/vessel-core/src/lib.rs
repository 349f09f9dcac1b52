pub mod color;
pub mod constants;
pub mod deform;
pub mod field;
pub mod input;
pub mod mesh;
pub mod persist;
pub mod scheduler;
pub mod state;

pub use color::*;
pub use constants::*;
pub use deform::*;
pub use field::*;
pub use mesh::*;
pub use persist::*;
pub use scheduler::*;
pub use state::*;
