//! # Primitives
//!
//! Mesh generators for the parametric shapes (plane, cube, wall, room,
//! shelf, plate, sphere, circle). Each generator validates its parameters
//! before computing any geometry and returns a raw, unwelded mesh.

pub mod circle;
pub mod cube;
pub mod plane;
pub mod plate;
pub mod room;
pub mod shelf;
pub mod sphere;
pub mod wall;

pub use circle::create_circle;
pub use cube::create_cube;
pub use plane::create_plane;
pub use plate::create_plate;
pub use room::{chain_end, create_room};
pub use shelf::create_shelf;
pub use sphere::create_sphere;
pub use wall::create_wall;
