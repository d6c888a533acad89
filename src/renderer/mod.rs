//! Rendering module
//!
//! The painter talks to an abstract `Canvas`; hosts plug in a concrete
//! surface (browser 2D context, or the tessellating `MeshCanvas` producing raw
//! triangle lists).

pub mod canvas;
pub mod mesh;
pub mod vertex;
pub mod wheel;

pub use canvas::{Canvas, Paint};
pub use mesh::MeshCanvas;
pub use vertex::{Vertex, vertex_bytes};
pub use wheel::{Decor, draw_wheel, render_frame};
