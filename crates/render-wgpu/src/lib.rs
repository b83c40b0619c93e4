//! wgpu render backend for the free-fly camera demo.
//!
//! Draws one static mesh (colored cube or triangle) each frame, with the view
//! matrix rebuilt from the camera's position, front, and up vectors.
//!
//! # Invariants
//! - The renderer never mutates camera state.
//! - Mesh, shading, and pipeline are fixed at construction; only the
//!   uniform buffer changes per frame.
//! - The depth attachment always matches the surface size via `resize`.

mod gpu;
mod mesh;
mod shaders;
mod view;

pub use gpu::{MeshRenderer, RenderSettings, Shading};
pub use mesh::{MeshData, MeshKind, Vertex};
pub use view::{view_matrix, view_projection, Projection};
