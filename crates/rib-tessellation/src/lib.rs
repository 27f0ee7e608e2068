pub mod generate;
pub mod grid;
pub mod legacy;
pub mod mesh;

pub use generate::{generate_rib, RibField};
pub use grid::{build_grid_mesh, GridPoint, GridVertex, MeshResolution, SurfaceField, VertexGrid};
pub use legacy::{generate_legacy, generate_legacy_with_rng, LegacyTexture};
pub use mesh::RibMesh;
