pub mod errors;
pub mod obj;
pub mod stl;

pub use errors::ExportError;
pub use obj::to_obj;
pub use stl::{to_ascii_stl, to_binary_stl};

/// Solid name written into STL files.
pub const SOLID_NAME: &str = "pottery_rib";
pub const STL_FILE_NAME: &str = "pottery_rib.stl";
pub const OBJ_FILE_NAME: &str = "pottery_rib.obj";

use rib_tessellation::RibMesh;

/// Reject meshes a serializer cannot write.
pub(crate) fn check_mesh(mesh: &RibMesh) -> Result<(), ExportError> {
    if mesh.triangle_count() == 0 {
        return Err(ExportError::EmptyMesh);
    }
    let vertex_count = mesh.vertex_count();
    if let Some(&index) = mesh.indices.iter().find(|&&idx| idx as usize >= vertex_count) {
        return Err(ExportError::IndexOutOfRange { index, vertex_count });
    }
    Ok(())
}
