use bytemuck::{Pod, Zeroable};

/// Interleaved vertex: position then color, both tightly packed.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Which static mesh the demo draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MeshKind {
    #[default]
    Cube,
    Triangle,
}

impl MeshKind {
    pub fn build(self) -> MeshData {
        match self {
            MeshKind::Cube => cube_mesh(),
            MeshKind::Triangle => triangle_mesh(),
        }
    }
}

/// CPU-side mesh ready for buffer upload.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Unit cube with one color per corner, indexed as twelve triangles.
fn cube_mesh() -> MeshData {
    let p = 0.5_f32;
    #[rustfmt::skip]
    let vertices = vec![
        Vertex { position: [-p, -p, -p], color: [1.0, 0.0, 0.0] },
        Vertex { position: [ p, -p, -p], color: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p, -p], color: [0.0, 0.0, 1.0] },
        Vertex { position: [-p,  p, -p], color: [1.0, 1.0, 0.0] },
        Vertex { position: [-p, -p,  p], color: [1.0, 0.0, 1.0] },
        Vertex { position: [ p, -p,  p], color: [0.0, 1.0, 1.0] },
        Vertex { position: [ p,  p,  p], color: [1.0, 1.0, 1.0] },
        Vertex { position: [-p,  p,  p], color: [0.5, 0.5, 0.5] },
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 2,3,0, // -Z
        4,5,6, 6,7,4, // +Z
        0,4,7, 7,3,0, // -X
        1,5,6, 6,2,1, // +X
        0,1,5, 5,4,0, // -Y
        2,3,7, 7,6,2, // +Y
    ];
    MeshData { vertices, indices }
}

/// Single triangle in the Z=0 plane.
fn triangle_mesh() -> MeshData {
    #[rustfmt::skip]
    let vertices = vec![
        Vertex { position: [-0.5, -0.5, 0.0], color: [1.0, 0.0, 0.0] },
        Vertex { position: [ 0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0] },
        Vertex { position: [ 0.0,  0.5, 0.0], color: [0.0, 0.0, 1.0] },
    ];
    let indices: Vec<u16> = vec![0, 1, 2];
    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_eight_corners_and_twelve_triangles() {
        let mesh = MeshKind::Cube.build();
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices.len(), 36);
        assert_eq!(mesh.index_count(), 36);
    }

    #[test]
    fn triangle_is_three_vertices() {
        let mesh = MeshKind::Triangle.build();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn indices_stay_in_range() {
        for kind in [MeshKind::Cube, MeshKind::Triangle] {
            let mesh = kind.build();
            let limit = mesh.vertices.len() as u16;
            assert!(mesh.indices.iter().all(|&i| i < limit));
        }
    }

    #[test]
    fn cube_corners_sit_at_half_extent() {
        let mesh = MeshKind::Cube.build();
        for vertex in &mesh.vertices {
            for component in vertex.position {
                assert_eq!(component.abs(), 0.5);
            }
        }
    }

    #[test]
    fn default_mesh_is_the_cube() {
        assert_eq!(MeshKind::default(), MeshKind::Cube);
    }
}
