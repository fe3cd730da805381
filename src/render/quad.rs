//! The unit quad every surface is drawn with.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use glow::HasContext;

use crate::abs::{Mesh, Vertex};
use crate::error::Result;

/// Interleaved vertex: position @0, uv @1, normal @2, tangent @3.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: Vec3,
    pub uv: Vec2,
    pub normal: Vec3,
    pub tangent: Vec3,
}

impl Vertex for QuadVertex {
    fn vertex_attribs(gl: &glow::Context) {
        let stride = std::mem::size_of::<QuadVertex>() as i32;
        // (location, components, byte offset)
        let attribs = [(0, 3, 0), (1, 2, 12), (2, 3, 20), (3, 3, 32)];
        unsafe {
            for (location, size, offset) in attribs {
                gl.vertex_attrib_pointer_f32(location, size, glow::FLOAT, false, stride, offset);
                gl.enable_vertex_attrib_array(location);
            }
        }
    }
}

/// A 1x1 quad centered at the origin in the XY plane, facing +Z.
pub fn vertices() -> [QuadVertex; 4] {
    let corner = |x: f32, y: f32, u: f32, v: f32| QuadVertex {
        position: Vec3::new(x, y, 0.0),
        uv: Vec2::new(u, v),
        normal: Vec3::Z,
        tangent: Vec3::X,
    };
    [
        corner(-0.5, 0.5, 0.0, 1.0),
        corner(0.5, 0.5, 1.0, 1.0),
        corner(0.5, -0.5, 1.0, 0.0),
        corner(-0.5, -0.5, 0.0, 0.0),
    ]
}

/// Two counter-clockwise triangles.
pub const INDICES: [u32; 6] = [0, 3, 2, 0, 2, 1];

/// Uploads the quad.
pub fn mesh(gl: &Arc<glow::Context>) -> Result<Mesh> {
    Mesh::new(gl, &vertices(), &INDICES, glow::TRIANGLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<QuadVertex>(), 44);
        assert_eq!(std::mem::offset_of!(QuadVertex, uv), 12);
        assert_eq!(std::mem::offset_of!(QuadVertex, normal), 20);
        assert_eq!(std::mem::offset_of!(QuadVertex, tangent), 32);
    }

    #[test]
    fn test_triangles_face_positive_z() {
        let v = vertices();
        for tri in INDICES.chunks(3) {
            let (a, b, c) = (
                v[tri[0] as usize].position,
                v[tri[1] as usize].position,
                v[tri[2] as usize].position,
            );
            let n = (b - a).cross(c - a).normalize();
            assert!(n.abs_diff_eq(Vec3::Z, 1e-6));
        }
    }

    #[test]
    fn test_quad_is_unit_and_centered() {
        let v = vertices();
        let sum: Vec3 = v.iter().map(|v| v.position).sum();
        assert!(sum.abs_diff_eq(Vec3::ZERO, 1e-6));
        for vertex in v {
            assert_eq!(vertex.position.x.abs(), 0.5);
            assert_eq!(vertex.position.y.abs(), 0.5);
            assert!(vertex.normal.dot(vertex.tangent).abs() < 1e-6);
        }
        assert!(INDICES.iter().all(|&i| (i as usize) < v.len()));
    }
}
