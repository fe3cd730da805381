//! CPU mirrors of the `std140` uniform blocks shared by both programs.

use glam::{Mat4, Vec3, Vec4};

/// Binding point of the camera block (`ViewMatrix` in GLSL).
pub const VIEW_BLOCK_SLOT: u32 = 0;
/// Binding point of the light block (`Light` in GLSL).
pub const LIGHT_BLOCK_SLOT: u32 = 1;

/// Camera matrices.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewBlock {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
}

impl ViewBlock {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view,
            projection,
            view_projection: projection * view,
        }
    }
}

/// A single light.
///
/// `position.w` selects the light kind: `1.0` is a point light at `position.xyz`, `0.0` a
/// directional light shining along `position.xyz`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightBlock {
    pub position: Vec4,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
}

impl LightBlock {
    /// A white point light at `position`.
    pub fn point(position: Vec3) -> Self {
        Self {
            position: position.extend(1.0),
            ambient: Vec4::ONE,
            diffuse: Vec4::ONE,
            specular: Vec4::ONE,
        }
    }

    /// A white directional light shining along `direction`.
    pub fn directional(direction: Vec3) -> Self {
        Self {
            position: direction.extend(0.0),
            ..Self::point(Vec3::ZERO)
        }
    }

    pub fn is_point(&self) -> bool {
        self.position.w == 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std140_sizes() {
        assert_eq!(std::mem::size_of::<ViewBlock>(), 3 * 64);
        assert_eq!(std::mem::size_of::<LightBlock>(), 4 * 16);
        assert_eq!(crate::abs::UniformBuffer::<ViewBlock>::size(), 192);
    }

    #[test]
    fn test_view_projection_order() {
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
        let projection = Mat4::perspective_rh_gl(1.0, 1.5, 0.1, 100.0);
        let block = ViewBlock::new(view, projection);
        assert_eq!(block.view_projection, projection * view);
    }

    #[test]
    fn test_light_kind() {
        assert!(LightBlock::point(Vec3::new(0.0, 0.0, 5.0)).is_point());
        assert!(!LightBlock::directional(Vec3::NEG_Y).is_point());
    }
}
