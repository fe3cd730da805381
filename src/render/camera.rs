//! The fixed scene camera.

use glam::{Mat4, Vec3};

use crate::render::blocks::ViewBlock;

/// A perspective camera looking at a fixed target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 2.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 30.0f32.to_radians(),
            near: 0.001,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection for a viewport with the given aspect ratio (width / height).
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, aspect, self.near, self.far)
    }

    /// The camera block contents for the given aspect ratio.
    pub fn block(&self, aspect: f32) -> ViewBlock {
        ViewBlock::new(self.view(), self.projection(aspect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::viewport::Viewport;
    use glam::UVec2;

    #[test]
    fn test_projection_aspect_matches_viewport() {
        let camera = Camera::default();
        for (w, h) in [(800u32, 600u32), (600, 800), (1, 1), (1920, 1080), (3000, 7)] {
            let aspect = w as f32 / h as f32;
            let projection = camera.projection(aspect);
            assert_eq!(
                projection.x_axis.x,
                projection.y_axis.y / aspect,
                "{w}x{h}: x scale is not the y scale over w/h"
            );
        }
    }

    #[test]
    fn test_resize_rewrites_camera_block_aspect() {
        let camera = Camera::default();
        let mut viewport = Viewport::new(800, 600);
        viewport.take_rebuild();
        let before = camera.block(viewport.aspect());

        viewport.resize(1024, 768);
        assert_eq!(viewport.take_rebuild(), Some(UVec2::new(1024, 768)));
        let block = camera.block(viewport.aspect());

        let projection = block.projection;
        assert_eq!(projection.x_axis.x, projection.y_axis.y / (1024.0 / 768.0));
        assert_eq!(block.view, before.view);
        assert_eq!(block.view_projection, projection * block.view);
    }

    #[test]
    fn test_view_looks_at_target() {
        let camera = Camera::default();
        let eye_in_view = camera.view().transform_point3(camera.eye);
        assert!(eye_in_view.abs_diff_eq(Vec3::ZERO, 1e-5));

        let target_in_view = camera.view().transform_point3(camera.target);
        assert!(target_in_view.x.abs() < 1e-5 && target_in_view.y.abs() < 1e-5);
        assert!(target_in_view.z < 0.0);
    }
}
