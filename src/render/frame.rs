//! Per-frame draw planning.
//!
//! A [`FramePlan`] is the ordered list of draws one frame issues, with every uniform value
//! already computed. Building it needs no GL context; the renderer executes it.

use glam::{Mat3, Mat4, Vec3, Vec4};

use crate::render::{
    flags::RenderFlags,
    scene::{ProgramKind, Surface},
};

/// Which textures a draw binds, by unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureBinding {
    None,
    /// Diffuse map on unit 0, normal map on unit 1.
    DiffuseAndNormal,
}

/// Everything written to the fixed uniform locations for one draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub surface: &'static str,
    pub program: ProgramKind,
    pub model: Mat4,
    /// Flat color at location 1. `None` for textured draws, whose program never reads it.
    pub color: Option<Vec4>,
    pub flags: RenderFlags,
    pub ka: Vec3,
    pub kd: Vec3,
    pub ks: Vec3,
    pub shininess: f32,
    pub normal_matrix: Mat3,
    pub textures: TextureBinding,
}

/// Transpose of the inverse of the upper 3x3 of `view * model`.
pub fn normal_matrix(view: &Mat4, model: &Mat4) -> Mat3 {
    Mat3::from_mat4(*view * *model).inverse().transpose()
}

impl DrawCall {
    pub fn for_surface(surface: &Surface, view: &Mat4) -> Self {
        let (color, textures) = match surface.program {
            ProgramKind::MonoColor => (Some(surface.color), TextureBinding::None),
            ProgramKind::Textured => (None, TextureBinding::DiffuseAndNormal),
        };
        Self {
            surface: surface.name,
            program: surface.program,
            model: surface.model,
            color,
            flags: surface.flags,
            ka: surface.material.ka,
            kd: surface.material.kd,
            ks: surface.material.ks,
            shininess: surface.material.shininess,
            normal_matrix: normal_matrix(view, &surface.model),
            textures,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramePlan {
    pub draws: Vec<DrawCall>,
}

impl FramePlan {
    /// Plans the draws for `surfaces`, in the given order.
    pub fn build(surfaces: &[Surface], view: &Mat4) -> Self {
        Self {
            draws: surfaces
                .iter()
                .map(|surface| DrawCall::for_surface(surface, view))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Number of times the bound program changes while executing the plan.
    pub fn program_switches(&self) -> usize {
        self.draws
            .windows(2)
            .filter(|pair| pair[0].program != pair[1].program)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{camera::Camera, scene, viewport::Viewport};

    #[test]
    fn test_normal_matrix_of_rigid_transform_is_rotation() {
        let view = Camera::default().view();
        let models = [
            Mat4::IDENTITY,
            Mat4::from_rotation_y(1.1),
            Mat4::from_translation(Vec3::new(3.0, -2.0, 0.5)) * Mat4::from_rotation_x(-0.7),
            Mat4::from_rotation_z(2.5) * Mat4::from_rotation_y(0.3),
        ];
        for model in models {
            let expected = Mat3::from_mat4(view * model);
            assert!(normal_matrix(&view, &model).abs_diff_eq(expected, 1e-5));
        }
    }

    #[test]
    fn test_normal_matrix_keeps_normals_perpendicular_under_scale() {
        let view = Mat4::IDENTITY;
        let model = Mat4::from_scale(Vec3::new(3.0, 1.0, 1.0)) * Mat4::from_rotation_z(0.5);
        let tangent = model.transform_vector3(Vec3::X);
        let normal = normal_matrix(&view, &model) * Vec3::Y;
        assert!(tangent.dot(normal).abs() < 1e-5);
    }

    #[test]
    fn test_default_viewport_plans_five_draws() {
        let viewport = Viewport::new(800, 600);
        let block = Camera::default().block(viewport.aspect());
        let plan = FramePlan::build(&scene::surfaces(), &block.view);

        assert_eq!(plan.len(), 5);
        let programs: Vec<_> = plan.draws.iter().map(|d| d.program).collect();
        assert_eq!(
            programs,
            [
                ProgramKind::MonoColor,
                ProgramKind::MonoColor,
                ProgramKind::MonoColor,
                ProgramKind::MonoColor,
                ProgramKind::Textured,
            ]
        );
        assert_eq!(plan.program_switches(), 1);
    }

    #[test]
    fn test_only_floor_binds_textures() {
        let plan = FramePlan::build(&scene::surfaces(), &Camera::default().view());
        for draw in &plan.draws[..4] {
            assert_eq!(draw.textures, TextureBinding::None);
            assert!(draw.flags.lighting_enabled());
            assert!(!draw.flags.bump_enabled());
        }
        let floor = &plan.draws[4];
        assert_eq!(floor.surface, "floor");
        assert_eq!(floor.textures, TextureBinding::DiffuseAndNormal);
        assert!(floor.flags.lighting_enabled() && floor.flags.bump_enabled());
    }

    #[test]
    fn test_color_written_only_for_mono_draws() {
        let surfaces = scene::surfaces();
        let plan = FramePlan::build(&surfaces, &Camera::default().view());
        for (draw, surface) in plan.draws.iter().zip(&surfaces) {
            match draw.program {
                ProgramKind::MonoColor => assert_eq!(draw.color, Some(surface.color)),
                ProgramKind::Textured => assert_eq!(draw.color, None),
            }
        }
        assert_eq!(plan.draws[4].color, None);
    }
}
