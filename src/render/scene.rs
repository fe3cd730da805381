//! The fixed scene: four walls and a textured floor, all drawn with the same quad.

use glam::{Mat4, Vec3, Vec4};

use crate::render::flags::RenderFlags;

pub const SHININESS: f32 = 120.0;

/// Which program a surface is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    /// Blinn-Phong over a flat color.
    MonoColor,
    /// Diffuse texture with optional normal mapping.
    Textured,
}

/// Blinn-Phong reflectance coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ka: Vec3,
    pub kd: Vec3,
    pub ks: Vec3,
    pub shininess: f32,
}

impl Material {
    pub const fn uniform(ka: f32, kd: f32, ks: f32) -> Self {
        Self {
            ka: Vec3::splat(ka),
            kd: Vec3::splat(kd),
            ks: Vec3::splat(ks),
            shininess: SHININESS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub name: &'static str,
    pub model: Mat4,
    pub color: Vec4,
    pub material: Material,
    pub program: ProgramKind,
    pub flags: RenderFlags,
}

fn wall(
    name: &'static str,
    offset: Vec3,
    yaw_degrees: f32,
    color: Vec4,
    material: Material,
) -> Surface {
    Surface {
        name,
        model: Mat4::from_translation(offset) * Mat4::from_rotation_y(yaw_degrees.to_radians()),
        color,
        material,
        program: ProgramKind::MonoColor,
        flags: RenderFlags::LIGHTING,
    }
}

/// The walls, in draw order: front, right, left, back.
pub fn walls() -> [Surface; 4] {
    let plain = Material::uniform(1.0, 1.0, 1.0);
    [
        wall(
            "front",
            Vec3::new(0.0, 0.5, 0.5),
            0.0,
            Vec4::new(0.5, 0.5, 0.1, 1.0),
            Material::uniform(0.8, 0.8, 1.0),
        ),
        wall("right", Vec3::new(0.5, 0.5, 0.0), 90.0, Vec4::new(0.0, 0.0, 1.0, 1.0), plain),
        wall("left", Vec3::new(-0.5, 0.5, 0.0), -90.0, Vec4::new(1.0, 0.0, 0.0, 1.0), plain),
        wall("back", Vec3::new(0.0, 0.5, -0.5), 180.0, Vec4::new(0.0, 1.0, 0.0, 1.0), plain),
    ]
}

/// The grass floor: the quad laid flat and stretched to 3x3.
pub fn floor() -> Surface {
    Surface {
        name: "floor",
        model: Mat4::from_rotation_x((-90.0f32).to_radians())
            * Mat4::from_scale(Vec3::new(3.0, 3.0, 1.0)),
        color: Vec4::ONE,
        material: Material::uniform(0.4, 0.0, 1.0),
        program: ProgramKind::Textured,
        flags: RenderFlags::LIGHTING | RenderFlags::BUMP,
    }
}

/// Every surface in draw order.
pub fn surfaces() -> Vec<Surface> {
    let mut all = walls().to_vec();
    all.push(floor());
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walls_face_outward() {
        // Each wall's normal points away from the room's vertical axis.
        for wall in walls() {
            let center = wall.model.transform_point3(Vec3::ZERO);
            let normal = wall.model.transform_vector3(Vec3::Z);
            let outward = Vec3::new(center.x, 0.0, center.z).normalize();
            assert!(normal.abs_diff_eq(outward, 1e-5), "{}", wall.name);
            assert!((center.y - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_floor_lies_flat_facing_up() {
        let floor = floor();
        let normal = floor.model.transform_vector3(Vec3::Z).normalize();
        assert!(normal.abs_diff_eq(Vec3::Y, 1e-5));
        let corner = floor.model.transform_point3(Vec3::new(0.5, 0.5, 0.0));
        assert!((corner.x.abs() - 1.5).abs() < 1e-5);
        assert!((corner.z.abs() - 1.5).abs() < 1e-5);
        assert!(corner.y.abs() < 1e-5);
    }

    #[test]
    fn test_draw_order_and_programs() {
        let names: Vec<_> = surfaces().iter().map(|s| s.name).collect();
        assert_eq!(names, ["front", "right", "left", "back", "floor"]);
        assert!(walls().iter().all(|s| s.program == ProgramKind::MonoColor));
        assert!(walls().iter().all(|s| s.flags == RenderFlags::LIGHTING));
        assert_eq!(floor().program, ProgramKind::Textured);
        assert!(floor().flags.bump_enabled());
    }
}
