//! Per-draw shading switches passed to the fragment stage.

bitflags::bitflags! {
    /// Written to the `settings` uniform as an `int`. Bit values must match the `#define`s in
    /// the fragment shaders.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RenderFlags: u32 {
        const LIGHTING = 1 << 0;
        const BUMP = 1 << 1;
    }
}

impl RenderFlags {
    pub fn lighting_enabled(self) -> bool {
        self.contains(RenderFlags::LIGHTING)
    }

    pub fn bump_enabled(self) -> bool {
        self.contains(RenderFlags::BUMP)
    }

    /// The value uploaded to the shader.
    pub fn as_uniform(self) -> i32 {
        self.bits() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(!RenderFlags::empty().lighting_enabled());
        assert!(!RenderFlags::empty().bump_enabled());

        let lit = RenderFlags::LIGHTING;
        assert!(lit.lighting_enabled());
        assert!(!lit.bump_enabled());

        let both = RenderFlags::LIGHTING | RenderFlags::BUMP;
        assert!(both.lighting_enabled());
        assert!(both.bump_enabled());
    }

    #[test]
    fn test_uniform_values() {
        assert_eq!(RenderFlags::empty().as_uniform(), 0);
        assert_eq!(RenderFlags::LIGHTING.as_uniform(), 1);
        assert_eq!(RenderFlags::BUMP.as_uniform(), 2);
        assert_eq!((RenderFlags::LIGHTING | RenderFlags::BUMP).as_uniform(), 3);
    }
}
