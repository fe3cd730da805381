//! The two scene programs.
//!
//! Both programs share one vertex stage. Either may be missing if it failed to compile or
//! link; the failure is logged and draws using it are skipped.

use std::sync::Arc;

use crate::abs::{Shader, ShaderProgram};
use crate::error::Result;
use crate::render::scene::ProgramKind;

const QUAD_VERT: &str = include_str!("../shaders/quad/vert.glsl");
const MONO_FRAG: &str = include_str!("../shaders/mono/frag.glsl");
const TEXTURED_FRAG: &str = include_str!("../shaders/textured/frag.glsl");

pub struct ProgramSet {
    mono: Option<ShaderProgram>,
    textured: Option<ShaderProgram>,
}

fn report<T>(what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{}: {}", what, e);
            None
        }
    }
}

impl ProgramSet {
    /// Compiles and links both programs, logging any failure.
    pub fn new(gl: &Arc<glow::Context>) -> Self {
        let vert = report(
            "quad vertex stage",
            Shader::new(gl, glow::VERTEX_SHADER, QUAD_VERT),
        );
        let mono_frag = report(
            "mono-color fragment stage",
            Shader::new(gl, glow::FRAGMENT_SHADER, MONO_FRAG),
        );
        let textured_frag = report(
            "textured fragment stage",
            Shader::new(gl, glow::FRAGMENT_SHADER, TEXTURED_FRAG),
        );

        let link = |name: &'static str, frag: &Option<Shader>| {
            let (vert, frag) = (vert.as_ref()?, frag.as_ref()?);
            report(name, ShaderProgram::new(gl, name, &[vert, frag]))
        };
        let set = Self {
            mono: link("mono-color", &mono_frag),
            textured: link("textured", &textured_frag),
        };
        if set.is_complete() {
            log::debug!("scene programs linked");
        } else {
            log::warn!("scene programs incomplete; draws using a missing program are skipped");
        }

        // Shaders are dropped on return; linked programs keep their binaries.
        set
    }

    pub fn get(&self, kind: ProgramKind) -> Option<&ShaderProgram> {
        match kind {
            ProgramKind::MonoColor => self.mono.as_ref(),
            ProgramKind::Textured => self.textured.as_ref(),
        }
    }

    fn is_complete(&self) -> bool {
        self.mono.is_some() && self.textured.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_programs_are_reported_absent() {
        let set = ProgramSet {
            mono: None,
            textured: None,
        };
        assert!(!set.is_complete());
        assert!(set.get(ProgramKind::MonoColor).is_none());
        assert!(set.get(ProgramKind::Textured).is_none());
    }
}
