use glow::HasContext;

use super::Uniforms;
use crate::error::{Error, Result};

const VERTEX_SHADER: &str = include_str!("../data/triangle.vert");
const FRAGMENT_SHADER: &str = include_str!("../data/triangle.frag");

const OFFSET_Y_UNIFORM: &str = "uOffsetY";
const ALPHA_UNIFORM: &str = "uAlpha";

pub struct Pipeline {
    program: glow::Program,
    offset_y: Option<glow::UniformLocation>,
    alpha: Option<glow::UniformLocation>,
}

impl Pipeline {
    pub unsafe fn new(gl: &glow::Context) -> Result<Self> {
        let vs = compile_shader(gl, glow::VERTEX_SHADER, VERTEX_SHADER)?;
        let fs = match compile_shader(gl, glow::FRAGMENT_SHADER, FRAGMENT_SHADER) {
            Ok(fs) => fs,
            Err(err) => {
                gl.delete_shader(vs);
                return Err(err);
            }
        };

        let program = link_program(gl, &[vs, fs]);
        gl.delete_shader(vs);
        gl.delete_shader(fs);
        let program = program?;

        let offset_y = Self::uniform_location(gl, program, OFFSET_Y_UNIFORM);
        let alpha = Self::uniform_location(gl, program, ALPHA_UNIFORM);

        Ok(Pipeline {
            program,
            offset_y,
            alpha,
        })
    }

    unsafe fn uniform_location(
        gl: &glow::Context,
        program: glow::Program,
        name: &str,
    ) -> Option<glow::UniformLocation> {
        let location = gl.get_uniform_location(program, name);
        if location.is_none() {
            log::warn!("uniform {} is not active in the triangle program", name);
        }
        location
    }

    pub unsafe fn bind(&self, gl: &glow::Context) {
        gl.use_program(Some(self.program));
    }

    // The program must be bound.
    pub unsafe fn set_uniforms(&self, gl: &glow::Context, uniforms: Uniforms) {
        gl.uniform_1_f32(self.offset_y.as_ref(), uniforms.offset_y);
        gl.uniform_1_f32(self.alpha.as_ref(), uniforms.alpha);
    }

    pub unsafe fn destroy(&self, gl: &glow::Context) {
        gl.delete_program(self.program);
    }
}

fn stage_name(shader_type: u32) -> &'static str {
    match shader_type {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

unsafe fn compile_shader(gl: &glow::Context, shader_type: u32, source: &str) -> Result<glow::Shader> {
    let stage = stage_name(shader_type);
    let shader = gl
        .create_shader(shader_type)
        .map_err(|log| Error::ShaderCompile { stage, log })?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if gl.get_shader_compile_status(shader) {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        Err(Error::ShaderCompile { stage, log })
    }
}

unsafe fn link_program(gl: &glow::Context, shaders: &[glow::Shader]) -> Result<glow::Program> {
    let program = gl.create_program().map_err(Error::ShaderLink)?;

    for shader in shaders {
        gl.attach_shader(program, *shader);
    }

    gl.link_program(program);

    for shader in shaders {
        gl.detach_shader(program, *shader);
    }

    if gl.get_program_link_status(program) {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(program);
        gl.delete_program(program);
        Err(Error::ShaderLink(log))
    }
}
