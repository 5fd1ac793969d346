use crate::fermat::PointField;
use crate::gl_wrap::{Bind, Buffer, Drop, Program, VertexArray};
use glow::HasContext;

// gl resources for drawing the spiral point cloud
pub struct Points {
    pub program: Program,
    pub position_buffer: Buffer,
    pub index_buffer: Buffer,
    pub vao: VertexArray,
}

impl Points {
    pub fn new(
        gl: &glow::Context,
        shader_version: &str,
        field: &PointField,
    ) -> Result<Self, PointsError> {
        // compile program from strings
        let program = Program::new_from_sources(
            gl,
            shader_version,
            include_str!("../shaders/spiral-vert.glsl"),
            include_str!("../shaders/spiral-frag.glsl"),
        )?;
        // positions rebuilt on resize, indices fixed for the field lifetime
        let position_buffer = Buffer::new(gl, &field.positions, glow::DYNAMIC_DRAW)?;
        let index_buffer = Buffer::new(gl, &field.indices, glow::STATIC_DRAW)?;
        // init vao and setup attributes, one per buffer
        let vao = VertexArray::new(gl)?;
        program.bind(gl);
        vao.bind(gl);
        position_buffer.bind(gl);
        VertexArray::set_attrib(gl, &program, "position", 3, 3, 0)?;
        index_buffer.bind(gl);
        VertexArray::set_attrib(gl, &program, "pointIndex", 1, 1, 0)?;
        Ok(Self {
            program,
            position_buffer,
            index_buffer,
            vao,
        })
    }

    // full position re-upload after field regeneration
    pub fn set_positions(&mut self, gl: &glow::Context, data: &[f32]) {
        self.position_buffer.set_data(gl, data);
    }

    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.draw_arrays(glow::POINTS, 0, (self.position_buffer.len / 3) as i32);
        }
    }
}

impl Bind for Points {
    fn bind(&self, gl: &glow::Context) {
        self.program.bind(gl);
        self.vao.bind(gl);
    }
}

impl Drop for Points {
    fn drop(&self, gl: &glow::Context) {
        self.program.drop(gl);
        self.position_buffer.drop(gl);
        self.index_buffer.drop(gl);
        self.vao.drop(gl);
    }
}

use thiserror::Error;
#[derive(Error, Debug)]
pub enum PointsError {
    #[error("{0}")]
    Program(#[from] crate::gl_wrap::ProgramError),
    #[error("{0}")]
    Buffer(#[from] crate::gl_wrap::BufferError),
    #[error("{0}")]
    VertexArray(#[from] crate::gl_wrap::VertexArrayError),
    #[error("{0}")]
    Attrib(#[from] crate::gl_wrap::AttribError),
}
