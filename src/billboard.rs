use crate::gl_wrap::{Bind, Buffer, Drop, Program, Texture, VertexArray};
use glow::HasContext;

#[rustfmt::skip]
const QUAD_POSITIONS: [f32; 12] = [
    -1.0,  1.0,  0.0,
     1.0,  1.0,  0.0,
    -1.0, -1.0,  0.0,
     1.0, -1.0,  0.0,
];

#[rustfmt::skip]
const QUAD_TEX_COORDS: [f32; 8] = [
    0.0, 0.0,
    1.0, 0.0,
    0.0, 1.0,
    1.0, 1.0,
];

// gl resources for drawing the textured orbit-camera quad
pub struct Billboard {
    pub program: Program,
    pub position_buffer: Buffer,
    pub tex_coord_buffer: Buffer,
    pub vao: VertexArray,
    pub texture: Texture,
}

impl Billboard {
    pub fn new(
        gl: &glow::Context,
        shader_version: &str,
        texture_bytes: Option<&[u8]>,
    ) -> Result<Self, BillboardError> {
        let program = Program::new_from_sources(
            gl,
            shader_version,
            include_str!("../shaders/billboard-vert.glsl"),
            include_str!("../shaders/billboard-frag.glsl"),
        )?;
        let position_buffer = Buffer::new(gl, &QUAD_POSITIONS, glow::STATIC_DRAW)?;
        let tex_coord_buffer = Buffer::new(gl, &QUAD_TEX_COORDS, glow::STATIC_DRAW)?;
        let vao = VertexArray::new(gl)?;
        program.bind(gl);
        vao.bind(gl);
        position_buffer.bind(gl);
        VertexArray::set_attrib(gl, &program, "position", 3, 3, 0)?;
        tex_coord_buffer.bind(gl);
        VertexArray::set_attrib(gl, &program, "texCoord", 2, 2, 0)?;

        // texture bytes come from the host, fall back to a generated pattern
        let texture = match texture_bytes {
            Some(bytes) => {
                let decoded = image::load_from_memory(bytes)?.to_rgba8();
                let (width, height) = decoded.dimensions();
                Texture::new(gl, width as i32, height as i32, &decoded.into_raw())?
            }
            None => {
                let (width, height, pixels) = checkerboard();
                Texture::new(gl, width, height, &pixels)?
            }
        };
        unsafe {
            gl.active_texture(glow::TEXTURE0);
        }
        texture.bind(gl);

        Ok(Self {
            program,
            position_buffer,
            tex_coord_buffer,
            vao,
            texture,
        })
    }

    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.draw_arrays(glow::TRIANGLE_STRIP, 0, (self.position_buffer.len / 3) as i32);
        }
    }
}

impl Bind for Billboard {
    fn bind(&self, gl: &glow::Context) {
        self.program.bind(gl);
        self.vao.bind(gl);
    }
}

impl Drop for Billboard {
    fn drop(&self, gl: &glow::Context) {
        self.program.drop(gl);
        self.position_buffer.drop(gl);
        self.tex_coord_buffer.drop(gl);
        self.vao.drop(gl);
        self.texture.drop(gl);
    }
}

// fallback texture when the host supplies no image
fn checkerboard() -> (i32, i32, Vec<u8>) {
    const SIZE: i32 = 64;
    const CELL: i32 = 8;
    let mut pixels = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let lit = ((x / CELL) + (y / CELL)) % 2 == 0;
            let value = if lit { 220 } else { 60 };
            pixels.extend_from_slice(&[value, value, value, 255]);
        }
    }
    (SIZE, SIZE, pixels)
}

use thiserror::Error;
#[derive(Error, Debug)]
pub enum BillboardError {
    #[error("{0}")]
    Program(#[from] crate::gl_wrap::ProgramError),
    #[error("{0}")]
    Buffer(#[from] crate::gl_wrap::BufferError),
    #[error("{0}")]
    VertexArray(#[from] crate::gl_wrap::VertexArrayError),
    #[error("{0}")]
    Attrib(#[from] crate::gl_wrap::AttribError),
    #[error("{0}")]
    Texture(#[from] crate::gl_wrap::TextureError),
    #[error("{0}")]
    Decode(#[from] image::ImageError),
}
