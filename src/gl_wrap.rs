use glam::{Mat4, Vec2, Vec3};
use glow::HasContext;

// free resources
pub trait Drop {
    fn drop(&self, gl: &glow::Context);
}

// set gl state
pub trait Bind {
    fn bind(&self, gl: &glow::Context);
}

pub struct Shader {
    pub id: glow::Shader,
}

impl Shader {
    // compile shader from source string, version line prepended so the same
    // source works on gl core and webgl2
    pub fn new(
        gl: &glow::Context,
        version: &str,
        source: &str,
        shader_type: u32,
    ) -> Result<Self, ShaderError> {
        let id;
        unsafe {
            id = gl.create_shader(shader_type)?;
            gl.shader_source(id, &format!("{}\n{}", version, source));
            gl.compile_shader(id);
        }

        let success;
        unsafe {
            success = gl.get_shader_compile_status(id);
        }
        if success {
            Ok(Self { id })
        } else {
            let log;
            unsafe {
                log = gl.get_shader_info_log(id);
            }
            Err(ShaderError::Compilation(log))
        }
    }
}

impl Drop for Shader {
    fn drop(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_shader(self.id);
        }
    }
}

pub struct Program {
    pub id: glow::Program,
}

impl Program {
    pub fn new(
        gl: &glow::Context,
        vertex_shader: &Shader,
        fragment_shader: &Shader,
    ) -> Result<Self, ProgramError> {
        // link shaders into program
        let id;
        unsafe {
            id = gl.create_program()?;
            gl.attach_shader(id, vertex_shader.id);
            gl.attach_shader(id, fragment_shader.id);
            gl.link_program(id);
        }

        let success;
        unsafe {
            success = gl.get_program_link_status(id);
        }
        if success {
            Ok(Self { id })
        } else {
            let log;
            unsafe {
                log = gl.get_program_info_log(id);
            }
            Err(ProgramError::Linking(log))
        }
    }

    // constructor from source strings for convenience
    pub fn new_from_sources(
        gl: &glow::Context,
        version: &str,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, ProgramError> {
        let vertex_shader = Shader::new(gl, version, vertex_source, glow::VERTEX_SHADER)?;
        let fragment_shader = Shader::new(gl, version, fragment_source, glow::FRAGMENT_SHADER)?;
        let result = Self::new(gl, &vertex_shader, &fragment_shader);

        // free no longer needed shader resources after linking
        vertex_shader.drop(gl);
        fragment_shader.drop(gl);

        result
    }
}

impl Drop for Program {
    fn drop(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.id);
        }
    }
}

impl Bind for Program {
    fn bind(&self, gl: &glow::Context) {
        unsafe {
            gl.use_program(Some(self.id));
        }
    }
}

pub struct Buffer {
    pub id: glow::Buffer,
    pub draw_type: u32,
    pub len: usize,
}

impl Buffer {
    pub fn new(gl: &glow::Context, data: &[f32], draw_type: u32) -> Result<Self, BufferError> {
        let id;
        unsafe {
            id = gl.create_buffer()?;
        }
        let mut buffer = Self {
            id,
            draw_type,
            len: 0,
        };
        buffer.set_data(gl, data);
        Ok(buffer)
    }

    pub fn set_data(&mut self, gl: &glow::Context, data: &[f32]) {
        self.bind(gl);
        unsafe {
            let (_, bytes, _) = data.align_to::<u8>();
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, self.draw_type);
        }
        self.len = data.len();
    }
}

impl Bind for Buffer {
    fn bind(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.id));
        }
    }
}

impl Drop for Buffer {
    fn drop(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_buffer(self.id);
        }
    }
}

pub struct VertexArray {
    pub id: glow::VertexArray,
}

impl VertexArray {
    pub fn new(gl: &glow::Context) -> Result<Self, VertexArrayError> {
        let id;
        unsafe {
            id = gl.create_vertex_array()?;
        }
        Ok(Self { id })
    }

    // setup attribute from currently bound buffer, vao must be bound
    pub fn set_attrib(
        gl: &glow::Context,
        program: &Program,
        name: &str,
        size: i32,
        stride: i32,
        offset: i32,
    ) -> Result<(), AttribError> {
        let location;
        unsafe {
            location = gl.get_attrib_location(program.id, name);
        }
        match location {
            None => Err(AttribError::Location(name.to_string())),
            Some(location) => unsafe {
                let fsize = std::mem::size_of::<f32>() as i32;
                gl.vertex_attrib_pointer_f32(
                    location,
                    size,
                    glow::FLOAT,
                    false,
                    fsize * stride,
                    fsize * offset,
                );
                gl.enable_vertex_attrib_array(location);
                Ok(())
            },
        }
    }
}

impl Bind for VertexArray {
    fn bind(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.id));
        }
    }
}

impl Drop for VertexArray {
    fn drop(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.id);
        }
    }
}

pub struct Texture {
    pub id: glow::Texture,
}

impl Texture {
    // upload raw rgba pixels, image decoding happens at the call site
    pub fn new(
        gl: &glow::Context,
        width: i32,
        height: i32,
        rgba: &[u8],
    ) -> Result<Self, TextureError> {
        if rgba.len() != width as usize * height as usize * 4 {
            return Err(TextureError::Size(width, height, rgba.len()));
        }
        let id;
        unsafe {
            id = gl.create_texture()?;
            gl.bind_texture(glow::TEXTURE_2D, Some(id));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width,
                height,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                Some(rgba),
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_EDGE as i32,
            );
        }
        Ok(Self { id })
    }
}

impl Bind for Texture {
    fn bind(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_texture(self.id);
        }
    }
}

fn uniform_location(
    gl: &glow::Context,
    program: &Program,
    name: &str,
) -> Result<glow::UniformLocation, UniformError> {
    let location;
    unsafe {
        location = gl.get_uniform_location(program.id, name);
    }
    location.ok_or_else(|| UniformError::Location(name.to_string()))
}

pub struct UniformMatrix {
    pub data: Mat4,
    location: glow::UniformLocation,
}

impl UniformMatrix {
    pub fn new(
        gl: &glow::Context,
        program: &Program,
        name: &str,
        data: Mat4,
    ) -> Result<Self, UniformError> {
        let location = uniform_location(gl, program, name)?;
        Ok(Self { data, location })
    }

    pub fn apply(&self, gl: &glow::Context) {
        unsafe {
            gl.uniform_matrix_4_f32_slice(Some(&self.location), false, &self.data.to_cols_array());
        }
    }
}

pub struct UniformFloat {
    pub data: f32,
    location: glow::UniformLocation,
}

impl UniformFloat {
    pub fn new(
        gl: &glow::Context,
        program: &Program,
        name: &str,
        data: f32,
    ) -> Result<Self, UniformError> {
        let location = uniform_location(gl, program, name)?;
        Ok(Self { data, location })
    }

    pub fn apply(&self, gl: &glow::Context) {
        unsafe {
            gl.uniform_1_f32(Some(&self.location), self.data);
        }
    }
}

pub struct UniformVec2 {
    pub data: Vec2,
    location: glow::UniformLocation,
}

impl UniformVec2 {
    pub fn new(
        gl: &glow::Context,
        program: &Program,
        name: &str,
        data: Vec2,
    ) -> Result<Self, UniformError> {
        let location = uniform_location(gl, program, name)?;
        Ok(Self { data, location })
    }

    pub fn apply(&self, gl: &glow::Context) {
        unsafe {
            gl.uniform_2_f32(Some(&self.location), self.data.x, self.data.y);
        }
    }
}

pub struct UniformVec3 {
    pub data: Vec3,
    location: glow::UniformLocation,
}

impl UniformVec3 {
    pub fn new(
        gl: &glow::Context,
        program: &Program,
        name: &str,
        data: Vec3,
    ) -> Result<Self, UniformError> {
        let location = uniform_location(gl, program, name)?;
        Ok(Self { data, location })
    }

    pub fn apply(&self, gl: &glow::Context) {
        unsafe {
            gl.uniform_3_f32(Some(&self.location), self.data.x, self.data.y, self.data.z);
        }
    }
}

// sampler bindings
pub struct UniformInt {
    pub data: i32,
    location: glow::UniformLocation,
}

impl UniformInt {
    pub fn new(
        gl: &glow::Context,
        program: &Program,
        name: &str,
        data: i32,
    ) -> Result<Self, UniformError> {
        let location = uniform_location(gl, program, name)?;
        Ok(Self { data, location })
    }

    pub fn apply(&self, gl: &glow::Context) {
        unsafe {
            gl.uniform_1_i32(Some(&self.location), self.data);
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("Compilation error: {0}")]
    Compilation(String),
    #[error("{0}")]
    String(String),
}

impl From<String> for ShaderError {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

#[derive(Error, Debug)]
pub enum ProgramError {
    #[error("Linking error: {0}")]
    Linking(String),
    #[error("{0}")]
    Shader(#[from] ShaderError),
    #[error("{0}")]
    String(String),
}

impl From<String> for ProgramError {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

#[derive(Error, Debug)]
pub enum BufferError {
    #[error("{0}")]
    String(String),
}

impl From<String> for BufferError {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

#[derive(Error, Debug)]
pub enum VertexArrayError {
    #[error("{0}")]
    String(String),
}

impl From<String> for VertexArrayError {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Pixel data length {2} does not match {0}x{1} rgba")]
    Size(i32, i32, usize),
    #[error("{0}")]
    String(String),
}

impl From<String> for TextureError {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

#[derive(Error, Debug)]
pub enum UniformError {
    #[error("Uniform location '{0}' not found")]
    Location(String),
}

#[derive(Error, Debug)]
pub enum AttribError {
    #[error("Attrib location '{0}' not found")]
    Location(String),
}
