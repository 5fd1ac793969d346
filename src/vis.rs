use crate::billboard::{Billboard, BillboardError};
use crate::camera::OrbitCamera;
use crate::driver::FrameLoop;
use crate::fermat::PointField;
use crate::frame_clock::FrameClock;
use crate::gl_wrap::{
    Bind, Drop, UniformError, UniformFloat, UniformInt, UniformMatrix, UniformVec2, UniformVec3,
};
use crate::mouse::{MouseButton, MouseState, PointerTrail};
use crate::points::{Points, PointsError};
use crate::vis_ctx::{VisContext, VisContextError};
use glam::{Mat4, Vec2, Vec3};
use glow::HasContext;

pub const POINT_COUNT: usize = 1000;
const PHASE_INCREMENT: f32 = 2.0;
const POINT_SCALE: f32 = 2.0;
const FIELD_INSET: f32 = 0.9;
const FOV_RADIANS: f32 = std::f32::consts::PI / 3.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 10.0;

pub enum SceneConfig {
    Spiral,
    // texture bytes supplied by the host, decoded at scene construction
    Billboard { texture: Option<Vec<u8>> },
}

// wrapper for initialization and running vis
pub struct Vis {
    ctx: VisContext,
    gl: VisGl,
}

impl Vis {
    pub fn new(config: SceneConfig, width: f64, height: f64) -> Result<Self, VisError> {
        // initialize gl ctx and window
        let ctx = VisContext::new(width, height)?;
        // setup vis gl resources
        let gl = VisGl::new(&ctx, config, width, height)?;
        Ok(Self { ctx, gl })
    }

    // vis as argument since run requires move
    pub fn start(vis: Vis) -> Result<(), VisError> {
        VisContext::run(vis.ctx, vis.gl)?;
        Ok(())
    }
}

// contains all vis logic and gl resources
pub struct VisGl {
    scene: Scene,
    mouse: MouseState,
    pub frame_loop: FrameLoop,
    width: f64,
    height: f64,
}

enum Scene {
    Spiral(SpiralScene),
    Billboard(BillboardScene),
}

struct SpiralScene {
    points: Points,
    field: PointField,
    clock: FrameClock,
    point_scale: UniformFloat,
    point_count: UniformFloat,
    progress: UniformVec3,
}

struct BillboardScene {
    billboard: Billboard,
    camera: OrbitCamera,
    trail: PointerTrail,
    clock: FrameClock,
    mvp: UniformMatrix,
    sampler: UniformInt,
    time: UniformFloat,
    mouse_position: UniformVec2,
    velocity: UniformVec2,
}

impl VisGl {
    pub fn new(
        ctx: &VisContext,
        config: SceneConfig,
        width: f64,
        height: f64,
    ) -> Result<Self, VisGlError> {
        let gl = &ctx.gl;
        let aspect = (width / height) as f32;
        let scene = match config {
            SceneConfig::Spiral => {
                let field = PointField::generate(POINT_COUNT, aspect, FIELD_INSET);
                let points = Points::new(gl, &ctx.shader_version, &field)?;
                let point_scale = UniformFloat::new(gl, &points.program, "pointScale", POINT_SCALE)?;
                let point_count =
                    UniformFloat::new(gl, &points.program, "pointCount", POINT_COUNT as f32)?;
                let progress = UniformVec3::new(gl, &points.program, "progress", Vec3::ZERO)?;
                let clock = FrameClock::new(POINT_COUNT as f32, PHASE_INCREMENT);
                log::info!("spiral scene ready, {} points", field.count());
                Scene::Spiral(SpiralScene {
                    points,
                    field,
                    clock,
                    point_scale,
                    point_count,
                    progress,
                })
            }
            SceneConfig::Billboard { texture } => {
                let billboard = Billboard::new(gl, &ctx.shader_version, texture.as_deref())?;
                let camera = default_camera(aspect);
                let mvp = UniformMatrix::new(
                    gl,
                    &billboard.program,
                    "mvpMatrix",
                    mvp_matrix(&camera, aspect),
                )?;
                let sampler = UniformInt::new(gl, &billboard.program, "textureUnit0", 0)?;
                let time = UniformFloat::new(gl, &billboard.program, "time", 0.0)?;
                let mouse_position =
                    UniformVec2::new(gl, &billboard.program, "mouse", Vec2::ZERO)?;
                let velocity = UniformVec2::new(gl, &billboard.program, "velocity", Vec2::ZERO)?;
                log::info!("billboard scene ready");
                Scene::Billboard(BillboardScene {
                    billboard,
                    camera,
                    trail: PointerTrail::new(),
                    clock: FrameClock::timer(),
                    mvp,
                    sampler,
                    time,
                    mouse_position,
                    velocity,
                })
            }
        };
        let mut frame_loop = FrameLoop::new();
        frame_loop.ready();
        Ok(Self {
            scene,
            mouse: MouseState::new(),
            frame_loop,
            width,
            height,
        })
    }

    pub fn mouse_move(&mut self, x: f64, y: f64) {
        let dx = x - self.mouse.x;
        let dy = y - self.mouse.y;
        if let Scene::Billboard(scene) = &mut self.scene {
            if self.mouse.dragging {
                // rotate camera from mouse move deltas
                scene.camera.rotate_from_pointer(dx, dy);
            }
            scene.trail.track(x, y, dx, dy, self.width, self.height);
        }
        // save last mouse position
        self.mouse.x = x;
        self.mouse.y = y;
    }

    pub fn mouse_input(&mut self, button: MouseButton, pressed: bool) {
        // save mouse drag state on left mouse input
        if let MouseButton::Left = button {
            self.mouse.dragging = pressed;
        }
    }

    pub fn mouse_wheel(&mut self, delta: f64) {
        if let Scene::Billboard(scene) = &mut self.scene {
            scene.camera.zoom_from_scroll(delta);
        }
    }

    // full field rebuild on resize, same count with the new aspect ratio
    pub fn resize(&mut self, gl: &glow::Context, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        let aspect = (width / height) as f32;
        unsafe {
            gl.viewport(0, 0, width as i32, height as i32);
        }
        if let Scene::Spiral(scene) = &mut self.scene {
            scene.field = PointField::generate(POINT_COUNT, aspect, FIELD_INSET);
            scene.points.set_positions(gl, &scene.field.positions);
        }
        log::debug!("resized to {:.0}x{:.0}", width, height);
    }

    // bind required resources and apply static uniforms before first frame
    pub fn setup_gl_resources(&self, gl: &glow::Context) {
        unsafe {
            gl.viewport(0, 0, self.width as i32, self.height as i32);
        }
        match &self.scene {
            Scene::Spiral(scene) => {
                unsafe {
                    gl.clear_color(0.0, 0.0, 0.0, 1.0);
                    // webgl has shader point sizing always on, core gl needs opt in
                    #[cfg(not(target_arch = "wasm32"))]
                    gl.enable(glow::PROGRAM_POINT_SIZE);
                }
                scene.points.bind(gl);
                scene.point_scale.apply(gl);
                scene.point_count.apply(gl);
                scene.progress.apply(gl);
            }
            Scene::Billboard(scene) => {
                unsafe {
                    gl.clear_color(0.1, 0.1, 0.1, 1.0);
                    gl.clear_depth_f32(1.0);
                    gl.enable(glow::DEPTH_TEST);
                }
                scene.billboard.bind(gl);
                scene.sampler.apply(gl);
                scene.mvp.apply(gl);
            }
        }
    }

    // get main draw loop as closure
    pub fn get_draw() -> impl FnMut(&glow::Context, &mut VisGl) {
        move |gl: &glow::Context, vis: &mut VisGl| {
            let aspect = (vis.width / vis.height) as f32;
            match &mut vis.scene {
                Scene::Spiral(scene) => {
                    unsafe {
                        gl.clear(glow::COLOR_BUFFER_BIT);
                    }
                    scene.clock.advance();
                    let [r, g, b] = scene.clock.channel_phases();
                    scene.progress.data = Vec3::new(r, g, b);
                    scene.points.bind(gl);
                    scene.progress.apply(gl);
                    scene.points.draw(gl);
                }
                Scene::Billboard(scene) => {
                    unsafe {
                        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
                    }
                    scene.clock.advance();
                    scene.trail.decay();
                    scene.billboard.bind(gl);
                    scene.mvp.data = mvp_matrix(&scene.camera, aspect);
                    scene.mvp.apply(gl);
                    scene.time.data = scene.clock.elapsed();
                    scene.time.apply(gl);
                    scene.mouse_position.data = scene.trail.position;
                    scene.mouse_position.apply(gl);
                    scene.velocity.data = scene.trail.velocity;
                    scene.velocity.apply(gl);
                    scene.billboard.draw(gl);
                }
            }
        }
    }
}

impl Drop for VisGl {
    fn drop(&self, gl: &glow::Context) {
        match &self.scene {
            Scene::Spiral(scene) => scene.points.drop(gl),
            Scene::Billboard(scene) => scene.billboard.drop(gl),
        }
    }
}

// distance where the quad exactly fills the viewport height at aspect >= 1
fn default_camera(aspect: f32) -> OrbitCamera {
    let distance = 1.0 / (FOV_RADIANS * 0.5).tan() * (1.0 / aspect).min(1.0);
    OrbitCamera::new(distance, distance * 0.5, distance * 3.0)
}

fn mvp_matrix(camera: &OrbitCamera, aspect: f32) -> Mat4 {
    let proj = Mat4::perspective_rh_gl(FOV_RADIANS, aspect, NEAR_PLANE, FAR_PLANE);
    // model stays identity, view carries the orbit rotation
    proj.mul_mat4(&camera.view_matrix())
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisGlError {
    #[error("{0}")]
    Points(#[from] PointsError),
    #[error("{0}")]
    Billboard(#[from] BillboardError),
    #[error("{0}")]
    Uniform(#[from] UniformError),
}

#[derive(Error, Debug)]
pub enum VisError {
    #[error("{0}")]
    VisGl(#[from] VisGlError),
    #[error("{0}")]
    VisContext(#[from] VisContextError),
}
