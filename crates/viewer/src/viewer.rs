use crate::config::{ConfigError, ViewerConfig};
use crate::script::InputScript;
use snowmill_camera::{CameraError, OrbitingCamera};
use snowmill_input::{Action, Bindings, FrameInput, MouseLook};
use snowmill_render::{Frame, Projection, Renderer};
use snowmill_scene::Scene;

/// Errors from building a viewer.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Camera(#[from] CameraError),
}

/// The application driver: owns the camera, the scene, and the input
/// mapping, and turns one frame of input into one renderable frame.
pub struct Viewer {
    config: ViewerConfig,
    camera: OrbitingCamera,
    look: MouseLook,
    bindings: Bindings,
    scene: Scene,
    projection: Projection,
    frame_index: u64,
    running: bool,
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Result<Self, ViewerError> {
        config.validate()?;
        let cam = &config.camera;
        let camera = OrbitingCamera::new(cam.position, cam.target, cam.world_up)?;
        let (pitch, yaw) = camera.orientation_angles();
        let look = MouseLook::new(pitch, yaw, cam.mouse_sensitivity, cam.pitch_limit);
        let projection = config.build_projection();
        let scene = Scene::new(config.scene.clone());

        tracing::info!(
            position = ?camera.position(),
            pitch,
            yaw,
            "viewer ready"
        );

        Ok(Self {
            camera,
            look,
            bindings: Bindings::default(),
            scene,
            projection,
            frame_index: 0,
            running: true,
            config,
        })
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn camera(&self) -> &OrbitingCamera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn bindings_mut(&mut self) -> &mut Bindings {
        &mut self.bindings
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames produced so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Apply one frame of input over `dt` seconds, then step the scene.
    ///
    /// Move speed is scaled by `dt`, so motion is independent of frame rate.
    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        let _span = tracing::info_span!("viewer_update", frame = self.frame_index).entered();
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            tracing::warn!(dt, "ignoring invalid frame time");
            0.0
        };

        let step = self.config.camera.move_speed * dt;
        for action in self.bindings.actions(input) {
            match action {
                Action::Move(direction) => self.camera.move_by(direction, step),
                Action::Quit => {
                    tracing::info!("quit requested");
                    self.running = false;
                }
                other => self.scene.apply(&other, dt),
            }
        }

        if input.mouse_moved() {
            let (pitch, yaw) = self.look.apply(input.mouse_delta);
            self.camera.rotate(pitch, yaw);
        }

        self.scene.advance(dt);
    }

    /// Build the next frame. Takes the camera's view matrix exactly once.
    pub fn frame(&mut self) -> Frame {
        let view = self.camera.view_matrix();
        let frame = Frame::build(
            self.frame_index,
            view,
            self.camera.position(),
            &self.projection,
            &self.scene,
        );
        self.frame_index += 1;
        frame
    }

    /// Zero-sized resizes (a minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            tracing::debug!(width, height, "ignoring zero-sized resize");
            return;
        }
        self.projection.resize(width, height);
        self.config.window.width = width;
        self.config.window.height = height;
    }

    /// Drive the viewer through a script with a fixed frame time, rendering
    /// every frame. Stops early when the script quits. Returns the number of
    /// frames rendered.
    pub fn run<R: Renderer>(
        &mut self,
        script: &InputScript,
        dt: f32,
        renderer: &mut R,
        mut on_frame: impl FnMut(&Frame, R::Output),
    ) -> u64 {
        let mut rendered = 0;
        for input in script.frames() {
            if !self.running {
                break;
            }
            self.update(&input, dt);
            let frame = self.frame();
            let output = renderer.render(&frame);
            on_frame(&frame, output);
            rendered += 1;
        }
        tracing::debug!(rendered, "script finished");
        rendered
    }
}
