use crate::atmosphere::{Fog, Light};
use crate::props::{Bus, Windmill};
use crate::settings::SceneSettings;
use crate::snow::Snowfall;
use glam::{Mat4, Vec3};
use snowmill_common::{MeshId, PolygonMode};
use snowmill_input::Action;

/// Rasterization and view-mode switches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderMode {
    pub polygon: PolygonMode,
    pub multisample: bool,
    /// Show the light's depth map instead of the lit scene.
    pub show_depth_map: bool,
}

impl Default for RenderMode {
    fn default() -> Self {
        Self {
            polygon: PolygonMode::Fill,
            multisample: true,
            show_depth_map: false,
        }
    }
}

/// One model placed in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance {
    pub mesh: MeshId,
    pub model: Mat4,
}

/// Everything in the world other than the camera.
///
/// All state changes flow through [`Scene::apply`] and [`Scene::advance`];
/// the renderer only reads.
#[derive(Debug, Clone)]
pub struct Scene {
    settings: SceneSettings,
    /// Degrees about world Y applied to the static scene model.
    turn_angle: f32,
    windmill: Windmill,
    bus: Bus,
    snow: Snowfall,
    fog: Fog,
    light: Light,
    mode: RenderMode,
    tick: u64,
}

impl Scene {
    pub fn new(settings: SceneSettings) -> Self {
        Self {
            turn_angle: 0.0,
            windmill: Windmill::new(settings.mill_center, settings.mill_spin_rate),
            bus: Bus::new(&settings.bus),
            snow: Snowfall::new(&settings.snow, settings.seed),
            fog: Fog::new(&settings.fog),
            light: Light::new(&settings.light),
            mode: RenderMode::default(),
            tick: 0,
            settings,
        }
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Number of completed [`advance`](Self::advance) steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn turn_angle(&self) -> f32 {
        self.turn_angle
    }

    pub fn windmill(&self) -> &Windmill {
        &self.windmill
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn snow(&self) -> &Snowfall {
        &self.snow
    }

    pub fn fog(&self) -> &Fog {
        &self.fog
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Apply one scene action. Continuous actions scale by `dt` seconds.
    /// Camera moves are not the scene's concern and are ignored.
    pub fn apply(&mut self, action: &Action, dt: f32) {
        match *action {
            Action::Move(_) => {}
            Action::TurnScene(sign) => {
                self.turn_angle =
                    (self.turn_angle + sign * self.settings.scene_turn_rate * dt).rem_euclid(360.0);
            }
            Action::SetPolygonMode(polygon) => {
                if self.mode.polygon != polygon {
                    tracing::debug!(?polygon, "polygon mode changed");
                }
                self.mode.polygon = polygon;
            }
            Action::SetMultisample(on) => self.mode.multisample = on,
            Action::NudgeBus(sign) => self.bus.nudge(sign, dt),
            Action::StartBus => self.bus.start(),
            Action::SteerBus(on) => self.bus.steer(on),
            Action::FogOn => {
                self.fog.enable();
                tracing::debug!(density = self.fog.density(), "fog on");
            }
            Action::FogOff => {
                self.fog.disable();
                tracing::debug!("fog off");
            }
            Action::AdjustFog(sign) => self.fog.adjust(sign, dt),
            Action::SetSnow(on) => self.snow.set_active(on),
            Action::TurnLight(sign) => self.light.turn(sign, dt),
            Action::ToggleDepthMap => {
                self.mode.show_depth_map = !self.mode.show_depth_map;
                tracing::debug!(show = self.mode.show_depth_map, "depth map toggled");
            }
            Action::Quit => {}
        }
    }

    /// Step the animations forward by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.windmill.advance(dt);
        self.bus.advance(dt);
        self.snow.advance(dt);
        self.tick += 1;
    }

    /// Model matrix for the static scene.
    pub fn scene_model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.turn_angle.to_radians())
    }

    /// All models to draw this frame: scene, bus, mill blades, then one
    /// instance per snowflake.
    pub fn instances(&self) -> Vec<Instance> {
        let mut out = Vec::with_capacity(3 + self.snow.flakes().len());
        out.push(Instance {
            mesh: MeshId::Scene,
            model: self.scene_model(),
        });
        out.push(Instance {
            mesh: MeshId::SchoolBus,
            model: self.bus.model_matrix(),
        });
        out.push(Instance {
            mesh: MeshId::MillBlades,
            model: self.windmill.model_matrix(),
        });
        out.extend(self.snow.flakes().iter().map(|p| Instance {
            mesh: MeshId::Snowflake,
            model: Mat4::from_translation(*p),
        }));
        out
    }

    /// Centre of the region the depth map should cover.
    pub fn focus(&self) -> Vec3 {
        let snow = &self.settings.snow;
        (snow.spawn_min + snow.spawn_max) * 0.5
    }
}
