use crate::projection::Projection;
use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3, Vec4};
use snowmill_common::{MeshId, PolygonMode};
use snowmill_scene::Scene;

/// Side length of the square depth map, in texels.
pub const SHADOW_MAP_SIZE: u32 = 2048;
/// Grey background shown behind the scene.
pub const CLEAR_COLOR: [f32; 4] = [0.7, 0.7, 0.7, 1.0];
/// Half-width of the region the depth map covers.
const LIGHT_EXTENT: f32 = 600.0;

/// Matrix that carries normals into view space: inverse-transpose of the
/// upper 3x3 of `view * model`.
pub fn normal_matrix(view: Mat4, model: Mat4) -> Mat3 {
    Mat3::from_mat4(view * model).inverse().transpose()
}

/// Orthographic light-space transform used to render the depth map.
///
/// `light_dir` points towards the light; the light sits `extent` units from
/// `focus` along it and sees a box `2 * extent` wide.
pub fn light_space_matrix(light_dir: Vec3, focus: Vec3, extent: f32) -> Mat4 {
    let dir = light_dir.normalize_or(Vec3::Y);
    let up = if dir.cross(Vec3::Y).length_squared() < 1e-8 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let eye = focus + dir * extent;
    let view = Mat4::look_at_rh(eye, focus, up);
    let proj = Mat4::orthographic_rh_gl(-extent, extent, -extent, extent, 0.1, extent * 2.0);
    proj * view
}

/// Which image the frame produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPass {
    /// Lit scene from the camera.
    Scene,
    /// Depth from the light, shown full-screen.
    DepthMap,
}

/// Per-frame shader inputs shared by every draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub light_space: Mat4,
    /// Unit direction towards the light, world space.
    pub light_dir: Vec3,
    pub light_color: Vec3,
    pub fog_density: f32,
}

/// GPU layout of [`FrameUniforms`] (std140-compatible).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct GpuUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub light_space: [[f32; 4]; 4],
    pub light_dir: [f32; 4],
    pub light_color: [f32; 4],
    /// x = fog density, yzw unused.
    pub fog: [f32; 4],
}

impl From<&FrameUniforms> for GpuUniforms {
    fn from(u: &FrameUniforms) -> Self {
        Self {
            view: u.view.to_cols_array_2d(),
            projection: u.projection.to_cols_array_2d(),
            light_space: u.light_space.to_cols_array_2d(),
            light_dir: u.light_dir.extend(0.0).to_array(),
            light_color: u.light_color.extend(1.0).to_array(),
            fog: Vec4::new(u.fog_density, 0.0, 0.0, 0.0).to_array(),
        }
    }
}

/// GPU layout of a draw's model and normal matrices. The 3x3 normal matrix
/// is padded to three vec4 columns.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct GpuDrawUniforms {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 3],
}

/// One mesh to draw with its transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub mesh: MeshId,
    pub model: Mat4,
    pub normal: Mat3,
}

impl DrawCall {
    pub fn gpu(&self) -> GpuDrawUniforms {
        GpuDrawUniforms {
            model: self.model.to_cols_array_2d(),
            normal: [
                self.normal.x_axis.extend(0.0).to_array(),
                self.normal.y_axis.extend(0.0).to_array(),
                self.normal.z_axis.extend(0.0).to_array(),
            ],
        }
    }
}

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: u64,
    pub pass: RenderPass,
    pub uniforms: FrameUniforms,
    pub draws: Vec<DrawCall>,
    pub polygon: PolygonMode,
    pub multisample: bool,
    pub clear_color: [f32; 4],
    /// Camera position, for display.
    pub eye: Vec3,
}

impl Frame {
    /// Assemble a frame from the camera's view matrix, the projection, and
    /// the scene. Normal matrices are computed per draw from `view * model`.
    pub fn build(
        index: u64,
        view: Mat4,
        eye: Vec3,
        projection: &Projection,
        scene: &Scene,
    ) -> Self {
        let light = scene.light();
        let light_dir = light.direction();
        let mode = scene.mode();

        let draws = scene
            .instances()
            .into_iter()
            .map(|inst| DrawCall {
                mesh: inst.mesh,
                model: inst.model,
                normal: normal_matrix(view, inst.model),
            })
            .collect();

        Self {
            index,
            pass: if mode.show_depth_map {
                RenderPass::DepthMap
            } else {
                RenderPass::Scene
            },
            uniforms: FrameUniforms {
                view,
                projection: projection.matrix(),
                light_space: light_space_matrix(light_dir, scene.focus(), LIGHT_EXTENT),
                light_dir,
                light_color: light.color(),
                fog_density: scene.fog().density(),
            },
            draws,
            polygon: mode.polygon,
            multisample: mode.multisample,
            clear_color: CLEAR_COLOR,
            eye,
        }
    }

    pub fn gpu_uniforms(&self) -> GpuUniforms {
        GpuUniforms::from(&self.uniforms)
    }

    /// Number of draws of a given mesh.
    pub fn count(&self, mesh: MeshId) -> usize {
        self.draws.iter().filter(|d| d.mesh == mesh).count()
    }
}
