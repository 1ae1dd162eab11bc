mod sim;

use anyhow::Result;
use glam::Vec2;
use winit::dpi::LogicalSize;

use skiff_engine::camera::{Camera2D, CameraUniform};
use skiff_engine::core::{App, AppControl, FrameCtx};
use skiff_engine::device::GpuInit;
use skiff_engine::logging::{init_logging, LoggingConfig};
use skiff_engine::render::{MeshRenderer, QuadInstance, QuadRenderer, Vertex};
use skiff_engine::window::{Runtime, RuntimeConfig};

use sim::Sim;

const TICK_RATE: f32 = 1.0 / 60.0;

struct Demo {
    sim: Sim,
    last_sim: Sim,
    accumulator: f32,

    camera: Camera2D,
    quads: QuadRenderer,
    mesh: MeshRenderer,
    ground: Vec<Vertex>,
}

impl Demo {
    fn new() -> Self {
        Self {
            sim: Sim::new(),
            last_sim: Sim::new(),
            accumulator: 0.0,

            camera: Camera2D::new(Vec2::ZERO, 0.12),
            quads: QuadRenderer::new(),
            mesh: MeshRenderer::new(),
            ground: ground_strip(-24.0, 24.0, -2.0, -1.0),
        }
    }
}

impl App for Demo {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        // Fixed-step simulation; rendering interpolates between the last two
        // snapshots so motion stays smooth at any refresh rate.
        self.accumulator += ctx.time.dt;
        while self.accumulator >= TICK_RATE {
            self.last_sim = self.sim.clone();
            self.sim.update(TICK_RATE);
            self.accumulator -= TICK_RATE;
        }
        let frame = Sim::blend(&self.last_sim, &self.sim, self.accumulator / TICK_RATE);

        self.camera.center = frame.bob_center();
        let camera = CameraUniform::from_matrix(self.camera.view_proj(ctx.aspect()));

        let bob = frame.bob_center();
        let instances = [
            // Anchor block and the swinging bob, both centered on their
            // world position.
            QuadInstance::new([frame.anchor.x - 0.25, frame.anchor.y - 0.25], [0.5, 0.5]),
            QuadInstance::new([bob.x - 0.5, bob.y - 0.5], [1.0, 1.0]),
        ];

        let clear = wgpu::Color {
            r: 0.012,
            g: 0.012,
            b: 0.035,
            a: 1.0,
        };

        ctx.render(clear, |rctx, target| {
            self.mesh.render(rctx, target, camera, &self.ground);
            self.quads.render(rctx, target, camera, &instances);
        })
    }
}

/// Two triangles spanning a horizontal strip, for the plain mesh unit.
fn ground_strip(x0: f32, x1: f32, y0: f32, y1: f32) -> Vec<Vertex> {
    vec![
        Vertex::new(x0, y0),
        Vertex::new(x1, y0),
        Vertex::new(x1, y1),
        Vertex::new(x0, y0),
        Vertex::new(x1, y1),
        Vertex::new(x0, y1),
    ]
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "skiff demo".to_string(),
        initial_size: LogicalSize::new(960.0, 960.0),
    };

    Runtime::run(config, GpuInit::default(), Demo::new())
}
