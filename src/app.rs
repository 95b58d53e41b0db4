//! Windowed host loop.
//!
//! One redraw drives one simulation tick: input is read, queued spawns are
//! applied by [`Simulation::tick`], the scene proxies are synchronised and the
//! frame is rendered.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::SimConfig;
use crate::error::SimulationError;
use crate::gpu::GpuState;
use crate::input::{Input, Key};
use crate::scene::{SceneSync, SphereHandle};
use crate::simulation::Simulation;
use crate::time::Time;
use crate::visuals::background_color;

const WINDOW_TITLE: &str = "bounce3d";
const ORBIT_SPEED: f32 = 0.005;

/// Open a window and run the simulation until it is closed.
pub fn run(config: SimConfig) -> Result<(), SimulationError> {
    let sim = Simulation::new(config)?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(sim);
    event_loop.run_app(&mut app)?;
    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    sim: Simulation,
    sync: SceneSync<SphereHandle>,
    input: Input,
    time: Time,
    error: Option<SimulationError>,
}

impl App {
    fn new(sim: Simulation) -> Self {
        Self {
            window: None,
            gpu: None,
            sim,
            sync: SceneSync::new(),
            input: Input::new(),
            time: Time::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: SimulationError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SimulationError> {
        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let mut gpu = pollster::block_on(GpuState::new(window.clone()))?;
        self.sync.attach(&mut self.sim, &mut gpu);

        self.window = Some(window);
        self.gpu = Some(gpu);
        Ok(())
    }

    /// Apply this frame's key presses. Returns false when the app should exit.
    fn handle_keys(&mut self) -> bool {
        if self.input.key_pressed(Key::Escape) {
            return false;
        }
        if self.input.key_pressed(Key::Space) {
            self.sim.request_spawn();
        }
        if self.input.key_pressed(Key::Enter) && !self.sim.launch_seed() {
            log::warn!("No seed sphere to launch");
        }
        if self.input.key_pressed(Key::P) {
            self.time.toggle_pause();
            log::info!("Simulation {}", if self.time.is_paused() { "paused" } else { "resumed" });
        }
        true
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if !self.handle_keys() {
            event_loop.exit();
            return;
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        let drag = self.input.drag_delta();
        gpu.camera.orbit(-drag.x * ORBIT_SPEED, drag.y * ORBIT_SPEED);
        gpu.camera.zoom(self.input.scroll_delta());

        self.time.update();
        if !self.time.is_paused() {
            self.sim.tick();
        }
        self.sync.sync(&mut self.sim, gpu);

        match gpu.render(background_color(self.time.elapsed())) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => {
                let (width, height) = gpu.size();
                gpu.resize(winit::dpi::PhysicalSize { width, height });
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Surface out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        if let Some(window) = &self.window {
            if self.time.frame() % 30 == 0 {
                window.set_title(&format!(
                    "{} - {:.0} fps - {} spheres{}",
                    WINDOW_TITLE,
                    self.time.fps(),
                    self.sim.body_count(),
                    if self.time.is_paused() { " (paused)" } else { "" }
                ));
            }
            window.request_redraw();
        }

        self.input.begin_frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
