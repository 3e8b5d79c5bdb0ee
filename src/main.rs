//! Radar Sweep entry point
//!
//! Opens the window, sets up wgpu and runs one full sweep per redraw.

use std::sync::Arc;

use anyhow::Result;
use radar_sweep::renderer::RenderState;
use radar_sweep::sim::RandomSource;
use radar_sweep::{FrameLoop, InputEvent, Key, RadarError, RadarSimulation, Settings};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Application state
struct App {
    sim: RadarSimulation,
    frame_loop: FrameLoop,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    /// Startup failure, reported after the event loop exits
    error: Option<RadarError>,
}

impl App {
    fn new(sim: RadarSimulation) -> Self {
        let frame_loop = FrameLoop::new(sim.settings.frame_delay());
        Self {
            sim,
            frame_loop,
            window: None,
            render_state: None,
            error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RadarError> {
        let (width, height) = self.sim.size;
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title("Radar")
                    .with_inner_size(PhysicalSize::new(width, height)),
            )?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render_state =
            pollster::block_on(RenderState::new(surface, &adapter, size.width, size.height))?;

        // The window manager may not honor the requested size
        if (size.width, size.height) != self.sim.size {
            self.sim.handle_event(InputEvent::Resized {
                width: size.width,
                height: size.height,
            });
        }

        window.request_redraw();
        self.window = Some(window);
        self.render_state = Some(render_state);
        Ok(())
    }
}

/// Map a key by physical position, ignoring the keyboard layout
fn physical_key(event: &KeyEvent) -> Key {
    match event.physical_key {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::KeyQ) => Key::Q,
        _ => Key::Other,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_graphics(event_loop) {
            log::error!("Startup failed: {}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.sim.handle_event(InputEvent::CloseRequested),
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
                self.sim.handle_event(InputEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state == ElementState::Pressed;
                if pressed {
                    if let Some(text) = &event.text {
                        for c in text.chars() {
                            self.sim.handle_event(InputEvent::Char(c));
                        }
                    }
                }
                self.sim.handle_event(InputEvent::Key {
                    key: physical_key(&event),
                    pressed,
                });
            }
            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(render_state)) =
                    (self.window.as_ref(), self.render_state.as_mut())
                {
                    self.frame_loop.run_cycle(&mut self.sim, render_state);
                    window.request_redraw();
                }
            }
            _ => {}
        }

        if self.sim.should_close() {
            log::info!("Closing after {} frames", self.frame_loop.frames());
            event_loop.exit();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("wgpu_hal", log::LevelFilter::Warn)
        .filter_module("naga", log::LevelFilter::Warn)
        .filter_module("winit", log::LevelFilter::Warn)
        .init();

    let settings = Settings::default();
    let rng = RandomSource::from_clock();
    log::info!(
        "Radar Sweep starting: {}x{}, {} motion, seed {}",
        settings.width,
        settings.height,
        settings.motion.as_str(),
        rng.seed()
    );

    let mut app = App::new(RadarSimulation::new(settings, rng));

    let event_loop = EventLoop::new().map_err(RadarError::from)?;
    event_loop.run_app(&mut app).map_err(RadarError::from)?;

    if let Some(e) = app.error.take() {
        return Err(e.into());
    }
    Ok(())
}
