use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};
use log::{debug, error, info};

use crate::engine::graphics::Renderer;
use crate::engine::input::InputHandler;
use crate::engine::window::WindowManager;
use crate::game::config::{GameConfig, WindowConfig};
use crate::game::error::GameResult;
use crate::game::state::GameState;
use crate::game::world::session::TableSession;

pub struct App {
    window_config: WindowConfig,
    window_manager: WindowManager,
    surface: Option<wgpu::Surface<'static>>,
    renderer: Option<Renderer>,
    input_handler: InputHandler,
    game_state: GameState,
    session: TableSession,
}

impl App {
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let session = TableSession::new(&config)?;
        Ok(Self {
            window_config: config.window,
            window_manager: WindowManager::new(),
            surface: None,
            renderer: None,
            input_handler: InputHandler::new(),
            game_state: GameState::new(),
            session,
        })
    }

    async fn init_wgpu(&mut self, window: Arc<Window>) -> Result<(), Box<dyn std::error::Error>> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window).map_err(|e| {
            error!("Failed to create surface: {:?}", e);
            e
        })?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| {
                error!("Failed to request adapter");
                "no suitable graphics adapter"
            })?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .map_err(|e| {
                error!("Failed to request device: {:?}", e);
                e
            })?;

        let renderer = Renderer::new(
            device,
            queue,
            &surface,
            &adapter,
            size,
            self.window_config.vsync,
            self.window_config.clear_color,
        );
        info!("Renderer ready ({}x{})", size.width, size.height);

        self.surface = Some(surface);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.window_manager.set_window_size(new_size);
            if let (Some(renderer), Some(surface)) = (&mut self.renderer, &self.surface) {
                renderer.resize(new_size, surface);
            }
        }
    }

    fn screen_size(&self) -> (f32, f32) {
        self.window_manager
            .get_size()
            .map(|s| (s.width as f32, s.height as f32))
            .unwrap_or((self.window_config.width as f32, self.window_config.height as f32))
    }

    fn apply_cursor_request(&mut self, lock: Option<bool>) {
        if let Some(lock) = lock {
            self.window_manager.set_cursor_locked(lock);
        }
    }

    fn redraw(&mut self) {
        let dt = self.game_state.begin_frame();
        let frame = self.input_handler.take_frame();

        if frame.was_pressed(KeyCode::F3) {
            self.game_state.toggle_fps_display();
        }
        if frame.was_pressed(KeyCode::F11) {
            let fullscreen = self.game_state.toggle_fullscreen();
            self.window_manager.set_fullscreen(fullscreen);
        }

        let screen = self.screen_size();
        let holds_cursor = self.window_manager.is_cursor_locked();
        let requests = self.session.frame(dt, &frame, holds_cursor, screen);
        self.apply_cursor_request(requests.cursor_lock);

        if let (Some(renderer), Some(surface)) = (&self.renderer, &self.surface) {
            let view_proj = self.session.view.camera.view_proj_mat(renderer.aspect());
            let instances = self.session.scene_instances();
            let overlay = self.session.overlay_instances(screen);
            match renderer.render(surface, view_proj, &instances, &overlay) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    debug!("Surface lost or outdated, reconfiguring");
                    renderer.reconfigure(surface);
                }
                Err(e) => error!("Render error: {:?}", e),
            }
        }
        self.window_manager.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_manager.get_window().is_some() {
            return;
        }
        let window = match self.window_manager.create_window(
            event_loop,
            &self.window_config.title,
            self.window_config.width,
            self.window_config.height,
        ) {
            Ok(window) => window,
            Err(_) => {
                error!("Failed to create window, exiting");
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = pollster::block_on(self.init_wgpu(window)) {
            error!("Graphics initialisation failed: {}", e);
            event_loop.exit();
            return;
        }

        let requests = self.session.start();
        self.apply_cursor_request(requests.cursor_lock);
        self.window_manager.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::Resized(physical_size) => self.resize(physical_size),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    self.input_handler.handle_keyboard_input_event(keycode, pressed);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input_handler.handle_mouse_button(button, state);
            }
            WindowEvent::Focused(focused) => {
                if !focused {
                    self.input_handler.clear_held();
                    self.window_manager.handle_focus_lost();
                    debug!("Window lost focus, cursor released");
                }
            }
            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input_handler.handle_mouse_motion(delta);
        }
    }
}
