//! Window creation and event handling via winit.
//!
//! Provides [`AppState`] which implements winit's [`ApplicationHandler`]
//! trait, and [`run_with_config`] to start the event loop. The frame loop is
//! continuous (each redraw requests the next); the animation controller
//! decides every frame whether the earth advances.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use orrery_config::Config;
use orrery_input::{ClickKind, ClickTracker, PointerState};
use orrery_render::{
    Camera, DepthBuffer, RenderContext, SolarRenderer, SurfaceError, TextureRgba, ViewportTracker,
    init_render_context_blocking,
};
use orrery_scene::builder::{CAMERA_FAR, CAMERA_FOV_Y, CAMERA_NEAR};
use orrery_scene::{SceneController, SolarScene, SpinRates};

/// Deep-space clear color behind the scene.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.08,
    a: 1.0,
};

/// Build [`WindowAttributes`] from the window config.
fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    let mut attrs = WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width,
            config.window.height,
        ));
    if config.window.fullscreen {
        attrs = attrs.with_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
    }
    attrs
}

/// Application state: window, GPU context, scene controller, and input.
pub struct AppState {
    /// The window handle, wrapped in `Arc` for sharing with the renderer.
    window: Option<Arc<Window>>,
    /// GPU context owning device, queue, and surface.
    gpu: Option<RenderContext>,
    /// Scene renderer (created once the GPU is up).
    renderer: Option<SolarRenderer>,
    /// Reverse-Z depth buffer.
    depth: Option<DepthBuffer>,
    /// Surface dimension and scale tracking.
    viewport: ViewportTracker,
    /// Fixed look-at camera.
    camera: Camera,
    /// The scene and its Idle/Spinning state machine.
    controller: SceneController,
    /// Frame-coherent pointer state.
    pointer: PointerState,
    /// Single/double-click classification.
    clicks: ClickTracker,
    /// Application start time, the clock origin for click timestamps.
    start_time: Instant,
    /// Viewer configuration.
    config: Config,
}

impl AppState {
    /// Creates the application state around a freshly built scene.
    pub fn with_config(config: Config) -> Self {
        let scene = SolarScene::build();
        let camera = Camera::new(
            scene.camera_position,
            scene.camera_target,
            CAMERA_FOV_Y,
            config.window.width as f32 / config.window.height as f32,
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        let rates = SpinRates {
            orbit_step: config.scene.orbit_step,
            spin_step: config.scene.spin_step,
        };

        Self {
            window: None,
            gpu: None,
            renderer: None,
            depth: None,
            viewport: ViewportTracker::new(config.window.width, config.window.height, 1.0),
            camera,
            controller: SceneController::new(scene, rates),
            pointer: PointerState::new(),
            clicks: ClickTracker::new(),
            start_time: Instant::now(),
            config,
        }
    }

    /// Deliver a completed left-button click: hit-test it, and stop the spin
    /// when it completes a double.
    fn on_pointer_click(&mut self) {
        let kind = self.clicks.register(self.start_time.elapsed());

        let size = self.viewport.physical_size();
        let ndc = self
            .pointer
            .normalized_coords(size.width as f32, size.height as f32);
        let ray = self.camera.pick_ray(ndc);
        if self.controller.on_click(ray) {
            info!("Earth clicked, spin started");
        }

        if kind == ClickKind::Double {
            self.controller.on_double_click();
            info!("Double-click, spin stopped");
        }
    }

    /// React to an actual viewport change: camera aspect, surface, depth.
    fn apply_resize(&mut self, width: u32, height: u32, scale_factor: f64) {
        self.camera.set_aspect_ratio(width as f32, height as f32);
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(width, height);
        }
        if let (Some(depth), Some(gpu)) = (&mut self.depth, &self.gpu) {
            depth.resize(&gpu.device, width, height);
        }
        info!("Window resized to {width}x{height} (scale: {scale_factor:.2})");
    }

    /// Encode and submit one frame.
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let result = {
            let (Some(gpu), Some(renderer), Some(depth)) =
                (&self.gpu, &self.renderer, &self.depth)
            else {
                return;
            };

            renderer.update(&gpu.queue, self.controller.scene(), &self.camera);

            match gpu.acquire_frame() {
                Ok(frame) => {
                    let view = frame
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());
                    let mut encoder =
                        gpu.device
                            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                                label: Some("frame-encoder"),
                            });
                    {
                        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                            label: Some("solar-pass"),
                            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                view: &view,
                                resolve_target: None,
                                ops: wgpu::Operations {
                                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                                    store: wgpu::StoreOp::Store,
                                },
                                depth_slice: None,
                            })],
                            depth_stencil_attachment: Some(
                                wgpu::RenderPassDepthStencilAttachment {
                                    view: &depth.view,
                                    depth_ops: Some(wgpu::Operations {
                                        load: wgpu::LoadOp::Clear(DepthBuffer::CLEAR_VALUE),
                                        store: wgpu::StoreOp::Store,
                                    }),
                                    stencil_ops: None,
                                },
                            ),
                            timestamp_writes: None,
                            occlusion_query_set: None,
                            multiview_mask: None,
                        });
                        renderer.render(&mut pass);
                    }
                    gpu.queue.submit(std::iter::once(encoder.finish()));
                    frame.present();
                    Ok(())
                }
                Err(e) => Err(e),
            }
        };

        match result {
            Ok(()) => {}
            Err(SurfaceError::Lost) => {
                warn!("Surface lost, reconfiguring");
                let size = self.viewport.physical_size();
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size.width, size.height);
                }
            }
            Err(SurfaceError::OutOfMemory) => {
                error!("GPU out of memory");
                event_loop.exit();
            }
            Err(SurfaceError::Timeout) => {
                warn!("Surface timeout, skipping frame");
            }
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = window_attributes_from_config(&self.config);
            let window = event_loop
                .create_window(attrs)
                .expect("Failed to create window");
            let window = Arc::new(window);

            let scale_factor = window.scale_factor();
            let inner_size = window.inner_size();
            self.viewport = ViewportTracker::new(inner_size.width, inner_size.height, scale_factor);
            info!(
                "Viewport initialized: {}x{} (scale: {:.2})",
                inner_size.width, inner_size.height, scale_factor
            );

            match init_render_context_blocking(window.clone(), self.config.window.vsync) {
                Ok(ctx) => {
                    let (sun_tex, earth_tex) = fetch_surface_maps(&self.config);
                    self.renderer = Some(SolarRenderer::new(
                        &ctx.device,
                        &ctx.queue,
                        ctx.surface_format,
                        self.controller.scene(),
                        sun_tex.as_ref(),
                        earth_tex.as_ref(),
                    ));
                    let size = self.viewport.physical_size();
                    self.depth = Some(DepthBuffer::new(&ctx.device, size.width, size.height));
                    self.gpu = Some(ctx);
                }
                Err(e) => {
                    error!("GPU initialization failed: {e}");
                    event_loop.exit();
                    return;
                }
            }

            // Establish sizing unconditionally at startup, before the first
            // resize event arrives.
            let size = self.viewport.physical_size();
            self.camera
                .set_aspect_ratio(size.width as f32, size.height as f32);

            window.request_redraw();
            self.window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(resize) = self.viewport.handle_resize(new_size.width, new_size.height)
                {
                    self.apply_resize(
                        resize.physical.width,
                        resize.physical.height,
                        resize.scale_factor,
                    );
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(window) = &self.window {
                    let new_inner = window.inner_size();
                    if let Some(resize) = self.viewport.handle_scale_factor_changed(
                        scale_factor,
                        new_inner.width,
                        new_inner.height,
                    ) {
                        self.apply_resize(
                            resize.physical.width,
                            resize.physical.height,
                            resize.scale_factor,
                        );
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::CursorEntered { .. } => {
                self.pointer.on_cursor_entered();
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.on_cursor_left();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.pointer.on_button(button, state);
                if button == MouseButton::Left && state == ElementState::Released {
                    self.on_pointer_click();
                }
            }
            WindowEvent::RedrawRequested => {
                // Animation state advances before the draw that shows it.
                self.controller.advance_frame();
                self.render_frame(event_loop);
                self.pointer.clear_transients();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Fetch the sun and earth surface maps, best-effort.
fn fetch_surface_maps(config: &Config) -> (Option<TextureRgba>, Option<TextureRgba>) {
    if !config.scene.fetch_textures {
        info!("Texture fetching disabled, rendering untextured bodies");
        return (None, None);
    }
    let sun = orrery_assets::fetch_rgba_image(&config.scene.sun_texture_url);
    let earth = orrery_assets::fetch_rgba_image(&config.scene.earth_texture_url);
    (
        sun.map(|img| TextureRgba {
            width: img.width,
            height: img.height,
            pixels: img.rgba,
        }),
        earth.map(|img| TextureRgba {
            width: img.width,
            height: img.height,
            pixels: img.rgba,
        }),
    )
}

/// Creates an event loop and runs the application with the given config.
///
/// This function blocks until the window is closed.
pub fn run_with_config(config: Config) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = AppState::with_config(config);
    event_loop.run_app(&mut app).expect("Event loop failed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_scene::AnimationState;

    #[test]
    fn test_window_attributes_follow_config() {
        let mut config = Config::default();
        config.window.title = "Test Orrery".to_string();
        config.window.width = 640;
        config.window.height = 480;
        let attrs = window_attributes_from_config(&config);
        assert_eq!(attrs.title, "Test Orrery");
        assert!(attrs.fullscreen.is_none());
    }

    #[test]
    fn test_fullscreen_config_sets_borderless() {
        let mut config = Config::default();
        config.window.fullscreen = true;
        let attrs = window_attributes_from_config(&config);
        assert!(attrs.fullscreen.is_some());
    }

    #[test]
    fn test_fresh_app_state_is_idle() {
        let app = AppState::with_config(Config::default());
        assert_eq!(app.controller.state(), AnimationState::Idle);
        assert!(app.window.is_none());
        assert!(app.gpu.is_none());
    }

    #[test]
    fn test_camera_starts_on_the_scene_placement() {
        let app = AppState::with_config(Config::default());
        let scene = app.controller.scene();
        assert_eq!(app.camera.position, scene.camera_position);
        assert_eq!(app.camera.target, scene.camera_target);
    }
}
