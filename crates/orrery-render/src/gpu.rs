//! wgpu bring-up and per-frame surface handling.
//!
//! [`RenderContext`] bundles the device, queue, and configured surface; the
//! error types separate unrecoverable init failures from the per-frame
//! surface conditions the render loop can ride out.

use std::sync::Arc;
use winit::window::Window;

/// Unrecoverable failures while bringing up the GPU.
#[derive(Debug, thiserror::Error)]
pub enum RenderContextError {
    /// No adapter was compatible with the surface.
    #[error("no usable GPU adapter")]
    NoAdapter,

    /// The adapter refused to hand out a device.
    #[error("device request failed: {0}")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),

    /// The window handle could not back a surface.
    #[error("surface creation failed: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
}

/// Per-frame surface conditions, mapped from wgpu's taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// Surface was lost or outdated; reconfigure and retry next frame.
    #[error("surface lost")]
    Lost,

    /// The GPU is out of memory; the loop shuts down.
    #[error("out of memory")]
    OutOfMemory,

    /// Operation timed out (recoverable, skip the frame).
    #[error("timeout")]
    Timeout,
}

/// The wgpu instance/adapter/device/queue plus the window surface.
pub struct RenderContext {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub surface_format: wgpu::TextureFormat,
}

impl RenderContext {
    /// Initialize the GPU asynchronously from a window handle. `vsync`
    /// selects Fifo presentation; otherwise the lowest-latency mode the
    /// surface offers is used.
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // The surface needs the window size before the handle moves into it.
        let initial_size = window.inner_size();
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| RenderContextError::NoAdapter)?;

        let info = adapter.get_info();
        log::info!(
            "Rendering on {} ({:?} via {:?})",
            info.name,
            info.device_type,
            info.backend
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("orrery-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let surface_format = select_preferred_srgb_format(&caps.formats);
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: initial_size.width.max(1),
            height: initial_size.height.max(1),
            present_mode: select_present_mode(&caps.present_modes, vsync),
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        Ok(Self {
            instance,
            adapter,
            device,
            queue,
            surface,
            surface_config,
            surface_format,
        })
    }

    /// Reconfigure the surface for new physical dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface_config.width = width.max(1);
        self.surface_config.height = height.max(1);
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Acquire the next surface texture, mapping wgpu's surface errors onto
    /// the recoverable/fatal taxonomy the frame loop handles.
    pub fn acquire_frame(&self) -> Result<wgpu::SurfaceTexture, SurfaceError> {
        match self.surface.get_current_texture() {
            Ok(frame) => Ok(frame),
            Err(wgpu::SurfaceError::Timeout) => Err(SurfaceError::Timeout),
            Err(wgpu::SurfaceError::OutOfMemory) => Err(SurfaceError::OutOfMemory),
            // Lost, Outdated, and anything else: reconfigure and move on.
            Err(_) => Err(SurfaceError::Lost),
        }
    }
}

/// Prefer an sRGB surface format, falling back to the first available.
fn select_preferred_srgb_format(formats: &[wgpu::TextureFormat]) -> wgpu::TextureFormat {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .unwrap_or(formats[0])
}

/// Pick a presentation mode: Fifo for vsync, otherwise Mailbox when the
/// surface offers it. Fifo is the guaranteed-available fallback.
fn select_present_mode(available: &[wgpu::PresentMode], vsync: bool) -> wgpu::PresentMode {
    if !vsync && available.contains(&wgpu::PresentMode::Mailbox) {
        wgpu::PresentMode::Mailbox
    } else {
        wgpu::PresentMode::Fifo
    }
}

/// Initialize the GPU synchronously by blocking on [`RenderContext::new`].
pub fn init_render_context_blocking(
    window: Arc<Window>,
    vsync: bool,
) -> Result<RenderContext, RenderContextError> {
    pollster::block_on(RenderContext::new(window, vsync))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_format_preferred() {
        let formats = [
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(
            select_preferred_srgb_format(&formats),
            wgpu::TextureFormat::Bgra8UnormSrgb
        );
    }

    #[test]
    fn test_first_format_when_no_srgb() {
        let formats = [
            wgpu::TextureFormat::Rgba16Float,
            wgpu::TextureFormat::Bgra8Unorm,
        ];
        assert_eq!(
            select_preferred_srgb_format(&formats),
            wgpu::TextureFormat::Rgba16Float
        );
    }

    #[test]
    fn test_vsync_selects_fifo() {
        let available = [wgpu::PresentMode::Fifo, wgpu::PresentMode::Mailbox];
        assert_eq!(
            select_present_mode(&available, true),
            wgpu::PresentMode::Fifo
        );
        assert_eq!(
            select_present_mode(&available, false),
            wgpu::PresentMode::Mailbox
        );
    }

    #[test]
    fn test_no_mailbox_falls_back_to_fifo() {
        let available = [wgpu::PresentMode::Fifo];
        assert_eq!(
            select_present_mode(&available, false),
            wgpu::PresentMode::Fifo
        );
    }
}
