use blackhole_core::gpu::{self, BlackHolePass, GpuInitError};
use blackhole_core::{FramePlan, SurfaceSize};
use web_sys as web;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pass: BlackHolePass,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> Result<Self, GpuInitError> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let (adapter, device, queue) = gpu::request_device(&instance, &surface).await?;
        let config = gpu::surface_config(&surface, &adapter, width, height);
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format {:?}",
            config.width,
            config.height,
            config.format
        );

        let pass = BlackHolePass::new(&device, config.format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pass,
        })
    }

    pub fn resize_if_needed(&mut self, size: SurfaceSize) {
        if !size.is_sized() {
            return;
        }
        if size.width != self.config.width || size.height != self.config.height {
            self.config.width = size.width;
            self.config.height = size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self, plan: &FramePlan) -> Result<(), wgpu::SurfaceError> {
        self.resize_if_needed(plan.viewport);
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.pass.render(&self.queue, &mut encoder, &view, plan);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
