use std::sync::Arc;

use blackhole_core::gpu::{self, BlackHolePass};
use blackhole_core::{Driver, EventQueue, FramePlan, FrameStats, InputEvent, SurfaceSize};
use instant::Instant;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

struct GpuState {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pass: BlackHolePass,
}

impl GpuState {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone())?;
        let (adapter, device, queue) = gpu::request_device(&instance, &surface).await?;
        let config = gpu::surface_config(&surface, &adapter, size.width, size.height);
        surface.configure(&device, &config);
        let pass = BlackHolePass::new(&device, config.format);
        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pass,
        })
    }

    fn size(&self) -> SurfaceSize {
        let size = self.window.inner_size();
        SurfaceSize::new(size.width, size.height)
    }

    fn resize_if_needed(&mut self, size: SurfaceSize) {
        if !size.is_sized() {
            return;
        }
        if size.width != self.config.width || size.height != self.config.height {
            self.config.width = size.width;
            self.config.height = size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn render(&mut self, plan: &FramePlan) -> Result<(), wgpu::SurfaceError> {
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

struct App {
    gpu: GpuState,
    driver: Driver,
    events: EventQueue,
    stats: FrameStats,
    last_instant: Instant,
}

impl App {
    fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        if let Some(fps) = self.stats.record(dt_sec) {
            log::debug!("[frame] {:.1} fps, t={:.2}", fps, self.driver.time());
        }

        let size = self.gpu.size();
        let Some(plan) = self.driver.tick(&mut self.events, size) else {
            return;
        };
        if !plan.should_draw() {
            return;
        }
        if let Err(e) = self.gpu.render(&plan) {
            log::error!("render error: {:?}", e);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Black Hole")
            .with_inner_size(LogicalSize::new(960.0, 640.0))
            .build(&event_loop)?,
    );

    let gpu = pollster::block_on(GpuState::new(window.clone()))?;
    let mut driver = Driver::new();
    driver.start();
    let mut app = App {
        gpu,
        driver,
        events: EventQueue::new(),
        stats: FrameStats::new(),
        last_instant: Instant::now(),
    };

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                app.events.push(InputEvent::PointerMove {
                    x: position.x as f32,
                });
            }
            WindowEvent::RedrawRequested => app.frame(),
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
