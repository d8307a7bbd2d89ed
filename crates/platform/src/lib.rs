//! Desktop shell for the Tab indentation demo: a winit window drawing
//! [`EditorView`] with egui on wgpu.
//!
//! The window repaints only when egui asks for it, either right away or
//! after a delay (caret blink), so an idle editor does not spin.

mod editor;
mod gpu;

pub use editor::{EDITOR_ID, EditorView, tab_event_from_egui};

use egui::viewport::ViewportId;
use egui_wgpu::wgpu;
use gpu::{Frame, Gpu};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tab_indent::{AttachError, IndentConfig};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::error::{EventLoopError, OsError};
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error(transparent)]
    Attach(#[from] AttachError),
    #[error("event loop: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("cannot open window: {0}")]
    Window(#[from] OsError),
    #[error("cannot create a surface for the window: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no usable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("cannot open the GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("the window surface supports no texture format")]
    NoSurfaceFormat,
}

/// When the next frame should be drawn, from egui's requested delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Repaint {
    Now,
    At(Instant),
    Idle,
}

impl Repaint {
    fn after(delay: Duration, now: Instant) -> Self {
        if delay.is_zero() {
            return Repaint::Now;
        }
        now.checked_add(delay).map_or(Repaint::Idle, Repaint::At)
    }
}

/// Window, egui input state and GPU state. They are created together once
/// the event loop resumes.
struct Shell {
    window: Arc<Window>,
    input: egui_winit::State,
    gpu: Gpu,
}

struct EditorApp {
    view: EditorView,
    egui: egui::Context,
    shell: Option<Shell>,
    failure: Option<PlatformError>,
}

impl EditorApp {
    fn open_shell(&self, event_loop: &ActiveEventLoop) -> Result<Shell, PlatformError> {
        let attrs = Window::default_attributes().with_title("Tabsmith");
        let window = Arc::new(event_loop.create_window(attrs)?);
        let input = egui_winit::State::new(
            self.egui.clone(),
            ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let gpu = Gpu::new(Arc::clone(&window))?;
        Ok(Shell { window, input, gpu })
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(shell) = self.shell.as_mut() else {
            return;
        };

        let raw = shell.input.take_egui_input(&shell.window);
        let output = self.egui.run(raw, |ctx| self.view.ui(ctx));
        shell
            .input
            .handle_platform_output(&shell.window, output.platform_output);

        let pixels_per_point = output.pixels_per_point;
        shell.gpu.paint(Frame {
            primitives: self.egui.tessellate(output.shapes, pixels_per_point),
            textures: output.textures_delta,
            pixels_per_point,
        });

        let delay = output
            .viewport_output
            .get(&ViewportId::ROOT)
            .map_or(Duration::MAX, |v| v.repaint_delay);
        match Repaint::after(delay, Instant::now()) {
            Repaint::Now => {
                event_loop.set_control_flow(ControlFlow::Wait);
                shell.window.request_redraw();
            }
            Repaint::At(when) => event_loop.set_control_flow(ControlFlow::WaitUntil(when)),
            Repaint::Idle => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

impl ApplicationHandler for EditorApp {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let (StartCause::ResumeTimeReached { .. }, Some(shell)) = (cause, &self.shell) {
            shell.window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.shell.is_some() {
            return;
        }
        match self.open_shell(event_loop) {
            Ok(shell) => {
                shell.window.request_redraw();
                self.shell = Some(shell);
            }
            Err(e) => {
                self.failure = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(shell) = self.shell.as_mut() else {
            return;
        };
        if shell.input.on_window_event(&shell.window, &event).repaint {
            shell.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => shell.gpu.resize(size),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

/// Open the editor window with Tab indentation attached using `config`, and
/// block until it is closed.
pub fn run(config: IndentConfig) -> Result<(), PlatformError> {
    let mut app = EditorApp {
        view: EditorView::new(config)?,
        egui: egui::Context::default(),
        shell: None,
        failure: None,
    };
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
