use std::num::NonZeroU32;

use fps_counter::FPSCounter;
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::{Display, DisplayApiPreference};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use rand::rngs::ThreadRng;
use rand::Rng;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawWindowHandle};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::error::{Error, Result};
use crate::input::{Bindings, FrameInput, Keyboard};
use crate::renderer::{Backend, GlBackend, Renderer};
use crate::state::{FrameActions, RenderState};

const SCR_WIDTH: u32 = 800;
const SCR_HEIGHT: u32 = 600;
const TITLE: &str = "CG Project with Interaction";
const DEPTH_BITS: u8 = 24;

struct GlWindow {
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl GlWindow {
    fn resize(&self, size: PhysicalSize<u32>) -> bool {
        match (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
            (Some(width), Some(height)) => {
                self.surface.resize(&self.context, width, height);
                true
            }
            _ => false,
        }
    }

    fn swap_buffers(&self) {
        if let Err(err) = self.surface.swap_buffers(&self.context) {
            log::error!("swap_buffers failed: {}", err);
        }
    }
}

pub struct App {
    bindings: Bindings,
    keyboard: Keyboard,
    state: RenderState,
    rng: ThreadRng,
    fps_counter: FPSCounter,
    // Declared before `gl_window`: GL objects go while the context is alive.
    renderer: Option<Renderer<GlBackend>>,
    gl_window: Option<GlWindow>,
    error: Option<Error>,
}

impl App {
    pub fn new() -> Self {
        App {
            bindings: Bindings::default(),
            keyboard: Keyboard::new(),
            state: RenderState::default(),
            rng: rand::rng(),
            fps_counter: FPSCounter::new(),
            renderer: None,
            gl_window: None,
            error: None,
        }
    }

    pub fn finish(self) -> Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (gl_window, gl) = create_gl_window(event_loop)?;
        let mut renderer = Renderer::new(GlBackend::new(gl)?);

        let size = gl_window.window.inner_size();
        renderer.resize(size.width, size.height);
        log::info!("window created: {}x{}", size.width, size.height);

        gl_window.window.request_redraw();
        self.renderer = Some(renderer);
        self.gl_window = Some(gl_window);
        Ok(())
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        let (Some(gl_window), Some(renderer)) = (&self.gl_window, &mut self.renderer) else {
            return;
        };
        if gl_window.resize(size) {
            renderer.resize(size.width, size.height);
            log::debug!("resized to {}x{}", size.width, size.height);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(gl_window), Some(renderer)) = (&self.gl_window, &mut self.renderer) else {
            return;
        };

        let actions = run_frame(
            &self.keyboard,
            &self.bindings,
            &mut self.state,
            renderer,
            &mut self.rng,
        );
        gl_window.swap_buffers();
        if actions.quit {
            event_loop.exit();
        }

        log::trace!("frame {}: {} fps", renderer.frame(), self.fps_counter.tick());
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gl_window.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            self.error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::Focused(false) => self.keyboard.release_all(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => self.keyboard.update(code, state.is_pressed()),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(gl_window) = &self.gl_window {
            gl_window.window.request_redraw();
        }
    }

    fn exiting(&mut self, _: &ActiveEventLoop) {
        self.renderer = None;
        self.gl_window = None;
    }
}

fn create_gl_window(event_loop: &ActiveEventLoop) -> Result<(GlWindow, glow::Context)> {
    let window_attributes = Window::default_attributes()
        .with_title(TITLE)
        .with_inner_size(PhysicalSize::new(SCR_WIDTH, SCR_HEIGHT));
    let window = event_loop
        .create_window(window_attributes)
        .map_err(|err| Error::Window(err.to_string()))?;

    let raw_display_handle = window
        .display_handle()
        .map_err(|err| Error::Window(err.to_string()))?
        .as_raw();
    let raw_window_handle = window
        .window_handle()
        .map_err(|err| Error::Window(err.to_string()))?
        .as_raw();

    let preference = api_preference(raw_window_handle);
    let display = unsafe { Display::new(raw_display_handle, preference)? };

    let template = ConfigTemplateBuilder::new()
        .with_depth_size(DEPTH_BITS)
        .compatible_with_native_window(raw_window_handle)
        .build();
    let config = first_config(unsafe { display.find_configs(template)? })?;
    log::debug!("using GL config: {:?}", config);

    let context_attributes = ContextAttributesBuilder::new()
        .with_profile(GlProfile::Core)
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .build(Some(raw_window_handle));
    let context = unsafe { display.create_context(&config, &context_attributes)? };

    let (width, height): (u32, u32) = window.inner_size().into();
    let surface_attributes = SurfaceAttributesBuilder::<WindowSurface>::new().build(
        raw_window_handle,
        NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
        NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
    );
    let surface = unsafe { display.create_window_surface(&config, &surface_attributes)? };
    let context = context.make_current(&surface)?;

    if let Err(err) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
        log::warn!("failed to enable vsync: {}", err);
    }

    let gl = unsafe {
        glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name))
    };

    Ok((
        GlWindow {
            surface,
            context,
            window,
        },
        gl,
    ))
}

// Windows is the only platform that needs the window handle to create a display.
#[cfg(target_os = "windows")]
fn api_preference(window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::WglThenEgl(Some(window))
}

#[cfg(target_os = "linux")]
fn api_preference(_: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::EglThenGlx(Box::new(winit::platform::x11::register_xlib_error_hook))
}

#[cfg(target_os = "macos")]
fn api_preference(_: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Cgl
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn api_preference(_: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Egl
}

fn first_config(mut configs: impl Iterator<Item = Config>) -> Result<Config> {
    configs
        .next()
        .ok_or_else(|| Error::Window("no GL config matches the window and depth buffer".to_owned()))
}

/// Samples the keyboard, advances `state` and renders one frame.
fn run_frame<B: Backend>(
    keyboard: &Keyboard,
    bindings: &Bindings,
    state: &mut RenderState,
    renderer: &mut Renderer<B>,
    rng: &mut impl Rng,
) -> FrameActions {
    let input = FrameInput::sample(keyboard, bindings);
    let actions = state.update(&input);
    renderer.render(state, &actions, rng);
    actions
}
