use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to start the event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to create window: {0}")]
    Window(String),

    #[error("Failed to initialize OpenGL context: {0}")]
    Context(#[from] glutin::error::Error),

    #[error("Failed to initialize OpenGL: {0}")]
    Gpu(String),

    #[error("Failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("Failed to link shader program: {0}")]
    ShaderLink(String),
}
