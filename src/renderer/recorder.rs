use std::ops::Range;

use super::{Backend, PolygonMode, Uniforms};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Viewport(u32, u32),
    PolygonMode(PolygonMode),
    Upload(usize),
    Clear([f32; 4]),
    BindPipeline,
    Uniforms(Uniforms),
    Draw(Range<u32>),
}

/// Records commands and keeps the byte image a GPU buffer would hold.
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<Command>,
    pub gpu_vertices: Vec<u8>,
}

impl Backend for Recorder {
    fn set_viewport(&mut self, width: u32, height: u32) {
        self.commands.push(Command::Viewport(width, height));
    }

    fn set_polygon_mode(&mut self, mode: PolygonMode) {
        self.commands.push(Command::PolygonMode(mode));
    }

    fn upload_vertices(&mut self, bytes: &[u8]) {
        self.gpu_vertices = bytes.to_vec();
        self.commands.push(Command::Upload(bytes.len()));
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.commands.push(Command::Clear(color));
    }

    fn bind_pipeline(&mut self) {
        self.commands.push(Command::BindPipeline);
    }

    fn set_uniforms(&mut self, uniforms: Uniforms) {
        self.commands.push(Command::Uniforms(uniforms));
    }

    fn draw(&mut self, vertices: Range<u32>) {
        self.commands.push(Command::Draw(vertices));
    }
}
