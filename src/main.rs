mod app;
mod error;
mod input;
mod renderer;
mod state;

use app::App;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{}", err);
        println!("{}", err);
        std::process::exit(-1);
    }
    println!("closed");
}

fn run() -> error::Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    app.finish()
}
