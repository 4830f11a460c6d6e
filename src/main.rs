mod camera;
mod graphics;
mod input;
mod life;

use std::time::{Duration, Instant};

use thiserror::Error;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::camera::Camera;
use crate::graphics::GraphicsRenderer;
use crate::input::{InputHandler, KeyAction};
use crate::life::LifeGrid;

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 1024;
const STEP_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Error, Debug)]
enum AppError {
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Failed to create render surface: {0}")]
    Surface(#[from] pixels::Error),
}

fn main() -> Result<(), AppError> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Game of Life")
        .with_inner_size(LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut graphics = GraphicsRenderer::new(&window, WIDTH, HEIGHT)?;
    let mut grid = LifeGrid::new();
    let mut camera = Camera::new();
    let mut input_handler = InputHandler::new();

    log::info!("Seeded grid with {} live cells", grid.live_cells());

    let screen = (WIDTH as f32, HEIGHT as f32);
    let mut last_step = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => {
                match event {
                    WindowEvent::CloseRequested => {
                        *control_flow = ControlFlow::Exit;
                    }
                    WindowEvent::Resized(size) => {
                        graphics.resize_surface(size.width, size.height);
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        if input.state == ElementState::Pressed {
                            if let Some(key) = input.virtual_keycode {
                                if input_handler.handle_key_press(key) == KeyAction::Exit {
                                    *control_flow = ControlFlow::Exit;
                                }
                            }
                        }
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        input_handler.handle_mouse_input(button, state, &camera, &mut grid, screen);
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        let size = window.inner_size();
                        let pos = graphics
                            .window_to_buffer((position.x, position.y), (size.width, size.height));
                        input_handler.handle_cursor_moved(pos, &mut camera);
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        input_handler.handle_scroll(&delta, &mut camera, screen);
                    }
                    _ => {}
                }
            }
            Event::MainEventsCleared => {
                // The simulation ticks on wall-clock cadence; rendering runs
                // every pass so pan/zoom stay fluid while paused.
                if input_handler.is_running() && last_step.elapsed() >= STEP_INTERVAL {
                    last_step = Instant::now();
                    grid.step();
                }

                graphics.render(&camera, &grid);
                if let Err(err) = graphics.present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
