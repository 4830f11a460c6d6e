use winit::event::{ElementState, MouseButton, MouseScrollDelta, VirtualKeyCode};

use crate::camera::Camera;
use crate::life::LifeGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Exit,
}

/// Pan and cursor position captured when the primary button went down.
/// Motion recomputes the pan from here absolutely, so a long drag cannot
/// accumulate rounding drift.
#[derive(Debug, Clone, Copy)]
struct DragOrigin {
    cursor: (f32, f32),
    pan: (f32, f32),
}

/// Consumes pointer/keyboard events and drives the camera, the grid
/// editor, and the Running/Paused state.
pub struct InputHandler {
    run_state: RunState,
    cursor: (f32, f32),
    drag: Option<DragOrigin>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            run_state: RunState::Running,
            cursor: (0.0, 0.0),
            drag: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn handle_key_press(&mut self, key: VirtualKeyCode) -> KeyAction {
        match key {
            VirtualKeyCode::Space => {
                self.run_state = match self.run_state {
                    RunState::Running => RunState::Paused,
                    RunState::Paused => RunState::Running,
                };
                log::debug!("Run state: {:?}", self.run_state);
                KeyAction::None
            }
            VirtualKeyCode::Escape => KeyAction::Exit,
            _ => KeyAction::None,
        }
    }

    /// Primary button drags the view; secondary button edits cells, but
    /// only while paused. A secondary click while running, or one that
    /// lands off the grid, does nothing.
    pub fn handle_mouse_input(
        &mut self,
        button: MouseButton,
        state: ElementState,
        camera: &Camera,
        grid: &mut LifeGrid,
        screen: (f32, f32),
    ) {
        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => {
                self.drag = Some(DragOrigin {
                    cursor: self.cursor,
                    pan: (camera.pan_x, camera.pan_y),
                });
            }
            (MouseButton::Left, ElementState::Released) => {
                self.drag = None;
            }
            (MouseButton::Right, ElementState::Pressed) => {
                if self.run_state == RunState::Paused {
                    let (wx, wy) = camera.screen_to_world(self.cursor.0, self.cursor.1, screen);
                    if let Some(hit) = camera.sample(wx, wy) {
                        grid.toggle(hit.row, hit.col);
                    }
                }
            }
            _ => {}
        }
    }

    pub fn handle_cursor_moved(&mut self, pos: (f32, f32), camera: &mut Camera) {
        self.cursor = pos;
        if let Some(drag) = self.drag {
            camera.pan_x = drag.pan.0 + (drag.cursor.0 - pos.0) / camera.zoom;
            camera.pan_y = drag.pan.1 + (drag.cursor.1 - pos.1) / camera.zoom;
        }
    }

    pub fn handle_scroll(
        &mut self,
        delta: &MouseScrollDelta,
        camera: &mut Camera,
        screen: (f32, f32),
    ) {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        };
        if amount != 0.0 {
            camera.zoom_at(self.cursor, screen, amount);
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
