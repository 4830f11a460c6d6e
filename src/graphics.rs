use pixels::{Pixels, SurfaceTexture};
use rayon::prelude::*;
use winit::window::Window;

use crate::camera::Camera;
use crate::life::LifeGrid;

const BORDER_COLOR: [u8; 4] = [0xcf, 0xcf, 0xcf, 0xff];
const ALIVE_COLOR: [u8; 4] = [0x7f, 0xff, 0x7f, 0xff];
const DEAD_COLOR: [u8; 4] = [0x3f, 0x3f, 0x3f, 0xff];

/// Owns the fixed-resolution frame buffer and its window surface.
pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// The buffer resolution is fixed; only the surface follows the window.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
    }

    /// Scales a physical window position into buffer pixel coordinates.
    pub fn window_to_buffer(&self, pos: (f64, f64), window_size: (u32, u32)) -> (f32, f32) {
        let bx = pos.0 as f32 * self.width as f32 / window_size.0.max(1) as f32;
        let by = pos.1 as f32 * self.height as f32 / window_size.1.max(1) as f32;
        (bx, by)
    }

    /// Fills the frame: every pixel is projected through the camera and
    /// colored border > alive > dead. Pixels that land outside the grid
    /// take the dead color, so the grid floats on the same background.
    /// Each row writes a disjoint slice, so rows run in parallel.
    pub fn render(&mut self, camera: &Camera, grid: &LifeGrid) {
        let screen = (self.width as f32, self.height as f32);
        let row_bytes = self.width as usize * 4;
        let frame = self.pixels.frame_mut();

        frame.par_chunks_mut(row_bytes).enumerate().for_each(|(py, row)| {
            for (px, pixel) in row.chunks_exact_mut(4).enumerate() {
                let color = pixel_color(camera, grid, px as f32, py as f32, screen);
                pixel.copy_from_slice(&color);
            }
        });
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

fn pixel_color(
    camera: &Camera,
    grid: &LifeGrid,
    px: f32,
    py: f32,
    screen: (f32, f32),
) -> [u8; 4] {
    let (wx, wy) = camera.screen_to_world(px, py, screen);
    match camera.sample(wx, wy) {
        Some(hit) if hit.border => BORDER_COLOR,
        Some(hit) if grid.alive(hit.row, hit.col) => ALIVE_COLOR,
        _ => DEAD_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: (f32, f32) = (1024.0, 1024.0);

    #[test]
    fn grid_line_pixels_take_the_border_color() {
        let camera = Camera::new();
        let grid = LifeGrid::new();
        // The screen-center pixel lands a fraction into cell (50, 50),
        // inside the border band along the cell's left/top edges.
        assert_eq!(pixel_color(&camera, &grid, 512.0, 512.0, SCREEN), BORDER_COLOR);
    }

    #[test]
    fn live_cell_interior_takes_the_alive_color() {
        let camera = Camera::new();
        let grid = LifeGrid::new();
        // World (10, 10) is the middle of seeded cell (50, 50); pixel
        // 521.5 projects there at the default view.
        assert_eq!(pixel_color(&camera, &grid, 521.5, 521.5, SCREEN), ALIVE_COLOR);
    }

    #[test]
    fn dead_cell_interior_takes_the_dead_color() {
        let camera = Camera::new();
        let mut grid = LifeGrid::new();
        grid.toggle(50, 50);
        assert_eq!(pixel_color(&camera, &grid, 521.5, 521.5, SCREEN), DEAD_COLOR);
    }

    #[test]
    fn pixels_outside_the_grid_render_as_dead_background() {
        let mut camera = Camera::new();
        camera.pan_x = 1.0e5;
        let grid = LifeGrid::new();
        assert_eq!(pixel_color(&camera, &grid, 512.0, 512.0, SCREEN), DEAD_COLOR);
        assert_eq!(pixel_color(&camera, &grid, 0.0, 1023.0, SCREEN), DEAD_COLOR);
    }
}
