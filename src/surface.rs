/// Drawing primitives: anything that can be blitted (`Drawable`), anything
/// that can be drawn onto (`Surface`), and `Canvas`, an in-memory RGB
/// framebuffer that is both.

use crossterm::style::Color;

/// Width of the play canvas in pixels (5 columns × 101).
pub const CANVAS_WIDTH: u32 = 505;
/// Height of the play canvas in pixels.
pub const CANVAS_HEIGHT: u32 = 606;

pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };

/// A read-only pixel source.  `None` means transparent.
pub trait Drawable {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel(&self, x: u32, y: u32) -> Option<Color>;
}

/// A destination for blits and solid fills.  Coordinates may fall partly
/// (or entirely) off the surface; anything outside is clipped.
pub trait Surface {
    fn draw_image(&mut self, image: &dyn Drawable, x: i32, y: i32);
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color);
}

// ── Canvas ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    buffer: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![BLACK; (width * height) as usize],
        }
    }

    /// A canvas with the fixed play-area dimensions.
    pub fn play_area() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.buffer[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            let idx = (y as u32 * self.width + x as u32) as usize;
            self.buffer[idx] = color;
        }
    }
}

impl Drawable for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.get(x, y)
    }
}

impl Surface for Canvas {
    fn draw_image(&mut self, image: &dyn Drawable, x: i32, y: i32) {
        // Only walk the part of the image that lands on the canvas
        let x0 = (-x).max(0) as u32;
        let y0 = (-y).max(0) as u32;
        let x1 = image.width().min((self.width as i32 - x).max(0) as u32);
        let y1 = image.height().min((self.height as i32 - y).max(0) as u32);

        for sy in y0..y1 {
            for sx in x0..x1 {
                if let Some(color) = image.pixel(sx, sy) {
                    self.set(x + sx as i32, y + sy as i32, color);
                }
            }
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        for py in y..y + h as i32 {
            for px in x..x + w as i32 {
                self.set(px, py, color);
            }
        }
    }
}
