/// The sprite catalogue.  Every asset key the game knows about is painted
/// procedurally into a 101×171 RGBA-ish buffer, matching the footprint of
/// the classic tile/character sheets the keys are named after.

use crossterm::style::Color;

use crate::surface::Drawable;

pub const ENEMY_BUG: &str = "images/enemy-bug.png";
pub const CHAR_HORN_GIRL: &str = "images/char-horn-girl.png";
pub const WATER_BLOCK: &str = "images/water-block.png";
pub const STONE_BLOCK: &str = "images/stone-block.png";
pub const GRASS_BLOCK: &str = "images/grass-block.png";

/// Every key the catalogue can paint.
pub const ALL_KEYS: [&str; 5] = [ENEMY_BUG, CHAR_HORN_GIRL, WATER_BLOCK, STONE_BLOCK, GRASS_BLOCK];

pub const SPRITE_WIDTH: u32 = 101;
pub const SPRITE_HEIGHT: u32 = 171;

/// First and one-past-last sprite rows of a tile's top face.
pub const TILE_FACE: (u32, u32) = (50, 133);

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

pub const WATER_FACE: Color = rgb(60, 120, 230);
pub const WATER_WALL: Color = rgb(30, 70, 160);
pub const STONE_FACE: Color = rgb(150, 150, 150);
pub const STONE_WALL: Color = rgb(95, 95, 100);
pub const GRASS_FACE: Color = rgb(90, 190, 70);
pub const GRASS_WALL: Color = rgb(55, 120, 45);

pub const BUG_SHELL: Color = rgb(205, 35, 35);
pub const BUG_HEAD: Color = rgb(60, 20, 20);
pub const BUG_EYE: Color = rgb(250, 250, 250);

pub const GIRL_SKIN: Color = rgb(240, 200, 160);
pub const GIRL_HAIR: Color = rgb(140, 70, 30);
pub const GIRL_HORN: Color = rgb(250, 240, 210);
pub const GIRL_DRESS: Color = rgb(220, 90, 160);

// ── Sprite ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Option<Color>>,
}

impl Sprite {
    /// A fully transparent sprite.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; (width * height) as usize],
        }
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            let idx = (y as u32 * self.width + x as u32) as usize;
            self.pixels[idx] = Some(color);
        }
    }

    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        for py in y..y + h {
            for px in x..x + w {
                self.put(px, py, color);
            }
        }
    }

    /// Axis-aligned filled ellipse centred on (cx, cy).
    fn ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Color) {
        let (rx2, ry2) = ((rx * rx) as i64, (ry * ry) as i64);
        for py in cy - ry..=cy + ry {
            for px in cx - rx..=cx + rx {
                let dx = (px - cx) as i64;
                let dy = (py - cy) as i64;
                if dx * dx * ry2 + dy * dy * rx2 <= rx2 * ry2 {
                    self.put(px, py, color);
                }
            }
        }
    }
}

impl Drawable for Sprite {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            None
        }
    }
}

// ── Catalogue ─────────────────────────────────────────────────────────────────

/// Paint the sprite for `key`, or `None` if the key is not in the catalogue.
pub fn paint(key: &str) -> Option<Sprite> {
    match key {
        ENEMY_BUG => Some(paint_bug()),
        CHAR_HORN_GIRL => Some(paint_horn_girl()),
        WATER_BLOCK => Some(paint_tile(WATER_FACE, WATER_WALL)),
        STONE_BLOCK => Some(paint_tile(STONE_FACE, STONE_WALL)),
        GRASS_BLOCK => Some(paint_tile(GRASS_FACE, GRASS_WALL)),
        _ => None,
    }
}

fn paint_tile(face: Color, wall: Color) -> Sprite {
    let mut s = Sprite::blank(SPRITE_WIDTH, SPRITE_HEIGHT);
    let (top, bottom) = TILE_FACE;
    let w = SPRITE_WIDTH as i32;
    s.rect(0, top as i32, w, (bottom - top) as i32, face);
    // Front wall, visible only on the last row of the map
    s.rect(0, bottom as i32, w, (SPRITE_HEIGHT - bottom) as i32, wall);
    s
}

fn paint_bug() -> Sprite {
    let mut s = Sprite::blank(SPRITE_WIDTH, SPRITE_HEIGHT);
    // Shell
    s.ellipse(44, 112, 40, 26, BUG_SHELL);
    // Legs
    for lx in [20, 40, 60] {
        s.rect(lx, 136, 4, 8, BUG_HEAD);
    }
    // Head, facing right (direction of travel)
    s.ellipse(86, 110, 13, 16, BUG_HEAD);
    s.ellipse(90, 104, 3, 3, BUG_EYE);
    s
}

fn paint_horn_girl() -> Sprite {
    let mut s = Sprite::blank(SPRITE_WIDTH, SPRITE_HEIGHT);
    // Horn
    s.rect(48, 58, 5, 12, GIRL_HORN);
    // Hair and face
    s.ellipse(50, 88, 24, 20, GIRL_HAIR);
    s.ellipse(50, 94, 19, 15, GIRL_SKIN);
    // Dress
    s.rect(36, 110, 29, 30, GIRL_DRESS);
    // Arms
    s.rect(28, 114, 8, 16, GIRL_SKIN);
    s.rect(65, 114, 8, 16, GIRL_SKIN);
    // Feet
    s.rect(40, 140, 8, 6, GIRL_HAIR);
    s.rect(53, 140, 8, 6, GIRL_HAIR);
    s
}
