/// Presentation layer: all terminal I/O lives here.
///
/// The game renders into an in-memory `Canvas`; this module only
/// downsamples that canvas onto terminal cells.  Each cell shows two
/// vertically stacked samples as `▀` (foreground = upper sample,
/// background = lower sample).

use std::io::Write;

use bug_crossing::surface::{Canvas, Drawable, BLACK};
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

const C_HINT: Color = Color::DarkGrey;
const HINT: &str = "← ↑ → ↓ : Move   Q : Quit";

// ── Layout ────────────────────────────────────────────────────────────────────

/// How the canvas maps onto the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Canvas pixels per sample, both axes.
    pub step: u32,
    pub cols: u16,
    pub rows: u16,
    /// Left padding that centres the picture.
    pub left: u16,
}

/// Pick the smallest sampling step that fits the whole canvas into a
/// `width`×`height` terminal, keeping the last row for the hint line.
pub fn layout(canvas_w: u32, canvas_h: u32, width: u16, height: u16) -> Layout {
    let avail_cols = (width as u32).max(1);
    let avail_rows = (height.saturating_sub(1) as u32).max(1);

    let step = canvas_w.div_ceil(avail_cols)
        .max(canvas_h.div_ceil(avail_rows * 2))
        .max(1);
    let cols = canvas_w.div_ceil(step);
    let rows = canvas_h.div_ceil(step * 2);

    Layout {
        step,
        cols: cols as u16,
        rows: rows as u16,
        left: (avail_cols.saturating_sub(cols) / 2) as u16,
    }
}

// ── Presenter ─────────────────────────────────────────────────────────────────

pub struct Display {
    last_size: Option<(u16, u16)>,
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Display {
    pub fn new() -> Self {
        Self { last_size: None }
    }

    /// Draw one complete frame for a `width`×`height` terminal.
    pub fn present<W: Write>(
        &mut self,
        out: &mut W,
        canvas: &Canvas,
        width: u16,
        height: u16,
    ) -> std::io::Result<()> {
        // Full clear only when the picture might not cover the old one
        if self.last_size != Some((width, height)) {
            out.queue(terminal::Clear(terminal::ClearType::All))?;
            self.last_size = Some((width, height));
        }

        let lay = layout(canvas.width(), canvas.height(), width, height);
        draw_canvas(out, canvas, &lay)?;
        draw_controls_hint(out, height)?;

        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
        out.flush()?;
        Ok(())
    }
}

fn draw_canvas<W: Write>(out: &mut W, canvas: &Canvas, lay: &Layout) -> std::io::Result<()> {
    let mut fg: Option<Color> = None;
    let mut bg: Option<Color> = None;

    for row in 0..lay.rows {
        out.queue(cursor::MoveTo(lay.left, row))?;
        let top_y = row as u32 * 2 * lay.step;
        let bottom_y = top_y + lay.step;

        for col in 0..lay.cols {
            let x = col as u32 * lay.step;
            let top = canvas.get(x, top_y).unwrap_or(BLACK);
            let bottom = canvas.get(x, bottom_y).unwrap_or(BLACK);

            if fg != Some(top) {
                out.queue(style::SetForegroundColor(top))?;
                fg = Some(top);
            }
            if bg != Some(bottom) {
                out.queue(style::SetBackgroundColor(bottom))?;
                bg = Some(bottom);
            }
            out.queue(Print('▀'))?;
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(HINT))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_fits_small_terminal() {
        let lay = layout(505, 606, 80, 24);
        // 606 px over 23 rows × 2 samples → 14 px per sample
        assert_eq!(lay.step, 14);
        assert!(lay.cols <= 80);
        assert!(lay.rows <= 23);
        assert_eq!(lay.left, (80 - lay.cols) / 2);
    }

    #[test]
    fn layout_uses_finer_step_on_large_terminal() {
        let lay = layout(505, 606, 250, 80);
        assert_eq!(lay.step, 4);
        assert_eq!(lay.cols, 127);
        assert_eq!(lay.rows, 76);
    }

    #[test]
    fn layout_survives_degenerate_terminal() {
        let lay = layout(505, 606, 0, 0);
        assert!(lay.step >= 1);
        assert_eq!(lay.cols, 1);
        assert_eq!(lay.rows, 1);
    }

    #[test]
    fn present_emits_half_blocks_and_hint() {
        let canvas = Canvas::new(505, 606);
        let mut buf: Vec<u8> = Vec::new();
        let mut display = Display::new();
        display.present(&mut buf, &canvas, 80, 24).unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains('▀'));
        assert!(text.contains("Q : Quit"));
    }

    #[test]
    fn default_display_clears_on_first_frame() {
        let canvas = Canvas::new(505, 606);
        let mut buf: Vec<u8> = Vec::new();
        let mut display = Display::default();
        display.present(&mut buf, &canvas, 80, 24).unwrap();
        // ESC [ 2 J
        assert!(String::from_utf8_lossy(&buf).contains("\x1b[2J"));

        buf.clear();
        display.present(&mut buf, &canvas, 80, 24).unwrap();
        assert!(!String::from_utf8_lossy(&buf).contains("\x1b[2J"));
    }
}
