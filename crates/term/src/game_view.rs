//! GameView: maps a `GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It only reads the session through its query
//! surface: grid size, `attribute_at` and the lookahead piece.

use crate::core::{GameSession, PieceSource};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Attribute, ShapeKind, EMPTY};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAYFIELD_BG: Rgb = Rgb::new(20, 20, 28);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const HINT: Style = Style::new(Rgb::new(150, 150, 150), Rgb::new(0, 0, 0));

/// Color of a locked or falling cell
pub fn attribute_color(attr: Attribute) -> Rgb {
    match ShapeKind::from_attribute(attr) {
        Some(ShapeKind::I) => Rgb::new(80, 220, 220),
        Some(ShapeKind::J) => Rgb::new(80, 120, 220),
        Some(ShapeKind::L) => Rgb::new(255, 150, 40),
        Some(ShapeKind::O) => Rgb::new(240, 220, 80),
        Some(ShapeKind::S) => Rgb::new(100, 220, 120),
        Some(ShapeKind::T) => Rgb::new(200, 110, 220),
        Some(ShapeKind::Z) => Rgb::new(220, 80, 80),
        None => Rgb::new(230, 230, 230),
    }
}

/// Renders the board boxed and centered, each cell two columns wide, with the
/// next piece in a side panel.
pub struct GameView {
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares up terminal glyphs
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Draw the session into `fb`, resizing it to the viewport.
    pub fn render_into<S: PieceSource>(
        &self,
        session: &GameSession<S>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        let grid = session.grid();
        // Saturating: a grid wider than the viewport is clipped, never wrapped
        let frame_w = grid.width().saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = grid.height().saturating_add(2);
        let left = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, left, top, frame_w, frame_h);

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let attr = session.attribute_at(x as i32, y as i32);
                let px = (left + 1).saturating_add(x.saturating_mul(self.cell_w));
                self.draw_cell(fb, px, (top + 1).saturating_add(y), attr);
            }
        }

        self.draw_next(fb, session, left.saturating_add(frame_w).saturating_add(2), top);

        if !session.is_running() {
            let mid = top.saturating_add(frame_h / 2);
            self.put_centered(fb, left, frame_w, mid.saturating_sub(1), " GAME OVER ", LABEL);
            self.put_centered(fb, left, frame_w, mid.saturating_add(1), " r: restart  q: quit ", HINT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<S: PieceSource>(&self, session: &GameSession<S>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, px: u16, py: u16, attr: Attribute) {
        if attr == EMPTY {
            let style = Style::new(Rgb::new(70, 70, 80), PLAYFIELD_BG);
            fb.fill(px, py, self.cell_w, 1, ' ', style);
        } else {
            let style = Style::new(attribute_color(attr), PLAYFIELD_BG);
            fb.fill(px, py, self.cell_w, 1, '█', style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (x.saturating_add(w - 1), y.saturating_add(h - 1));
        fb.put(x, y, '┌', BORDER);
        fb.put(right, y, '┐', BORDER);
        fb.put(x, bottom, '└', BORDER);
        fb.put(right, bottom, '┘', BORDER);
        fb.fill(x + 1, y, w - 2, 1, '─', BORDER);
        fb.fill(x + 1, bottom, w - 2, 1, '─', BORDER);
        fb.fill(x, y + 1, 1, h - 2, '│', BORDER);
        fb.fill(right, y + 1, 1, h - 2, '│', BORDER);
    }

    fn draw_next<S: PieceSource>(&self, fb: &mut FrameBuffer, session: &GameSession<S>, x: u16, y: u16) {
        if x >= fb.width() {
            return;
        }
        let next = session.player().next();
        fb.put_str(x, y, "NEXT", LABEL);
        fb.put_str(x.saturating_add(5), y, next.kind().as_str(), LABEL);

        for ly in 0..4 {
            for lx in 0..4 {
                let attr = next.cell_at(lx, ly);
                if attr != EMPTY {
                    let style = Style::new(attribute_color(attr), Rgb::new(0, 0, 0));
                    let px = x.saturating_add(lx as u16 * self.cell_w);
                    fb.fill(px, y.saturating_add(1 + ly as u16), self.cell_w, 1, '█', style);
                }
            }
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, left: u16, width: u16, y: u16, text: &str, style: Style) {
        let len = text.chars().count() as u16;
        let x = left.saturating_add(width.saturating_sub(len) / 2);
        fb.put_str(x, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::MAX_DIMENSION;
    use crate::core::{EngineConfig, SequenceSource};

    fn session(kinds: &[ShapeKind]) -> GameSession<SequenceSource> {
        GameSession::new(
            &EngineConfig::default(),
            SequenceSource::new(kinds.to_vec()).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn board_is_boxed_and_centered() {
        let s = session(&[ShapeKind::O, ShapeKind::I]);
        let fb = GameView::default().render(&s, Viewport::new(40, 22));

        // 10 cells * 2 + 2 border columns = 22 wide, centered in 40
        let top = fb.row_text(0);
        assert_eq!(top.find('┌'), Some(9));
        assert_eq!(top.chars().nth(30), Some('┐'));
        assert_eq!(fb.get(9, 21).map(|g| g.ch), Some('└'));
    }

    #[test]
    fn falling_piece_is_drawn() {
        let s = session(&[ShapeKind::O, ShapeKind::I]);
        let fb = GameView::default().render(&s, Viewport::new(40, 22));

        // O at x = 3 covers cells 4..=5 of rows 1..=2: screen columns 10 + 2 * 4
        let glyph = fb.get(18, 2).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, attribute_color(ShapeKind::O.attribute()));
        assert_eq!(fb.get(16, 2).unwrap().ch, ' ');
    }

    #[test]
    fn next_panel_shows_lookahead() {
        let s = session(&[ShapeKind::O, ShapeKind::I]);
        let fb = GameView::default().render(&s, Viewport::new(50, 22));

        // Frame spans columns 14..=35; the panel starts at column 38
        assert_eq!(fb.row_text(0).chars().skip(38).collect::<String>().trim(), "NEXT I");
        // I lies on local row 2, four cells two columns each
        let panel: String = fb.row_text(3).chars().skip(38).collect();
        assert_eq!(panel.matches('█').count(), 8);
    }

    #[test]
    fn game_over_overlay() {
        let mut rows = vec![".".repeat(10); 20];
        rows[1] = "#".repeat(10);
        let grid = crate::core::Grid::parse(&rows.join("\n")).unwrap();
        let s = GameSession::with_grid(grid, 200, SequenceSource::repeat(ShapeKind::J)).unwrap();
        assert!(!s.is_running());

        let fb = GameView::default().render(&s, Viewport::new(40, 22));
        let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(text.iter().any(|row| row.contains("GAME OVER")));
        assert!(text.iter().any(|row| row.contains("r: restart")));
    }

    #[test]
    fn oversized_grid_is_clipped_to_viewport() {
        let grid = crate::core::Grid::new(MAX_DIMENSION, MAX_DIMENSION);
        let s = GameSession::with_grid(grid, 200, SequenceSource::repeat(ShapeKind::T)).unwrap();

        let fb = GameView::default().render(&s, Viewport::new(80, 24));
        assert_eq!((fb.width(), fb.height()), (80, 24));
        assert_eq!(fb.get(0, 0).map(|g| g.ch), Some('┌'));
        // Right border and NEXT panel fall outside the viewport
        assert!(!fb.row_text(0).contains('┐'));
        assert!(!(0..24).any(|y| fb.row_text(y).contains("NEXT")));
    }

    #[test]
    fn colors_cover_every_kind() {
        let colors: Vec<Rgb> = ShapeKind::ALL
            .iter()
            .map(|k| attribute_color(k.attribute()))
            .collect();
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| b != a));
        }
    }
}
