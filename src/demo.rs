//! The keyboard movement toy.
//!
//! A little grid, a marker, four directions. It has nothing to do with
//! courses and everything to do with having something to play with at the
//! bottom of the page. The core is pure: callers feed key presses in and
//! re-render from the returned position, so it tests without a terminal.

/// Bounds of the playfield, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    pub width: usize,
    pub height: usize,
}

impl Default for Arena {
    fn default() -> Self {
        Arena {
            width: 16,
            height: 8,
        }
    }
}

impl Arena {
    /// Starting position, middle of the field.
    pub fn start(&self) -> Position {
        Position {
            x: self.width / 2,
            y: self.height / 2,
        }
    }

    /// Is this cell inside the field?
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }
}

/// A cell coordinate. `y` grows downward, like rows on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a key name to a direction. WASD, vim's HJKL, and arrow-key names
    /// all work; anything else is not a movement key.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key.trim().to_ascii_lowercase().as_str() {
            "w" | "k" | "up" => Some(Direction::Up),
            "s" | "j" | "down" => Some(Direction::Down),
            "a" | "h" | "left" => Some(Direction::Left),
            "d" | "l" | "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// One move. Walls stop you: stepping off the edge stays put.
pub fn step(arena: &Arena, pos: Position, dir: Direction) -> Position {
    let Position { x, y } = pos;
    match dir {
        Direction::Up => Position {
            x,
            y: y.saturating_sub(1),
        },
        Direction::Down => Position {
            x,
            y: (y + 1).min(arena.height.saturating_sub(1)),
        },
        Direction::Left => Position {
            x: x.saturating_sub(1),
            y,
        },
        Direction::Right => Position {
            x: (x + 1).min(arena.width.saturating_sub(1)),
            y,
        },
    }
}

/// Draw the field as text rows, marker as `@`, empty cells as `.`.
pub fn render(arena: &Arena, pos: Position) -> String {
    let mut out = String::with_capacity((arena.width + 1) * arena.height);
    for y in 0..arena.height {
        for x in 0..arena.width {
            out.push(if (Position { x, y }) == pos { '@' } else { '.' });
        }
        if y + 1 < arena.height {
            out.push('\n');
        }
    }
    out
}
