//! Grid geometry, occupancy queries, the snake, and letter pellets.

use slotmap::{SlotMap, new_key_type};

use crate::rng::Lcg;
use crate::types::{Direction, Pos};

new_key_type! {
    pub struct PelletId;
}

/// A letter-bearing collectible on the grid. Never shares a cell with the
/// snake or with another pellet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pellet {
    pub pos: Pos,
    pub letter: char,
}

pub type Pellets = SlotMap<PelletId, Pellet>;

/// Bound on rejection-sampling attempts in `random_free_cell`.
const FREE_CELL_ATTEMPTS: usize = 2000;

#[derive(Clone, Copy, Debug)]
pub struct Board {
    pub cols: i32,
    pub rows: i32,
}

impl Board {
    pub fn new(cols: i32, rows: i32) -> Self {
        debug_assert!(cols > 0 && rows > 0);
        Self { cols, rows }
    }

    pub fn in_bounds(self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.cols && pos.y < self.rows
    }

    pub fn center(self) -> Pos {
        Pos { x: self.cols / 2, y: self.rows / 2 }
    }

    /// True iff `pos` is in bounds and occupied by neither the snake nor
    /// any pellet.
    pub fn is_free(self, pos: Pos, snake: &Snake, pellets: &Pellets) -> bool {
        self.in_bounds(pos)
            && !snake.contains(pos)
            && !pellets.values().any(|p| p.pos == pos)
    }

    /// Uniformly sample a free cell by bounded rejection sampling.
    ///
    /// When the grid is nearly full and no free cell is found within the
    /// attempt bound, falls back to the origin. That degenerate case is
    /// accepted, not treated as an error.
    pub fn random_free_cell(self, rng: &mut Lcg, snake: &Snake, pellets: &Pellets) -> Pos {
        for _ in 0..FREE_CELL_ATTEMPTS {
            let pos = Pos {
                x: (rng.next_f64() * f64::from(self.cols)) as i32,
                y: (rng.next_f64() * f64::from(self.rows)) as i32,
            };
            if self.is_free(pos, snake, pellets) {
                return pos;
            }
        }
        Pos { x: 0, y: 0 }
    }
}

/// Head-first, contiguous segment list. Length is at least 1 for the whole
/// life of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    segments: Vec<Pos>,
    pub heading: Direction,
}

impl Snake {
    /// A length-1 snake, as created at session reset and after a crash.
    pub fn spawn(head: Pos, heading: Direction) -> Self {
        Self { segments: vec![head], heading }
    }

    pub fn head(&self) -> Pos {
        self.segments[0]
    }

    /// The segment directly behind the head, if the snake has one. Used by
    /// the reversal guard.
    pub fn second_segment(&self) -> Option<Pos> {
        self.segments.get(1).copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.segments.contains(&pos)
    }

    pub fn segments(&self) -> &[Pos] {
        &self.segments
    }

    /// Prepend `new_head`; drop the tail unless this step grew the snake.
    pub fn advance(&mut self, new_head: Pos, grow: bool) {
        self.segments.insert(0, new_head);
        if !grow {
            self.segments.pop();
        }
    }
}
