use std::collections::VecDeque;

use super::types::{Direction, Point};

/// Longest body `Snake::new` will lay out.
pub const MAX_INITIAL_LENGTH: usize = 1 << 16;

/// The snake's body, head first. Never empty.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    facing: Direction,
    pending_growth: bool,
}

impl Snake {
    /// Lays `length` cells out in a straight line trailing behind `head`,
    /// opposite to `facing`. The length is clamped to
    /// `1..=MAX_INITIAL_LENGTH` and the line stops where coordinates would
    /// overflow.
    pub fn new(head: Point, length: usize, facing: Direction) -> Self {
        let (dx, dy) = facing.opposite().delta();
        let length = length.clamp(1, MAX_INITIAL_LENGTH) as i32;
        let body = (0..length)
            .map_while(|i| {
                Some(Point::new(
                    head.x.checked_add(dx * i)?,
                    head.y.checked_add(dy * i)?,
                ))
            })
            .collect();

        Self {
            body,
            facing,
            pending_growth: false,
        }
    }

    /// Advances one cell in `facing`. Each cell takes the place of the one
    /// ahead of it; a pending growth re-attaches the old tail.
    pub fn move_forward(&mut self) {
        let next_head = self.head().moved_in_direction(self.facing);
        self.body.push_front(next_head);

        let old_tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");

        if self.pending_growth {
            self.body.push_back(old_tail);
            self.pending_growth = false;
        }
    }

    /// Returns false when the request would reverse the snake onto itself.
    pub fn change_direction(&mut self, requested: Direction) -> bool {
        if requested.is_opposite(self.facing) {
            return false;
        }
        self.facing = requested;
        true
    }

    /// Grows by one cell on the next move.
    pub fn eat_apple(&mut self) {
        self.pending_growth = true;
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn cell_at(&self, index: usize) -> Option<Point> {
        self.body.get(index).copied()
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn has_pending_growth(&self) -> bool {
        self.pending_growth
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// True when the head shares its cell with any other segment.
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }
}
