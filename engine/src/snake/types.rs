/// A cell coordinate. Carries no bounds of its own; the field decides what is
/// inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn moved_in_direction(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.translate(dx, dy)
    }
}

/// Compass direction, in clockwise order starting at `North`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    fn rotated(self, steps: usize) -> Direction {
        Self::ALL[(self.index() + steps) % Self::ALL.len()]
    }

    pub fn next(self) -> Direction {
        self.rotated(1)
    }

    pub fn previous(self) -> Direction {
        self.rotated(Self::ALL.len() - 1)
    }

    pub fn opposite(self) -> Direction {
        self.rotated(2)
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit step on a grid whose y axis grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    width: u32,
    height: u32,
}

impl FieldSize {
    /// Dimensions are clamped to `1..=i32::MAX` so every cell is addressable
    /// by a `Point`.
    pub fn new(width: u32, height: u32) -> Self {
        let max = i32::MAX as u32;
        Self {
            width: width.clamp(1, max),
            height: height.clamp(1, max),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height as i32).flat_map(move |y| (0..self.width as i32).map(move |x| Point::new(x, y)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// What a single tick did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Paused,
    Moved,
    AteApple { score: u32 },
    /// The snake died and the session has already been restarted.
    Died { reason: DeathReason, final_score: u32 },
}
