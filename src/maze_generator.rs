//! Maze generation

use anyhow::{anyhow, ensure};
use rand::RngCore;

use crate::grid::{Grid, Point};
use crate::prng::Pcg32;

/// Maze cell value for walls and pillars
pub const WALL: u8 = 1;
/// Maze cell value for rooms and carved passages
pub const OPEN: u8 = 0;

const UNVISITED: u8 = 0;
const VISITED: u8 = 1;

/// How the four exits of a room are ordered before they are walked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shuffle {
    /// Draw `mod 4` and re-draw while the exit is already taken, one exit at
    /// a time. This is the classic `mazegen` draw sequence, so seeds keep
    /// producing the same mazes, but not every ordering is equally likely.
    #[default]
    Rejection,
    /// Unbiased Fisher-Yates permutation drawn when the room is entered.
    FisherYates,
}

/// Perfect maze generator
///
/// Runs a randomized depth-first walk over a `columns` x `rows` room lattice
/// and carves the visited rooms, and the walls crossed to reach them, out of a
/// `(2 * columns + 1)` x `(2 * rows + 1)` grid that starts as solid wall.
pub struct MazeGenerator<R = Pcg32> {
    random: R,
    shuffle: Shuffle,
}

impl MazeGenerator<Pcg32> {
    /// Generator drawing from a [Pcg32] stream seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::new(seed))
    }
}

impl<R: RngCore> MazeGenerator<R> {
    const DIRECTIONS: [Point; 4] = [
        Point::new(1, 0),
        Point::new(-1, 0),
        Point::new(0, 1),
        Point::new(0, -1),
    ];

    pub fn with_rng(random: R) -> Self {
        Self {
            random,
            shuffle: Shuffle::default(),
        }
    }

    /// Select the exit ordering strategy.
    pub fn shuffle(mut self, shuffle: Shuffle) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Generate a maze of `columns` x `rows` rooms
    ///
    /// The start room is drawn first (column, then row), after which the walk
    /// consumes the stream in visiting order. The returned grid has
    /// [WALL] everywhere except rooms and carved passages, which are [OPEN].
    ///
    /// Returns error, if either dimension is zero, the maze dimensions
    /// overflow, or the grids cannot be allocated.
    pub fn generate_maze(&mut self, columns: u32, rows: u32) -> anyhow::Result<Grid> {
        ensure!(
            columns > 0 && rows > 0,
            "Maze must have at least one room, got {}x{}",
            columns,
            rows
        );
        let (maze_columns, maze_rows) = maze_dimensions(columns, rows)?;

        let mut walk = Grid::new(columns, rows, UNVISITED)?;
        let mut maze = Grid::new(maze_columns, maze_rows, WALL)?;

        let start_x = self.random.next_u32() % columns;
        let start_y = self.random.next_u32() % rows;
        log::debug!(
            "Carving {}x{} maze from room ({}, {})",
            columns,
            rows,
            start_x,
            start_y
        );

        let start = Point::new(i64::from(start_x), i64::from(start_y));
        self.walk(&mut walk, &mut maze, start);
        Ok(maze)
    }

    /// Depth-first walk from `start` until every reachable room is visited.
    ///
    /// Each frame on the stack is a visited room and the exits it has yet to try.
    fn walk(&mut self, walk: &mut Grid, maze: &mut Grid, start: Point) {
        let mut stack: Vec<Frame> = Vec::new();
        stack.extend(self.enter(walk, maze, start, start));

        while let Some(frame) = stack.last_mut() {
            let room = frame.room;
            match frame.exits.next(&mut self.random) {
                Some(exit) => {
                    let next = room + Self::DIRECTIONS[exit];
                    stack.extend(self.enter(walk, maze, next, room));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    /// Visit `curr`, arriving from `prev`
    ///
    /// Out of bounds and already visited rooms are skipped. Otherwise the
    /// room and the wall towards `prev` are carved before the new frame is
    /// returned. At the start room `prev == curr`, and the second carve hits
    /// the room itself.
    fn enter(&mut self, walk: &mut Grid, maze: &mut Grid, curr: Point, prev: Point) -> Option<Frame> {
        let (x, y) = walk.position(curr)?;
        if walk.get(x, y) != UNVISITED {
            return None;
        }
        walk.set(x, y, VISITED);

        let dir = prev - curr;
        let room = Point::new(2 * curr.x + 1, 2 * curr.y + 1);
        for cell in [room, room + dir] {
            if let Some((mx, my)) = maze.position(cell) {
                maze.set(mx, my, OPEN);
            }
        }
        log::trace!("Carved room ({}, {}) towards {:?}", x, y, dir);

        Some(Frame {
            room: curr,
            exits: Exits::new(self.shuffle, &mut self.random),
        })
    }
}

/// Grid size needed to hold a maze of `columns` x `rows` rooms.
pub fn maze_dimensions(columns: u32, rows: u32) -> anyhow::Result<(u32, u32)> {
    let double = |n: u32| n.checked_mul(2).and_then(|n| n.checked_add(1));
    match (double(columns), double(rows)) {
        (Some(maze_columns), Some(maze_rows)) => Ok((maze_columns, maze_rows)),
        _ => Err(anyhow!(
            "Maze of {}x{} rooms exceeds the maximum grid size",
            columns,
            rows
        )),
    }
}

struct Frame {
    room: Point,
    exits: Exits,
}

/// Exits of a room that are still to be walked, as indices into the directions
enum Exits {
    /// Drawn lazily; the draws interleave with the walks into each exit.
    Rejection { taken: [bool; 4] },
    /// Permuted up front.
    Shuffled { order: [usize; 4], next: usize },
}

impl Exits {
    fn new<R: RngCore>(shuffle: Shuffle, random: &mut R) -> Self {
        match shuffle {
            Shuffle::Rejection => Exits::Rejection { taken: [false; 4] },
            Shuffle::FisherYates => {
                let mut order = [0, 1, 2, 3];
                for i in (1..order.len()).rev() {
                    let j = random.next_u32() as usize % (i + 1);
                    order.swap(i, j);
                }
                Exits::Shuffled { order, next: 0 }
            }
        }
    }

    fn next<R: RngCore>(&mut self, random: &mut R) -> Option<usize> {
        match self {
            Exits::Rejection { taken } => {
                if taken.iter().all(|t| *t) {
                    return None;
                }
                let mut r = random.next_u32() as usize % 4;
                while taken[r] {
                    r = random.next_u32() as usize % 4;
                }
                taken[r] = true;
                Some(r)
            }
            Exits::Shuffled { order, next } => {
                let exit = *order.get(*next)?;
                *next += 1;
                Some(exit)
            }
        }
    }
}
