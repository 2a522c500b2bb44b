//! Generate perfect mazes from a seed
//!
//! A maze of `W` x `H` rooms is carved out of a `(2W + 1)` x `(2H + 1)` grid
//! of wall cells by a randomized depth-first walk. Rooms sit at odd
//! coordinates, pillars at even coordinates, and the cells in between are
//! either walls or carved passages. Every room is reachable from every
//! other room along exactly one path.
//!
//! The walk draws from a seeded [Pcg32] stream, so the same seed and size
//! always produce the same maze.
//!
//! # Examples
//! ## ASCII output
//! ```
//! use mazegen::{draw_ascii, MazeGenerator};
//!
//! let maze = MazeGenerator::new(1).generate_maze(8, 8).unwrap();
//! assert_eq!((maze.columns(), maze.rows()), (17, 17));
//!
//! let mut out = Vec::new();
//! draw_ascii(&maze, "#", " ", &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(text.lines().next(), Some("#################"));
//! ```
//!
//! ## SVG output
//! ```
//! use mazegen::{draw_svg, strhash, MazeGenerator, SvgOptions};
//!
//! let maze = MazeGenerator::new(strhash("hello")).generate_maze(4, 4).unwrap();
//! let mut out = Vec::new();
//! draw_svg(&maze, &SvgOptions::default(), &mut out).unwrap();
//! let svg = String::from_utf8(out).unwrap();
//! assert!(svg.contains("viewBox='0 0 20 20'"));
//! ```

pub mod grid;
pub mod maze_generator;
pub mod prng;
pub mod render;

pub use grid::{Grid, Point};
pub use maze_generator::{MazeGenerator, Shuffle};
pub use prng::{strhash, Pcg32};
pub use render::{draw_ascii, draw_svg, wall_strokes, Stroke, SvgOptions};
