//! Randomized Kruskal maze construction
//!
//! Maze cells sit at odd rows and columns of the output grid; the cells
//! between them are walls. A random spanning tree over the 4-connected cell
//! graph decides which walls are opened.

use ndarray::Array2;
use rand::{rngs::StdRng, seq::SliceRandom};

use crate::generation::union_find::UnionFind;

/// Adjacency between two maze cells, given as row-major cell indices
///
/// `to` is always the right or lower neighbor of `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeEdge {
    /// Upper or left maze cell
    pub from: usize,
    /// Lower or right maze cell
    pub to: usize,
}

impl MazeEdge {
    /// Grid position `[row, col]` of the wall separating the two cells
    pub const fn wall(self, cells_wide: usize) -> [usize; 2] {
        let row = self.from / cells_wide;
        let col = self.from % cells_wide;
        if self.to / cells_wide == row + 1 {
            [2 * row + 2, 2 * col + 1]
        } else {
            [2 * row + 1, 2 * col + 2]
        }
    }
}

/// All cell adjacencies, each listed once
///
/// For every cell in row-major order the lower neighbor comes before the
/// right neighbor.
pub fn maze_edges(cells_wide: usize, cells_high: usize) -> Vec<MazeEdge> {
    let mut edges = Vec::with_capacity(2 * cells_wide * cells_high);
    for row in 0..cells_high {
        for col in 0..cells_wide {
            let from = row * cells_wide + col;
            if row + 1 < cells_high {
                edges.push(MazeEdge {
                    from,
                    to: from + cells_wide,
                });
            }
            if col + 1 < cells_wide {
                edges.push(MazeEdge { from, to: from + 1 });
            }
        }
    }
    edges
}

/// Build a `(2 * cells_high + 1) x (2 * cells_wide + 1)` maze grid
///
/// Edges are shuffled (Fisher–Yates, driven by `rng`) and processed in that
/// order; an edge opens its wall only when it joins two components.
pub fn maze(cells_wide: usize, cells_high: usize, rng: &mut StdRng) -> Array2<bool> {
    let rows = 2 * cells_high + 1;
    let cols = 2 * cells_wide + 1;

    let mut occupancy = Array2::from_elem((rows, cols), true);
    for row in 0..cells_high {
        for col in 0..cells_wide {
            if let Some(cell) = occupancy.get_mut([2 * row + 1, 2 * col + 1]) {
                *cell = false;
            }
        }
    }

    let mut edges = maze_edges(cells_wide, cells_high);
    edges.shuffle(rng);

    let mut components = UnionFind::new(cells_wide * cells_high);
    for edge in edges {
        if components.union(edge.from, edge.to) {
            if let Some(wall) = occupancy.get_mut(edge.wall(cells_wide)) {
                *wall = false;
            }
        }
    }

    occupancy
}
