use ndarray::Array2;
use rand::{Rng, rngs::StdRng};

/// Independent obstacles with probability `obstacle_density`
///
/// Cells are visited in row-major order and each draws exactly one value
/// in `[0, 1)`, except the two corners `(0, 0)` and `(height - 1, width - 1)`,
/// which stay free without consuming a draw.
pub fn random_uniform(
    width: usize,
    height: usize,
    obstacle_density: f64,
    rng: &mut StdRng,
) -> Array2<bool> {
    let start_corner = (0, 0);
    let goal_corner = (height.saturating_sub(1), width.saturating_sub(1));

    let mut occupancy = Array2::from_elem((height, width), false);
    for (position, cell) in occupancy.indexed_iter_mut() {
        if position == start_corner || position == goal_corner {
            continue;
        }
        *cell = rng.random::<f64>() < obstacle_density;
    }

    occupancy
}
