
use crate::distance::costs::CostModel;

/// Returns the weighted edit distance between two byte slices by doing the full grid calculation.
/// This is the same recurrence as the distance engine, but it keeps every cell and never stops early.
/// It is O(n*m) in both time and memory, so it is mostly useful for checking the engine.
/// Rows follow `to` and columns follow `from`, so moving across a row deletes a byte of `from`.
/// # Arguments
/// * `from` - the source sequence
/// * `to` - the target sequence
/// * `costs` - per-operation costs
pub fn full_matrix_distance(from: &[u8], to: &[u8], costs: &CostModel) -> u64 {
    let cols = from.len() + 1;
    let rows = to.len() + 1;
    let mut grid: Vec<u64> = vec![0; rows * cols];
    let cell = |x: usize, y: usize| x * cols + y;

    // boundaries
    for y in 0..cols {
        grid[cell(0, y)] = y as u64 * costs.delete_cost();
    }
    for x in 0..rows {
        grid[cell(x, 0)] = x as u64 * costs.insert_cost();
    }

    for x in 1..rows {
        for y in 1..cols {
            let c_to = to[x - 1];
            let c_from = from[y - 1];
            let mut best = [
                // diagonal match/mismatch
                grid[cell(x - 1, y - 1)] + if c_from == c_to { 0 } else { costs.substitute_cost() },
                // consume a byte of `to`
                grid[cell(x - 1, y)] + costs.insert_cost(),
                // consume a byte of `from`
                grid[cell(x, y - 1)] + costs.delete_cost(),
            ].into_iter().min().unwrap_or(u64::MAX);

            if x > 1 && y > 1 && c_from == to[x - 2] && from[y - 2] == c_to {
                best = best.min(grid[cell(x - 2, y - 2)] + costs.swap_cost());
            }
            grid[cell(x, y)] = best;
        }
    }

    grid[cell(rows - 1, cols - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_costs() {
        let v1: Vec<u8> = vec![0, 1, 2, 4, 5];
        let v2: Vec<u8> = vec![0, 1, 3, 4, 5];
        let v3: Vec<u8> = vec![1, 2, 3, 5];
        let v4: Vec<u8> = vec![];
        let costs = CostModel::unit();

        assert_eq!(full_matrix_distance(&v1, &v1, &costs), 0);
        assert_eq!(full_matrix_distance(&v1, &v2, &costs), 1);
        assert_eq!(full_matrix_distance(&v1, &v3, &costs), 2);
        assert_eq!(full_matrix_distance(&v1, &v4, &costs), 5);

        assert_eq!(full_matrix_distance(&v2, &v3, &costs), 3);
        assert_eq!(full_matrix_distance(&v4, &v3, &costs), 4);
        assert_eq!(full_matrix_distance(&v4, &v4, &costs), 0);

        assert_eq!(full_matrix_distance(b"one", b"two", &costs), 3);
    }

    #[test]
    fn test_default_costs() {
        let costs = CostModel::default();
        // substitution (3) is never better than delete + insert (2)
        assert_eq!(full_matrix_distance(b"one", b"two", &costs), 4);
        assert_eq!(full_matrix_distance(b"ab", b"ba", &costs), 2);
        assert_eq!(full_matrix_distance(b"", b"abc", &costs), 3);
    }

    #[test]
    fn test_transposition() {
        let costly_indels = CostModel::new(10, 10, 3, 5);
        assert_eq!(full_matrix_distance(b"ab", b"ba", &costly_indels), 5);
        assert_eq!(full_matrix_distance(b"xaby", b"xbay", &costly_indels), 5);

        // once a swap is more expensive than two substitutions, it is ignored
        let costly_swap = CostModel::new(10, 10, 3, 7);
        assert_eq!(full_matrix_distance(b"ab", b"ba", &costly_swap), 6);
    }

    #[test]
    fn test_asymmetric_costs() {
        let costs = CostModel::new(2, 5, 100, 100);
        assert_eq!(full_matrix_distance(b"abc", b"ab", &costs), 5);
        assert_eq!(full_matrix_distance(b"ab", b"abc", &costs), 2);
    }
}
