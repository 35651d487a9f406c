/// Undirected graph density: `2E / (N * (N - 1))`.
///
/// Ranges from 0.0 (no edges) to 1.0 (every pair connected, on a simple
/// graph). Returns 0.0 for graphs with fewer than 2 nodes.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    2.0 * edge_count as f64 / max_edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_graphs_are_zero() {
        assert!(density(0, 0).abs() < f64::EPSILON);
        assert!(density(1, 0).abs() < f64::EPSILON);
        assert!(density(1, 3).abs() < f64::EPSILON);
    }

    #[test]
    fn complete_graph_is_one() {
        for n in 2..10 {
            let edges = n * (n - 1) / 2;
            assert!((density(n, edges) - 1.0).abs() < 1e-12, "K{n}");
        }
    }

    #[test]
    fn edgeless_graph_is_zero() {
        assert!(density(25, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn reference_scale() {
        // 48 edges over 25 nodes: 96 / 600.
        assert!((density(25, 48) - 0.16).abs() < 1e-12);
    }
}
