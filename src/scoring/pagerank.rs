//! Weighted PageRank over a sparse sentence graph

/// Sentence similarity graph in compressed sparse row form.
///
/// Only sentence pairs with a positive similarity are stored, so memory
/// grows with the number of edges rather than with the square of the
/// sentence count.
#[derive(Debug, Clone, Default)]
pub struct SentenceGraph {
    /// Node i's edges are at `row_ptr[i]..row_ptr[i + 1]`
    row_ptr: Vec<usize>,
    col_idx: Vec<u32>,
    weights: Vec<f64>,
    /// Total outgoing weight per node
    total_weight: Vec<f64>,
}

impl SentenceGraph {
    /// Builds the graph from one edge list per node. Non-positive weights
    /// are dropped and each row is sorted by target for deterministic
    /// iteration.
    pub fn from_adjacency(adjacency: Vec<Vec<(u32, f64)>>) -> Self {
        let num_nodes = adjacency.len();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);
        for mut edges in adjacency {
            edges.retain(|(_, w)| *w > 0.0);
            edges.sort_by_key(|(target, _)| *target);

            total_weight.push(edges.iter().map(|(_, w)| w).sum());
            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.total_weight.len()
    }

    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = self.row_ptr[node];
        let end = self.row_ptr[node + 1];
        (start..end).map(move |i| (self.col_idx[i] as usize, self.weights[i]))
    }

    fn node_total_weight(&self, node: usize) -> f64 {
        self.total_weight[node]
    }
}

/// Power-iteration PageRank settings
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 delta
    pub threshold: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl PageRank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores every node of `graph`.
    ///
    /// Nodes without outgoing weight spread their mass uniformly. The returned
    /// scores sum to 1 unless the graph is empty.
    pub fn run(&self, graph: &SentenceGraph) -> Vec<f64> {
        let n = graph.num_nodes();
        if n == 0 {
            return Vec::new();
        }

        let dangling: Vec<usize> = (0..n)
            .filter(|&node| graph.node_total_weight(node) <= 0.0)
            .collect();
        let teleport = (1.0 - self.damping) / n as f64;

        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            let dangling_mass: f64 = dangling.iter().map(|&node| scores[node]).sum();
            next.fill(teleport + self.damping * dangling_mass / n as f64);

            for (node, &score) in scores.iter().enumerate() {
                let total = graph.node_total_weight(node);
                if total <= 0.0 {
                    continue;
                }
                for (neighbor, weight) in graph.neighbors(node) {
                    next[neighbor] += self.damping * score * weight / total;
                }
            }

            delta = scores.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
            std::mem::swap(&mut scores, &mut next);
        }

        tracing::trace!(iterations, delta, edges = graph.num_edges(), "PageRank finished");

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }
        scores
    }
}
