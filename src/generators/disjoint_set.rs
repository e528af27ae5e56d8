//! Disjoint-set forest (union-find) with union by rank and path compression.

/// A partition of `0..len` into disjoint sets.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates a forest of `size` singleton sets.
    pub fn new(size: usize) -> Self {
        DisjointSet {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check_index(&self, x: usize) {
        if x >= self.parent.len() {
            panic!(
                "Element {} is out of range for a disjoint set of {} elements",
                x,
                self.parent.len()
            );
        }
    }

    /// Finds the representative of the set containing `x`, pointing every node
    /// on the way directly at the root.
    ///
    /// # Panics
    /// If `x` is out of range.
    pub fn find(&mut self, mut x: usize) -> usize {
        self.check_index(x);

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The root of lower rank is attached under the other. On a tie `y`'s root goes under
    /// `x`'s root, whose rank grows by one. Does nothing if both are already in the same set;
    /// callers counting merges should compare [`find`](Self::find) results first.
    ///
    /// # Panics
    /// If `x` or `y` is out of range.
    pub fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
    }

    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_singletons() {
        let mut ds = DisjointSet::new(4);
        assert_eq!(ds.len(), 4);
        assert!(!ds.is_empty());
        assert!((0..4).all(|i| ds.find(i) == i));
        assert!(ds.rank.iter().all(|&r| r == 0));
        assert!(DisjointSet::new(0).is_empty());
    }

    #[test]
    fn test_union_by_rank() {
        let mut ds = DisjointSet::new(4);
        // Tie: second root goes under the first, whose rank grows
        ds.union(0, 1);
        assert_eq!(ds.parent[1], 0);
        assert_eq!(ds.rank[0], 1);

        // Lower rank root is attached under the higher one, ranks unchanged
        ds.union(2, 0);
        assert_eq!(ds.parent[2], 0);
        assert_eq!(ds.rank[0], 1);
        ds.union(0, 3);
        assert_eq!(ds.parent[3], 0);
        assert_eq!(ds.rank[0], 1);
        assert_eq!(ds.rank[2], 0);
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut ds = DisjointSet::new(3);
        ds.union(0, 1);
        let (parent, rank) = (ds.parent.clone(), ds.rank.clone());
        ds.union(1, 0);
        assert_eq!(ds.parent, parent);
        assert_eq!(ds.rank, rank);
    }

    #[test]
    fn test_path_compression() {
        let mut ds = DisjointSet::new(5);
        // Build the chain 4 -> 3 -> 2 -> 1 -> 0 by hand
        ds.parent = vec![0, 0, 1, 2, 3];
        assert_eq!(ds.find(4), 0);
        assert_eq!(ds.parent, vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut ds = DisjointSet::new(8);
        ds.union(0, 1);
        ds.union(2, 3);
        ds.union(1, 3);
        ds.union(5, 6);
        let roots: Vec<usize> = (0..8).map(|i| ds.find(i)).collect();
        for _ in 0..3 {
            assert_eq!((0..8).map(|i| ds.find(i)).collect::<Vec<_>>(), roots);
        }
        assert!(ds.same_set(0, 2));
        assert!(!ds.same_set(0, 5));
    }

    #[test]
    fn test_matches_naive_partition() {
        let n = 50;
        let mut rng = StdRng::seed_from_u64(7);
        let mut ds = DisjointSet::new(n);
        // Reference: label per element, relabel the whole group on merge
        let mut labels: Vec<usize> = (0..n).collect();

        for _ in 0..40 {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            ds.union(a, b);
            let (from, to) = (labels[b], labels[a]);
            labels.iter_mut().filter(|l| **l == from).for_each(|l| *l = to);

            for i in 0..n {
                for j in 0..n {
                    assert_eq!(ds.same_set(i, j), labels[i] == labels[j]);
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_panics() {
        let mut ds = DisjointSet::new(3);
        ds.find(3);
    }
}
