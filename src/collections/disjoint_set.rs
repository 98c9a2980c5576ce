/// Disjoint-set-union over `0..n` with path compression and union by rank.
///
/// All operations are amortized $O(\alpha(n))$.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            count: n,
        }
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of elements over all sets.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Adds a new singleton set and returns its element.
    pub fn make_set(&mut self) -> usize {
        let x = self.parent.len();
        self.parent.push(x);
        self.rank.push(0);
        self.count += 1;
        x
    }

    /// Representative of the set containing `x`.
    pub fn find_set(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut x = x;
        while x != root {
            x = std::mem::replace(&mut self.parent[x], root);
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    /// Returns `false` if they were already the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x = self.find_set(x);
        let y = self.find_set(y);
        if x == y {
            return false;
        }
        self.count -= 1;
        match self.rank[x].cmp(&self.rank[y]) {
            std::cmp::Ordering::Less => self.parent[x] = y,
            std::cmp::Ordering::Greater => self.parent[y] = x,
            std::cmp::Ordering::Equal => {
                self.parent[x] = y;
                self.rank[y] += 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn union_and_count() {
        let mut dsu = DisjointSet::new(4);
        assert_eq!(dsu.count(), 4);
        assert!(dsu.union(0, 1));
        assert!(dsu.union(2, 3));
        assert!(!dsu.union(1, 0));
        assert_eq!(dsu.count(), 2);
        assert_eq!(dsu.find_set(0), dsu.find_set(1));
        assert_ne!(dsu.find_set(1), dsu.find_set(2));
        let x = dsu.make_set();
        assert_eq!(x, 4);
        assert_eq!(dsu.count(), 3);
        assert_eq!(dsu.len(), 5);
    }

    #[quickcheck]
    fn matches_naive_labelling(pairs: Vec<(u8, u8)>) {
        let n = 16;
        let mut dsu = DisjointSet::new(n);
        let mut label: Vec<usize> = (0..n).collect();
        for (x, y) in pairs {
            let (x, y) = (x as usize % n, y as usize % n);
            dsu.union(x, y);
            let (from, to) = (label[x], label[y]);
            for l in label.iter_mut() {
                if *l == from {
                    *l = to;
                }
            }
        }
        for x in 0..n {
            for y in 0..n {
                assert_eq!(dsu.find_set(x) == dsu.find_set(y), label[x] == label[y]);
            }
        }
        let mut distinct = label.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(dsu.count(), distinct.len());
    }
}
