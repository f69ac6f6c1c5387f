use indexmap::map::Entry;
use indexmap::IndexMap;
use rustc_hash::{FxHashSet, FxHasher};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::{BuildHasherDefault, Hash};

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Accumulated route length, in meters.
pub type Cost = f64;

#[derive(Debug)]
struct SmallestHolder {
    cost: Cost,
    index: usize,
}

impl PartialEq for SmallestHolder {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SmallestHolder {}

impl PartialOrd for SmallestHolder {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestHolder {
    /// Reversed, so the max-heap pops the cheapest entry. Equal costs
    /// fall back onto discovery order, keeping settlement deterministic.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Struct returned by [`Dijkstra::reach`].
pub struct DijkstraReachable<N, FN> {
    to_see: BinaryHeap<SmallestHolder>,
    seen: FxHashSet<usize>,
    parents: FxIndexMap<N, (usize, Cost)>,
    successors: FN,
}

/// Information about a node reached by [`Dijkstra::reach`].
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DijkstraReachableItem<N> {
    /// The node that was reached.
    pub node: N,
    /// The previous node that the current node came from.
    /// If the node is the first node, there will be no parent.
    pub parent: Option<N>,
    /// The total cost from the starting node.
    pub total_cost: Cost,
}

impl<N, FN, IN> Iterator for DijkstraReachable<N, FN>
where
    N: Copy + Hash + Eq,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, Cost)>,
{
    type Item = DijkstraReachableItem<N>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(SmallestHolder { cost, index }) = self.to_see.pop() {
            if !self.seen.insert(index) {
                continue;
            }

            let Some((node, (parent_index, total_cost))) = self.parents.get_index(index) else {
                continue;
            };

            let node = *node;
            let item = DijkstraReachableItem {
                node,
                parent: self.parents.get_index(*parent_index).map(|(parent, _)| *parent),
                total_cost: *total_cost,
            };

            for (successor, move_cost) in (self.successors)(&node) {
                let new_cost = cost + move_cost;

                let index = match self.parents.entry(successor) {
                    Entry::Vacant(e) => {
                        let n = e.index();
                        e.insert((index, new_cost));
                        n
                    }
                    Entry::Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            e.insert((index, new_cost));
                            e.index()
                        } else {
                            continue;
                        }
                    }
                };

                self.to_see.push(SmallestHolder {
                    cost: new_cost,
                    index,
                });
            }

            return Some(item);
        }

        None
    }
}

pub struct Dijkstra;

impl Dijkstra {
    /// Visit all nodes that are reachable from a start node. The node
    /// will be visited in order of cost, with the closest nodes first.
    ///
    /// The `successors` function receives the current node, and returns
    /// an iterator of successors associated with their move cost. Move
    /// costs must be non-negative.
    ///
    /// The iterator is lazy, so bounding it with `take_while` on the
    /// [total cost](DijkstraReachableItem::total_cost) stops the search
    /// once every node within the bound has been settled.
    pub fn reach<N, FN, IN>(&self, start: &N, successors: FN) -> DijkstraReachable<N, FN>
    where
        N: Copy + Hash + Eq,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, Cost)>,
    {
        let mut to_see: BinaryHeap<SmallestHolder> = BinaryHeap::with_capacity(256);
        to_see.push(SmallestHolder {
            cost: 0.0,
            index: 0,
        });

        let mut parents: FxIndexMap<N, (usize, Cost)> =
            FxIndexMap::with_capacity_and_hasher(64, BuildHasherDefault::<FxHasher>::default());

        parents.insert(*start, (usize::MAX, 0.0));
        let seen = FxHashSet::default();

        DijkstraReachable {
            to_see,
            seen,
            parents,
            successors,
        }
    }
}
