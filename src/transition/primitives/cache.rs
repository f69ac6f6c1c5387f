use crate::graph::{Graph, NodeKey};
use crate::transition::Dijkstra;

use log::trace;
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

pub trait CacheKey: Copy + Hash + Eq + Debug {}
impl<T> CacheKey for T where T: Copy + Hash + Eq + Debug {}

/// A generic read-through cache for a hashmap-backed data structure
#[derive(Debug)]
pub struct CacheMap<K, V, Meta>
where
    K: CacheKey,
    V: Debug,
    Meta: Debug,
{
    map: FxHashMap<K, Arc<V>>,
    metadata: Meta,
}

impl<K, V, Meta> CacheMap<K, V, Meta>
where
    CacheMap<K, V, Meta>: Calculable<K, V>,
    K: CacheKey,
    V: Debug,
    Meta: Debug,
{
    /// Creates an empty cache, carrying the supplied metadata.
    pub fn new(metadata: Meta) -> Self {
        Self {
            map: FxHashMap::default(),
            metadata,
        }
    }

    /// Exposes a query call for the cache map, allowing the caller
    /// to use the cache in its intended read-through pattern design.
    ///
    /// ### Behaviour
    ///
    /// This function is only exposed for [`CacheMap`] implementations
    /// which implement [`Calculable`].
    ///
    /// The function returns the value, [`V`] wrapped in a reference counter.
    /// This, therefore does not require [`V`] to be `Clone`.
    pub fn query(&mut self, ctx: &Graph, key: K) -> Arc<V> {
        if let Some(value) = self.map.get(&key) {
            return Arc::clone(value);
        }

        let calculated = Arc::new(self.calculate(ctx, key));
        self.map.insert(key, Arc::clone(&calculated));

        calculated
    }

    /// The number of keys calculated so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn metadata(&self) -> &Meta {
        &self.metadata
    }
}

impl<K, V, Meta> Default for CacheMap<K, V, Meta>
where
    K: CacheKey,
    V: Debug,
    Meta: Default + Debug,
{
    fn default() -> Self {
        Self {
            map: FxHashMap::default(),
            metadata: Meta::default(),
        }
    }
}

/// Implementation of a routing-domain calculable KV pair.
///
/// Asserts that the value, [`V`] can be generated from the key, [`K`],
/// given the graph it is routed upon.
///
/// ### Examples
///
/// The [`ReachCache`], given a node, derives every node reachable
/// within a threshold using an upper-bounded dijkstra search.
pub trait Calculable<K: CacheKey, V> {
    /// The concrete implementation of the function which derives the
    /// value, [`V`], from the key, [`K`].
    fn calculate(&mut self, ctx: &Graph, key: K) -> V;
}

mod reach {
    use super::*;

    /// 2km, beyond which two candidates are considered unreachable.
    pub const DEFAULT_SEARCH_CUTOFF: f64 = 2_000.0;

    #[derive(Debug, Clone, Copy)]
    pub struct ReachMetadata {
        /// The threshold by which the search is bounded, in meters.
        pub threshold_distance: f64,
    }

    impl Default for ReachMetadata {
        fn default() -> Self {
            Self {
                threshold_distance: DEFAULT_SEARCH_CUTOFF,
            }
        }
    }

    /// The shortest graph distance (meters) to every node reachable
    /// from the key node within the threshold, including the key itself.
    pub type Reach = FxHashMap<NodeKey, f64>;

    /// The reach cache through which a backing of [`Reach`] is made
    /// from a [`NodeKey`], cached on first calculation and read thereafter.
    pub type ReachCache = CacheMap<NodeKey, Reach, ReachMetadata>;

    impl Calculable<NodeKey, Reach> for ReachCache {
        #[inline]
        fn calculate(&mut self, ctx: &Graph, key: NodeKey) -> Reach {
            let threshold = self.metadata.threshold_distance;

            let reach = Dijkstra
                .reach(&key, move |node| ctx.successors(*node))
                .take_while(|item| item.total_cost <= threshold)
                .map(|item| (item.node, item.total_cost))
                .collect::<Reach>();

            trace!("Reached {} nodes from {:?}", reach.len(), key);
            reach
        }
    }
}

pub use reach::{Reach, ReachCache, ReachMetadata, DEFAULT_SEARCH_CUTOFF};
