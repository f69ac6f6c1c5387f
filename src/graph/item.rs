use crate::geo::PlanarScale;
use crate::graph::{IndexedSegment, NodeKey, RoadSegment, SegmentId};

use log::{debug, info};
use petgraph::prelude::UnGraphMap;
use rstar::RTree;
use rustc_hash::FxHasher;

use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;
use std::time::Instant;
#[cfg(feature = "tracing")]
use tracing::Level;

/// Edge weight within the graph, the planar length of a segment in meters.
pub type Weight = f64;

pub type GraphStructure = UnGraphMap<NodeKey, Weight, BuildHasherDefault<FxHasher>>;

/// Routing graph, built once from a collection of [`RoadSegment`]s.
///
/// Every segment contributes an undirected edge between its [quantized](NodeKey)
/// endpoints, so segments which share an endpoint are connected. The segments
/// themselves are kept within an [`RTree`] for proximity scans.
///
/// The graph is never mutated after construction and can be shared between
/// concurrent matches.
pub struct Graph {
    pub(crate) graph: GraphStructure,
    pub(crate) segments: Vec<RoadSegment>,
    pub(crate) index: RTree<IndexedSegment>,
    pub(crate) scale: PlanarScale,
}

impl Debug for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph with Nodes: {}, Segments: {}",
            self.graph.node_count(),
            self.segments.len()
        )
    }
}

impl Graph {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub fn new(segments: impl IntoIterator<Item = RoadSegment>, scale: PlanarScale) -> Graph {
        let start_time = Instant::now();

        let segments = segments.into_iter().collect::<Vec<_>>();
        let mut graph = GraphStructure::new();

        for segment in &segments {
            let source = NodeKey::quantize(&segment.source);
            let target = NodeKey::quantize(&segment.target);

            if source == target {
                // Degenerate segment, its endpoints are one node.
                graph.add_node(source);
                continue;
            }

            let weight = segment.length(&scale);
            match graph.edge_weight_mut(source, target) {
                Some(existing) if weight < *existing => *existing = weight,
                Some(_) => {}
                None => {
                    graph.add_edge(source, target, weight);
                }
            }
        }

        debug!("Graphical ingestion took: {:?}", start_time.elapsed());

        let index = RTree::bulk_load(
            segments
                .iter()
                .enumerate()
                .map(|(id, segment)| IndexedSegment {
                    id,
                    segment: *segment,
                })
                .collect(),
        );

        info!(
            "Finished. Ingested {} segments into {} nodes and {} edges in {}ms",
            segments.len(),
            graph.node_count(),
            graph.edge_count(),
            start_time.elapsed().as_millis()
        );

        Graph {
            graph,
            segments,
            index,
            scale,
        }
    }

    pub fn index(&self) -> &RTree<IndexedSegment> {
        &self.index
    }

    /// The number of nodes within the graph.
    pub fn size(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn scale(&self) -> PlanarScale {
        self.scale
    }

    pub fn segments(&self) -> &[RoadSegment] {
        &self.segments
    }

    #[inline]
    pub fn segment(&self, id: SegmentId) -> Option<&RoadSegment> {
        self.segments.get(id)
    }

    #[inline]
    pub fn contains_node(&self, node: NodeKey) -> bool {
        self.graph.contains_node(node)
    }

    /// The weight of the edge joining `a` and `b`, if they are adjacent.
    #[inline]
    pub fn weight(&self, a: NodeKey, b: NodeKey) -> Option<Weight> {
        self.graph.edge_weight(a, b).copied()
    }

    /// Nodes adjacent to `node`, with the weight of the joining edge, in insertion order.
    #[inline]
    pub fn successors(&self, node: NodeKey) -> impl Iterator<Item = (NodeKey, Weight)> + '_ {
        self.graph
            .edges(node)
            .map(|(_, next, weight)| (next, *weight))
    }
}
