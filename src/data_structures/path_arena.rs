use std::fmt::Debug;
use num_traits::{Float, Zero};

/// One node of a persistent path: the last edge of the path plus a link to the
/// node holding the rest of it.
#[derive(Debug, Clone, Copy)]
pub struct PathElement<W> {
    /// Index of the element this one extends; `None` for a root
    pub parent: Option<usize>,
    /// Edge leading from the parent's vertex to `vertex`; `None` for a root
    pub edge: Option<usize>,
    /// Vertex the path ends at
    pub vertex: usize,
    /// Total weight of the path
    pub weight: W,
    /// Number of edges in the path
    pub hops: usize,
}

/// Arena of path elements addressed by index.
///
/// Paths that share a prefix share the elements of that prefix, so extending a
/// path by one edge costs one push regardless of its length.
#[derive(Debug)]
pub struct PathArena<W>
where
    W: Float + Zero + Debug + Copy,
{
    elements: Vec<PathElement<W>>,
}

impl<W> PathArena<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new() -> Self {
        PathArena { elements: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Adds the empty path sitting at `vertex`
    pub fn root(&mut self, vertex: usize) -> usize {
        self.push(PathElement {
            parent: None,
            edge: None,
            vertex,
            weight: W::zero(),
            hops: 0,
        })
    }

    /// Adds the path `parent` followed by `edge`, ending at `vertex`
    pub fn extend(&mut self, parent: usize, edge: usize, vertex: usize, edge_weight: W) -> usize {
        let base = self.elements[parent];
        self.push(PathElement {
            parent: Some(parent),
            edge: Some(edge),
            vertex,
            weight: base.weight + edge_weight,
            hops: base.hops + 1,
        })
    }

    pub fn get(&self, index: usize) -> &PathElement<W> {
        &self.elements[index]
    }

    /// Returns true if the path ending at `index` visits `vertex`
    pub fn contains_vertex(&self, index: usize, vertex: usize) -> bool {
        self.ancestry(index).any(|element| element.vertex == vertex)
    }

    /// Edges of the path ending at `index`, first edge first
    pub fn edges(&self, index: usize) -> Vec<usize> {
        let mut edges: Vec<usize> = self.ancestry(index).filter_map(|element| element.edge).collect();
        edges.reverse();
        edges
    }

    /// Vertices of the path ending at `index`, start vertex first
    pub fn vertices(&self, index: usize) -> Vec<usize> {
        let mut vertices: Vec<usize> = self.ancestry(index).map(|element| element.vertex).collect();
        vertices.reverse();
        vertices
    }

    /// Walks from `index` back to its root
    fn ancestry(&self, index: usize) -> impl Iterator<Item = &PathElement<W>> + '_ {
        std::iter::successors(Some(&self.elements[index]), move |element| {
            element.parent.map(|parent| &self.elements[parent])
        })
    }

    fn push(&mut self, element: PathElement<W>) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }
}

impl<W> Default for PathArena<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
