//! Spatial indexing for collision queries.
//!
//! Wraps a KD-tree over animal positions so food can ask "is any animal close
//! enough to eat me" without a quadratic scan.

use kdtree::distance::squared_euclidean;
use kdtree::{ErrorKind as KdTreeError, KdTree};
use ndarray::Array1;

use super::animal::Animal;

/// Type alias for 2D spatial KD-tree used for neighbor queries.
pub type Tree2D = KdTree<f32, usize, Vec<f32>>;

/// Result of a spatial radius query: `(distance_squared, index)` pairs.
pub type SpatialQueryResult = Vec<(f32, usize)>;

/// Spatial index over animal positions.
pub struct AnimalIndex {
    tree: Tree2D,
}

impl AnimalIndex {
    /// Builds the index from the current animal positions.
    ///
    /// # Returns
    ///
    /// The index, or an error if a position is not finite.
    pub fn build(animals: &[Animal]) -> Result<Self, KdTreeError> {
        let tree = build_tree(animals, |animal| animal.pos.to_vec())?;
        Ok(Self { tree })
    }

    /// Query animals within a radius.
    ///
    /// # Arguments
    ///
    /// * `pos` - Center position for the query
    /// * `radius` - Search radius (squared internally)
    pub fn query(&self, pos: &Array1<f32>, radius: f32) -> Result<SpatialQueryResult, KdTreeError> {
        Ok(self
            .tree
            .within(&pos.to_vec(), radius.powi(2), &squared_euclidean)?
            .into_iter()
            .map(|(dist, &idx)| (dist, idx))
            .collect())
    }

    /// Whether any animal lies within `radius` of `pos`.
    pub fn any_within(&self, pos: &Array1<f32>, radius: f32) -> Result<bool, KdTreeError> {
        Ok(!self.query(pos, radius)?.is_empty())
    }

    /// Number of indexed animals.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Whether the index holds no animals.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn build_tree<T>(items: &[T], get_pos: impl Fn(&T) -> Vec<f32>) -> Result<Tree2D, KdTreeError> {
    let mut tree = KdTree::with_capacity(2, items.len().max(1));
    for (i, item) in items.iter().enumerate() {
        tree.add(get_pos(item), i)?;
    }
    Ok(tree)
}
