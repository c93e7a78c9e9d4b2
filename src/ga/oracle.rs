//! Distance and adjacency oracles.
//!
//! The evaluator never knows where points live or which hops are legal; it
//! asks a [`DistanceOracle`] and an [`AdjacencyOracle`]. Two table-backed
//! implementations are provided for the common case: [`PointTable`]
//! (planar coordinates, Euclidean metric) and [`LinkTable`] (per-node
//! neighbor lists).

use crate::error::OracleError;

/// Answers the travel distance between two points.
///
/// Distances are expected to be non-negative and are usually symmetric,
/// though symmetry is not enforced.
///
/// # Thread Safety
///
/// Oracles must be `Send + Sync` so callers may evaluate rows concurrently.
pub trait DistanceOracle: Send + Sync {
    /// Distance from point `from` to point `to`.
    fn distance(&self, from: usize, to: usize) -> Result<f64, OracleError>;
}

/// Answers whether two nodes are directly connected.
pub trait AdjacencyOracle: Send + Sync {
    /// Returns true if the hop `from -> to` is a direct connection.
    fn connected(&self, from: usize, to: usize) -> Result<bool, OracleError>;
}

// ============================================================================
// Point table
// ============================================================================

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Fixed table of planar points indexed by point id.
///
/// # Examples
///
/// ```
/// use u_pathga::ga::{DistanceOracle, Point, PointTable};
///
/// let table = PointTable::new(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
/// assert_eq!(table.distance(0, 1).unwrap(), 5.0);
/// assert!(table.distance(0, 2).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointTable {
    points: Vec<Point>,
}

impl PointTable {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Builds a table from `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self {
            points: coords.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    fn point(&self, id: usize, from: usize, to: usize) -> Result<&Point, OracleError> {
        self.points.get(id).ok_or_else(|| {
            OracleError::new(
                from,
                to,
                format!("point {id} not in table of {}", self.points.len()),
            )
        })
    }
}

impl DistanceOracle for PointTable {
    fn distance(&self, from: usize, to: usize) -> Result<f64, OracleError> {
        let a = self.point(from, from, to)?;
        let b = self.point(to, from, to)?;
        Ok(a.distance_to(b))
    }
}

// ============================================================================
// Link table
// ============================================================================

/// Adjacency relation stored as one neighbor list per node.
///
/// A hop `a -> b` is connected when `b` appears in the neighbor list of `a`.
///
/// # Examples
///
/// ```
/// use u_pathga::ga::{AdjacencyOracle, LinkTable};
///
/// let links = LinkTable::from_edges(3, &[(0, 1), (1, 2)])?;
/// assert!(links.connected(1, 0)?);
/// assert!(!links.connected(0, 2)?);
/// # Ok::<(), u_pathga::OracleError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkTable {
    neighbors: Vec<Vec<usize>>,
}

impl LinkTable {
    /// Creates a table from explicit (directed) neighbor lists.
    pub fn from_neighbors(neighbors: Vec<Vec<usize>>) -> Self {
        Self { neighbors }
    }

    /// Creates an undirected table over `node_count` nodes.
    ///
    /// Duplicate edges collapse into one link.
    ///
    /// # Errors
    /// Returns an [`OracleError`] naming the first edge that touches a node
    /// `>= node_count`.
    pub fn from_edges(
        node_count: usize,
        edges: &[(usize, usize)],
    ) -> Result<Self, OracleError> {
        let mut neighbors = vec![Vec::new(); node_count];
        for &(a, b) in edges {
            if a >= node_count || b >= node_count {
                return Err(OracleError::new(
                    a,
                    b,
                    format!("edge ({a}, {b}) is outside the {node_count} known nodes"),
                ));
            }
            if !neighbors[a].contains(&b) {
                neighbors[a].push(b);
            }
            if !neighbors[b].contains(&a) {
                neighbors[b].push(a);
            }
        }
        Ok(Self { neighbors })
    }

    /// Number of nodes (rows) in the table.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbors of `node`, if the node exists.
    pub fn neighbors(&self, node: usize) -> Option<&[usize]> {
        self.neighbors.get(node).map(Vec::as_slice)
    }
}

impl AdjacencyOracle for LinkTable {
    fn connected(&self, from: usize, to: usize) -> Result<bool, OracleError> {
        let row = self.neighbors(from).ok_or_else(|| {
            OracleError::new(
                from,
                to,
                format!("node {from} not in link table of {}", self.neighbors.len()),
            )
        })?;
        Ok(row.contains(&to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let table = PointTable::from_coords(&[(0.0, 0.0), (3.0, 4.0), (3.0, 0.0)]);
        assert!((table.distance(0, 1).unwrap() - 5.0).abs() < 1e-12);
        assert!((table.distance(1, 0).unwrap() - 5.0).abs() < 1e-12);
        assert!((table.distance(1, 2).unwrap() - 4.0).abs() < 1e-12);
        assert_eq!(table.distance(2, 2).unwrap(), 0.0);
    }

    #[test]
    fn test_point_out_of_table() {
        let table = PointTable::from_coords(&[(0.0, 0.0)]);
        let err = table.distance(0, 3).unwrap_err();
        assert_eq!(err.from, 0);
        assert_eq!(err.to, 3);
        assert!(err.reason.contains("point 3"));
    }

    #[test]
    fn test_links_from_edges_symmetric() {
        let links = LinkTable::from_edges(4, &[(0, 1), (1, 2), (1, 2), (2, 3)]).unwrap();
        assert_eq!(links.len(), 4);
        assert_eq!(links.neighbors(1), Some(&[0, 2][..]));
        assert_eq!(links.neighbors(2), Some(&[1, 3][..]));
        assert!(links.connected(3, 2).unwrap());
        assert!(!links.connected(0, 3).unwrap());
    }

    #[test]
    fn test_links_from_edges_rejects_unknown_node() {
        let err = LinkTable::from_edges(4, &[(0, 1), (3, 9), (9, 10)]).unwrap_err();
        assert_eq!(err.from, 3);
        assert_eq!(err.to, 9);
        assert!(err.reason.contains("4 known nodes"));

        assert!(LinkTable::from_edges(2, &[(2, 0)]).is_err());
        assert!(LinkTable::from_edges(0, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_links_directed() {
        let links = LinkTable::from_neighbors(vec![vec![1], vec![]]);
        assert!(links.connected(0, 1).unwrap());
        assert!(!links.connected(1, 0).unwrap());
    }

    #[test]
    fn test_links_unknown_node() {
        let links = LinkTable::from_edges(2, &[(0, 1)]).unwrap();
        assert!(links.connected(5, 0).is_err());
    }
}
