//! Street grid components - nodes and street segments

use geo::Point;

use crate::{StreetId, StreetNodeId};

/// Street grid node (intersection)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreetNode {
    /// Sequential id of the node
    pub id: StreetNodeId,
    /// Node coordinates
    pub geometry: Point<f64>,
}

/// Street segment between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Street {
    /// Sequential id of the segment
    pub id: StreetId,
    /// Id of the node the segment starts at
    pub from: StreetNodeId,
    /// Id of the node the segment ends at
    pub to: StreetNodeId,
}
