//! Graph description handed to the visualization widget.

pub mod builder;
pub mod model;

pub use builder::build_graph;
pub use model::{Edge, Graph, Node, NodeData, NodeKind, Position};
