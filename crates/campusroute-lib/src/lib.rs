//! CampusRoute library entry points.
//!
//! This crate exposes helpers to describe a campus map as a weighted
//! undirected graph, validate a snapshot against referential integrity, and
//! compute minimum-distance routes between named points. Higher-level
//! consumers (CLI, map front ends) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod campus;
pub mod error;
pub mod graph;
pub mod model;
pub mod path;
pub mod route;
pub mod test_helpers;
pub mod validate;

pub use campus::{campus_graph, sample_graph};
pub use error::{Error, QueryEndpoint, Result};
pub use model::{load_graph_document, Edge, GraphDocument, GraphModel, Node, NodeId, PathQuery};
pub use route::{find_route, PathResult};
pub use validate::{validate, ValidatedGraph};
