//! # D-Shield Shared
//!
//! This crate defines the data structures exchanged between the fixture stores
//! and the HTTP layer of the D-Shield mock API: EmBrain entities, Social Dome
//! posts, Napoleon research jobs, relationship graph data and the solutions
//! catalog, along with the request and response bodies of each endpoint.

pub mod types;

pub use types::entity::{
    CreateInstanceRequest, Entity, EntityKind, InstanceCreated, SearchRequest, TagUpdateRequest,
};
pub use types::graph::{GraphData, GraphEdge, GraphNode, NodeType, Relation};
pub use types::job::{Job, JobStatus, RunRequest, JOB_STEP_MESSAGES, REPORT_URL};
pub use types::post::{FeedParams, GeoPoint, Post, Score};
pub use types::solution::SolutionItem;
