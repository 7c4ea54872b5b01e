// Core algorithm exports
pub mod graph;
pub mod ingest;
pub mod matcher;
pub mod pipeline;
pub mod roles;
pub mod summary;

pub use graph::{EdgeKind, GraphEdge, GraphNode, NodeKind, PathGraph};
pub use ingest::{assign_columns, IngestError, Ingestion, Ingestor};
pub use matcher::{normalize, SynergyMatcher};
pub use pipeline::{ChartLimits, Pipeline};
pub use roles::ComplementaryRoleTable;
pub use summary::{company_options, synergy_breakdown, top_companies};
