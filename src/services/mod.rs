// Service exports
pub mod graph_html;

pub use graph_html::{GraphRenderer, GraphStyle, RenderError};
