use serde::Serialize;
use thiserror::Error;
use crate::core::graph::{EdgeKind, NodeKind, PathGraph};

const VIS_NETWORK_CDN: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/vis-network/9.1.2/dist/vis-network.min.js";

/// Errors that can occur while rendering a graph page
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Display settings for the graph widget
#[derive(Debug, Clone)]
pub struct GraphStyle {
    pub height: String,
    pub width: String,
    pub background: String,
    pub font_color: String,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            height: "600px".to_string(),
            width: "100%".to_string(),
            background: "#222222".to_string(),
            font_color: "white".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct VisNode<'a> {
    id: &'a str,
    label: &'a str,
    title: &'a str,
    color: &'static str,
    size: u32,
    font: VisFont<'a>,
}

#[derive(Debug, Serialize)]
struct VisFont<'a> {
    color: &'a str,
}

#[derive(Debug, Serialize)]
struct VisEdge<'a> {
    from: &'a str,
    to: &'a str,
    arrows: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'static str>,
}

/// Renders a [`PathGraph`] as a standalone vis-network HTML page
#[derive(Debug, Clone, Default)]
pub struct GraphRenderer {
    style: GraphStyle,
}

impl GraphRenderer {
    pub fn new(style: GraphStyle) -> Self {
        Self { style }
    }

    pub fn render(&self, graph: &PathGraph) -> Result<String, RenderError> {
        let font_color = self.style.font_color.as_str();

        let nodes: Vec<VisNode> = graph
            .nodes
            .iter()
            .map(|node| {
                let (color, size) = match node.kind {
                    NodeKind::Operator => ("green", 30),
                    NodeKind::Target => ("orange", 25),
                    NodeKind::Contact => ("lightblue", 15),
                };
                VisNode {
                    id: &node.id,
                    label: &node.id,
                    title: &node.title,
                    color,
                    size,
                    font: VisFont { color: font_color },
                }
            })
            .collect();

        let edges: Vec<VisEdge> = graph
            .edges
            .iter()
            .map(|edge| {
                let (title, color) = match edge.kind {
                    EdgeKind::Connection => (None, None),
                    EdgeKind::DirectTitleMatch => (Some("Direct Title Match"), Some("red")),
                };
                VisEdge {
                    from: &edge.from,
                    to: &edge.to,
                    arrows: "to",
                    title,
                    color,
                }
            })
            .collect();

        let nodes_json = script_safe(serde_json::to_string(&nodes)?);
        let edges_json = script_safe(serde_json::to_string(&edges)?);

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Path to {title}</title>
<script type="text/javascript" src="{cdn}"></script>
<style type="text/css">
  body {{ margin: 0; background-color: {background}; }}
  #network {{ width: {width}; height: {height}; background-color: {background}; }}
</style>
</head>
<body>
<div id="network"></div>
<script type="text/javascript">
  var nodes = new vis.DataSet({nodes});
  var edges = new vis.DataSet({edges});
  var container = document.getElementById("network");
  var options = {{ edges: {{ smooth: false }}, physics: {{ stabilization: true }} }};
  var network = new vis.Network(container, {{ nodes: nodes, edges: edges }}, options);
</script>
</body>
</html>
"#,
            title = escape_html(&graph.target),
            cdn = VIS_NETWORK_CDN,
            background = escape_html(&self.style.background),
            width = escape_html(&self.style.width),
            height = escape_html(&self.style.height),
            nodes = nodes_json,
            edges = edges_json,
        ))
    }
}

// Embedded JSON must not close the surrounding <script> element
fn script_safe(json: String) -> String {
    json.replace("</", "<\\/")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactRecord, SynergisticContact, SynergyResult, UserProfile};

    fn graph() -> PathGraph {
        let profile = UserProfile::new("Product Manager", "Acme", "Fintech");
        let retained = vec![SynergisticContact {
            contact: ContactRecord {
                first_name: "Bob".to_string(),
                last_name: "Ray".to_string(),
                company: "Globex".to_string(),
                position: "Staff Engineer".to_string(),
                ..Default::default()
            },
            synergy: SynergyResult { title_complementary: true, ..Default::default() },
        }];
        PathGraph::build(&profile, &retained, "Globex", "Engineer")
    }

    #[test]
    fn test_render_contains_nodes_and_styles() {
        let html = GraphRenderer::default().render(&graph()).unwrap();

        assert!(html.contains("vis-network"));
        assert!(html.contains("\"label\":\"Product Manager (You)\""));
        assert!(html.contains("\"color\":\"green\""));
        assert!(html.contains("\"color\":\"lightblue\""));
        assert!(html.contains("Direct Title Match"));
        assert!(html.contains("#222222"));
        assert!(html.contains("<title>Path to Engineer at Globex</title>"));
    }

    #[test]
    fn test_script_injection_is_neutralized() {
        let profile = UserProfile::new("</script><b>", "Acme", "Fintech");
        let graph = PathGraph::build(&profile, &[], "Globex", "Engineer");

        let html = GraphRenderer::default().render(&graph).unwrap();

        assert!(!html.contains("</script><b>"));
        assert!(html.contains("<\\/script><b>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("A & <B>"), "A &amp; &lt;B&gt;");
    }
}
