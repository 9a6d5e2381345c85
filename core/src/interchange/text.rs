//! Line-oriented text format
//!
//! ```text
//! enableDirectedEdges: <true|false>
//! Node <id>: (<x>,<y>)
//! (<from>:<to>,<weight>)
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::str::FromStr;

use super::InterchangeError;
use crate::algorithm::traits::NodeId;
use crate::data_structures::graph::{Edge, Graph, Node, Position};

const DIRECTED_HEADER: &str = "enableDirectedEdges:";
const NODE_PREFIX: &str = "Node";

/// Serializes `graph`, one newline-terminated line per record
pub fn to_text(graph: &Graph) -> String {
    let mut out = format!("{} {}\n", DIRECTED_HEADER, graph.is_directed());

    for node in graph.nodes() {
        out.push_str(&format!(
            "{} {}: ({},{})\n",
            NODE_PREFIX, node.id, node.position.x, node.position.y
        ));
    }
    for edge in graph.edges() {
        out.push_str(&format!("({}:{},{})\n", edge.from, edge.to, edge.weight));
    }

    out
}

/// Parses the text format into a validated graph
///
/// A missing header means undirected. Blank lines are skipped and line
/// numbers in errors are 1-based.
pub fn from_text(input: &str) -> Result<Graph, InterchangeError> {
    let mut directed = false;
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(value) = line.strip_prefix(DIRECTED_HEADER) {
            directed = parse_flag(value.trim(), line_no)?;
        } else if let Some(rest) = line.strip_prefix(NODE_PREFIX) {
            nodes.push(parse_node(rest, line_no)?);
        } else if line.starts_with('(') {
            edges.push(parse_edge(line, line_no)?);
        } else {
            return Err(InterchangeError::parse(
                line_no,
                format!("unrecognized line `{}`", line),
            ));
        }
    }

    log::debug!(
        "Imported {} nodes and {} edges (directed: {})",
        nodes.len(),
        edges.len(),
        directed
    );

    Ok(Graph::build(nodes, edges, directed)?)
}

fn parse_flag(value: &str, line: usize) -> Result<bool, InterchangeError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(InterchangeError::parse(
            line,
            format!("expected `true` or `false`, found `{}`", other),
        )),
    }
}

/// `<id>: (<x>,<y>)` after the `Node` prefix
fn parse_node(rest: &str, line: usize) -> Result<Node, InterchangeError> {
    let (id, position) = rest
        .split_once(':')
        .ok_or_else(|| InterchangeError::parse(line, "node line is missing `:`"))?;

    let id = parse_number::<usize>(id, "node id", line)?;
    let (x, y) = parenthesized(position, line)?
        .split_once(',')
        .ok_or_else(|| InterchangeError::parse(line, "position must be `(x,y)`"))?;

    Ok(Node::at(
        NodeId(id),
        Position::new(
            parse_number(x, "x coordinate", line)?,
            parse_number(y, "y coordinate", line)?,
        ),
    ))
}

/// `(<from>:<to>,<weight>)`
fn parse_edge(text: &str, line: usize) -> Result<Edge, InterchangeError> {
    let (endpoints, weight) = parenthesized(text, line)?
        .split_once(',')
        .ok_or_else(|| InterchangeError::parse(line, "edge is missing its weight"))?;
    let (from, to) = endpoints
        .split_once(':')
        .ok_or_else(|| InterchangeError::parse(line, "edge endpoints must be `from:to`"))?;

    Ok(Edge::new(
        NodeId(parse_number(from, "edge source", line)?),
        NodeId(parse_number(to, "edge target", line)?),
        parse_number(weight, "edge weight", line)?,
    ))
}

fn parenthesized(text: &str, line: usize) -> Result<&str, InterchangeError> {
    text.trim()
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .ok_or_else(|| InterchangeError::parse(line, "expected a parenthesized group"))
}

fn parse_number<T: FromStr>(text: &str, what: &str, line: usize) -> Result<T, InterchangeError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| InterchangeError::parse(line, format!("invalid {} `{}`", what, text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::traits::AlgorithmError;

    const SAMPLE: &str = "enableDirectedEdges: true\n\
                          Node 1: (100,200)\n\
                          Node 2: (150.5,80)\n\
                          Node 3: (0,0)\n\
                          (1:2,4)\n\
                          (2:3,2.5)\n";

    #[test]
    fn test_parse_sample() {
        let graph = from_text(SAMPLE).unwrap();

        assert!(graph.is_directed());
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edges()[1], Edge::new(NodeId(2), NodeId(3), 2.5));
        assert_eq!(
            graph.node(NodeId(2)).unwrap().position,
            Position::new(150.5, 80.0)
        );
    }

    #[test]
    fn test_export_matches_format() {
        let graph = from_text(SAMPLE).unwrap();
        assert_eq!(to_text(&graph), SAMPLE);
    }

    #[test]
    fn test_export_empty_and_fractional() {
        let empty = Graph::from_triples(Vec::<usize>::new(), Vec::new(), false).unwrap();
        assert_eq!(to_text(&empty), "enableDirectedEdges: false\n");

        let graph = Graph::from_triples([1, 2], [(2, 1, 0.25)], true).unwrap();
        assert_eq!(
            to_text(&graph),
            "enableDirectedEdges: true\nNode 1: (0,0)\nNode 2: (0,0)\n(2:1,0.25)\n"
        );
    }

    #[test]
    fn test_round_trip_keeps_positions() {
        let graph = from_text(SAMPLE).unwrap();
        let again = from_text(&to_text(&graph)).unwrap();

        assert_eq!(graph, again);
        assert_eq!(graph.nodes(), again.nodes());
    }

    #[test]
    fn test_lenient_whitespace() {
        let input = "\r\n  Node 1: ( 1 , 2 )\r\n\r\nNode 2: (3,4)\r\n( 1 : 2 , 7 )\r\n";
        let graph = from_text(input).unwrap();

        // no header: undirected
        assert!(!graph.is_directed());
        assert_eq!(graph.edges(), &[Edge::new(NodeId(1), NodeId(2), 7.0)]);
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let err = from_text("Node 1: (0,0)\n\nNode x: (0,0)\n").unwrap_err();
        assert!(matches!(err, InterchangeError::Parse { line: 3, .. }));

        let err = from_text("enableDirectedEdges: maybe\n").unwrap_err();
        assert!(matches!(err, InterchangeError::Parse { line: 1, .. }));

        let err = from_text("Node 1: (0,0)\n(1:1)\n").unwrap_err();
        assert!(matches!(err, InterchangeError::Parse { line: 2, .. }));

        let err = from_text("garbage\n").unwrap_err();
        assert_eq!(err.to_string(), "Line 1: unrecognized line `garbage`");
    }

    #[test]
    fn test_graph_errors_surface() {
        let err = from_text("Node 1: (0,0)\n(1:9,1)\n").unwrap_err();
        assert!(matches!(
            err,
            InterchangeError::Graph(AlgorithmError::InvalidEdge { missing: NodeId(9), .. })
        ));

        let err = from_text("Node 1: (0,0)\nNode 2: (0,0)\n(1:2,-3)\n").unwrap_err();
        assert!(matches!(err, InterchangeError::Graph(AlgorithmError::InvalidWeight { .. })));
    }
}
