use ibex_sat::{graph::ImplicationGraph, structures::formula::Formula};

/// Renders the implication graph in DOT format.
///
/// Nodes are labelled `name = value @ level`, with decisions boxed, and each
/// edge is labelled with the index of its antecedent clause.
pub fn render(graph: &ImplicationGraph, formula: &Formula) -> String {
    let mut out = String::from("digraph implications {\n");

    for (index, node) in graph.nodes().enumerate() {
        let name = formula.name_of(node.literal.atom());
        let shape = match node.antecedent {
            None => "box",
            Some(_) => "ellipse",
        };
        out.push_str(&format!(
            "  n{index} [shape={shape}, label=\"{name} = {} @ {}\"];\n",
            node.literal.polarity(),
            node.level,
        ));
    }

    for (index, _) in graph.nodes().enumerate() {
        for edge in graph.edges_to(index) {
            out.push_str(&format!(
                "  n{} -> n{index} [label=\"c{}\"];\n",
                edge.source, edge.antecedent,
            ));
        }
    }

    if let Some(conflict) = graph.conflict() {
        out.push_str(&format!(
            "  conflict [shape=doubleoctagon, label=\"conflict @ {}\"];\n",
            conflict.level,
        ));
        for source in &conflict.sources {
            out.push_str(&format!(
                "  n{source} -> conflict [label=\"c{}\"];\n",
                conflict.clause,
            ));
        }
    }

    out.push_str("}\n");
    out
}
