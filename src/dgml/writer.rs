use super::DiagramDocument;
use itertools::Itertools;
use std::fmt::Write;

/// XML namespace of the DGML document format.
pub const DGML_NAMESPACE: &str = "http://schemas.microsoft.com/vs/2009/dgml";

/// Renders a complete `DiagramDocument` as DGML XML text.
///
/// Attribute names (`Id`, `Label`, `Category`, `Source`, `Target`,
/// `Background`) are fixed by the format and reproduced exactly so the
/// output stays consumable by DGML viewers.
pub fn write_dgml(document: &DiagramDocument) -> String {
    let mut output = String::new();
    writeln!(&mut output, r#"<?xml version="1.0" encoding="utf-8"?>"#).unwrap();
    writeln!(&mut output, r#"<DirectedGraph xmlns="{}">"#, DGML_NAMESPACE).unwrap();

    writeln!(&mut output, "  <Nodes>").unwrap();
    for node in &document.nodes {
        let mut attributes = vec![
            attribute("Id", &node.id),
            attribute("Label", &node.label),
        ];
        attributes.extend(
            node.properties
                .iter()
                .map(|(key, value)| attribute(key, value)),
        );
        if let Some(category) = node.category {
            attributes.push(attribute("Category", category.as_str()));
        }
        writeln!(&mut output, "    <Node {}/>", attributes.iter().join(" ")).unwrap();
    }
    writeln!(&mut output, "  </Nodes>").unwrap();

    writeln!(&mut output, "  <Links>").unwrap();
    for link in &document.links {
        let mut attributes = vec![
            attribute("Source", &link.source),
            attribute("Target", &link.target),
        ];
        if let Some(category) = link.category {
            attributes.push(attribute("Category", category.as_str()));
        }
        if let Some(label) = &link.label {
            attributes.push(attribute("Label", label));
        }
        writeln!(&mut output, "    <Link {}/>", attributes.iter().join(" ")).unwrap();
    }
    writeln!(&mut output, "  </Links>").unwrap();

    writeln!(&mut output, "  <Categories>").unwrap();
    for declaration in &document.categories {
        writeln!(
            &mut output,
            "    <Category {} {}/>",
            attribute("Id", declaration.id.as_str()),
            attribute("Background", &declaration.background),
        )
        .unwrap();
    }
    writeln!(&mut output, "  </Categories>").unwrap();

    writeln!(&mut output, "</DirectedGraph>").unwrap();
    output
}

fn attribute(name: &str, value: &str) -> String {
    format!(r#"{}="{}""#, name, escape_attribute(value))
}

/// Escapes the five characters that are unsafe inside a double-quoted XML
/// attribute value.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
