use super::escape::escape_html;
use super::writer::StatefulWriter;
use crate::model::{Node, NodeType};
use std::io::{Error, Write};

static VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link", "meta",
  "param", "source", "track", "wbr",
];

/// Void elements never get a closing tag and drop everything but their attributes.
pub fn is_void_element(name: &str) -> bool {
  VOID_ELEMENTS.contains(&name)
}

/// Renders `node` into `writer`, stopping at the first write error.
///
/// # Panics
///
/// Panics if `node` is a [`Node::Group`].
pub fn render<W: Write + ?Sized>(node: &Node, writer: &mut W) -> Result<(), Error> {
  let mut writer = StatefulWriter::new(writer);
  write_node(node, &mut writer);
  writer.finish()
}

fn write_node<W: Write + ?Sized>(node: &Node, writer: &mut StatefulWriter<W>) {
  if writer.failed() {
    return;
  }

  match node {
    Node::Element { name, children } => write_element(name, children, writer),
    Node::Attribute { name, value } => write_attribute(name, value.as_deref(), writer),
    Node::Text {
      value,
      escape: true,
    } => writer.write_str(&escape_html(value)),
    Node::Text {
      value,
      escape: false,
    } => writer.write_str(value),
    Node::Group(..) => panic!("cannot render group directly"),
    Node::Fragment(children) => {
      for child in children {
        write_spliced(child, writer);
      }
    }
    Node::Static(snapshot) => match snapshot.captured() {
      Ok(bytes) => writer.write_bytes(bytes),
      Err(err) => writer.record(Err(err.clone().into())),
    },
    Node::Func(func) => writer.with_sink(|sink| func.call(sink)),
    Node::Null => (),
  }
}

// Fragment children: groups are opened up, everything else renders as-is.
fn write_spliced<W: Write + ?Sized>(node: &Node, writer: &mut StatefulWriter<W>) {
  match node {
    Node::Group(children) => {
      for child in children {
        write_spliced(child, writer);
      }
    }
    _ => write_node(node, writer),
  }
}

fn write_element<W: Write + ?Sized>(name: &str, children: &[Node], writer: &mut StatefulWriter<W>) {
  writer.write_str("<");
  writer.write_str(name);

  let mut classes = Vec::new();
  for child in children {
    write_attributes(child, writer, &mut classes);
  }

  if !classes.is_empty() {
    writer.write_str(" class=\"");
    writer.write_str(&escape_html(&classes.join(" ")));
    writer.write_str("\"");
  }

  writer.write_str(">");

  if is_void_element(name) {
    return;
  }

  for child in children {
    write_content(child, writer);
  }

  writer.write_str("</");
  writer.write_str(name);
  writer.write_str(">");
}

fn is_class(name: &str) -> bool {
  name == "class"
}

fn write_attributes<'n, W: Write + ?Sized>(
  node: &'n Node,
  writer: &mut StatefulWriter<W>,
  classes: &mut Vec<&'n str>,
) {
  if writer.failed() {
    return;
  }

  match node {
    Node::Group(children) => {
      for child in children {
        write_attributes(child, writer, classes);
      }
    }
    Node::Attribute {
      name,
      value: Some(value),
    } if is_class(name) => classes.push(value),
    // a bare `class` has nothing to merge
    Node::Attribute { name, value: None } if is_class(name) => (),
    _ if node.kind() == NodeType::Attribute => write_node(node, writer),
    _ => (),
  }
}

fn write_content<W: Write + ?Sized>(node: &Node, writer: &mut StatefulWriter<W>) {
  if writer.failed() {
    return;
  }

  match node {
    Node::Group(children) => {
      for child in children {
        write_content(child, writer);
      }
    }
    _ if node.kind() == NodeType::Element => write_node(node, writer),
    _ => (),
  }
}

fn write_attribute<W: Write + ?Sized>(
  name: &str,
  value: Option<&str>,
  writer: &mut StatefulWriter<W>,
) {
  writer.write_str(" ");
  writer.write_str(name);

  if let Some(value) = value {
    writer.write_str("=\"");
    writer.write_str(&escape_html(value));
    writer.write_str("\"");
  }
}
