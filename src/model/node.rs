use super::snapshot::Snapshot;
use crate::render::html;
use pulldown_cmark::CowStr;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Decides where a node lands inside its parent element: in the opening tag
/// or between the tags.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
  Element,
  Attribute,
}

impl Default for NodeType {
  fn default() -> Self {
    NodeType::Element
  }
}

pub type RenderFn<'a> = dyn Fn(&mut dyn Write) -> io::Result<()> + Send + Sync + 'a;

/// A render callback used as a node.
#[derive(Clone)]
pub struct NodeFn<'a> {
  kind: NodeType,
  f: Arc<RenderFn<'a>>,
}

impl<'a> NodeFn<'a> {
  pub fn kind(&self) -> NodeType {
    self.kind
  }

  pub fn call(&self, writer: &mut dyn Write) -> io::Result<()> {
    (self.f)(writer)
  }
}

impl<'a> fmt::Debug for NodeFn<'a> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("NodeFn").field("kind", &self.kind).finish()
  }
}

#[derive(Clone, Debug)]
pub enum Node<'a> {
  Element {
    name: CowStr<'a>,
    children: Vec<Node<'a>>,
  },
  Attribute {
    name: CowStr<'a>,
    value: Option<CowStr<'a>>,
  },
  Text {
    value: CowStr<'a>,
    escape: bool,
  },
  /// Spliced into the parent's children. Rendering one directly panics.
  Group(Vec<Node<'a>>),
  Fragment(Vec<Node<'a>>),
  Static(Snapshot),
  Func(NodeFn<'a>),
  Null,
}

impl<'a> Default for Node<'a> {
  fn default() -> Self {
    Node::Null
  }
}

impl<'a> Node<'a> {
  pub fn element<N, I>(name: N, children: I) -> Node<'a>
  where
    N: Into<CowStr<'a>>,
    I: IntoIterator<Item = Node<'a>>,
  {
    Node::Element {
      name: name.into(),
      children: children.into_iter().collect(),
    }
  }

  /// A name-only attribute such as `required`.
  pub fn attr<N: Into<CowStr<'a>>>(name: N) -> Node<'a> {
    Node::Attribute {
      name: name.into(),
      value: None,
    }
  }

  pub fn attr_value<N, V>(name: N, value: V) -> Node<'a>
  where
    N: Into<CowStr<'a>>,
    V: Into<CowStr<'a>>,
  {
    Node::Attribute {
      name: name.into(),
      value: Some(value.into()),
    }
  }

  /// Builds an attribute from zero or one values.
  ///
  /// # Panics
  ///
  /// Panics if `values` yields more than one value.
  pub fn attr_with<N, I, V>(name: N, values: I) -> Node<'a>
  where
    N: Into<CowStr<'a>>,
    I: IntoIterator<Item = V>,
    V: Into<CowStr<'a>>,
  {
    let mut values = values.into_iter();
    match (values.next(), values.next()) {
      (None, _) => Node::attr(name),
      (Some(value), None) => Node::attr_value(name, value),
      _ => panic!("attribute must be just name or name and value pair"),
    }
  }

  /// Text that is HTML-escaped when rendered.
  pub fn text<V: Into<CowStr<'a>>>(value: V) -> Node<'a> {
    Node::Text {
      value: value.into(),
      escape: true,
    }
  }

  /// Text written as-is. The caller is responsible for it being valid HTML.
  pub fn raw<V: Into<CowStr<'a>>>(value: V) -> Node<'a> {
    Node::Text {
      value: value.into(),
      escape: false,
    }
  }

  pub fn group<I: IntoIterator<Item = Node<'a>>>(children: I) -> Node<'a> {
    Node::Group(children.into_iter().collect())
  }

  pub fn fragment<I: IntoIterator<Item = Node<'a>>>(children: I) -> Node<'a> {
    Node::Fragment(children.into_iter().collect())
  }

  /// Renders `children` once now; every later render replays the captured output.
  pub fn snapshot<I: IntoIterator<Item = Node<'a>>>(children: I) -> Node<'a> {
    Node::Static(Snapshot::capture(&Node::fragment(children)))
  }

  pub fn func<F>(f: F) -> Node<'a>
  where
    F: Fn(&mut dyn Write) -> io::Result<()> + Send + Sync + 'a,
  {
    Node::Func(NodeFn {
      kind: NodeType::Element,
      f: Arc::new(f),
    })
  }

  /// A render callback that is placed in its parent's opening tag.
  pub fn attr_func<F>(f: F) -> Node<'a>
  where
    F: Fn(&mut dyn Write) -> io::Result<()> + Send + Sync + 'a,
  {
    Node::Func(NodeFn {
      kind: NodeType::Attribute,
      f: Arc::new(f),
    })
  }

  pub fn kind(&self) -> NodeType {
    match self {
      Node::Attribute { .. } => NodeType::Attribute,
      Node::Func(func) => func.kind(),
      _ => NodeType::Element,
    }
  }

  pub fn is_null(&self) -> bool {
    matches!(self, Node::Null)
  }

  pub fn render<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
    html::render(self, writer)
  }

  pub fn render_to_string(&self) -> io::Result<String> {
    let mut buffer: Vec<u8> = Vec::new();
    self.render(&mut buffer)?;
    String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
  }
}

/// Renders the node, keeping whatever was written before a render error.
impl<'a> fmt::Display for Node<'a> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut buffer: Vec<u8> = Vec::new();
    let _ = self.render(&mut buffer);
    f.write_str(&String::from_utf8_lossy(&buffer))
  }
}

impl<'a> From<Option<Node<'a>>> for Node<'a> {
  fn from(value: Option<Node<'a>>) -> Node<'a> {
    value.unwrap_or(Node::Null)
  }
}

impl<'a> From<&'a str> for Node<'a> {
  fn from(value: &'a str) -> Node<'a> {
    Node::text(value)
  }
}

impl<'a> From<String> for Node<'a> {
  fn from(value: String) -> Node<'a> {
    Node::text(value)
  }
}

impl<'a> From<Vec<Node<'a>>> for Node<'a> {
  fn from(value: Vec<Node<'a>>) -> Node<'a> {
    Node::Group(value)
  }
}

impl<'a> FromIterator<Node<'a>> for Node<'a> {
  fn from_iter<I: IntoIterator<Item = Node<'a>>>(iter: I) -> Node<'a> {
    Node::group(iter)
  }
}

impl<'a> Serialize for Node<'a> {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      Node::Element { name, children } => {
        let mut state = serializer.serialize_struct("Node", 3)?;
        state.serialize_field("$$type", "element")?;
        state.serialize_field("name", &**name)?;
        state.serialize_field("children", children)?;
        state.end()
      }
      Node::Attribute { name, value } => {
        let mut state = serializer.serialize_struct("Node", 3)?;
        state.serialize_field("$$type", "attribute")?;
        state.serialize_field("name", &**name)?;
        state.serialize_field("value", &value.as_deref())?;
        state.end()
      }
      Node::Text { value, escape } => {
        let mut state = serializer.serialize_struct("Node", 3)?;
        state.serialize_field("$$type", "text")?;
        state.serialize_field("value", &**value)?;
        state.serialize_field("escape", escape)?;
        state.end()
      }
      Node::Group(children) | Node::Fragment(children) => {
        let kind = if let Node::Group(..) = self { "group" } else { "fragment" };
        let mut state = serializer.serialize_struct("Node", 2)?;
        state.serialize_field("$$type", kind)?;
        state.serialize_field("children", children)?;
        state.end()
      }
      Node::Static(snapshot) => {
        let mut state = serializer.serialize_struct("Node", 2)?;
        state.serialize_field("$$type", "static")?;
        match snapshot.captured() {
          Ok(bytes) => state.serialize_field("html", &String::from_utf8_lossy(bytes))?,
          Err(err) => state.serialize_field("error", &err.to_string())?,
        }
        state.end()
      }
      Node::Func(func) => {
        let mut state = serializer.serialize_struct("Node", 2)?;
        state.serialize_field("$$type", "function")?;
        state.serialize_field("kind", &func.kind())?;
        state.end()
      }
      Node::Null => serializer.serialize_none(),
    }
  }
}
