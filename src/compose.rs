use crate::model::Node;
use std::io::Write;

/// `node` if `condition` holds, otherwise nothing.
pub fn when<'a>(condition: bool, node: Node<'a>) -> Node<'a> {
  if condition {
    node
  } else {
    Node::Null
  }
}

/// Maps every item to a node and groups the results.
pub fn map<'a, I, F>(items: I, f: F) -> Node<'a>
where
  I: IntoIterator,
  F: FnMut(I::Item) -> Node<'a>,
{
  items.into_iter().map(f).collect()
}

fn render_each<'a, I>(nodes: I, writer: &mut dyn Write) -> std::io::Result<()>
where
  I: Iterator<Item = Node<'a>>,
{
  for node in nodes.filter(|node| !node.is_null()) {
    node.render(writer)?;
  }
  Ok(())
}

/// Calls `f` for every item at render time and renders what it returns.
pub fn for_each<'a, T, F>(items: impl IntoIterator<Item = T>, f: F) -> Node<'a>
where
  T: Send + Sync + 'a,
  F: Fn(&T) -> Node<'a> + Send + Sync + 'a,
{
  let items: Vec<T> = items.into_iter().collect();
  Node::func(move |writer| render_each(items.iter().map(&f), writer))
}

/// Like [`for_each`], with the item's position passed as a decimal string.
pub fn for_each_indexed<'a, T, F>(items: impl IntoIterator<Item = T>, f: F) -> Node<'a>
where
  T: Send + Sync + 'a,
  F: Fn(String, &T) -> Node<'a> + Send + Sync + 'a,
{
  let items: Vec<T> = items.into_iter().collect();
  Node::func(move |writer| {
    let nodes = items
      .iter()
      .enumerate()
      .map(|(index, item)| f(index.to_string(), item));
    render_each(nodes, writer)
  })
}

/// Renders `f(0)` through `f(times - 1)`.
pub fn repeat<'a, F>(times: usize, f: F) -> Node<'a>
where
  F: Fn(usize) -> Node<'a> + Send + Sync + 'a,
{
  Node::func(move |writer| render_each((0..times).map(&f), writer))
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::io;

  #[test]
  fn when_includes_conditionally() {
    let node = |admin| el!("nav", "home", when(admin, el!("a", "admin")));
    assert_eq!(node(true).to_string(), "<nav>home<a>admin</a></nav>");
    assert_eq!(node(false).to_string(), "<nav>home</nav>");
  }

  #[test]
  fn map_produces_a_group() {
    let items = ["a", "b"];
    let list = el!("ul", map(items, |item| el!("li", item)));
    assert_eq!(list.to_string(), "<ul><li>a</li><li>b</li></ul>");
  }

  #[test]
  fn for_each_renders_lazily() {
    let links = vec![("/foo", "Foo"), ("/bar", "Bar")];
    let nav = el!(
      "ul",
      for_each(links, |(href, name)| el!("li", el!("a", attr!("href", *href), *name)))
    );
    assert_eq!(
      nav.to_string(),
      r#"<ul><li><a href="/foo">Foo</a></li><li><a href="/bar">Bar</a></li></ul>"#
    );
  }

  #[test]
  fn for_each_skips_null_and_empty() {
    let empty = for_each(Vec::<u8>::new(), |_| el!("p"));
    assert_eq!(empty.to_string(), "");

    let odd = for_each(1..=4, |n| when(n % 2 == 1, text!("{}", n)));
    assert_eq!(odd.to_string(), "13");
  }

  #[test]
  fn for_each_indexed_passes_position() {
    let node = for_each_indexed(["x", "y"], |index, item| {
      el!("li", attr!("data-index", index), *item)
    });
    assert_eq!(
      node.to_string(),
      r#"<li data-index="0">x</li><li data-index="1">y</li>"#
    );
  }

  #[test]
  fn repeat_counts_up() {
    assert_eq!(repeat(3, |i| text!("{}", i)).to_string(), "012");
  }

  #[test]
  fn repeat_stops_at_first_error() {
    let node = repeat(3, |i| {
      if i == 1 {
        Node::func(|_| Err(io::Error::new(io::ErrorKind::Other, "stop")))
      } else {
        text!("{}", i)
      }
    });

    let mut buffer: Vec<u8> = Vec::new();
    assert!(node.render(&mut buffer).is_err());
    assert_eq!(buffer, b"0");
  }
}
