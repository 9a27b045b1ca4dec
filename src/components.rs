use crate::compose::when;
use crate::html::*;
use crate::model::Node;
use std::collections::BTreeMap;

/// Inputs for [`html5`].
#[derive(Debug, Default, Clone)]
pub struct Html5Props<'a> {
  pub title: String,
  pub description: String,
  /// Goes into `<html lang>`. Left out when empty.
  pub language: String,
  pub head: Vec<Node<'a>>,
  pub body: Vec<Node<'a>>,
}

/// A complete HTML5 document with the usual charset and viewport metadata.
pub fn html5<'a>(props: Html5Props<'a>) -> Node<'a> {
  let Html5Props {
    title,
    description,
    language,
    head: head_nodes,
    body: body_nodes,
  } = props;

  doctype(html([
    when(!language.is_empty(), lang(language)),
    head([
      meta([charset("utf-8")]),
      meta([name("viewport"), content("width=device-width, initial-scale=1")]),
      title_el([Node::text(title)]),
      when(
        !description.is_empty(),
        meta([name("description"), content(description)]),
      ),
      Node::group(head_nodes),
    ]),
    body([Node::group(body_nodes)]),
  ]))
}

/// Class names switched on or off, rendered as one `class` attribute in
/// name order. It merges with any other `class` on the same element.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Classes(pub BTreeMap<String, bool>);

impl Classes {
  pub fn new() -> Self {
    Classes::default()
  }

  pub fn with(mut self, name: impl Into<String>, enabled: bool) -> Self {
    self.0.insert(name.into(), enabled);
    self
  }
}

impl<K: Into<String>> FromIterator<(K, bool)> for Classes {
  fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Classes {
    Classes(iter.into_iter().map(|(name, enabled)| (name.into(), enabled)).collect())
  }
}

impl<'a> From<Classes> for Node<'a> {
  fn from(classes: Classes) -> Node<'a> {
    let enabled: Vec<String> = classes
      .0
      .into_iter()
      .filter_map(|(name, enabled)| if enabled { Some(name) } else { None })
      .collect();

    if enabled.is_empty() {
      Node::Null
    } else {
      class(enabled.join(" "))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn empty_document() {
    assert_eq!(
      html5(Html5Props::default()).to_string(),
      concat!(
        "<!doctype html><html><head>",
        r#"<meta charset="utf-8">"#,
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
        "<title></title></head><body></body></html>"
      )
    );
  }

  #[test]
  fn document_with_everything() {
    let page = html5(Html5Props {
      title: "Hat & co".into(),
      description: "Hats".into(),
      language: "en".into(),
      head: vec![link([rel("stylesheet"), href("/app.css")])],
      body: vec![h1([Node::text("Hi")])],
    });

    assert_eq!(
      page.to_string(),
      concat!(
        r#"<!doctype html><html lang="en"><head>"#,
        r#"<meta charset="utf-8">"#,
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
        "<title>Hat &amp; co</title>",
        r#"<meta name="description" content="Hats">"#,
        r#"<link rel="stylesheet" href="/app.css">"#,
        "</head><body><h1>Hi</h1></body></html>"
      )
    );
  }

  #[test]
  fn classes_are_sorted_and_filtered() {
    let classes: Classes = [("b", true), ("a", true), ("c", false)].into_iter().collect();
    assert_eq!(div([classes.into()]).to_string(), r#"<div class="a b"></div>"#);
  }

  #[test]
  fn classes_merge_with_class_attribute() {
    let node = a([
      class("nav"),
      Classes::new().with("is-active", true).into(),
      Node::text("Home"),
    ]);
    assert_eq!(node.to_string(), r#"<a class="nav is-active">Home</a>"#);
  }

  #[test]
  fn no_enabled_classes_render_nothing() {
    let node = span([Classes::new().with("hidden", false).into()]);
    assert_eq!(node.to_string(), "<span></span>");
  }

  // The navigation page from the simple server example.
  #[test]
  fn navbar_page() {
    fn navbar_link<'a>(path: &'a str, label: &'a str, current: &str) -> Node<'a> {
      li([a([
        href(path),
        Classes::new().with("is-active", current == path).into(),
        Node::text(label),
      ])])
    }

    let current = "/foo";
    let links = [("/foo", "Foo"), ("/bar", "Bar")];

    let page = div([
      ul([
        navbar_link("/", "Home", current),
        crate::map(links, |(path, label)| navbar_link(path, label, current)),
      ]),
      hr([]),
    ]);

    assert_eq!(
      page.to_string(),
      concat!(
        r#"<div><ul><li><a href="/">Home</a></li>"#,
        r#"<li><a href="/foo" class="is-active">Foo</a></li>"#,
        r#"<li><a href="/bar">Bar</a></li></ul><hr></div>"#
      )
    );
  }
}
