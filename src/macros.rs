/// Builds an element from a tag name and any number of children.
///
/// Children go through `Node::from`, so `Option<Node>`, `&str` and `String`
/// are accepted alongside nodes.
#[macro_export]
macro_rules! el {
  ($name:expr $(, $child:expr)* $(,)?) => {
    $crate::Node::element($name, ::std::vec![$($crate::Node::from($child)),*])
  };
}

/// `attr!("required")` or `attr!("type", "text")`. More values do not compile.
#[macro_export]
macro_rules! attr {
  ($name:expr $(,)?) => {
    $crate::Node::attr($name)
  };
  ($name:expr, $value:expr $(,)?) => {
    $crate::Node::attr_value($name, $value)
  };
  ($name:expr, $value:expr, $($rest:expr),+ $(,)?) => {
    ::std::compile_error!("attribute must be just name or name and value pair")
  };
}

/// Escaped text with `format!` interpolation.
#[macro_export]
macro_rules! text {
  ($($arg:tt)*) => {
    $crate::Node::text(::std::format!($($arg)*))
  };
}

/// Unescaped text with `format!` interpolation.
#[macro_export]
macro_rules! raw {
  ($($arg:tt)*) => {
    $crate::Node::raw(::std::format!($($arg)*))
  };
}

#[macro_export]
macro_rules! group {
  ($($child:expr),* $(,)?) => {
    $crate::Node::group(::std::vec![$($crate::Node::from($child)),*])
  };
}

#[macro_export]
macro_rules! fragment {
  ($($child:expr),* $(,)?) => {
    $crate::Node::fragment(::std::vec![$($crate::Node::from($child)),*])
  };
}

#[macro_export]
macro_rules! snapshot {
  ($($child:expr),* $(,)?) => {
    $crate::Node::snapshot(::std::vec![$($crate::Node::from($child)),*])
  };
}

#[cfg(test)]
mod tests {
  use crate::Node;
  use pretty_assertions::assert_eq;

  #[test]
  fn element_macro_accepts_mixed_children() {
    let admin = false;
    let node = el!(
      "p",
      attr!("id", "greeting"),
      "Hello, ",
      text!("{} & {}", "Tom", "Jerry"),
      admin.then(|| attr!("data-admin")),
      raw!("<br>{}", "!"),
    );
    assert_eq!(
      node.to_string(),
      r#"<p id="greeting">Hello, Tom &amp; Jerry<br>!</p>"#
    );
  }

  #[test]
  fn empty_element_macro() {
    assert_eq!(el!("hr").to_string(), "<hr>");
    assert_eq!(el!("div").to_string(), "<div></div>");
  }

  #[test]
  fn boolean_attribute_macro() {
    assert_eq!(el!("input", attr!("disabled")).to_string(), "<input disabled>");
  }

  #[test]
  fn group_fragment_and_snapshot_macros() {
    assert_eq!(fragment!("a", "b").to_string(), "ab");
    assert_eq!(el!("span", group!("a", "b")).to_string(), "<span>ab</span>");
    assert_eq!(snapshot!(el!("b", "x")).to_string(), "<b>x</b>");
    assert!(matches!(group!(), Node::Group(ref children) if children.is_empty()));
  }
}
