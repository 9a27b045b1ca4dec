//! Attributes for [htmx](https://htmx.org).

use crate::model::Node;
use pulldown_cmark::CowStr;

pub fn boost<'a>() -> Node<'a> {
  Node::attr_value("hx-boost", "true")
}

pub fn get<'a>(path: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("hx-get", path)
}

pub fn post<'a>(path: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("hx-post", path)
}

pub fn put<'a>(path: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("hx-put", path)
}

pub fn delete<'a>(path: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("hx-delete", path)
}

/// `hx-on:<event>`, e.g. `on("click", "alert('hi')")`.
pub fn on<'a>(event: &str, code: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value(format!("hx-on:{}", event), code)
}

pub fn push_url<'a>(value: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("hx-push-url", value)
}

pub fn push_url_true<'a>() -> Node<'a> {
  push_url("true")
}

pub fn select<'a>(target: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("hx-select", target)
}

pub fn select_oob<'a>(target: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("hx-select-oob", target)
}

pub fn swap<'a>(how: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("hx-swap", how)
}

pub fn swap_oob<'a>(how: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("hx-swap-oob", how)
}

pub fn target<'a>(target: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("hx-target", target)
}

pub fn trigger<'a>(trigger: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("hx-trigger", trigger)
}

pub fn vals<'a>(vals: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("hx-vals", vals)
}

pub fn ext<'a>(ext: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("hx-ext", ext)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn button_with_htmx_attributes() {
    let node = el!(
      "button",
      post("/clicked"),
      swap("outerHTML"),
      on("click", "this.disabled = true"),
      push_url_true(),
      "Click"
    );
    assert_eq!(
      node.to_string(),
      r#"<button hx-post="/clicked" hx-swap="outerHTML" hx-on:click="this.disabled = true" hx-push-url="true">Click</button>"#
    );
  }

  #[test]
  fn values_are_escaped() {
    assert_eq!(vals(r#"{"id": 1}"#).to_string(), r#" hx-vals="{&#34;id&#34;: 1}""#);
    assert_eq!(boost().to_string(), r#" hx-boost="true""#);
  }
}
