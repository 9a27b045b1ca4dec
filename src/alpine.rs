//! Attributes for [Alpine.js](https://alpinejs.dev).

use crate::model::Node;
use pulldown_cmark::CowStr;

pub fn data<'a>(value: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("x-data", value)
}

pub fn on<'a>(value: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("x-on", value)
}

pub fn init<'a>(value: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value("x-init", value)
}
