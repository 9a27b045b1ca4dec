//! SVG presentation attributes. Use with [`crate::html::svg`] or [`Node::element`].

use crate::model::Node;
use pulldown_cmark::CowStr;

attributes! {
  clip_rule => "clip-rule",
  d => "d",
  fill => "fill",
  fill_rule => "fill-rule",
  stroke => "stroke",
  stroke_width => "stroke-width",
  view_box => "viewBox",
}
