//! Named constructors for HTML elements and attributes.
//!
//! Names that are both an element and an attribute get an `_el` / `_attr`
//! suffix (`style_el`, `style_attr`). Attributes named after Rust keywords
//! get a trailing underscore (`type_`, `for_`, `async_`, `loop_`).

use crate::model::Node;
use pulldown_cmark::CowStr;

macro_rules! elements {
  ($($name:ident => $tag:literal),* $(,)?) => {
    $(
      pub fn $name<'a, I>(children: I) -> Node<'a>
      where
        I: IntoIterator<Item = Node<'a>>,
      {
        Node::element($tag, children)
      }
    )*
  };
}

macro_rules! attributes {
  ($($name:ident => $attr:literal),* $(,)?) => {
    $(
      pub fn $name<'a, V: Into<CowStr<'a>>>(value: V) -> Node<'a> {
        Node::attr_value($attr, value)
      }
    )*
  };
}

macro_rules! boolean_attributes {
  ($($name:ident => $attr:literal),* $(,)?) => {
    $(
      pub fn $name<'a>() -> Node<'a> {
        Node::attr($attr)
      }
    )*
  };
}

/// `<!doctype html>` followed by `sibling`, usually the `html` element.
pub fn doctype<'a>(sibling: Node<'a>) -> Node<'a> {
  Node::fragment([Node::raw("<!doctype html>"), sibling])
}

elements! {
  a => "a",
  abbr => "abbr",
  address => "address",
  area => "area",
  article => "article",
  aside => "aside",
  audio => "audio",
  b => "b",
  base => "base",
  blockquote => "blockquote",
  body => "body",
  br => "br",
  button => "button",
  canvas => "canvas",
  caption => "caption",
  cite => "cite",
  code => "code",
  col => "col",
  colgroup => "colgroup",
  data_el => "data",
  datalist => "datalist",
  dd => "dd",
  del => "del",
  details => "details",
  dfn => "dfn",
  dialog => "dialog",
  div => "div",
  dl => "dl",
  dt => "dt",
  em => "em",
  embed => "embed",
  fieldset => "fieldset",
  figcaption => "figcaption",
  figure => "figure",
  footer => "footer",
  form_el => "form",
  h1 => "h1",
  h2 => "h2",
  h3 => "h3",
  h4 => "h4",
  h5 => "h5",
  h6 => "h6",
  head => "head",
  header => "header",
  hgroup => "hgroup",
  hr => "hr",
  html => "html",
  i => "i",
  iframe => "iframe",
  img => "img",
  input => "input",
  ins => "ins",
  kbd => "kbd",
  label => "label",
  legend => "legend",
  li => "li",
  link => "link",
  main => "main",
  mark => "mark",
  menu => "menu",
  meta => "meta",
  meter => "meter",
  nav => "nav",
  noscript => "noscript",
  object => "object",
  ol => "ol",
  optgroup => "optgroup",
  option => "option",
  p => "p",
  param => "param",
  picture => "picture",
  pre => "pre",
  progress => "progress",
  q => "q",
  s => "s",
  samp => "samp",
  script => "script",
  section => "section",
  select => "select",
  small => "small",
  source => "source",
  span => "span",
  strong => "strong",
  style_el => "style",
  sub => "sub",
  summary => "summary",
  sup => "sup",
  svg => "svg",
  table => "table",
  tbody => "tbody",
  td => "td",
  textarea => "textarea",
  tfoot => "tfoot",
  th => "th",
  thead => "thead",
  time => "time",
  title_el => "title",
  tr => "tr",
  u => "u",
  ul => "ul",
  var => "var",
  video => "video",
  wbr => "wbr",
}

attributes! {
  accept => "accept",
  action => "action",
  alt => "alt",
  as_ => "as",
  autocomplete => "autocomplete",
  charset => "charset",
  class => "class",
  cols => "cols",
  colspan => "colspan",
  content => "content",
  enctype => "enctype",
  for_ => "for",
  form_attr => "form",
  height => "height",
  href => "href",
  id => "id",
  lang => "lang",
  loading => "loading",
  max => "max",
  maxlength => "maxlength",
  method => "method",
  min => "min",
  minlength => "minlength",
  name => "name",
  pattern => "pattern",
  placeholder => "placeholder",
  poster => "poster",
  preload => "preload",
  rel => "rel",
  role => "role",
  rows => "rows",
  rowspan => "rowspan",
  slot => "slot",
  src => "src",
  srcset => "srcset",
  step => "step",
  style_attr => "style",
  tabindex => "tabindex",
  target => "target",
  title_attr => "title",
  type_ => "type",
  value => "value",
  width => "width",
}

boolean_attributes! {
  async_ => "async",
  autofocus => "autofocus",
  autoplay => "autoplay",
  checked => "checked",
  controls => "controls",
  defer => "defer",
  disabled => "disabled",
  loop_ => "loop",
  multiple => "multiple",
  muted => "muted",
  playsinline => "playsinline",
  readonly => "readonly",
  required => "required",
  selected => "selected",
}

pub fn aria<'a>(name: &str, value: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value(format!("aria-{}", name), value)
}

pub fn data<'a>(name: &str, value: impl Into<CowStr<'a>>) -> Node<'a> {
  Node::attr_value(format!("data-{}", name), value)
}
