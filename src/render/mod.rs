pub mod escape;
pub mod html;
pub mod writer;

pub use escape::escape_html;
pub use html::{is_void_element, render};
