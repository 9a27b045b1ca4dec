use std::borrow::Cow;

fn needs_escape(byte: u8) -> bool {
  matches!(byte, b'&' | b'\'' | b'<' | b'>' | b'"' | b'\0')
}

/// Escapes `value` for use in HTML text or a quoted attribute value.
///
/// Returns the input untouched when nothing needs replacing.
pub fn escape_html(value: &str) -> Cow<'_, str> {
  let first = match value.bytes().position(needs_escape) {
    Some(index) => index,
    None => return Cow::Borrowed(value),
  };

  let mut escaped = String::with_capacity(value.len() + 8);
  escaped.push_str(&value[..first]);

  for ch in value[first..].chars() {
    match ch {
      '&' => escaped.push_str("&amp;"),
      '\'' => escaped.push_str("&#39;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&#34;"),
      '\0' => escaped.push('\u{FFFD}'),
      _ => escaped.push(ch),
    }
  }

  Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn plain_text_is_borrowed() {
    assert!(matches!(escape_html("hello world"), Cow::Borrowed("hello world")));
  }

  #[test]
  fn escapes_markup_characters() {
    assert_eq!(
      escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
      "&lt;a href=&#34;x&#34;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );
  }

  #[test]
  fn replaces_nul() {
    assert_eq!(escape_html("a\0b"), "a\u{FFFD}b");
  }

  #[test]
  fn keeps_multibyte_characters() {
    assert_eq!(escape_html("café <b>"), "café &lt;b&gt;");
  }
}
