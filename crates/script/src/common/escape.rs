use std::fmt::Write;

/// Makes control characters literal so a string fits on one output line.
pub fn escape(text: &str) -> String {
  let mut result = String::with_capacity(text.len());

  for char in text.chars() {
    match char {
      '\\' => result.push_str("\\\\"),
      '\n' => result.push_str("\\n"),
      '\r' => result.push_str("\\r"),
      '\t' => result.push_str("\\t"),
      '\0' => result.push_str("\\0"),
      c if c.is_ascii_control() => {
        let _ = write!(result, "\\x{:02X}", c as u32);
      }
      c => result.push(c)
    }
  }

  result
}
