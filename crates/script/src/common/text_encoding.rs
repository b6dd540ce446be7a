use std::{borrow::Cow, fmt, str::FromStr};

use encoding_rs::{Encoding, GBK, SHIFT_JIS, UTF_8};
use thiserror::Error;

/// The national encoding script strings are stored in.
///
/// Strings stay raw bytes through decoding and are only turned into text
/// when they are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextEncoding {
  #[default]
  ShiftJis,
  Gbk,
  Utf8,
  Other(&'static Encoding)
}

impl TextEncoding {
  pub fn encoding(&self) -> &'static Encoding {
    match self {
      TextEncoding::ShiftJis => SHIFT_JIS,
      TextEncoding::Gbk => GBK,
      TextEncoding::Utf8 => UTF_8,
      TextEncoding::Other(encoding) => encoding
    }
  }

  pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
    self.encoding().decode_without_bom_handling(bytes).0
  }

  pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
    self.encoding().encode(text).0
  }

  pub fn name(&self) -> &'static str {
    self.encoding().name()
  }

  fn from_encoding(encoding: &'static Encoding) -> Self {
    if encoding == SHIFT_JIS {
      TextEncoding::ShiftJis
    } else if encoding == GBK {
      TextEncoding::Gbk
    } else if encoding == UTF_8 {
      TextEncoding::Utf8
    } else {
      TextEncoding::Other(encoding)
    }
  }
}

impl fmt::Display for TextEncoding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for TextEncoding {
  type Err = UnknownEncodingError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "sjis" | "cp932" | "932" => Ok(TextEncoding::ShiftJis),
      "gbk" | "cp936" | "936" => Ok(TextEncoding::Gbk),
      "utf8" | "65001" => Ok(TextEncoding::Utf8),
      label => {
        Encoding::for_label(label.as_bytes())
          .map(Self::from_encoding)
          .ok_or_else(|| {
            UnknownEncodingError {
              label: s.to_owned()
            }
          })
      }
    }
  }
}

#[derive(Error, Debug)]
#[error("Unknown text encoding {label:?}")]
pub struct UnknownEncodingError {
  pub label: String
}
