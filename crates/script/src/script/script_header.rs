use std::ops::Range;

use binary_layout::define_layout;
use thiserror::Error;

// |-----------|
// | Header    |
// |-----------|
// | Code      |
// |-----------|
// | Label     |
// |-----------|
// | Variable  |
// |-----------|
define_layout!(raw_header, LittleEndian, {
  code_offset: i32, // 0x00
  variable_count: i32, // 0x04
  label_offset: i32, // 0x08
  variable_base_id: i32, // 0x0C
  variable_offset: i32 // 0x10
});

pub const HEADER_SIZE: usize = 0x14;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptHeader {
  pub code_offset:      i32,
  pub variable_count:   i32,
  pub label_offset:     i32,
  pub variable_base_id: i32,
  pub variable_offset:  i32
}

impl ScriptHeader {
  pub fn parse(bytes: &[u8]) -> Result<Self, ParseScriptHeaderError> {
    if bytes.len() < HEADER_SIZE {
      return Err(ParseScriptHeaderError::TooShort {
        length: bytes.len()
      });
    }

    let view = raw_header::View::new(&bytes[..HEADER_SIZE]);

    let header = Self {
      code_offset:      view.code_offset().read(),
      variable_count:   view.variable_count().read(),
      label_offset:     view.label_offset().read(),
      variable_base_id: view.variable_base_id().read(),
      variable_offset:  view.variable_offset().read()
    };

    header.validate(bytes.len())?;

    Ok(header)
  }

  /// The code region is everything between the code and label offsets.
  pub fn code_range(&self) -> Range<usize> {
    self.code_offset as usize..self.label_offset as usize
  }

  fn validate(&self, length: usize) -> Result<(), ParseScriptHeaderError> {
    for (field, offset) in [
      ("code_offset", self.code_offset),
      ("label_offset", self.label_offset),
      ("variable_offset", self.variable_offset)
    ] {
      if offset < 0 || offset as usize > length {
        return Err(ParseScriptHeaderError::OffsetOutOfBounds {
          field,
          offset,
          length
        });
      }
    }

    if self.code_offset > self.label_offset {
      return Err(ParseScriptHeaderError::CodeRegionInverted {
        code_offset:  self.code_offset,
        label_offset: self.label_offset
      });
    }

    Ok(())
  }
}

#[derive(Debug, Error)]
pub enum ParseScriptHeaderError {
  #[error("File of {length} bytes is too short to hold a script header")]
  TooShort { length: usize },

  #[error("Header field {field} points to 0x{offset:08X}, outside of {length} bytes")]
  OffsetOutOfBounds {
    field:  &'static str,
    offset: i32,
    length: usize
  },

  #[error("Code offset 0x{code_offset:08X} lies past label offset 0x{label_offset:08X}")]
  CodeRegionInverted { code_offset: i32, label_offset: i32 }
}
