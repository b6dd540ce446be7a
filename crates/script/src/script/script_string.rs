use std::{borrow::Cow, io};

use binary_reader::BinaryReader;
use thiserror::Error;

use crate::common::{cipher, TextEncoding};

/// A decrypted, length-prefixed string field.
///
/// Only the bytes before the first zero are kept. They are turned into text
/// through a [`TextEncoding`] when rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptString {
  pub bytes: Vec<u8>
}

impl ScriptString {
  pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
    Self {
      bytes: bytes.into()
    }
  }

  pub fn from_text(text: &str, encoding: TextEncoding) -> Self {
    Self::new(encoding.encode(text).into_owned())
  }

  pub fn read(reader: &mut BinaryReader) -> io::Result<Self> {
    let length = reader.read_u16()? as usize;
    let mut bytes = reader.read_bytes(length)?.to_vec();

    cipher::decrypt(&mut bytes);

    if let Some(end) = bytes.iter().position(|b| *b == 0) {
      bytes.truncate(end);
    }

    Ok(Self { bytes })
  }

  /// Wire form: u16 length, then the encrypted plaintext plus its terminator.
  pub fn encode(&self) -> Result<Vec<u8>, StringTooLongError> {
    let length = u16::try_from(self.bytes.len() + 1).map_err(|_| {
      StringTooLongError {
        length: self.bytes.len()
      }
    })?;

    let mut payload = Vec::with_capacity(self.bytes.len() + 1);
    payload.extend_from_slice(&self.bytes);
    payload.push(0);
    cipher::encrypt(&mut payload);

    let mut result = Vec::with_capacity(payload.len() + 2);
    result.extend_from_slice(&length.to_le_bytes());
    result.extend_from_slice(&payload);

    Ok(result)
  }

  pub fn to_text<'a>(&'a self, encoding: TextEncoding) -> Cow<'a, str> {
    encoding.decode(&self.bytes)
  }

  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }
}

#[derive(Error, Debug)]
#[error("String of {length} bytes does not fit a 16-bit length prefix")]
pub struct StringTooLongError {
  pub length: usize
}
