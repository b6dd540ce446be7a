mod parse_options;
mod script_header;
mod script_parser;
mod script_string;
mod tables;

pub use parse_options::*;
pub use script_header::*;
pub use script_parser::*;
pub use script_string::*;
pub use tables::*;

use crate::disassembler::{Instruction, RegisteredOpcodes};

/// A fully decoded script image.
#[derive(Debug)]
pub struct Script {
  pub header:       ScriptHeader,
  pub bytes:        Vec<u8>,
  pub instructions: Vec<Instruction>,
  pub labels:       Vec<Label>,
  pub variables:    Vec<Variable>,
  pub registered:   RegisteredOpcodes
}

impl Script {
  pub fn code(&self) -> &[u8] {
    &self.bytes[self.header.code_range()]
  }
}
