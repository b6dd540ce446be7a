use crate::script::ScriptString;

use super::opcodes::{self, DYNAMIC_CALL_MNEMONIC};

/// One decoded instruction. Blocks own their nested instructions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
  /// Offset from the start of the script image.
  pub address: usize,
  pub opcode:  u16,
  /// Bytes consumed, opcode included.
  pub size:    usize,
  pub operand: Operand
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
  None,
  Dword(i32),
  String(ScriptString),
  Block {
    bytes:        Vec<u8>,
    instructions: Vec<Instruction>
  },
  Register(u16),
  /// An opcode outside the catalog that an earlier registration made legal.
  DynamicCall
}

impl Instruction {
  pub fn mnemonic(&self) -> &'static str {
    match self.operand {
      Operand::DynamicCall => DYNAMIC_CALL_MNEMONIC,
      _ => {
        opcodes::lookup(self.opcode)
          .map(|info| info.mnemonic)
          .unwrap_or(DYNAMIC_CALL_MNEMONIC)
      }
    }
  }

  pub fn end(&self) -> usize {
    self.address + self.size
  }

  pub fn children(&self) -> &[Instruction] {
    match &self.operand {
      Operand::Block { instructions, .. } => instructions,
      _ => &[]
    }
  }
}
