use itertools::Itertools;

use crate::{
  common::{escape, TextEncoding},
  disassembler::{Instruction, Operand}
};

/// Renders decoded instructions as a flat `address | mnemonic` listing.
pub struct AssemblyFormatter {
  encoding: TextEncoding
}

impl AssemblyFormatter {
  pub fn new(encoding: TextEncoding) -> Self {
    Self { encoding }
  }

  pub fn format(&self, instructions: &[Instruction]) -> String {
    let mut lines: Vec<String> = Default::default();
    self.format_block(instructions, &mut lines);

    let mut output = lines.join("\n");
    if !output.is_empty() {
      output.push('\n');
    }
    output
  }

  fn format_block(&self, instructions: &[Instruction], lines: &mut Vec<String>) {
    for info in instructions {
      let address = info.address;
      let mnemonic = info.mnemonic();

      match &info.operand {
        Operand::None => lines.push(format!("{address:08X} | {mnemonic}")),
        Operand::Dword(value) => lines.push(format!("{address:08X} | {mnemonic} 0x{value:08X}")),
        Operand::String(string) => {
          let text = escape(&string.to_text(self.encoding));
          lines.push(format!("{address:08X} | {mnemonic} \"{text}\""))
        }
        Operand::Block {
          bytes,
          instructions
        } => {
          let hex = bytes.iter().map(|b| format!("{b:02X}")).join("");
          lines.push(format!("{address:08X} | {mnemonic} \"{hex}\""));

          let block_start = info.end() - bytes.len();
          lines.push(format!("{block_start:08X} | ; block start of {address:08X}"));
          self.format_block(instructions, lines);
          lines.push(format!("{:08X} | ; block end of {address:08X}", info.end()));
        }
        Operand::Register(id) => lines.push(format!("{address:08X} | {mnemonic} 0x{id:04X}")),
        Operand::DynamicCall => {
          lines.push(format!("{address:08X} | {mnemonic} 0x{:04X}", info.opcode))
        }
      }
    }
  }
}
