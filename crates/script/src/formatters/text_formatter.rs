use crate::{
  common::{escape, TextEncoding},
  disassembler::{opcodes::PUSH_STRING, Instruction, Operand}
};

const ORIGINAL_MARKER: char = '◇';
const TRANSLATION_MARKER: char = '◆';

/// A dialogue string found at `address`, already escaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEntry {
  pub address: usize,
  pub text:    String
}

/// Collects the `push str` operands of the top-level stream that look like
/// narrative text: not blank, and not starting with an ASCII character.
pub fn extract_text(instructions: &[Instruction], encoding: TextEncoding) -> Vec<TextEntry> {
  instructions
    .iter()
    .filter(|info| info.opcode == PUSH_STRING)
    .filter_map(|info| {
      let Operand::String(string) = &info.operand else {
        return None;
      };

      let text = string.to_text(encoding);
      if text.trim().is_empty() {
        return None;
      }

      match text.chars().next() {
        Some(first) if first as u32 > 0x7F => {
          Some(TextEntry {
            address: info.address,
            text:    escape(&text)
          })
        }
        _ => None
      }
    })
    .collect()
}

pub struct TextFormatter {
  encoding: TextEncoding
}

impl TextFormatter {
  pub fn new(encoding: TextEncoding) -> Self {
    Self { encoding }
  }

  /// One original line, one translation line to be edited, one blank line.
  pub fn format(&self, instructions: &[Instruction]) -> String {
    let mut output = String::new();

    for entry in extract_text(instructions, self.encoding) {
      let address = entry.address;
      let text = entry.text;
      output.push_str(&format!("{ORIGINAL_MARKER}{address:08X}{ORIGINAL_MARKER}{text}\n"));
      output.push_str(&format!(
        "{TRANSLATION_MARKER}{address:08X}{TRANSLATION_MARKER}{text}\n"
      ));
      output.push('\n');
    }

    output
  }
}
