use crate::{
  common::{escape, TextEncoding},
  script::{Label, Variable, VariableValue}
};

/// Lists the label and variable tables in the same `key | value` shape as
/// the disassembly.
pub struct SymbolFormatter {
  encoding: TextEncoding
}

impl SymbolFormatter {
  pub fn new(encoding: TextEncoding) -> Self {
    Self { encoding }
  }

  pub fn format(&self, labels: &[Label], variables: &[Variable]) -> String {
    let mut lines: Vec<String> = Default::default();

    lines.push(format!("; labels ({})", labels.len()));
    for label in labels {
      let name = escape(&label.name.to_text(self.encoding));
      lines.push(format!("{:08X} | label \"{name}\"", label.address));
    }

    lines.push(String::new());
    lines.push(format!("; variables ({})", variables.len()));
    for variable in variables {
      let id = variable.id;
      match &variable.value {
        VariableValue::Integer(value) => lines.push(format!("{id:08X} | int 0x{value:08X}")),
        VariableValue::String(string) => {
          let text = escape(&string.to_text(self.encoding));
          lines.push(format!("{id:08X} | str \"{text}\""))
        }
      }
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
  }
}
