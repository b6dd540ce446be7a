use cis_script::{
  common::TextEncoding,
  disassembler::{DisassembleError, Operand},
  formatters::{AssemblyFormatter, SymbolFormatter, TextFormatter},
  script::{
    parse_script, parse_script_file, ParseOptions, ParseScriptError, ParseScriptFileError,
    ReadTableError, ScriptString, VariableValue
  }
};

const HEADER_SIZE: usize = 0x14;

struct ScriptBuilder {
  code:           Vec<u8>,
  labels:         Vec<(i32, String)>,
  variables:      Vec<Variable>,
  variable_count: Option<i32>,
  base_id:        i32
}

enum Variable {
  Integer(i32),
  String(String)
}

impl ScriptBuilder {
  fn new() -> Self {
    Self {
      code:           Vec::new(),
      labels:         Vec::new(),
      variables:      Vec::new(),
      variable_count: None,
      base_id:        0
    }
  }

  fn op(mut self, opcode: u16) -> Self {
    self.code.extend_from_slice(&opcode.to_le_bytes());
    self
  }

  fn push_dword(self, value: i32) -> Self {
    let mut builder = self.op(0x0002);
    builder.code.extend_from_slice(&value.to_le_bytes());
    builder
  }

  fn push_str(self, text: &str) -> Self {
    let mut builder = self.op(0x0004);
    builder.code.extend(encode(text));
    builder
  }

  fn push_bin(self, inner: ScriptBuilder) -> Self {
    let mut builder = self.op(0x0005);
    builder
      .code
      .extend_from_slice(&(inner.code.len() as i32).to_le_bytes());
    builder.code.extend(inner.code);
    builder
  }

  fn add_cmd(self, id: u16) -> Self {
    let mut builder = self.op(0x000E);
    builder.code.extend_from_slice(&id.to_le_bytes());
    builder
  }

  fn label(mut self, address: i32, name: &str) -> Self {
    self.labels.push((address, name.to_owned()));
    self
  }

  fn variable(mut self, variable: Variable) -> Self {
    self.variables.push(variable);
    self
  }

  fn build(self) -> Vec<u8> {
    let mut labels = Vec::new();
    for (address, name) in &self.labels {
      labels.extend_from_slice(&address.to_le_bytes());
      labels.extend(encode(name));
    }
    labels.extend_from_slice(&(-1i32).to_le_bytes());

    let mut variables = Vec::new();
    for variable in &self.variables {
      match variable {
        Variable::Integer(value) => {
          variables.push(1);
          variables.extend_from_slice(&value.to_le_bytes());
        }
        Variable::String(text) => {
          variables.push(2);
          variables.extend(encode(text));
        }
      }
    }
    variables.push(0xFF);

    let code_offset = HEADER_SIZE as i32;
    let label_offset = code_offset + self.code.len() as i32;
    let variable_offset = label_offset + labels.len() as i32;
    let variable_count = self
      .variable_count
      .unwrap_or(self.variables.len() as i32);

    let mut bytes = Vec::new();
    for field in [
      code_offset,
      variable_count,
      label_offset,
      self.base_id,
      variable_offset
    ] {
      bytes.extend_from_slice(&field.to_le_bytes());
    }
    bytes.extend(self.code);
    bytes.extend(labels);
    bytes.extend(variables);
    bytes
  }
}

fn encode(text: &str) -> Vec<u8> {
  ScriptString::from_text(text, TextEncoding::ShiftJis)
    .encode()
    .unwrap()
}

fn sample() -> Vec<u8> {
  let mut builder = ScriptBuilder::new()
    .add_cmd(0x7001)
    .push_str("「おはよう」")
    .push_str("se01.ogg")
    .push_bin(
      ScriptBuilder::new()
        .push_dword(3)
        .push_str("「中」")
        .op(0x7001)
    )
    .op(0x7001)
    .push_dword(-2)
    .op(0x000D)
    .label(0x14, "main")
    .label(0x40, "end")
    .variable(Variable::Integer(9))
    .variable(Variable::String("名前".to_owned()));
  builder.base_id = 0x10;
  builder.build()
}

#[test]
fn parses_a_complete_script() {
  let script = parse_script(sample(), &ParseOptions::default()).unwrap();

  assert_eq!(script.header.code_offset, 0x14);
  assert_eq!(script.instructions.len(), 7);
  assert!(script.registered.contains(0x7001));

  let total = script.instructions.iter().map(|i| i.size).sum::<usize>();
  assert_eq!(total, script.code().len());

  assert_eq!(script.labels.len(), 2);
  assert_eq!(script.labels[1].address, 0x40);
  assert_eq!(
    script.labels[1].name.to_text(TextEncoding::ShiftJis),
    "end"
  );

  assert_eq!(script.variables.len(), 2);
  assert_eq!(script.variables[0].id, 0x10);
  assert_eq!(script.variables[0].value, VariableValue::Integer(9));
  assert_eq!(script.variables[1].id, 0x11);
  assert!(matches!(
    &script.variables[1].value,
    VariableValue::String(name) if name.to_text(TextEncoding::ShiftJis) == "名前"
  ));
}

#[test]
fn renders_disassembly() {
  let script = parse_script(sample(), &ParseOptions::default()).unwrap();
  let listing = AssemblyFormatter::new(TextEncoding::ShiftJis).format(&script.instructions);
  let lines = listing.lines().collect::<Vec<_>>();

  assert_eq!(lines[0], "00000014 | add_cmd 0x7001");
  assert!(lines[1].ends_with("| push str \"「おはよう」\""));
  assert!(lines[2].ends_with("| push str \"se01.ogg\""));
  assert!(lines[3].contains("| push bin \""));
  assert!(lines[4].contains("; block start of"));
  assert!(lines[5].ends_with("| push dword 0x00000003"));
  assert!(lines[7].ends_with("| exec_cmd 0x7001"));
  assert!(lines[8].contains("; block end of"));
  assert!(lines[9].ends_with("| exec_cmd 0x7001"));
  assert!(lines[10].ends_with("| push dword 0xFFFFFFFE"));
  assert!(lines[11].ends_with("| ret"));
  assert_eq!(lines.len(), 12);
}

#[test]
fn exports_only_top_level_dialogue() {
  let script = parse_script(sample(), &ParseOptions::default()).unwrap();
  let text = TextFormatter::new(TextEncoding::ShiftJis).format(&script.instructions);

  let address = script.instructions[1].address;
  assert_eq!(
    text,
    format!("◇{address:08X}◇「おはよう」\n◆{address:08X}◆「おはよう」\n\n")
  );
}

#[test]
fn lists_symbols() {
  let script = parse_script(sample(), &ParseOptions::default()).unwrap();
  let symbols =
    SymbolFormatter::new(TextEncoding::ShiftJis).format(&script.labels, &script.variables);

  assert!(symbols.contains("00000014 | label \"main\""));
  assert!(symbols.contains("00000010 | int 0x00000009"));
  assert!(symbols.contains("00000011 | str \"名前\""));
}

#[test]
fn unregistered_call_aborts_the_parse() {
  let bytes = ScriptBuilder::new().op(0x7001).build();

  assert!(matches!(
    parse_script(bytes, &ParseOptions::default()),
    Err(ParseScriptError::Code {
      source: DisassembleError::UnknownOpcode {
        opcode:  0x7001,
        address: 0x14
      }
    })
  ));
}

#[test]
fn variable_count_is_cross_checked() {
  let mut builder = ScriptBuilder::new()
    .op(0x0000)
    .variable(Variable::Integer(1));
  builder.variable_count = Some(2);

  assert!(matches!(
    parse_script(builder.build(), &ParseOptions::default()),
    Err(ParseScriptError::Tables {
      source: ReadTableError::VariableCountMismatch {
        expected: 2,
        actual:   1
      }
    })
  ));
}

#[test]
fn empty_code_region_is_valid() {
  let script = parse_script(ScriptBuilder::new().build(), &ParseOptions::default()).unwrap();
  assert!(script.instructions.is_empty());
  assert!(script.labels.is_empty());
  assert!(script.variables.is_empty());
}

#[test]
fn block_operand_keeps_raw_bytes() {
  let script = parse_script(sample(), &ParseOptions::default()).unwrap();
  let block = &script.instructions[3];

  let Operand::Block {
    bytes,
    instructions
  } = &block.operand
  else {
    panic!("expected a block operand");
  };

  assert_eq!(block.size, 6 + bytes.len());
  assert_eq!(instructions.len(), 3);
  assert_eq!(instructions[0].address, block.address + 6);
}

#[test]
fn reads_scripts_from_disk() {
  let path = std::env::temp_dir().join(format!("cis-script-{}.bin", std::process::id()));
  std::fs::write(&path, sample()).unwrap();

  let script = parse_script_file(&path, &ParseOptions::default());
  std::fs::remove_file(&path).unwrap();

  assert_eq!(script.unwrap().instructions.len(), 7);
}

#[test]
fn missing_file_reports_its_path() {
  let error = parse_script_file("does/not/exist.bin", &ParseOptions::default()).unwrap_err();

  assert!(matches!(
    error,
    ParseScriptFileError::ReadFileError { path: Some(ref path), .. } if path == "does/not/exist.bin"
  ));
}
