/// Bytes that follow an opcode on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandShape {
  None,
  /// Little-endian `i32`.
  Dword,
  /// Length-prefixed encrypted string.
  String,
  /// `i32` byte count followed by a nested instruction stream.
  Block,
  /// `u16` opcode that becomes legal for the rest of the pass.
  Register
}

#[derive(Clone, Copy, Debug)]
pub struct OpcodeInfo {
  pub opcode:   u16,
  pub mnemonic: &'static str,
  pub shape:    OperandShape
}

impl OpcodeInfo {
  const fn new(opcode: u16, mnemonic: &'static str, shape: OperandShape) -> Self {
    Self {
      opcode,
      mnemonic,
      shape
    }
  }
}

pub const PUSH_DWORD: u16 = 0x0002;
pub const PUSH_STRING: u16 = 0x0004;
pub const PUSH_BINARY: u16 = 0x0005;
pub const ADD_COMMAND: u16 = 0x000E;
pub const ADD_COMMAND_ALIAS: u16 = 0x000F;

/// Mnemonic used for registered opcodes, which have no catalog entry.
pub const DYNAMIC_CALL_MNEMONIC: &str = "exec_cmd";

pub fn lookup(opcode: u16) -> Option<&'static OpcodeInfo> {
  OPCODES
    .binary_search_by_key(&opcode, |info| info.opcode)
    .ok()
    .map(|index| &OPCODES[index])
}

pub fn opcodes() -> &'static [OpcodeInfo] {
  OPCODES
}

// Sorted by opcode.
static OPCODES: &[OpcodeInfo] = &[
  OpcodeInfo::new(0x0000, "nop0", OperandShape::None),
  OpcodeInfo::new(0x0001, "nop1", OperandShape::None),
  OpcodeInfo::new(0x0002, "push dword", OperandShape::Dword),
  OpcodeInfo::new(0x0004, "push str", OperandShape::String),
  OpcodeInfo::new(0x0005, "push bin", OperandShape::Block),
  OpcodeInfo::new(0x0007, "jump_indirect", OperandShape::None),
  OpcodeInfo::new(0x0008, "jump_true", OperandShape::None),
  OpcodeInfo::new(0x0009, "jump_false", OperandShape::None),
  OpcodeInfo::new(0x000A, "call", OperandShape::None),
  OpcodeInfo::new(0x000B, "call_true", OperandShape::None),
  OpcodeInfo::new(0x000C, "call_false", OperandShape::None),
  OpcodeInfo::new(0x000D, "ret", OperandShape::None),
  OpcodeInfo::new(0x000E, "add_cmd", OperandShape::Register),
  OpcodeInfo::new(0x000F, "add_cmd_alias", OperandShape::Register),
  OpcodeInfo::new(0x0010, "stog", OperandShape::None),
  OpcodeInfo::new(0x0011, "gtos", OperandShape::None),
  OpcodeInfo::new(0x0012, "jump_break", OperandShape::None),
  OpcodeInfo::new(0x0013, "jump_reset", OperandShape::None),
  OpcodeInfo::new(0x0014, "load_script", OperandShape::None),
  OpcodeInfo::new(0x0020, "cmd_0020", OperandShape::None),
  OpcodeInfo::new(0x0021, "cmd_0021", OperandShape::None),
  OpcodeInfo::new(0x0022, "find_label", OperandShape::None),
  OpcodeInfo::new(0x0023, "cmd_0023", OperandShape::None),
  OpcodeInfo::new(0x0024, "cmd_0024", OperandShape::None),
  OpcodeInfo::new(0x0025, "exec_cmd", OperandShape::None),
  OpcodeInfo::new(0x0040, "clock", OperandShape::None),
  OpcodeInfo::new(0x0041, "tick", OperandShape::None),
  OpcodeInfo::new(0x0042, "ticks", OperandShape::None),
  OpcodeInfo::new(0x0043, "wait", OperandShape::None),
  OpcodeInfo::new(0x0044, "past", OperandShape::None),
  OpcodeInfo::new(0x0064, "drop", OperandShape::None),
  OpcodeInfo::new(0x0065, "drops", OperandShape::None),
  OpcodeInfo::new(0x0066, "dup", OperandShape::None),
  OpcodeInfo::new(0x0067, "dups", OperandShape::None),
  OpcodeInfo::new(0x0068, "pick", OperandShape::None),
  OpcodeInfo::new(0x0069, "push", OperandShape::None),
  OpcodeInfo::new(0x006A, "depth", OperandShape::None),
  OpcodeInfo::new(0x006B, "system_depth", OperandShape::None),
  OpcodeInfo::new(0x006C, "return_depth", OperandShape::None),
  OpcodeInfo::new(0x006D, "return_addr", OperandShape::None),
  OpcodeInfo::new(0x0096, "loop", OperandShape::None),
  OpcodeInfo::new(0x0097, "loop(internal)", OperandShape::None),
  OpcodeInfo::new(0x0098, "repeat", OperandShape::None),
  OpcodeInfo::new(0x0099, "repeat(internal)", OperandShape::None),
  OpcodeInfo::new(0x009A, "for", OperandShape::None),
  OpcodeInfo::new(0x009B, "for(internal)", OperandShape::None),
  OpcodeInfo::new(0x009C, "while", OperandShape::None),
  OpcodeInfo::new(0x009D, "while(internal)", OperandShape::None),
  OpcodeInfo::new(0x009E, "while(internal)", OperandShape::None),
  OpcodeInfo::new(0x009F, "do", OperandShape::None),
  OpcodeInfo::new(0x00A0, "break", OperandShape::None),
  OpcodeInfo::new(0x00A1, "if_break", OperandShape::None),
  OpcodeInfo::new(0x00A2, "nif_break", OperandShape::None),
  OpcodeInfo::new(0x00A3, "continue", OperandShape::None),
  OpcodeInfo::new(0x00A4, "if_continue", OperandShape::None),
  OpcodeInfo::new(0x00A5, "nif_continue", OperandShape::None),
  OpcodeInfo::new(0x00A6, "call_command", OperandShape::None),
  OpcodeInfo::new(0x00A7, "if_command", OperandShape::None),
  OpcodeInfo::new(0x00A8, "nif_command", OperandShape::None),
  OpcodeInfo::new(0x00C8, "drop2", OperandShape::None),
  OpcodeInfo::new(0x00C9, "drops2", OperandShape::None),
  OpcodeInfo::new(0x00CA, "move12", OperandShape::None),
  OpcodeInfo::new(0x00CB, "moves12", OperandShape::None),
  OpcodeInfo::new(0x00CC, "move21", OperandShape::None),
  OpcodeInfo::new(0x00CD, "moves21", OperandShape::None),
  OpcodeInfo::new(0x00CE, "dup2", OperandShape::None),
  OpcodeInfo::new(0x00CF, "dup12", OperandShape::None),
  OpcodeInfo::new(0x00D0, "dup21", OperandShape::None),
  OpcodeInfo::new(0x00D2, "pick2", OperandShape::None),
  OpcodeInfo::new(0x00D3, "push2", OperandShape::None),
  OpcodeInfo::new(0x00D4, "depth2", OperandShape::None),
  OpcodeInfo::new(0x00FA, "add", OperandShape::None),
  OpcodeInfo::new(0x00FB, "adds", OperandShape::None),
  OpcodeInfo::new(0x00FC, "sub", OperandShape::None),
  OpcodeInfo::new(0x00FD, "subs", OperandShape::None),
  OpcodeInfo::new(0x00FE, "mult", OperandShape::None),
  OpcodeInfo::new(0x00FF, "div", OperandShape::None),
  OpcodeInfo::new(0x0100, "mod", OperandShape::None),
  OpcodeInfo::new(0x0101, "negate", OperandShape::None),
  OpcodeInfo::new(0x0102, "max", OperandShape::None),
  OpcodeInfo::new(0x0103, "maxs", OperandShape::None),
  OpcodeInfo::new(0x0104, "min", OperandShape::None),
  OpcodeInfo::new(0x0105, "mins", OperandShape::None),
  OpcodeInfo::new(0x0106, "random", OperandShape::None),
  OpcodeInfo::new(0x0107, "set_random_seed", OperandShape::None),
  OpcodeInfo::new(0x012C, "not", OperandShape::None),
  OpcodeInfo::new(0x012D, "and", OperandShape::None),
  OpcodeInfo::new(0x012E, "ands", OperandShape::None),
  OpcodeInfo::new(0x012F, "or", OperandShape::None),
  OpcodeInfo::new(0x0130, "ors", OperandShape::None),
  OpcodeInfo::new(0x0131, "xor", OperandShape::None),
  OpcodeInfo::new(0x0132, "xors", OperandShape::None),
  OpcodeInfo::new(0x0133, "equal", OperandShape::None),
  OpcodeInfo::new(0x0134, "different", OperandShape::None),
  OpcodeInfo::new(0x0135, "larger", OperandShape::None),
  OpcodeInfo::new(0x0136, "larger_equal", OperandShape::None),
  OpcodeInfo::new(0x0137, "less", OperandShape::None),
  OpcodeInfo::new(0x0138, "less_equal", OperandShape::None),
  OpcodeInfo::new(0x015E, "strlen", OperandShape::None),
  OpcodeInfo::new(0x015F, "strleft", OperandShape::None),
  OpcodeInfo::new(0x0160, "strright", OperandShape::None),
  OpcodeInfo::new(0x0161, "strmid", OperandShape::None),
  OpcodeInfo::new(0x0190, "fopen", OperandShape::None),
  OpcodeInfo::new(0x0191, "fcreate", OperandShape::None),
  OpcodeInfo::new(0x0192, "fclose", OperandShape::None),
  OpcodeInfo::new(0x0193, "fflush", OperandShape::None),
  OpcodeInfo::new(0x0194, "feof", OperandShape::None),
  OpcodeInfo::new(0x0195, "ferror", OperandShape::None),
  OpcodeInfo::new(0x0196, "flocation", OperandShape::None),
  OpcodeInfo::new(0x0197, "fseek", OperandShape::None),
  OpcodeInfo::new(0x0198, "fseekend", OperandShape::None),
  OpcodeInfo::new(0x0199, "fseekadd", OperandShape::None),
  OpcodeInfo::new(0x019A, "fread1", OperandShape::None),
  OpcodeInfo::new(0x019B, "freadU1", OperandShape::None),
  OpcodeInfo::new(0x019C, "fread2", OperandShape::None),
  OpcodeInfo::new(0x019D, "freadU2", OperandShape::None),
  OpcodeInfo::new(0x019E, "fread4", OperandShape::None),
  OpcodeInfo::new(0x019F, "freadU4", OperandShape::None),
  OpcodeInfo::new(0x01A0, "freadline", OperandShape::None),
  OpcodeInfo::new(0x01A1, "freadstr", OperandShape::None),
  OpcodeInfo::new(0x01A2, "freaddata", OperandShape::None),
  OpcodeInfo::new(0x01A3, "fwrite1", OperandShape::None),
  OpcodeInfo::new(0x01A4, "fwrite2", OperandShape::None),
  OpcodeInfo::new(0x01A5, "fwrite4", OperandShape::None),
  OpcodeInfo::new(0x01A6, "fwritechars", OperandShape::None),
  OpcodeInfo::new(0x01A7, "fwritestr", OperandShape::None),
  OpcodeInfo::new(0x01A8, "fwritedata", OperandShape::None),
  OpcodeInfo::new(0x01B8, "file_delete", OperandShape::None),
  OpcodeInfo::new(0x01B9, "file_copy", OperandShape::None),
  OpcodeInfo::new(0x01BA, "file_move", OperandShape::None),
  OpcodeInfo::new(0x01C2, "b_not", OperandShape::None),
  OpcodeInfo::new(0x01C3, "b_and", OperandShape::None),
  OpcodeInfo::new(0x01C4, "b_or", OperandShape::None),
  OpcodeInfo::new(0x01C5, "b_xor", OperandShape::None),
  OpcodeInfo::new(0x01C6, "b_shift_l", OperandShape::None),
  OpcodeInfo::new(0x01C7, "b_shift_r", OperandShape::None),
  OpcodeInfo::new(0x01C8, "b_shift_ar", OperandShape::None),
  OpcodeInfo::new(0x01F4, "ArrayNew", OperandShape::None),
  OpcodeInfo::new(0x01F5, "ArrayDelete", OperandShape::None),
  OpcodeInfo::new(0x01F6, "ArrayLength", OperandShape::None),
  OpcodeInfo::new(0x01F7, "ArrayResize", OperandShape::None),
  OpcodeInfo::new(0x01F8, "ArrayAppend", OperandShape::None),
  OpcodeInfo::new(0x01F9, "ArraySet", OperandShape::None),
  OpcodeInfo::new(0x01FA, "ArrayGet", OperandShape::None),
  OpcodeInfo::new(0x01FB, "ArraySortInsert", OperandShape::None),
  OpcodeInfo::new(0x01FC, "ArraySortedSearch", OperandShape::None),
  OpcodeInfo::new(0x0208, "FlagsInit", OperandShape::None),
  OpcodeInfo::new(0x0209, "FlagsSet", OperandShape::None),
  OpcodeInfo::new(0x020A, "FlagsReset", OperandShape::None),
  OpcodeInfo::new(0x020B, "FlagsPut", OperandShape::None),
  OpcodeInfo::new(0x020C, "FlagsGet", OperandShape::None),
  OpcodeInfo::new(0x020D, "freadflags", OperandShape::None),
  OpcodeInfo::new(0x020E, "fwriteflags", OperandShape::None),
  OpcodeInfo::new(0x020F, "system_stacks_flush", OperandShape::None),
  OpcodeInfo::new(0x0210, "FlagsCopy", OperandShape::None),
  OpcodeInfo::new(0x021C, "gettime", OperandShape::None),
  OpcodeInfo::new(0x021D, "decodetime", OperandShape::None),
  OpcodeInfo::new(0x4000, "event_timer", OperandShape::None),
  OpcodeInfo::new(0x4001, "event_mouse_move", OperandShape::None),
  OpcodeInfo::new(0x4002, "event_mouse_left", OperandShape::None),
  OpcodeInfo::new(0x4003, "event_mouse_right", OperandShape::None),
  OpcodeInfo::new(0x4004, "event_key_press", OperandShape::None),
  OpcodeInfo::new(0x4005, "event_key_release", OperandShape::None),
  OpcodeInfo::new(0x4006, "show_hook", OperandShape::None),
  OpcodeInfo::new(0x4007, "event_mouse_wheel", OperandShape::None),
  OpcodeInfo::new(0x6000, "LayerNumber", OperandShape::None),
  OpcodeInfo::new(0x6001, "LayerReset", OperandShape::None),
  OpcodeInfo::new(0x6002, "LayerImage", OperandShape::None),
  OpcodeInfo::new(0x6003, "LayerTile", OperandShape::None),
  OpcodeInfo::new(0x6004, "LayerText", OperandShape::None),
  OpcodeInfo::new(0x6005, "LayerGetXY", OperandShape::None),
  OpcodeInfo::new(0x6006, "LayerGetWH", OperandShape::None),
  OpcodeInfo::new(0x6007, "LayerGetImageSize", OperandShape::None),
  OpcodeInfo::new(0x6008, "LayerActive", OperandShape::None),
  OpcodeInfo::new(0x6009, "LayerGetActive", OperandShape::None),
  OpcodeInfo::new(0x600A, "LayerMove", OperandShape::None),
  OpcodeInfo::new(0x600B, "LayerSetWindow", OperandShape::None),
  OpcodeInfo::new(0x600C, "LayerGetWindow", OperandShape::None),
  OpcodeInfo::new(0x600D, "LayerAddText", OperandShape::None),
  OpcodeInfo::new(0x600E, "LayerAddTextN", OperandShape::None),
  OpcodeInfo::new(0x600F, "LayerTextFormat", OperandShape::None),
  OpcodeInfo::new(0x6010, "LayerTextClear", OperandShape::None),
  OpcodeInfo::new(0x6011, "LayerTextFont", OperandShape::None),
  OpcodeInfo::new(0x6012, "LayerTextColor", OperandShape::None),
  OpcodeInfo::new(0x6013, "LayerTextColorN", OperandShape::None),
  OpcodeInfo::new(0x6014, "LayerTextLocate", OperandShape::None),
  OpcodeInfo::new(0x6015, "LayerTextLocateN", OperandShape::None),
  OpcodeInfo::new(0x6016, "LayerTextGetLocate", OperandShape::None),
  OpcodeInfo::new(0x6017, "LayerTextGetID", OperandShape::None),
  OpcodeInfo::new(0x6018, "LayerTextGetRegion", OperandShape::None),
  OpcodeInfo::new(0x6019, "LayerTextChangeColor", OperandShape::None),
  OpcodeInfo::new(0x601A, "LayerTextClearID", OperandShape::None),
  OpcodeInfo::new(0x601B, "LayerSetDensity", OperandShape::None),
  OpcodeInfo::new(0x601C, "LayerGetDensity", OperandShape::None),
  OpcodeInfo::new(0x601D, "LayerSetWindow2", OperandShape::None),
  OpcodeInfo::new(0x601E, "LayerGetWindow2", OperandShape::None),
  OpcodeInfo::new(0x601F, "LayerStretch", OperandShape::None),
  OpcodeInfo::new(0x6020, "LayerGetColorCode", OperandShape::None),
  OpcodeInfo::new(0x6021, "LayerGetScreenMode", OperandShape::None),
  OpcodeInfo::new(0x6022, "LayerSetScreenMode", OperandShape::None),
  OpcodeInfo::new(0x6023, "LayerSetMethod", OperandShape::None),
  OpcodeInfo::new(0x6024, "LayerGetMethod", OperandShape::None),
  OpcodeInfo::new(0x6025, "LayerSetDefaultMethod", OperandShape::None),
  OpcodeInfo::new(0x6026, "LayerGetDefaultMethod", OperandShape::None),
  OpcodeInfo::new(0x6027, "LayerActiveBlind", OperandShape::None),
  OpcodeInfo::new(0x6029, "LayerSetBlindColor", OperandShape::None),
  OpcodeInfo::new(0x602B, "LayerSetOffset", OperandShape::None),
  OpcodeInfo::new(0x602D, "LayerSetTitle", OperandShape::None),
  OpcodeInfo::new(0x602E, "LayerSetAlpha", OperandShape::None),
  OpcodeInfo::new(0x6030, "LayerSurface", OperandShape::None),
  OpcodeInfo::new(0x6100, "SoundIsEnable", OperandShape::None),
  OpcodeInfo::new(0x6101, "SoundRead", OperandShape::None),
  OpcodeInfo::new(0x6102, "SoundDelete", OperandShape::None),
  OpcodeInfo::new(0x6103, "SoundPlay", OperandShape::None),
  OpcodeInfo::new(0x6104, "SoundLoopPlay", OperandShape::None),
  OpcodeInfo::new(0x6105, "SoundStop", OperandShape::None),
  OpcodeInfo::new(0x6106, "SoundStatus", OperandShape::None),
  OpcodeInfo::new(0x6107, "SoundGetLength", OperandShape::None),
  OpcodeInfo::new(0x6200, "CddaPlay", OperandShape::None),
  OpcodeInfo::new(0x6201, "CddaPlayLoop", OperandShape::None),
  OpcodeInfo::new(0x6202, "CddaStop", OperandShape::None),
  OpcodeInfo::new(0x6203, "CddaSetDrive", OperandShape::None),
  OpcodeInfo::new(0x6204, "CddaGetDrive", OperandShape::None),
  OpcodeInfo::new(0x6501, "AviOpenFile", OperandShape::None),
  OpcodeInfo::new(0x6508, "AviClose", OperandShape::None),
  OpcodeInfo::new(0x6509, "AviGetFrameLength", OperandShape::None),
  OpcodeInfo::new(0x650A, "AviGetInfo", OperandShape::None),
  OpcodeInfo::new(0x6520, "AviSendFrameImage", OperandShape::None),
];
