//! Machine-code loader.
//!
//! Reads a plain-text file of hexadecimal 32-bit words, one per line, as
//! produced by the assembler/linker, and echoes the instruction-memory
//! listing to the trace output.

use crate::error::LoadError;
use crate::trace;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Reads a machine-code file into a program image.
///
/// Words load sequentially starting at address 0. Each word is listed on
/// the trace output with its disassembly. Any line that fails to parse as
/// a hexadecimal word is a fatal error.
pub fn read_machine_code<W: Write>(path: &Path, out: &mut W) -> Result<Vec<i32>, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::Open {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut program = Vec::new();
    writeln!(out, "instruction memory:")?;
    for (addr, line) in text.lines().enumerate() {
        let token = line.trim();
        let token = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        let word = u32::from_str_radix(token, 16).map_err(|_| LoadError::BadWord(addr))? as i32;
        writeln!(
            out,
            "\tinstrMem[ {} ] = 0x{:08X} ( {} )",
            addr,
            word as u32,
            trace::disassemble(word)
        )?;
        program.push(word);
    }

    Ok(program)
}
