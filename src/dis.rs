//! Bytecode disassembler.

use std::fmt::Write;

use crate::chunk::Chunk;
use crate::opcode::OpCode;
use crate::value::{Obj, ObjFunction, Value};

/// Render a function's chunk, then any function constants nested in it.
pub fn disassemble(function: &ObjFunction) -> String {
    let mut out = String::new();
    let name = match &function.name {
        Some(name) => name.text.as_str(),
        None => "<script>",
    };
    writeln!(out, "== {} ==", name).unwrap();
    disassemble_chunk(&function.chunk, &mut out);
    for constant in &function.chunk.constants {
        if let Value::Obj(Obj::Function(nested)) = constant {
            writeln!(out).unwrap();
            out.push_str(&disassemble(nested));
        }
    }
    out
}

pub fn disassemble_chunk(chunk: &Chunk, out: &mut String) {
    let mut offset = 0;
    while offset < chunk.code.len() {
        offset = disassemble_instruction(chunk, offset, out);
    }
}

pub fn disassemble_instruction(chunk: &Chunk, offset: usize, out: &mut String) -> usize {
    write!(out, "{:04} ", offset).unwrap();
    if offset > 0 && chunk.lines[offset] == chunk.lines[offset - 1] {
        write!(out, "   | ").unwrap();
    } else {
        write!(out, "{:4} ", chunk.lines[offset]).unwrap();
    }

    let byte = chunk.code[offset];
    let op = match OpCode::from_u8(byte) {
        Some(op) => op,
        None => {
            writeln!(out, "Unknown opcode {}", byte).unwrap();
            return offset + 1;
        }
    };

    match op {
        OpCode::Constant => constant_instruction("Constant", chunk, offset, out),
        OpCode::Nil => simple_instruction("Nil", offset, out),
        OpCode::True => simple_instruction("True", offset, out),
        OpCode::False => simple_instruction("False", offset, out),
        OpCode::Pop => simple_instruction("Pop", offset, out),
        OpCode::GetLocal => byte_instruction("GetLocal", chunk, offset, out),
        OpCode::SetLocal => byte_instruction("SetLocal", chunk, offset, out),
        OpCode::GetGlobal => constant_instruction("GetGlobal", chunk, offset, out),
        OpCode::DefineGlobal => constant_instruction("DefineGlobal", chunk, offset, out),
        OpCode::SetGlobal => constant_instruction("SetGlobal", chunk, offset, out),
        OpCode::Equal => simple_instruction("Equal", offset, out),
        OpCode::Greater => simple_instruction("Greater", offset, out),
        OpCode::Less => simple_instruction("Less", offset, out),
        OpCode::Add => simple_instruction("Add", offset, out),
        OpCode::Subtract => simple_instruction("Subtract", offset, out),
        OpCode::Multiply => simple_instruction("Multiply", offset, out),
        OpCode::Divide => simple_instruction("Divide", offset, out),
        OpCode::Not => simple_instruction("Not", offset, out),
        OpCode::Negate => simple_instruction("Negate", offset, out),
        OpCode::Print => simple_instruction("Print", offset, out),
        OpCode::Jump => jump_instruction("Jump", 1, chunk, offset, out),
        OpCode::JumpIfFalse => jump_instruction("JumpIfFalse", 1, chunk, offset, out),
        OpCode::Loop => jump_instruction("Loop", -1, chunk, offset, out),
        OpCode::Call => byte_instruction("Call", chunk, offset, out),
        OpCode::Return => simple_instruction("Return", offset, out),
    }
}

fn simple_instruction(name: &str, offset: usize, out: &mut String) -> usize {
    writeln!(out, "{}", name).unwrap();
    offset + 1
}

fn byte_instruction(name: &str, chunk: &Chunk, offset: usize, out: &mut String) -> usize {
    let slot = chunk.code[offset + 1];
    writeln!(out, "{:<16} {:4}", name, slot).unwrap();
    offset + 2
}

fn constant_instruction(name: &str, chunk: &Chunk, offset: usize, out: &mut String) -> usize {
    let idx = chunk.code[offset + 1] as usize;
    write!(out, "{:<16} {:4} '", name, idx).unwrap();
    match chunk.constants.get(idx) {
        Some(value) => write!(out, "{}", value).unwrap(),
        None => write!(out, "INVALID").unwrap(),
    }
    writeln!(out, "'").unwrap();
    offset + 2
}

fn jump_instruction(name: &str, sign: i32, chunk: &Chunk, offset: usize, out: &mut String) -> usize {
    let jump = Chunk::read_u16(&chunk.code, offset + 1) as i32;
    let target = offset as i32 + 3 + sign * jump;
    writeln!(out, "{:<16} {:4} -> {}", name, offset, target).unwrap();
    offset + 3
}
