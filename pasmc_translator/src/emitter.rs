use std::{
    fmt::Display,
    io::{self, Write},
};

use log::trace;

/// A jump target. Without an id it prints as the bare base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    base: &'static str,
    id: Option<u32>,
}

impl Label {
    /// Loop head, or the else branch of an `if`.
    pub fn start(id: Option<u32>) -> Self {
        Self { base: "label", id }
    }

    /// Loop exit.
    pub fn end(id: Option<u32>) -> Self {
        Self {
            base: "end_label",
            id,
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "{}_{id}", self.base),
            None => write!(f, "{}", self.base),
        }
    }
}

/// One line of output. `Display` produces the exact mnemonic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction<'a> {
    Var(&'a str),
    Mov(&'a str),
    Call(&'a str),
    Load(&'a str),
    Compare(&'a str),
    Subtract(&'a str),
    Add(&'a str),
    JumpIfNonZero(Label),
    JumpIfZero(Label),
    Jump(Label),
    Label(Label),
    Print,
}

impl Display for Instruction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Var(name) => write!(f, "var {name}"),
            Instruction::Mov(name) => write!(f, "mov {name}, eax"),
            Instruction::Call(name) => write!(f, "call {name}"),
            Instruction::Load(operand) => write!(f, "load {operand} into eax"),
            Instruction::Compare(operand) => write!(f, "compare eax with {operand}"),
            Instruction::Subtract(operand) => write!(f, "subtract eax with {operand}"),
            Instruction::Add(operand) => write!(f, "add eax with {operand}"),
            Instruction::JumpIfNonZero(label) => write!(f, "if eax != 0 jump {label}"),
            Instruction::JumpIfZero(label) => write!(f, "if eax == 0 jump {label}"),
            Instruction::Jump(label) => write!(f, "jump {label}"),
            Instruction::Label(label) => write!(f, "{label}:"),
            Instruction::Print => write!(f, "print eax"),
        }
    }
}

/// Writes instructions to a sink, one per line, in call order.
#[derive(Debug)]
pub struct Emitter<W> {
    out: W,
    emitted: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self { out, emitted: 0 }
    }

    pub fn emit(&mut self, instruction: &Instruction<'_>) -> io::Result<()> {
        trace!("emit {instruction}");
        writeln!(self.out, "{instruction}")?;
        self.emitted += 1;
        Ok(())
    }

    /// Number of lines written so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
