//! Single-pass translation from source text to pseudo-assembly.
//!
//! The [`Translator`] pulls tokens from a [`Scanner`] one at a time and
//! writes instructions the moment a grammar rule is recognized. Nothing is
//! built in between: every rule has the names and operators it needs in the
//! current token when it emits.

pub mod config;
pub mod diagnostics;
pub mod emitter;
pub mod error;

use std::io::{self, Write};

use log::debug;
use pasmc_lexer::{
    tokens::{Token, TokenKind},
    Scanner,
};

pub use config::{LabelStyle, Recovery, TranslatorConfig};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use emitter::{Emitter, Instruction, Label};
pub use error::TranslateError;

/// Why a grammar rule stopped before its end.
#[derive(Debug)]
enum Interrupt {
    /// Syntax error under [`Recovery::Synchronize`]; unwinds to the innermost
    /// statement boundary.
    Resync,
    Emit(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Interrupt::Emit(err)
    }
}

type RuleResult = Result<(), Interrupt>;

pub struct Translator<'a, W: Write> {
    scanner: Scanner<'a>,
    /// The single token of lookahead.
    token: Token<'a>,
    emitter: Emitter<W>,
    config: TranslatorConfig,
    labels: u32,
    diagnostics: Vec<Diagnostic>,
}

impl<'a, W: Write> Translator<'a, W> {
    pub fn new(scanner: Scanner<'a>, sink: W) -> Self {
        Self::with_config(scanner, sink, TranslatorConfig::default())
    }

    pub fn with_config(mut scanner: Scanner<'a>, sink: W, config: TranslatorConfig) -> Self {
        let token = scanner.next_token();
        Self {
            scanner,
            token,
            emitter: Emitter::new(sink),
            config,
            labels: 0,
            diagnostics: vec![],
        }
    }

    /// Translates statements until the end of input. Syntax errors are
    /// recorded in [`Translator::diagnostics`] and never stop the run; only a
    /// failing sink does.
    pub fn translate(&mut self) -> Result<(), TranslateError> {
        while self.token.kind != TokenKind::EndOfInput {
            self.statement()?;
        }
        self.emitter.flush()?;

        debug!(
            "translation finished: {} instructions, {} diagnostics",
            self.emitter.emitted(),
            self.diagnostics.len()
        );
        Ok(())
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics[..]
    }

    pub fn emitted(&self) -> usize {
        self.emitter.emitted()
    }

    pub fn finish(self) -> (W, Vec<Diagnostic>) {
        (self.emitter.into_inner(), self.diagnostics)
    }

    fn bump(&mut self) {
        self.token = self.scanner.next_token();
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.token.kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn emit(&mut self, instruction: Instruction<'_>) -> io::Result<()> {
        self.emitter.emit(&instruction)
    }

    fn report(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(kind, self.token.offset, message);
        debug!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    /// Reports at the current token, then either lets the rule carry on
    /// (`Local`) or unwinds it (`Synchronize`).
    fn syntax_error(&mut self, message: impl Into<String>) -> RuleResult {
        self.report(DiagnosticKind::Syntax, message);
        match self.config.recovery {
            Recovery::Local => Ok(()),
            Recovery::Synchronize => Err(Interrupt::Resync),
        }
    }

    fn synchronize(&mut self) {
        let from = self.token.offset;
        loop {
            match self.token.kind {
                TokenKind::EndOfInput
                | TokenKind::RBrace
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print => break,
                TokenKind::IntLiteral | TokenKind::FloatLiteral if self.token.is_type_keyword() => {
                    break
                }
                TokenKind::Semicolon => {
                    self.bump();
                    break;
                }
                TokenKind::Error => {
                    let message = format!("unexpected character {}", self.token);
                    self.report(DiagnosticKind::Lexical, message);
                    self.bump();
                }
                _ => self.bump(),
            }
        }
        debug!("skipped {from}..{} to resynchronize", self.token.offset);
    }

    fn next_label_id(&mut self) -> Option<u32> {
        match self.config.labels {
            LabelStyle::Fixed => None,
            LabelStyle::Unique => {
                self.labels += 1;
                Some(self.labels)
            }
        }
    }

    /// A statement boundary: syntax errors inside are recovered from here.
    fn statement(&mut self) -> io::Result<()> {
        match self.dispatch() {
            Ok(()) => Ok(()),
            Err(Interrupt::Resync) => {
                self.synchronize();
                Ok(())
            }
            Err(Interrupt::Emit(err)) => Err(err),
        }
    }

    fn dispatch(&mut self) -> RuleResult {
        match self.token.kind {
            TokenKind::EndOfInput => Ok(()),
            TokenKind::IntLiteral | TokenKind::FloatLiteral if self.token.is_type_keyword() => {
                self.variable_declaration()
            }
            TokenKind::Identifier => self.assignment_or_call(),
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_loop(),
            TokenKind::Print => self.print_statement(),
            TokenKind::Error => {
                let message = format!("unexpected character {}", self.token);
                self.report(DiagnosticKind::Lexical, message);
                self.bump();
                Ok(())
            }
            _ => {
                // skipping the offending token is the recovery here
                let message = format!("unexpected token {}", self.token);
                self.report(DiagnosticKind::Syntax, message);
                self.bump();
                Ok(())
            }
        }
    }

    // TYPE IDENT (';' | '=' expression ';')
    fn variable_declaration(&mut self) -> RuleResult {
        let ty = self.token;
        self.bump();

        if self.token.kind != TokenKind::Identifier {
            let message = format!("expected identifier after {ty}, found {}", self.token);
            return self.syntax_error(message);
        }
        let name = self.token.lexeme;
        self.bump();

        match self.token.kind {
            TokenKind::Assign => {
                self.bump();
                self.expression()?;
                self.emit(Instruction::Mov(name))?;
            }
            TokenKind::Semicolon => self.emit(Instruction::Var(name))?,
            _ => {
                let message = format!("expected '=' or ';' after '{name}', found {}", self.token);
                return self.syntax_error(message);
            }
        }

        self.eat(TokenKind::Semicolon);
        Ok(())
    }

    // IDENT '=' expression ';' | IDENT '(' ... ')' ';'
    fn assignment_or_call(&mut self) -> RuleResult {
        let name = self.token.lexeme;
        self.bump();

        match self.token.kind {
            TokenKind::Assign => {
                self.bump();
                self.expression()?;
                self.emit(Instruction::Mov(name))?;
            }
            TokenKind::LParen => {
                // arguments are not evaluated
                while !matches!(self.token.kind, TokenKind::RParen | TokenKind::EndOfInput) {
                    self.bump();
                }
                if !self.eat(TokenKind::RParen) {
                    let message = format!("expected ')' to close call to '{name}'");
                    self.report(DiagnosticKind::Syntax, message);
                }
                self.emit(Instruction::Call(name))?;
            }
            _ => {
                let message = format!("unexpected {} after identifier '{name}'", self.token);
                return self.syntax_error(message);
            }
        }

        self.eat(TokenKind::Semicolon);
        Ok(())
    }

    fn if_statement(&mut self) -> RuleResult {
        self.bump();

        if !self.eat(TokenKind::LParen) {
            let message = format!("expected '(' after 'if', found {}", self.token);
            return self.syntax_error(message);
        }
        self.expression()?;
        if !self.eat(TokenKind::RParen) {
            let message = format!(
                "expected ')' after condition in if statement, found {}",
                self.token
            );
            return self.syntax_error(message);
        }

        let id = self.next_label_id();
        self.emit(Instruction::JumpIfNonZero(Label::start(id)))?;
        self.block()?;

        if self.eat(TokenKind::Else) {
            self.emit(Instruction::Label(Label::start(id)))?;
            self.block()?;
        }
        Ok(())
    }

    fn while_loop(&mut self) -> RuleResult {
        self.bump();

        let id = self.next_label_id();
        self.emit(Instruction::Label(Label::start(id)))?;

        if !self.eat(TokenKind::LParen) {
            let message = format!("expected '(' after 'while', found {}", self.token);
            return self.syntax_error(message);
        }
        self.expression()?;
        if !self.eat(TokenKind::RParen) {
            let message = format!(
                "expected ')' after condition in while statement, found {}",
                self.token
            );
            return self.syntax_error(message);
        }

        self.emit(Instruction::JumpIfZero(Label::end(id)))?;
        self.block()?;
        self.emit(Instruction::Jump(Label::start(id)))?;
        self.emit(Instruction::Label(Label::end(id)))?;
        Ok(())
    }

    fn print_statement(&mut self) -> RuleResult {
        self.bump();

        if !self.eat(TokenKind::LParen) {
            let message = format!("expected '(' after 'print', found {}", self.token);
            return self.syntax_error(message);
        }
        self.expression()?;
        self.emit(Instruction::Print)?;

        if !self.eat(TokenKind::RParen) {
            let message = format!("expected ')' after print argument, found {}", self.token);
            self.syntax_error(message)?;
        }
        self.eat(TokenKind::Semicolon);
        Ok(())
    }

    // '{' statement* '}' or a single statement
    fn block(&mut self) -> RuleResult {
        if !self.eat(TokenKind::LBrace) {
            self.statement()?;
            return Ok(());
        }

        while !matches!(self.token.kind, TokenKind::RBrace | TokenKind::EndOfInput) {
            self.statement()?;
        }

        if !self.eat(TokenKind::RBrace) {
            self.report(DiagnosticKind::Syntax, "expected '}' at end of block");
        }
        Ok(())
    }

    /// One operand, optionally followed by one `>`, `-` or `+` and whatever
    /// token comes after it.
    fn expression(&mut self) -> RuleResult {
        if self.token.is_operand() {
            self.emit(Instruction::Load(self.token.lexeme))?;
            self.bump();
        } else {
            let message = format!("expected expression, found {}", self.token);
            self.syntax_error(message)?;
        }

        let operation: fn(&'a str) -> Instruction<'a> = match self.token.kind {
            TokenKind::GreaterThan => Instruction::Compare,
            TokenKind::Minus => Instruction::Subtract,
            TokenKind::Plus => Instruction::Add,
            _ => return Ok(()),
        };
        self.bump();

        let operand = self.token.lexeme;
        self.emit(operation(operand))?;
        self.bump();
        Ok(())
    }
}

/// Translated instruction text along with whatever was reported on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub instructions: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Translation {
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.instructions.lines()
    }
}

/// Runs the whole pipeline over `src` into memory.
pub fn translate_source(
    src: &str,
    config: TranslatorConfig,
) -> Result<Translation, TranslateError> {
    let mut translator = Translator::with_config(Scanner::new(src), Vec::new(), config);
    translator.translate()?;

    let (out, diagnostics) = translator.finish();
    Ok(Translation {
        instructions: String::from_utf8_lossy(&out).into_owned(),
        diagnostics,
    })
}
