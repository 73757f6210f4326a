use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_TOKEN};

use super::{cursor::Cursor, tokens::{reserved, simple, Token, TokenKind}};

/// Position of the automaton while it assembles a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Integer,
    FloatDotSeen,
    FloatBody,
    Word,
    Greater,
    Less,
    Assign,
    Bang,
    SlashSeen,
    Amp,
    Pipe,
}

#[derive(Debug, Clone)]
pub struct Lexer {
    cursor: Cursor,
    file: Rc<String>,
    // Last type keyword emitted anywhere in the stream.
    declared_type: Option<TokenKind>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            cursor: Cursor::new(&source),
            file: file_name,
            declared_type: None,
        }
    }

    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    pub fn at_eof(&self) -> bool {
        self.cursor.at_eof()
    }

    /// The most recently emitted type keyword, if any.
    pub fn declared_type(&self) -> Option<TokenKind> {
        self.declared_type
    }

    /// Runs the automaton until exactly one outcome is known.
    ///
    /// Returns `Ok(None)` at end of input. Characters read past the end of
    /// the token are pushed back so the next call sees them first. Errors
    /// are fatal: the lexer makes no attempt to resynchronize.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let mut state = State::Start;
        let mut lexeme = String::new();
        let mut start = self.cursor.pos();

        loop {
            let next = self.cursor.consume();

            match state {
                State::Start => {
                    let c = match next {
                        None => return Ok(None),
                        Some(c) if c.is_whitespace() => {
                            start = self.cursor.pos();
                            continue;
                        }
                        Some(c) => c,
                    };

                    lexeme.push(c);

                    state = match c {
                        '\'' => return self.char_literal(start).map(Some),
                        c if c.is_ascii_digit() => State::Integer,
                        c if c.is_alphabetic() => State::Word,
                        '.' => State::FloatDotSeen,
                        '>' => State::Greater,
                        '<' => State::Less,
                        '=' => State::Assign,
                        '!' => State::Bang,
                        '&' => State::Amp,
                        '|' => State::Pipe,
                        '/' => State::SlashSeen,
                        c => {
                            return match simple(c) {
                                Some(kind) => Ok(Some(self.emit(kind, lexeme, start))),
                                None => Err(self.error(ErrorImpl::InvalidCharacter { character: c }, start)),
                            }
                        }
                    };
                }
                State::Integer => match next {
                    Some(c) if c.is_ascii_digit() => lexeme.push(c),
                    Some('.') => {
                        lexeme.push('.');
                        state = State::FloatDotSeen;
                    }
                    other => {
                        self.unread(other);

                        let kind = if (lexeme == "0" || lexeme == "1")
                            && self.declared_type == Some(TokenKind::BoolDef)
                        {
                            TokenKind::BoolLiteral
                        } else {
                            TokenKind::IntLiteral
                        };

                        return Ok(Some(self.emit(kind, lexeme, start)));
                    }
                },
                State::FloatDotSeen => match next {
                    Some(c) if c.is_ascii_digit() => {
                        lexeme.push(c);
                        state = State::FloatBody;
                    }
                    other => {
                        let at = self.offending(other);
                        return Err(self.error(ErrorImpl::MalformedFloat { lexeme }, at));
                    }
                },
                State::FloatBody => match next {
                    Some(c) if c.is_ascii_digit() => lexeme.push(c),
                    other => {
                        self.unread(other);
                        return Ok(Some(self.emit(TokenKind::FloatLiteral, lexeme, start)));
                    }
                },
                State::Word => match next {
                    Some(c) if c.is_alphanumeric() => lexeme.push(c),
                    other => {
                        self.unread(other);
                        return Ok(Some(self.word(lexeme, start)));
                    }
                },
                State::Greater => {
                    return Ok(Some(self.pair(next, '=', TokenKind::GreaterEquals, TokenKind::Greater, lexeme, start)))
                }
                State::Less => {
                    return Ok(Some(self.pair(next, '=', TokenKind::LessEquals, TokenKind::Less, lexeme, start)))
                }
                State::Assign => {
                    return Ok(Some(self.pair(next, '=', TokenKind::Equals, TokenKind::Assignment, lexeme, start)))
                }
                State::Bang => {
                    return Ok(Some(self.pair(next, '=', TokenKind::NotEquals, TokenKind::Not, lexeme, start)))
                }
                State::SlashSeen => match next {
                    Some('/') => {
                        self.skip_line_comment(start);
                        state = State::Start;
                        start = self.cursor.pos();
                        lexeme.clear();
                    }
                    other => {
                        self.unread(other);
                        return Ok(Some(self.emit(TokenKind::Divide, lexeme, start)));
                    }
                },
                State::Amp => match next {
                    Some('&') => {
                        lexeme.push('&');
                        return Ok(Some(self.emit(TokenKind::And, lexeme, start)));
                    }
                    other => {
                        let at = self.offending(other);
                        return Err(self.error(ErrorImpl::ExpectedAmpersand, at));
                    }
                },
                State::Pipe => match next {
                    Some('|') => {
                        lexeme.push('|');
                        return Ok(Some(self.emit(TokenKind::Or, lexeme, start)));
                    }
                    other => {
                        let at = self.offending(other);
                        return Err(self.error(ErrorImpl::ExpectedPipe, at));
                    }
                },
            }
        }
    }

    /// Reads the two characters following an opening quote.
    fn char_literal(&mut self, start: usize) -> Result<Token, Error> {
        let mut lexeme = String::from('\'');
        let body = self.cursor.consume();
        let close = self.cursor.consume();

        lexeme.extend(body);
        lexeme.extend(close);

        if body.is_some() && close == Some('\'') {
            Ok(self.emit(TokenKind::CharLiteral, lexeme, start))
        } else {
            let at = self.offending(close);
            Err(self.error(ErrorImpl::MalformedChar { lexeme }, at))
        }
    }

    fn word(&mut self, lexeme: String, start: usize) -> Token {
        match reserved(&lexeme) {
            Some(kind) => {
                if kind.is_type_declaration() && self.declared_type != Some(kind) {
                    debug!(from = ?self.declared_type, to = %kind, "declared type changed");
                    self.declared_type = Some(kind);
                }
                self.emit(kind, lexeme, start)
            }
            None => self.emit(TokenKind::Identifier, lexeme, start),
        }
    }

    /// Emits `matched` when the next character is `second`, otherwise `single`.
    fn pair(
        &mut self,
        next: Option<char>,
        second: char,
        matched: TokenKind,
        single: TokenKind,
        mut lexeme: String,
        start: usize,
    ) -> Token {
        if next == Some(second) {
            lexeme.push(second);
            self.emit(matched, lexeme, start)
        } else {
            self.unread(next);
            self.emit(single, lexeme, start)
        }
    }

    fn skip_line_comment(&mut self, start: usize) {
        while let Some(c) = self.cursor.consume() {
            if c == '\n' {
                break;
            }
        }
        trace!(start, end = self.cursor.pos(), "skipped comment");
    }

    fn unread(&mut self, next: Option<char>) {
        if next.is_some() {
            self.cursor.pushback();
        }
    }

    /// Offset of the character that broke the current token.
    fn offending(&self, next: Option<char>) -> usize {
        match next {
            Some(_) => self.cursor.pos() - 1,
            None => self.cursor.pos(),
        }
    }

    fn emit(&self, kind: TokenKind, value: String, start: usize) -> Token {
        trace!(kind = %kind, value = %value, start, "token");

        MK_TOKEN!(
            kind,
            value,
            Span {
                start: Position(start as u32, Rc::clone(&self.file)),
                end: Position(self.cursor.pos() as u32, Rc::clone(&self.file)),
            }
        )
    }

    fn error(&self, error: ErrorImpl, at: usize) -> Error {
        Error::new(error, Position(at as u32, Rc::clone(&self.file)))
    }
}

/// Tokenizes the whole source, stopping at the first lexical error.
///
/// The tokens produced before an error are kept and returned alongside it.
pub fn tokenize(source: String, file: Option<String>) -> (Vec<Token>, Option<Error>) {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        match lex.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => {
                debug!(tokens = tokens.len(), "reached end of input");
                return (tokens, None);
            }
            Err(error) => {
                warn!(tokens = tokens.len(), %error, "lexical analysis halted");
                return (tokens, Some(error));
            }
        }
    }
}

/// Joins the kind names of `tokens` with single spaces.
pub fn format_kinds(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.kind.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
