use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::IntDef);
        map.insert("float", TokenKind::FloatDef);
        map.insert("char", TokenKind::CharDef);
        map.insert("bool", TokenKind::BoolDef);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        // Both spellings are keywords; this is not case-insensitivity ("IF" is an identifier).
        map.insert("If", TokenKind::If);
        map
    };

    pub static ref SIMPLE_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map.insert('{', TokenKind::LBrace);
        map.insert('}', TokenKind::RBrace);
        map.insert('[', TokenKind::LBracket);
        map.insert(']', TokenKind::RBracket);
        map.insert('+', TokenKind::Sum);
        map.insert('-', TokenKind::Sub);
        map.insert('*', TokenKind::Mult);
        map.insert('/', TokenKind::Divide);
        map.insert('%', TokenKind::Mod);
        map.insert(',', TokenKind::Virgula);
        map.insert(';', TokenKind::PVirgula);
        map
    };
}

/// Looks up a word in the reserved word table.
pub fn reserved(word: &str) -> Option<TokenKind> {
    RESERVED_LOOKUP.get(word).copied()
}

/// Looks up a single-character punctuation or operator token.
pub fn simple(c: char) -> Option<TokenKind> {
    SIMPLE_LOOKUP.get(&c).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    IntDef,
    FloatDef,
    CharDef,
    BoolDef,
    Return,
    If,

    Identifier,

    IntLiteral,
    FloatLiteral,
    CharLiteral,
    BoolLiteral,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    Sum,
    Sub,
    Mult,
    Divide,
    Mod,

    Virgula,  // ,
    PVirgula, // ;

    Greater,       // >
    GreaterEquals, // >=
    Less,          // <
    LessEquals,    // <=

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    And,
    Or,
}

impl TokenKind {
    /// The name written to the token stream output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::IntDef => "INTDEF",
            TokenKind::FloatDef => "FLOATDEF",
            TokenKind::CharDef => "CHARDEF",
            TokenKind::BoolDef => "BOOLDEF",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::BoolLiteral => "BOOL_LITERAL",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Sum => "SUM",
            TokenKind::Sub => "SUB",
            TokenKind::Mult => "MULT",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Mod => "MOD",
            TokenKind::Virgula => "VIRGULA",
            TokenKind::PVirgula => "PVIRGULA",
            TokenKind::Greater => "GT",
            TokenKind::GreaterEquals => "GE",
            TokenKind::Less => "LT",
            TokenKind::LessEquals => "LE",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Equals => "EQ",
            TokenKind::Not => "NOT",
            TokenKind::NotEquals => "NE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
        }
    }

    /// True for the four type keywords that update the declaration context.
    pub fn is_type_declaration(&self) -> bool {
        matches!(
            self,
            TokenKind::IntDef | TokenKind::FloatDef | TokenKind::CharDef | TokenKind::BoolDef
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
