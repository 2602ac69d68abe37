//! Parser for the literal subset edge-list guesses are written in.
//!
//! Accepts quoted strings (single or double quotes, backslash escapes,
//! `r`/`u` prefixes, adjacent-literal concatenation), integers (including
//! `0x`/`0o`/`0b`), floats, `True`/`False`/`None`, and lists, tuples and
//! sets with optional trailing commas. `(x)` without a comma is grouping,
//! not a one-element tuple. Dicts and bare names are rejected. Brackets may
//! nest at most [`MAX_GUESS_NESTING`] levels deep.

use causeway_core::constants::MAX_GUESS_NESTING;
use causeway_core::errors::{GradingError, GradingResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    None,
    Seq(Vec<Literal>),
}

/// Parse a complete literal; trailing input is an error.
pub fn parse(input: &str) -> GradingResult<Literal> {
    let mut parser = Parser {
        chars: input.chars().collect(),
        pos: 0,
        depth: 0,
    };
    let value = parser.value()?;
    parser.skip_ws();
    match parser.peek() {
        None => Ok(value),
        Some(c) => Err(parser.unexpected(c)),
    }
}

impl Literal {
    /// Text of a scalar used as an edge endpoint.
    pub fn endpoint_text(&self) -> GradingResult<String> {
        match self {
            Self::Str(s) => Ok(s.clone()),
            Self::Int(i) => Ok(i.to_string()),
            Self::Float(f) => Ok(float_text(*f)),
            Self::Bool(true) => Ok("True".to_string()),
            Self::Bool(false) => Ok("False".to_string()),
            Self::None => Ok("None".to_string()),
            Self::Seq(_) => Err(GradingError::invalid("edge endpoints must be scalars")),
        }
    }

    /// Interpret as a sequence of `(from, to)` pairs.
    pub fn into_pairs(self) -> GradingResult<Vec<(String, String)>> {
        match self {
            Self::Seq(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Self::Seq(pair) if pair.len() == 2 => {
                        Ok((pair[0].endpoint_text()?, pair[1].endpoint_text()?))
                    }
                    Self::Seq(other) => Err(GradingError::invalid(format!(
                        "edge {i} has {} elements, expected 2",
                        other.len()
                    ))),
                    _ => Err(GradingError::invalid(format!("edge {i} is not a pair"))),
                })
                .collect(),
            Self::Str(_) => Err(GradingError::invalid(
                "guess is still quoted text after unwrapping",
            )),
            _ => Err(GradingError::invalid("guess must be a sequence of pairs")),
        }
    }
}

/// `1.0` stays `1.0`, other values use the shortest round-trip form.
fn float_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn unexpected(&self, c: char) -> GradingError {
        GradingError::invalid(format!("unexpected '{c}' at position {}", self.pos))
    }

    fn value(&mut self) -> GradingResult<Literal> {
        self.skip_ws();
        match self.peek() {
            None => Err(GradingError::invalid("unexpected end of input")),
            Some('\'' | '"') => self.string(false),
            Some('[') => Ok(Literal::Seq(self.items(']')?.0)),
            Some('(') => {
                let (mut items, trailing_comma) = self.items(')')?;
                if items.len() == 1 && !trailing_comma {
                    Ok(items.remove(0))
                } else {
                    Ok(Literal::Seq(items))
                }
            }
            Some('{') => Ok(Literal::Seq(self.items('}')?.0)),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.word(),
            Some(c) => Err(self.unexpected(c)),
        }
    }

    /// Comma-separated values up to `close`. Returns the items and whether
    /// the last item was followed by a comma.
    fn items(&mut self, close: char) -> GradingResult<(Vec<Literal>, bool)> {
        if self.depth >= MAX_GUESS_NESTING {
            return Err(GradingError::invalid("guess nested too deeply"));
        }
        self.depth += 1;
        let result = self.items_inner(close);
        self.depth -= 1;
        result
    }

    fn items_inner(&mut self, close: char) -> GradingResult<(Vec<Literal>, bool)> {
        self.bump();
        let mut items = Vec::new();
        let mut trailing_comma = false;
        loop {
            self.skip_ws();
            if self.peek() == Some(close) {
                self.bump();
                return Ok((items, trailing_comma));
            }
            items.push(self.value()?);
            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.bump();
                    trailing_comma = true;
                }
                Some(c) if c == close => trailing_comma = false,
                Some(':') if close == '}' => {
                    return Err(GradingError::invalid("dict literals are not edge lists"))
                }
                Some(c) => return Err(self.unexpected(c)),
                None => return Err(GradingError::invalid(format!("missing closing '{close}'"))),
            }
        }
    }

    fn string(&mut self, raw: bool) -> GradingResult<Literal> {
        let mut text = String::new();
        loop {
            self.string_part(raw, &mut text)?;
            self.skip_ws();
            if !matches!(self.peek(), Some('\'' | '"')) {
                return Ok(Literal::Str(text));
            }
        }
    }

    fn string_part(&mut self, raw: bool, text: &mut String) -> GradingResult<()> {
        let Some(quote) = self.bump() else {
            return Err(GradingError::invalid("unexpected end of input"));
        };
        loop {
            match self.bump() {
                None => return Err(GradingError::invalid("unterminated string")),
                Some(c) if c == quote => return Ok(()),
                Some('\\') if raw => {
                    text.push('\\');
                    if let Some(next) = self.bump() {
                        text.push(next);
                    }
                }
                Some('\\') => match self.bump() {
                    None => return Err(GradingError::invalid("unterminated string")),
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some('r') => text.push('\r'),
                    Some('a') => text.push('\u{7}'),
                    Some('b') => text.push('\u{8}'),
                    Some('f') => text.push('\u{c}'),
                    Some('v') => text.push('\u{b}'),
                    Some('\n') => {}
                    Some(c @ ('\\' | '\'' | '"')) => text.push(c),
                    Some(c @ '0'..='7') => text.push(self.octal_escape(c)),
                    Some('x') => text.push(self.hex_escape(2)?),
                    Some('u') => text.push(self.hex_escape(4)?),
                    Some('U') => text.push(self.hex_escape(8)?),
                    Some('N') => {
                        return Err(GradingError::invalid(
                            "named unicode escapes are not supported",
                        ))
                    }
                    Some(c) => {
                        text.push('\\');
                        text.push(c);
                    }
                },
                Some(c) => text.push(c),
            }
        }
    }

    /// Up to three octal digits, the first already consumed.
    fn octal_escape(&mut self, first: char) -> char {
        let mut code = first.to_digit(8).unwrap_or(0);
        for _ in 0..2 {
            match self.peek().and_then(|c| c.to_digit(8)) {
                Some(digit) => {
                    code = code * 8 + digit;
                    self.pos += 1;
                }
                None => break,
            }
        }
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Exactly `digits` hex digits naming a code point.
    fn hex_escape(&mut self, digits: usize) -> GradingResult<char> {
        let end = self.pos + digits;
        let hex: String = self.chars.get(self.pos..end).unwrap_or_default().iter().collect();
        let code = (hex.len() == digits && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .then(|| u32::from_str_radix(&hex, 16).ok())
            .flatten()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                GradingError::invalid(format!("invalid escape '{hex}' at position {}", self.pos))
            })?;
        self.pos = end;
        Ok(code)
    }

    fn number(&mut self) -> GradingResult<Literal> {
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.pos += 1;
        }
        while let Some(c) = self.peek() {
            let exponent_sign = matches!(c, '+' | '-')
                && self.pos > start + 1
                && matches!(self.chars.get(self.pos - 1), Some('e' | 'E'));
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || exponent_sign {
                self.pos += 1;
            } else {
                break;
            }
        }
        let token: String = self.chars[start..self.pos]
            .iter()
            .filter(|c| **c != '_')
            .collect();
        parse_number(&token)
            .ok_or_else(|| GradingError::invalid(format!("invalid number '{token}'")))
    }

    fn word(&mut self) -> GradingResult<Literal> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.pos += 1;
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        let quoted_next = matches!(self.peek(), Some('\'' | '"'));
        match word.as_str() {
            "True" => Ok(Literal::Bool(true)),
            "False" => Ok(Literal::Bool(false)),
            "None" => Ok(Literal::None),
            "r" | "R" if quoted_next => self.string(true),
            "u" | "U" if quoted_next => self.string(false),
            _ => Err(GradingError::invalid(format!(
                "'{word}' is a name, not a literal; quote node names"
            ))),
        }
    }
}

fn parse_number(token: &str) -> Option<Literal> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let radix = match digits.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let magnitude = i64::from_str_radix(&digits[2..], radix).ok()?;
        return Some(Literal::Int(if negative { -magnitude } else { magnitude }));
    }
    if let Ok(int) = token.parse::<i64>() {
        return Some(Literal::Int(int));
    }
    let float = token.parse::<f64>().ok()?;
    float.is_finite().then_some(Literal::Float(float))
}
