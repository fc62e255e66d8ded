// Tokenizer for arithmetic expressions

use super::ExprError;

/// A lexical token with its byte offset in the source
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Int(i64),
    Float(f64),
    Plus,
    Minus,
    Star,
    Slash,
    DoubleSlash,
    Percent,
    DoubleStar,
    LParen,
    RParen,
}

impl TokenKind {
    /// Source text of the token, used in error messages
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Int(i) => i.to_string(),
            TokenKind::Float(f) => f.to_string(),
            TokenKind::Plus => "+".to_string(),
            TokenKind::Minus => "-".to_string(),
            TokenKind::Star => "*".to_string(),
            TokenKind::Slash => "/".to_string(),
            TokenKind::DoubleSlash => "//".to_string(),
            TokenKind::Percent => "%".to_string(),
            TokenKind::DoubleStar => "**".to_string(),
            TokenKind::LParen => "(".to_string(),
            TokenKind::RParen => ")".to_string(),
        }
    }
}

/// Split an expression into tokens
pub fn tokenize(source: &str) -> Result<Vec<Token>, ExprError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];
        if c.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        let start = pos;
        let kind = match c {
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'%' => TokenKind::Percent,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 1;
                TokenKind::DoubleStar
            }
            b'*' => TokenKind::Star,
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                pos += 1;
                TokenKind::DoubleSlash
            }
            b'/' => TokenKind::Slash,
            b'0'..=b'9' | b'.' => {
                let (kind, end) = lex_number(source, pos)?;
                tokens.push(Token { kind, pos: start });
                pos = end;
                continue;
            }
            _ => {
                // Report the full character, not a UTF-8 fragment
                let ch = source[pos..].chars().next().unwrap_or('\u{fffd}');
                return Err(ExprError::UnexpectedChar { ch, pos });
            }
        };
        tokens.push(Token { kind, pos: start });
        pos += 1;
    }

    Ok(tokens)
}

/// Lex a numeric literal starting at `start`, returning the token and the end offset
fn lex_number(source: &str, start: usize) -> Result<(TokenKind, usize), ExprError> {
    let bytes = source.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = digits_from(start);
    let mut is_float = false;

    if bytes.get(end) == Some(&b'.') {
        is_float = true;
        end = digits_from(end + 1);
    }

    // Exponent is only consumed when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            is_float = true;
            end = exp_end;
        }
    }

    let text = &source[start..end];
    if text == "." {
        return Err(ExprError::UnexpectedChar { ch: '.', pos: start });
    }

    let kind = if is_float {
        text.parse::<f64>()
            .map(TokenKind::Float)
            .map_err(|_| ExprError::InvalidNumber {
                text: text.to_string(),
                pos: start,
            })?
    } else {
        text.parse::<i64>()
            .map(TokenKind::Int)
            .map_err(|_| ExprError::InvalidNumber {
                text: text.to_string(),
                pos: start,
            })?
    };

    Ok((kind, end))
}
