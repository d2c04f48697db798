use crate::list::value::InputValue;
use anyhow::{Context, bail};

/// Parse a list literal such as "[3, 1.5, -2e3, [4]]" into typed values.
///
/// Only numbers and nested lists are accepted; anything else (names,
/// strings, calls, trailing text) is a parse error.
pub fn parse_list_literal(s: &str) -> anyhow::Result<Vec<InputValue>> {
    let mut p = Parser {
        src: s,
        bytes: s.as_bytes(),
        pos: 0,
    };
    p.skip_ws();
    let items = p.list()?;
    p.skip_ws();
    if p.pos != p.bytes.len() {
        bail!(
            "unexpected {:?} after list literal at column {}",
            &s[p.pos..],
            p.pos + 1
        );
    }
    Ok(items)
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, b: u8) -> anyhow::Result<()> {
        match self.peek() {
            Some(c) if c == b => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => bail!(
                "expected '{}' at column {}, found {:?}",
                b as char,
                self.pos + 1,
                self.rest_char()
            ),
            None => bail!("expected '{}' at column {}, found end of input", b as char, self.pos + 1),
        }
    }

    fn rest_char(&self) -> char {
        self.src[self.pos..].chars().next().unwrap_or('\0')
    }

    /// list := '[' (value (',' value)* ','?)? ']'
    fn list(&mut self) -> anyhow::Result<Vec<InputValue>> {
        self.expect(b'[')?;
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.peek() == Some(b']') {
                self.pos += 1;
                return Ok(items);
            }
            items.push(self.value()?);
            self.skip_ws();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(items);
                }
                Some(_) => bail!(
                    "expected ',' or ']' at column {}, found {:?}",
                    self.pos + 1,
                    self.rest_char()
                ),
                None => bail!("unterminated list literal"),
            }
        }
    }

    fn value(&mut self) -> anyhow::Result<InputValue> {
        match self.peek() {
            Some(b'[') => Ok(InputValue::List(self.list()?)),
            Some(b'+' | b'-' | b'.' | b'0'..=b'9') => self.number(),
            Some(_) => bail!(
                "expected a number or list at column {}, found {:?}",
                self.pos + 1,
                self.rest_char()
            ),
            None => bail!("unterminated list literal"),
        }
    }

    /// number := sign? (digits ('.' digits?)? | '.' digits) (('e'|'E') sign? digits)?
    fn number(&mut self) -> anyhow::Result<InputValue> {
        let start = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let int_digits = self.digits();
        let mut is_float = false;
        let mut frac_digits = 0;
        if self.peek() == Some(b'.') {
            self.pos += 1;
            is_float = true;
            frac_digits = self.digits();
        }
        if int_digits == 0 && frac_digits == 0 {
            bail!("malformed number at column {}", start + 1);
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.digits() == 0 {
                bail!("malformed exponent at column {}", start + 1);
            }
            is_float = true;
        }

        let lexeme = &self.src[start..self.pos];
        if is_float {
            let v: f64 = lexeme
                .parse()
                .with_context(|| format!("bad float literal {}", lexeme))?;
            Ok(InputValue::Float(v))
        } else {
            let v: i64 = lexeme
                .parse()
                .with_context(|| format!("bad integer literal {}", lexeme))?;
            Ok(InputValue::Int(v))
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }
}
