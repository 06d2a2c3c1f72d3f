//! Length expressions for telegraph height tokens.
//!
//! Tokens are configured with a small CSS-like syntax so that detent heights
//! follow the window size:
//!
//! ```text
//! 48px   3rem   6vh   10vw   0
//! calc(2rem + 1.5vh)   min(4rem, 8vh)   max(2rem, 5vh)
//! clamp(2.5rem, 6vh, 3.5rem)   calc(2 * 1rem)
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// Default root font size in pixels.
pub const DEFAULT_REM_PX: f32 = 16.0;

/// Current viewport metrics used to resolve relative units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Pixels per `rem`.
    pub rem_px: f32,
}

impl Viewport {
    /// Create a viewport with the default root font size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            rem_px: DEFAULT_REM_PX,
        }
    }

    /// Set the root font size.
    pub fn with_rem(mut self, rem_px: f32) -> Self {
        self.rem_px = rem_px;
        self
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 900.0)
    }
}

/// A parsed length expression.
#[derive(Debug, Clone, PartialEq)]
pub enum LengthExpr {
    Px(f32),
    Rem(f32),
    /// Percent of viewport height.
    Vh(f32),
    /// Percent of viewport width.
    Vw(f32),
    Add(Box<LengthExpr>, Box<LengthExpr>),
    Sub(Box<LengthExpr>, Box<LengthExpr>),
    Scale(Box<LengthExpr>, f32),
    Min(Vec<LengthExpr>),
    Max(Vec<LengthExpr>),
    Clamp(Box<LengthExpr>, Box<LengthExpr>, Box<LengthExpr>),
}

impl LengthExpr {
    /// Resolve to device pixels for the given viewport.
    pub fn to_px(&self, viewport: &Viewport) -> f32 {
        match self {
            LengthExpr::Px(v) => *v,
            LengthExpr::Rem(v) => v * viewport.rem_px,
            LengthExpr::Vh(v) => v * viewport.height / 100.0,
            LengthExpr::Vw(v) => v * viewport.width / 100.0,
            LengthExpr::Add(a, b) => a.to_px(viewport) + b.to_px(viewport),
            LengthExpr::Sub(a, b) => a.to_px(viewport) - b.to_px(viewport),
            LengthExpr::Scale(a, k) => a.to_px(viewport) * k,
            LengthExpr::Min(items) => items
                .iter()
                .map(|e| e.to_px(viewport))
                .fold(f32::INFINITY, f32::min),
            LengthExpr::Max(items) => items
                .iter()
                .map(|e| e.to_px(viewport))
                .fold(f32::NEG_INFINITY, f32::max),
            // CSS semantics: the lower bound wins over the upper bound.
            LengthExpr::Clamp(lo, preferred, hi) => {
                let lo = lo.to_px(viewport);
                let hi = hi.to_px(viewport);
                preferred.to_px(viewport).min(hi).max(lo)
            }
        }
    }
}

impl fmt::Display for LengthExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list(f: &mut fmt::Formatter<'_>, items: &[LengthExpr]) -> fmt::Result {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", item)?;
            }
            Ok(())
        }

        match self {
            LengthExpr::Px(v) => write!(f, "{}px", v),
            LengthExpr::Rem(v) => write!(f, "{}rem", v),
            LengthExpr::Vh(v) => write!(f, "{}vh", v),
            LengthExpr::Vw(v) => write!(f, "{}vw", v),
            LengthExpr::Add(a, b) => write!(f, "calc({} + {})", a, b),
            LengthExpr::Sub(a, b) => write!(f, "calc({} - {})", a, b),
            LengthExpr::Scale(a, k) => write!(f, "calc({} * {})", a, k),
            LengthExpr::Min(items) => {
                write!(f, "min(")?;
                list(f, items)?;
                write!(f, ")")
            }
            LengthExpr::Max(items) => {
                write!(f, "max(")?;
                list(f, items)?;
                write!(f, ")")
            }
            LengthExpr::Clamp(lo, p, hi) => write!(f, "clamp({}, {}, {})", lo, p, hi),
        }
    }
}

impl std::str::FromStr for LengthExpr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Parse a length expression.
pub fn parse(input: &str) -> Result<LengthExpr> {
    let mut parser = Parser::new(input);
    let expr = parser.sum()?.into_length(input)?;
    parser.skip_ws();
    if !parser.at_end() {
        return Err(Error::length(
            input,
            format!("unexpected trailing input at offset {}", parser.pos),
        ));
    }
    Ok(expr)
}

/// Intermediate value: calc() allows unitless numbers as multipliers.
enum Operand {
    Number(f32),
    Length(LengthExpr),
}

impl Operand {
    fn into_length(self, input: &str) -> Result<LengthExpr> {
        match self {
            Operand::Length(expr) => Ok(expr),
            Operand::Number(n) if n == 0.0 => Ok(LengthExpr::Px(0.0)),
            Operand::Number(n) => Err(Error::length(input, format!("'{}' is missing a unit", n))),
        }
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn error(&self, reason: impl Into<String>) -> Error {
        Error::length(self.input, reason)
    }

    fn expect(&mut self, c: char) -> Result<()> {
        self.skip_ws();
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            Ok(())
        } else {
            Err(self.error(format!("expected '{}' at offset {}", c, self.pos)))
        }
    }

    fn sum(&mut self) -> Result<Operand> {
        let mut acc = self.product()?;
        loop {
            self.skip_ws();
            let op = match self.peek() {
                Some(c @ ('+' | '-')) => c,
                _ => return Ok(acc),
            };
            self.pos += 1;
            let rhs = self.product()?.into_length(self.input)?;
            let lhs = acc.into_length(self.input)?;
            acc = Operand::Length(if op == '+' {
                LengthExpr::Add(Box::new(lhs), Box::new(rhs))
            } else {
                LengthExpr::Sub(Box::new(lhs), Box::new(rhs))
            });
        }
    }

    fn product(&mut self) -> Result<Operand> {
        let mut acc = self.atom()?;
        loop {
            self.skip_ws();
            let op = match self.peek() {
                Some(c @ ('*' | '/')) => c,
                _ => return Ok(acc),
            };
            self.pos += 1;
            let rhs = self.atom()?;
            acc = match (acc, rhs, op) {
                (Operand::Number(a), Operand::Number(b), '*') => Operand::Number(a * b),
                (Operand::Number(a), Operand::Number(b), _) => {
                    Operand::Number(self.divide(1.0, b)? * a)
                }
                (Operand::Length(a), Operand::Number(k), '*')
                | (Operand::Number(k), Operand::Length(a), '*') => {
                    Operand::Length(LengthExpr::Scale(Box::new(a), k))
                }
                (Operand::Length(a), Operand::Number(k), _) => {
                    Operand::Length(LengthExpr::Scale(Box::new(a), self.divide(1.0, k)?))
                }
                _ => return Err(self.error("can only multiply or divide a length by a number")),
            };
        }
    }

    fn divide(&self, a: f32, b: f32) -> Result<f32> {
        if b == 0.0 {
            Err(self.error("division by zero"))
        } else {
            Ok(a / b)
        }
    }

    fn atom(&mut self) -> Result<Operand> {
        self.skip_ws();
        match self.peek() {
            Some('(') => {
                self.pos += 1;
                let inner = self.sum()?;
                self.expect(')')?;
                Ok(inner)
            }
            Some(c) if c.is_ascii_alphabetic() => self.function(),
            Some(_) => self.dimension(),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn ident(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn function(&mut self) -> Result<Operand> {
        let name = self.ident().to_ascii_lowercase();
        self.expect('(')?;
        let args = self.arguments()?;
        let input = self.input;

        let expr = match (name.as_str(), args.len()) {
            ("calc", 1) => return args.into_iter().next().ok_or_else(|| self.error("empty calc()")),
            ("min", n) if n > 0 => LengthExpr::Min(Self::lengths(args, input)?),
            ("max", n) if n > 0 => LengthExpr::Max(Self::lengths(args, input)?),
            ("clamp", 3) => {
                let mut it = Self::lengths(args, input)?.into_iter();
                match (it.next(), it.next(), it.next()) {
                    (Some(lo), Some(p), Some(hi)) => {
                        LengthExpr::Clamp(Box::new(lo), Box::new(p), Box::new(hi))
                    }
                    _ => return Err(self.error("clamp() takes three arguments")),
                }
            }
            (name, n) => {
                return Err(self.error(format!(
                    "unsupported function '{}' with {} argument(s)",
                    name, n
                )));
            }
        };
        Ok(Operand::Length(expr))
    }

    fn arguments(&mut self) -> Result<Vec<Operand>> {
        let mut args = vec![self.sum()?];
        loop {
            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                    args.push(self.sum()?);
                }
                Some(')') => {
                    self.pos += 1;
                    return Ok(args);
                }
                _ => return Err(self.error(format!("expected ',' or ')' at offset {}", self.pos))),
            }
        }
    }

    fn lengths(args: Vec<Operand>, input: &str) -> Result<Vec<LengthExpr>> {
        args.into_iter().map(|a| a.into_length(input)).collect()
    }

    fn dimension(&mut self) -> Result<Operand> {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && c == '-')))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let number: f32 = rest[..len]
            .parse()
            .map_err(|_| self.error(format!("invalid number at offset {}", self.pos)))?;
        self.pos += len;

        let unit = self.ident().to_ascii_lowercase();
        let expr = match unit.as_str() {
            "" => return Ok(Operand::Number(number)),
            "px" => LengthExpr::Px(number),
            "rem" => LengthExpr::Rem(number),
            "vh" => LengthExpr::Vh(number),
            "vw" => LengthExpr::Vw(number),
            other => return Err(self.error(format!("unknown unit '{}'", other))),
        };
        Ok(Operand::Length(expr))
    }
}
