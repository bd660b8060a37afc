//! SQL identifier validation.
//!
//! Column names, schema names and generated-column sources are spliced into SQL
//! text (identifiers cannot be bound as parameters), so every one of them goes
//! through [`Ident`] first.
//!
//! - Unquoted parts are validated against: `[A-Za-z_][A-Za-z0-9_$]*`
//! - Quoted parts allow any characters except NUL and escape `"` as `""`
//!
//! # Example
//! ```ignore
//! use pgexpr::Ident;
//!
//! let col = Ident::parse("public.places")?;
//! let odd = Ident::parse(r#""Display Name""#)?;
//! # Ok::<(), pgexpr::ExprError>(())
//! ```

use crate::error::{ExprError, ExprResult};
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// One dot-separated segment of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentPart {
    /// Unquoted identifier: must match `[A-Za-z_][A-Za-z0-9_$]*`.
    Unquoted(String),
    /// Quoted identifier: allows any characters except NUL.
    Quoted(String),
}

impl IdentPart {
    /// The segment's name without quoting.
    pub fn name(&self) -> &str {
        match self {
            IdentPart::Unquoted(s) | IdentPart::Quoted(s) => s,
        }
    }

    fn write_sql(&self, out: &mut String) {
        match self {
            IdentPart::Unquoted(s) => out.push_str(s),
            IdentPart::Quoted(s) => {
                out.push('"');
                for ch in s.chars() {
                    if ch == '"' {
                        out.push('"');
                    }
                    out.push(ch);
                }
                out.push('"');
            }
        }
    }
}

/// A validated SQL identifier (column, table, schema or function name).
///
/// Supports dotted notation (`schema.table.column`) and quoted parts
/// (`"CamelCase"."Column"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub parts: Vec<IdentPart>,
}

impl Ident {
    /// Create a single quoted identifier part.
    pub fn quoted(name: &str) -> ExprResult<Self> {
        if name.is_empty() {
            return Err(ExprError::validation("Empty quoted identifier"));
        }
        if name.contains('\0') {
            return Err(ExprError::validation(
                "Identifier cannot contain NUL character",
            ));
        }
        Ok(Self {
            parts: vec![IdentPart::Quoted(name.to_string())],
        })
    }

    /// Parse an identifier string, supporting dotted and quoted forms.
    ///
    /// - Dotted: `schema.table.column`
    /// - Quoted: `"CamelCase"."Column"`
    /// - Mixed: `extensions."Points".geom`
    pub fn parse(s: &str) -> ExprResult<Self> {
        if s.is_empty() {
            return Err(ExprError::validation("Identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(ExprError::validation(
                "Identifier cannot contain NUL character",
            ));
        }

        let mut parts = Vec::new();
        let mut chars = s.chars().peekable();

        while chars.peek().is_some() {
            if !parts.is_empty() {
                match chars.next() {
                    Some('.') if chars.peek().is_none() => {
                        return Err(ExprError::validation("Trailing '.' in identifier"));
                    }
                    Some('.') => {}
                    Some(c) => {
                        return Err(ExprError::validation(format!(
                            "Expected '.' between identifier parts, got '{c}'"
                        )));
                    }
                    None => break,
                }
            }

            let part = if chars.peek() == Some(&'"') {
                parse_quoted_part(&mut chars)?
            } else {
                parse_unquoted_part(&mut chars)?
            };
            parts.push(part);
        }

        if parts.is_empty() {
            return Err(ExprError::validation("Empty identifier"));
        }

        Ok(Self { parts })
    }

    /// Prefix this identifier with an optional schema.
    pub fn qualified(&self, schema: Option<&Ident>) -> Ident {
        match schema {
            Some(schema) => {
                let mut parts = schema.parts.clone();
                parts.extend(self.parts.iter().cloned());
                Ident { parts }
            }
            None => self.clone(),
        }
    }

    /// The last segment's unquoted name (`geom` for `public.places.geom`).
    pub fn last_name(&self) -> &str {
        self.parts.last().map(IdentPart::name).unwrap_or_default()
    }

    /// The last segment alone (`geom` for `public.places.geom`), quoting kept.
    pub fn unqualified(&self) -> Ident {
        Ident {
            parts: self.parts.last().cloned().into_iter().collect(),
        }
    }

    /// Render the identifier as SQL.
    pub fn to_sql(&self) -> String {
        let mut cap = self.parts.len().saturating_sub(1);
        for part in &self.parts {
            cap += part.name().len() + 2;
        }
        let mut out = String::with_capacity(cap);
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            part.write_sql(out);
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

fn parse_quoted_part(chars: &mut Peekable<Chars<'_>>) -> ExprResult<IdentPart> {
    chars.next(); // opening quote
    let mut name = String::new();
    loop {
        match chars.next() {
            Some('"') if chars.peek() == Some(&'"') => {
                chars.next();
                name.push('"');
            }
            Some('"') => break,
            Some(c) => name.push(c),
            None => return Err(ExprError::validation("Unclosed quoted identifier")),
        }
    }
    if name.is_empty() {
        return Err(ExprError::validation("Empty quoted identifier"));
    }
    Ok(IdentPart::Quoted(name))
}

fn parse_unquoted_part(chars: &mut Peekable<Chars<'_>>) -> ExprResult<IdentPart> {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c == '.' {
            break;
        }
        let valid = if name.is_empty() {
            c == '_' || c.is_ascii_alphabetic()
        } else {
            c == '_' || c == '$' || c.is_ascii_alphanumeric()
        };
        if !valid {
            return Err(ExprError::validation(if name.is_empty() {
                format!("Invalid identifier start character: '{c}'")
            } else {
                format!("Invalid character in identifier: '{c}'")
            }));
        }
        name.push(c);
        chars.next();
    }
    if name.is_empty() {
        return Err(ExprError::validation("Empty identifier segment"));
    }
    Ok(IdentPart::Unquoted(name))
}

/// Convert an input into an [`Ident`].
///
/// This is mainly for ergonomics in constructor APIs.
pub trait IntoIdent {
    fn into_ident(self) -> ExprResult<Ident>;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> ExprResult<Ident> {
        Ok(self)
    }
}

impl IntoIdent for &Ident {
    fn into_ident(self) -> ExprResult<Ident> {
        Ok(self.clone())
    }
}

impl IntoIdent for &str {
    fn into_ident(self) -> ExprResult<Ident> {
        Ident::parse(self)
    }
}

impl IntoIdent for String {
    fn into_ident(self) -> ExprResult<Ident> {
        Ident::parse(&self)
    }
}

impl IntoIdent for &String {
    fn into_ident(self) -> ExprResult<Ident> {
        Ident::parse(self)
    }
}
