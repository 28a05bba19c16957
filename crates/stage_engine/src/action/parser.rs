//! Action string parsing
//!
//! Widgets name their action as a call expression, e.g.
//! `scene_manager.set_scene('GameScene')` or `audio_manager.volume_up()`.
//! The dotted path before the parenthesis selects a registered handler and
//! the parenthesized part is a list of literals.

use std::fmt;

use super::ActionError;

/// Literal argument of an action call
#[derive(Debug, Clone, PartialEq)]
pub enum ActionArg {
    /// Integer literal
    Int(i64),
    /// Floating-point literal
    Float(f64),
    /// Quoted string
    Str(String),
    /// `True` / `False`
    Bool(bool),
    /// `None`
    None,
}

impl ActionArg {
    /// String payload, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload widened to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for ActionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Bool(b) => f.write_str(if *b { "True" } else { "False" }),
            Self::None => f.write_str("None"),
        }
    }
}

/// A parsed action call
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSpec {
    /// Path segments before the method (empty for a bare method)
    pub target: Vec<String>,
    /// Method name
    pub method: String,
    /// Call arguments
    pub args: Vec<ActionArg>,
}

impl ActionSpec {
    /// Parse `target.method(args)`; the argument list may be omitted
    pub fn parse(source: &str) -> Result<Self, ActionError> {
        let fail = |reason: &str| ActionError::Parse {
            source_text: source.to_string(),
            reason: reason.to_string(),
        };

        let source_trimmed = source.trim();
        let (path, args) = match source_trimmed.split_once('(') {
            Some((path, rest)) => {
                let inner = rest.trim_end().strip_suffix(')').ok_or_else(|| fail("missing closing parenthesis"))?;
                (path.trim(), parse_arguments(inner).map_err(|reason| fail(&reason))?)
            }
            None => (source_trimmed, Vec::new()),
        };

        let mut segments: Vec<String> = path.split('.').map(|s| s.trim().to_string()).collect();
        if let Some(bad) = segments.iter().find(|s| !is_identifier(s)) {
            return Err(fail(&format!("invalid name '{bad}'")));
        }
        let method = segments.pop().ok_or_else(|| fail("empty action"))?;

        Ok(Self { target: segments, method, args })
    }

    /// Registry key: the full dotted path
    pub fn key(&self) -> String {
        if self.target.is_empty() {
            self.method.clone()
        } else {
            format!("{}.{}", self.target.join("."), self.method)
        }
    }

    /// Dotted target path without the method
    pub fn target_path(&self) -> String {
        self.target.join(".")
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse a comma separated literal list; a trailing comma is allowed
pub fn parse_arguments(text: &str) -> Result<Vec<ActionArg>, String> {
    let mut args = Vec::new();
    let mut chars = text.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(&first) = chars.peek() else { break };

        let arg = if first == '\'' || first == '"' {
            chars.next();
            let mut value = String::new();
            loop {
                match chars.next() {
                    Some('\\') => match chars.next() {
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some(c) => value.push(c),
                        None => return Err("unterminated string".to_string()),
                    },
                    Some(c) if c == first => break,
                    Some(c) => value.push(c),
                    None => return Err("unterminated string".to_string()),
                }
            }
            ActionArg::Str(value)
        } else {
            let mut token = String::new();
            while let Some(c) = chars.next_if(|c| *c != ',') {
                token.push(c);
            }
            parse_literal(token.trim())?
        };
        args.push(arg);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            None => break,
            Some(',') => {}
            Some(c) => return Err(format!("unexpected '{c}' after argument")),
        }
    }

    Ok(args)
}

fn parse_literal(token: &str) -> Result<ActionArg, String> {
    match token {
        "" => Err("empty argument".to_string()),
        "True" | "true" => Ok(ActionArg::Bool(true)),
        "False" | "false" => Ok(ActionArg::Bool(false)),
        "None" => Ok(ActionArg::None),
        _ => {
            if let Ok(i) = token.parse::<i64>() {
                Ok(ActionArg::Int(i))
            } else if let Ok(f) = token.parse::<f64>() {
                Ok(ActionArg::Float(f))
            } else {
                Err(format!("unsupported literal '{token}'"))
            }
        }
    }
}
