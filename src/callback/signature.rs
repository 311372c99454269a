//! Arity sniffing from declaration text
//!
//! Looks at the first parameter list of a declaration like
//! `function (key, value) { ... }` or `(key, value) => ...` and reports
//! [`Arity::Two`] when that list holds a comma at its top nesting level.
//! Commas nested in destructuring patterns, default-value calls, string
//! literals or regex literals do not count, and neither does anything in the
//! body. Comments inside the parameter list are not recognised.

use super::Arity;

impl Arity {
    /// Derive the invocation arity from a callback's declaration text.
    ///
    /// Zero or one declared parameter gives [`Arity::One`]; two or more
    /// gives [`Arity::Two`]. Bare arrow parameters (`value => ...`) and
    /// text without a parameter list count as one parameter.
    pub fn from_declaration(declaration: &str) -> Arity {
        let Some(open) = declaration.find('(') else {
            return Arity::One;
        };
        // `value => f(a, b)`: the first parenthesis belongs to the body.
        if declaration[..open].contains("=>") {
            return Arity::One;
        }

        if has_top_level_comma(&declaration[open + 1..]) {
            Arity::Two
        } else {
            Arity::One
        }
    }
}

/// Scan a parameter list (starting just past its opening parenthesis) up to
/// the matching close.
fn has_top_level_comma(params: &str) -> bool {
    let mut depth = 0usize;
    let mut literal: Option<Literal> = None;
    let mut escaped = false;
    // Last significant character outside literals; decides whether `/` opens
    // a regex or divides.
    let mut previous: Option<char> = None;

    for ch in params.chars() {
        if let Some(open) = literal {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else {
                literal = open.advance(ch);
            }
            continue;
        }

        match ch {
            '\'' | '"' | '`' => literal = Some(Literal::Quoted(ch)),
            '/' if starts_operand(previous) => literal = Some(Literal::Regex { in_class: false }),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            ',' if depth == 0 => return true,
            _ => {}
        }
        if !ch.is_whitespace() {
            previous = Some(ch);
        }
    }

    false
}

/// Literal being skipped over.
#[derive(Clone, Copy)]
enum Literal {
    Quoted(char),
    /// `/.../`; a `/` inside a `[...]` class does not close it
    Regex { in_class: bool },
}

impl Literal {
    /// State after consuming an unescaped `ch`; `None` once the literal closes.
    fn advance(self, ch: char) -> Option<Literal> {
        match (self, ch) {
            (Literal::Quoted(quote), _) if ch == quote => None,
            (Literal::Regex { in_class: false }, '/') => None,
            (Literal::Regex { in_class: false }, '[') => Some(Literal::Regex { in_class: true }),
            (Literal::Regex { in_class: true }, ']') => Some(Literal::Regex { in_class: false }),
            (state, _) => Some(state),
        }
    }
}

/// A `/` after one of these (or at the start) begins a regex literal rather
/// than a division.
fn starts_operand(previous: Option<char>) -> bool {
    previous.map_or(true, |ch| "=(,[{:!&|?+-*%<>~^;".contains(ch))
}
