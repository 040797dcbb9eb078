//! Rejects malformed expressions before any state is constructed.
//!
//! The accepted alphabet is the lowercase letters, the binary operators `.`
//! (concatenation) and `+` (union), the postfix operator `*` and parentheses.
//! Every operator must be explicit, so juxtaposed operands such as `ab` are
//! rejected rather than left for the builder to misclassify.

use thiserror::Error;

/// A user-facing error describing why an expression was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Unbalanced parentheses in regex")]
    UnbalancedParentheses { position: usize },
    #[error("Consecutive operators at position {position}")]
    ConsecutiveOperators { position: usize },
    #[error("Regex cannot start with operator '{operator}'")]
    OperatorAtStart { operator: char },
    #[error("Regex cannot end with operator '{operator}'")]
    OperatorAtEnd { operator: char, position: usize },
    #[error("Operator '{operator}' at position {position} is missing an operand")]
    MissingOperand { operator: char, position: usize },
    #[error("Missing operator before position {position}")]
    MissingOperator { position: usize },
}

impl SyntaxError {
    /// Returns the character offset the error was raised at, if it is tied
    /// to one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::OperatorAtStart { .. } => Some(0),
            Self::InvalidCharacter { position, .. }
            | Self::UnbalancedParentheses { position }
            | Self::ConsecutiveOperators { position }
            | Self::OperatorAtEnd { position, .. }
            | Self::MissingOperand { position, .. }
            | Self::MissingOperator { position } => Some(*position),
        }
    }
}

/// Characters that may close an operand.
fn ends_operand(c: char) -> bool {
    matches!(c, 'a'..='z' | ')' | '*')
}

/// Validates an expression, returning the first violation found.
///
/// # Example
///
/// ```
/// use nfa_compiler::{validate, SyntaxError};
///
/// assert_eq!(Ok(()), validate("(a+b).c*"));
/// assert_eq!(Ok(()), validate(""));
/// assert_eq!(
///     Err(SyntaxError::OperatorAtStart { operator: '.' }),
///     validate(".a")
/// );
/// ```
pub fn validate(regex: &str) -> Result<(), SyntaxError> {
    let chars = regex.chars().collect::<Vec<_>>();
    let last = chars.len().saturating_sub(1);
    let mut depth: usize = 0;

    for (position, &c) in chars.iter().enumerate() {
        let prev = position.checked_sub(1).and_then(|idx| chars.get(idx).copied());
        let next = chars.get(position + 1).copied();

        match c {
            'a'..='z' | '(' => {
                if prev.map(ends_operand).unwrap_or(false) {
                    return Err(SyntaxError::MissingOperator { position });
                }

                if c == '(' {
                    depth += 1;
                }
            }
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(SyntaxError::UnbalancedParentheses { position })?;
            }
            '.' | '+' if position == 0 => {
                return Err(SyntaxError::OperatorAtStart { operator: c });
            }
            '.' | '+' if position == last => {
                return Err(SyntaxError::OperatorAtEnd {
                    operator: c,
                    position,
                });
            }
            '.' | '+' if next.is_none() => {
                return Err(SyntaxError::MissingOperand {
                    operator: c,
                    position,
                });
            }
            '.' | '+' => {
                if matches!(prev, Some('.' | '+')) {
                    return Err(SyntaxError::ConsecutiveOperators { position });
                }
            }
            '*' => {
                if !matches!(prev, Some('a'..='z' | ')')) {
                    return Err(SyntaxError::MissingOperand {
                        operator: c,
                        position,
                    });
                }
            }
            character => return Err(SyntaxError::InvalidCharacter { character, position }),
        }
    }

    if depth != 0 {
        return Err(SyntaxError::UnbalancedParentheses {
            position: chars.len(),
        });
    }

    Ok(())
}
