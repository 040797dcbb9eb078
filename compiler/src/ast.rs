use std::fmt::Display;

/// A parsed expression. Precedence, from lowest to highest, is union,
/// concatenation, then the postfix star, with groups resetting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// The empty operand, matching only the empty string.
    Empty,
    Symbol(char),
    Union(Box<Expression>, Box<Expression>),
    Concatenation(Box<Expression>, Box<Expression>),
    Star(Box<Expression>),
    Group(Box<Expression>),
}

impl Expression {
    pub fn union(lhs: Self, rhs: Self) -> Self {
        Self::Union(Box::new(lhs), Box::new(rhs))
    }

    pub fn concatenation(lhs: Self, rhs: Self) -> Self {
        Self::Concatenation(Box::new(lhs), Box::new(rhs))
    }

    pub fn star(inner: Self) -> Self {
        Self::Star(Box::new(inner))
    }

    pub fn group(inner: Self) -> Self {
        Self::Group(Box::new(inner))
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Empty => Ok(()),
            Expression::Symbol(c) => write!(f, "{}", c),
            Expression::Union(lhs, rhs) => write!(f, "{}+{}", lhs, rhs),
            Expression::Concatenation(lhs, rhs) => write!(f, "{}.{}", lhs, rhs),
            Expression::Star(inner) => write!(f, "{}*", inner),
            Expression::Group(inner) => write!(f, "({})", inner),
        }
    }
}
