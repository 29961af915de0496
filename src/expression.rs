use std::fmt;

/// A parsed expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i64),
    Boolean(bool),
    Call(Call),
}

/// A call expression: `target(arguments...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub target: String,
    pub arguments: Vec<Expression>,
}

impl Call {
    pub fn new(target: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Call {
            target: target.into(),
            arguments,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(value) => write!(f, "Number({})", value),
            Expression::Boolean(value) => write!(f, "Boolean({})", value),
            Expression::Call(call) => write!(f, "{}", call),
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}([", self.target)?;
        for (index, argument) in self.arguments.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", argument)?;
        }
        write!(f, "])")
    }
}
