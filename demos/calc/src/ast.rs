//! Expression trees for the calculator.

use std::fmt;

use parlance_source::Location;

/// A prefix operator.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum UnaryOp {
    /// `+`, the identity.
    Pos,
    /// `-`, arithmetic negation.
    Neg,
}

impl UnaryOp {
    /// The operator's source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Pos => "+",
            UnaryOp::Neg => "-",
        }
    }
}

/// An infix operator.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    /// `**`, right-associative.
    Pow,
}

impl BinaryOp {
    /// The operator's source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "**",
        }
    }
}

/// An arithmetic expression.
///
/// Every node carries the location of the token that introduced it, so
/// evaluation errors point back into the source.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expr {
    Int {
        location: Location,
        value: i64,
    },
    Unary {
        op: UnaryOp,
        location: Location,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        location: Location,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    #[must_use]
    pub fn int(location: Location, value: i64) -> Self {
        Expr::Int { location, value }
    }

    #[must_use]
    pub fn unary(op: UnaryOp, location: Location, operand: Expr) -> Self {
        Expr::Unary {
            op,
            location,
            operand: Box::new(operand),
        }
    }

    #[must_use]
    pub fn binary(op: BinaryOp, location: Location, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            location,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The location of the token that introduced this node.
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            Expr::Int { location, .. }
            | Expr::Unary { location, .. }
            | Expr::Binary { location, .. } => *location,
        }
    }

    /// Binding strength for printing. Lower binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Int { .. } => 0,
            Expr::Unary { .. } => 1,
            Expr::Binary { op, .. } => match op {
                BinaryOp::Pow => 2,
                BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 3,
                BinaryOp::Add | BinaryOp::Sub => 4,
            },
        }
    }

    /// Writes `child`, parenthesized when it binds no tighter than `self`.
    fn display_child(&self, f: &mut fmt::Formatter<'_>, child: &Expr) -> fmt::Result {
        if child.precedence() >= self.precedence() {
            write!(f, "({child})")
        } else {
            write!(f, "{child}")
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int { value, .. } => write!(f, "{value}"),
            Expr::Unary { op, operand, .. } => {
                write!(f, "{}", op.symbol())?;
                self.display_child(f, operand)
            }
            Expr::Binary {
                op, left, right, ..
            } => {
                self.display_child(f, left)?;
                write!(f, " {} ", op.symbol())?;
                self.display_child(f, right)
            }
        }
    }
}
