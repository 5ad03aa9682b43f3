//! Arithmetic operator vocabulary.
//!
//! Every operator the dispatcher understands maps to exactly one
//! [`Metamethod`] key. The mapping is total and fixed, so the enums here are
//! the single source of truth for symbols, names, and overload keys.

use std::fmt;

/// Binary arithmetic operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// All binary operators, in declaration order.
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
    ];

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }

    /// Short lowercase name (`add`, `sub`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
        }
    }

    /// The metamethod consulted when no native rule applies.
    pub const fn metamethod(self) -> Metamethod {
        match self {
            Self::Add => Metamethod::Add,
            Self::Sub => Metamethod::Sub,
            Self::Mul => Metamethod::Mul,
            Self::Div => Metamethod::Div,
            Self::Mod => Metamethod::Mod,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Unary arithmetic operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Neg => "neg",
        }
    }

    pub const fn metamethod(self) -> Metamethod {
        match self {
            Self::Neg => Metamethod::Unm,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Reserved object attribute keys that overload arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Metamethod {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Unm,
}

impl Metamethod {
    pub const ALL: [Metamethod; 6] = [
        Metamethod::Add,
        Metamethod::Sub,
        Metamethod::Mul,
        Metamethod::Div,
        Metamethod::Mod,
        Metamethod::Unm,
    ];

    /// Attribute key under which the overload is stored.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Add => "__add",
            Self::Sub => "__sub",
            Self::Mul => "__mul",
            Self::Div => "__div",
            Self::Mod => "__mod",
            Self::Unm => "__unm",
        }
    }

    /// Number of arguments the overload receives.
    ///
    /// Binary overloads get the operand that is not the owning object;
    /// `__unm` gets nothing.
    pub const fn arg_count(self) -> usize {
        match self {
            Self::Unm => 0,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod => 1,
        }
    }
}

impl fmt::Display for Metamethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_ops_map_to_distinct_keys() {
        let keys: Vec<_> = BinaryOp::ALL.iter().map(|op| op.metamethod().key()).collect();
        assert_eq!(keys, ["__add", "__sub", "__mul", "__div", "__mod"]);
    }

    #[test]
    fn neg_maps_to_unm() {
        assert_eq!(UnaryOp::Neg.metamethod(), Metamethod::Unm);
        assert_eq!(Metamethod::Unm.arg_count(), 0);
        assert_eq!(Metamethod::Add.arg_count(), 1);
    }

    #[test]
    fn keys_are_distinct() {
        let mut keys: Vec<_> = Metamethod::ALL.iter().map(|m| m.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Metamethod::ALL.len());
    }

    #[test]
    fn symbols() {
        assert_eq!(BinaryOp::Mod.to_string(), "%");
        assert_eq!(UnaryOp::Neg.to_string(), "-");
        assert_eq!(BinaryOp::Div.name(), "div");
    }
}
