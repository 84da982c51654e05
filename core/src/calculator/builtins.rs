//! The fixed table of one-argument math functions.

use core::str::FromStr;

/// A builtin unary function callable as `name(expr)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Sqrt,
    /// Natural logarithm.
    Log,
    Log10,
}

impl Builtin {
    pub const ALL: [Builtin; 6] = [
        Builtin::Sin,
        Builtin::Cos,
        Builtin::Tan,
        Builtin::Sqrt,
        Builtin::Log,
        Builtin::Log10,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Sin => "sin",
            Builtin::Cos => "cos",
            Builtin::Tan => "tan",
            Builtin::Sqrt => "sqrt",
            Builtin::Log => "log",
            Builtin::Log10 => "log10",
        }
    }

    /// IEEE-754 results: `sqrt(-1)` and `log(-1)` are NaN, `log(0)` is -inf.
    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Builtin::Sin => arg.sin(),
            Builtin::Cos => arg.cos(),
            Builtin::Tan => arg.tan(),
            Builtin::Sqrt => arg.sqrt(),
            Builtin::Log => arg.ln(),
            Builtin::Log10 => arg.log10(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownBuiltin;

impl FromStr for Builtin {
    type Err = UnknownBuiltin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Builtin::ALL
            .into_iter()
            .find(|builtin| builtin.name() == s)
            .ok_or(UnknownBuiltin)
    }
}
