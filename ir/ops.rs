//! Operator vocabularies used by expressions (§4.4) and lifted by the
//! operator evaluator (§4.5, C3).

use derive_more::Display;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub enum UnOp {
    #[display(fmt = "-")]
    Neg,
    #[display(fmt = "!")]
    Not,
    #[display(fmt = "~")]
    BNot,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub enum BinOp {
    #[display(fmt = "+")]
    Add,
    #[display(fmt = "-")]
    Sub,
    #[display(fmt = "*")]
    Mul,
    #[display(fmt = "/")]
    Div,
    #[display(fmt = "%")]
    Mod,
    #[display(fmt = "**")]
    Pow,
    #[display(fmt = "&")]
    BAnd,
    #[display(fmt = "|")]
    BOr,
    #[display(fmt = "^")]
    BXor,
    #[display(fmt = "<<")]
    LShift,
    #[display(fmt = ">>")]
    RShift,
    #[display(fmt = ">>>")]
    URShift,
    #[display(fmt = "==")]
    Eq,
    #[display(fmt = "!=")]
    Neq,
    #[display(fmt = "<")]
    Lt,
    #[display(fmt = "<=")]
    Lte,
    #[display(fmt = ">")]
    Gt,
    #[display(fmt = ">=")]
    Gte,
}

impl BinOp {
    /// Comparisons compare operands but always yield a boolean; the
    /// constant-folding path in C3 needs to know this to lift the concrete
    /// interpreter's result correctly.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinOp::Eq | BinOp::Neq | BinOp::Lt | BinOp::Lte | BinOp::Gt | BinOp::Gte
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub enum VariadicOp {
    #[display(fmt = "min")]
    Min,
    #[display(fmt = "max")]
    Max,
    #[display(fmt = "concat")]
    Concat,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub enum ConvertOp {
    ToNumber,
    ToMath,
    ToStr,
    ToBigInt,
    ToCodeUnit,
}
