//! The core's error type.
//!
//! Bottom propagation is not an error (see the module docs on
//! [`crate::transfer`]); this type only covers the two failure modes the
//! specification calls out: precision loss the current domain cannot
//! safely approximate, and malformed IR the CFG builder should never have
//! produced.

use std::fmt;

use thiserror::Error;

use crate::commons::FuncId;

/// Names the syntactic site where precision was lost, e.g. `"EGetChildren"`
/// or `"vop transfer"`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ExplodedTag(pub &'static str);

impl fmt::Display for ExplodedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The current abstract domain cannot soundly approximate this
    /// operation's result; the analysis as a whole has failed, not just
    /// this control point. A driver may catch this to report a failed
    /// run rather than crash.
    #[error("analysis exploded at {tag}: domain too coarse to proceed")]
    Exploded { tag: ExplodedTag },

    /// The AST handed to the SDO resolver (C9) has no matching syntax
    /// directed operation and no default case applies.
    #[error("no syntax-directed operation `{method}` found for this AST")]
    InvalidSdo { method: String },

    /// The CFG is not well-formed in a way the core cannot recover from,
    /// e.g. a call instruction naming a function absent from the function
    /// table.
    #[error("malformed IR in function {func}: {reason}")]
    MalformedIr { func: FuncId, reason: String },
}

impl AnalysisError {
    pub fn exploded(tag: &'static str) -> Self {
        tracing::warn!(tag, "analysis exploded: domain too coarse to proceed");
        AnalysisError::Exploded {
            tag: ExplodedTag(tag),
        }
    }

    pub fn invalid_sdo(method: impl Into<String>) -> Self {
        AnalysisError::InvalidSdo {
            method: method.into(),
        }
    }

    pub fn malformed_ir(func: FuncId, reason: impl Into<String>) -> Self {
        AnalysisError::MalformedIr {
            func,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
