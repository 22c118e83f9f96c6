//! The concrete AST handle backing `AbsValue::Ast` (§4.4 `GetChildren`,
//! §4.8 the SDO resolver). A driver's AST representation implements this
//! once; C9 and C2's `GetChildren` rule only ever touch ASTs through it.

use std::fmt;
use std::hash::Hash;

pub trait Ast: Clone + fmt::Debug + Eq + Hash {
    /// The grammar production's name, e.g. `"IfStatement"`.
    fn name(&self) -> &str;
    /// Which alternative of `name`'s production this node instantiates.
    fn prod_idx(&self) -> usize;
    /// §4.8's bitmap over optional-child presence; `0` for lexical nodes.
    fn sub_idx(&self) -> usize;
    /// This node's nearest transparent ancestor in the SDO resolution
    /// chain, if any.
    fn parent(&self) -> Option<Self>;
    /// Children matching the given non-terminal name (`GetChildren`'s
    /// `(grammar(name), ast)` case).
    fn children_named(&self, grammar_name: &str) -> Vec<Self>;
    /// All present optional children, flattened (`GetChildren`'s
    /// `(none, syntactic ast)` case).
    fn optional_children_flat(&self) -> Vec<Self>;
}
