//! C9: resolve a syntax-directed operation for a given AST and operation
//! name (§4.8). Walks the AST's chain of transparent ancestors innermost
//! out, looking up `"<astName>[<prodIdx>,<subIdx>].<op>"` in the function
//! table, falling back to a `"<DEFAULT>.<op>"` entry at the innermost
//! node for the handful of operations that define one.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::commons::FuncId;
use crate::domain::ast::Ast;
use crate::domain::cfg::Cfg;
use crate::domain::interp::ConcreteInterp;
use crate::domain::state::AbsState;
use crate::domain::value::AbsValue;
use crate::domain::view::View;
use crate::error::{AnalysisError, Result};
use crate::store::SemanticsStore;

use super::Transfer;

/// Operations that fall back to a `"<DEFAULT>.<op>"` entry when no
/// ancestor in the chain defines them directly (§4.8).
const DEFAULTABLE: &[&str] = &["Contains", "AllPrivateIdentifiersValid", "ContainsArguments"];

/// Memoizes `(ast, method) -> FuncId` resolutions for one analysis run.
/// Scoped to a resolver instance rather than a global `static` so a
/// process running more than one analysis never mixes ASTs across runs
/// (§9).
pub struct SdoCache<A: Ast> {
    cache: RefCell<HashMap<(A, String), FuncId>>,
}

impl<A: Ast> Default for SdoCache<A> {
    fn default() -> Self {
        SdoCache {
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl<A: Ast> SdoCache<A> {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, ast: &A, method: &str) -> Option<FuncId> {
        self.cache.borrow().get(&(ast.clone(), method.to_string())).cloned()
    }

    fn insert(&self, ast: A, method: &str, target: FuncId) {
        self.cache.borrow_mut().insert((ast, method.to_string()), target);
    }
}

impl<'a, S, Vw, I, C, St> Transfer<'a, S, Vw, I, C, St>
where
    Vw: View,
    S: AbsState<Vw>,
    I: ConcreteInterp<Concrete = <S::Value as AbsValue<Vw>>::Concrete>,
    C: Cfg<S::Value>,
    St: SemanticsStore<S, Vw>,
{
    pub fn resolve_sdo(&self, ast: &<S::Value as AbsValue<Vw>>::Ast, method: &str) -> Result<FuncId> {
        if let Some(cached) = self.sdo_cache.get(ast, method) {
            return Ok(cached);
        }
        let resolved = self.resolve_sdo_uncached(ast, method)?;
        self.sdo_cache.insert(ast.clone(), method, resolved.clone());
        Ok(resolved)
    }

    fn resolve_sdo_uncached(
        &self,
        ast: &<S::Value as AbsValue<Vw>>::Ast,
        method: &str,
    ) -> Result<FuncId> {
        let mut current = Some(ast.clone());
        while let Some(node) = current {
            let name = format!("{}[{},{}].{}", node.name(), node.prod_idx(), node.sub_idx(), method);
            let fid = FuncId::new(name);
            if self.cfg.lookup_function(&fid) {
                return Ok(fid);
            }
            current = node.parent();
        }

        if DEFAULTABLE.contains(&method) {
            let fid = FuncId::new(format!("<DEFAULT>.{method}"));
            if self.cfg.lookup_function(&fid) {
                return Ok(fid);
            }
        }

        Err(AnalysisError::invalid_sdo(method.to_string()))
    }
}
