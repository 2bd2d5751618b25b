//! Scope resolution state threaded through translation.

use lam_diagnostic::{PassError, PassResult};
use lam_ir::{Name, Ref, Type};
use rustc_hash::FxHashMap;

use super::TranslateOptions;

/// Name-to-binding table for the translation pass.
///
/// Disambiguation indices are handed out per name, program-wide, in the
/// order binding sites are met. Two binding sites therefore never share a
/// `Ref`, even when they share a name and scope. Visibility is tracked
/// separately: one frame per enclosing lambda, searched innermost-out, then
/// the globals introduced so far.
#[derive(Debug, Default)]
pub struct ScopeTable {
    options: TranslateOptions,
    next_index: FxHashMap<Name, u32>,
    frames: Vec<FxHashMap<Name, Ref>>,
    globals: FxHashMap<Name, Ref>,
}

impl ScopeTable {
    pub fn new(options: TranslateOptions) -> Self {
        ScopeTable {
            options,
            ..ScopeTable::default()
        }
    }

    pub fn options(&self) -> TranslateOptions {
        self.options
    }

    fn fresh_index(&mut self, name: &Name) -> u32 {
        let next = self.next_index.entry(name.clone()).or_insert(0);
        let index = *next;
        *next += 1;
        index
    }

    /// Introduce a top-level binding. Shadows any earlier global of the same
    /// name for everything translated afterwards.
    pub fn bind_global(&mut self, name: Name, ty: Type) -> Ref {
        let index = self.fresh_index(&name);
        let binding = Ref::global(name.clone(), index, ty);
        tracing::trace!(%binding, "bound global");
        self.globals.insert(name, binding.clone());
        binding
    }

    /// Open the frame for a lambda's parameters.
    pub fn enter_lambda(&mut self) {
        self.frames.push(FxHashMap::default());
    }

    /// Close the innermost lambda frame.
    pub fn exit_lambda(&mut self) {
        self.frames.pop();
    }

    /// Introduce a parameter in the innermost lambda frame.
    pub fn bind_local(&mut self, name: Name, ty: Type) -> PassResult<Ref> {
        let index = self.fresh_index(&name);
        let binding = Ref::local(name.clone(), index, ty);
        tracing::trace!(%binding, depth = self.depth(), "bound local");
        let Some(frame) = self.frames.last_mut() else {
            return Err(PassError::panic(format!("parameter `{binding}` bound outside any lambda")));
        };
        frame.insert(name, binding.clone());
        Ok(binding)
    }

    /// Look up the binding `name` refers to at this point.
    pub fn resolve(&self, name: &Name) -> Option<&Ref> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
            .or_else(|| self.globals.get(name))
    }

    /// Number of open lambda frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
