//! The pass pipeline.
//!
//! ```text
//! parser output → translate → free_vars → verify (per VerifyMode)
//! ```
//!
//! Each stage either produces the next program or aborts the whole
//! pipeline with its error. Lowering is not part of the pipeline until it
//! is implemented.

use std::collections::BTreeSet;

use lam_diagnostic::{ParseError, PassResult};
use lam_ir::{Progn, Ref, Surface};

use crate::free_vars::free_vars;
use crate::translate::{translate, TranslateOptions};
use crate::verify::verify;

/// When the verifier runs.
///
/// The verifier reports user errors (`Undefined`, `Type`) as well as broken
/// invariants, so anything other than `Always` can change what `compile`
/// returns for an open or ill-typed program.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum VerifyMode {
    #[default]
    Always,
    /// Only in builds with debug assertions.
    DebugOnly,
    Never,
}

impl VerifyMode {
    pub fn enabled(self) -> bool {
        match self {
            VerifyMode::Always => true,
            VerifyMode::DebugOnly => cfg!(debug_assertions),
            VerifyMode::Never => false,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PipelineConfig {
    pub translate: TranslateOptions,
    pub verify: VerifyMode,
}

/// Output of a successful pipeline run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Compiled {
    pub progn: Progn,
    /// References left unbound by translation.
    pub free: BTreeSet<Ref>,
}

/// Run the pipeline over the parser's output.
///
/// A parse failure is wrapped into `PassError::Parse` and nothing else runs.
#[tracing::instrument(level = "debug", skip_all)]
pub fn compile(
    parsed: Result<Surface, ParseError>,
    config: &PipelineConfig,
) -> PassResult<Compiled> {
    let tree = parsed?;
    let progn = translate(tree, config.translate)?;
    let free = free_vars(&progn)?;
    let progn = if config.verify.enabled() {
        verify(progn)?
    } else {
        progn
    };
    Ok(Compiled { progn, free })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
