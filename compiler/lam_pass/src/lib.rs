//! Pass infrastructure and compiler passes for Lam.
//!
//! Every pass runs inside the pass-execution monad ([`Pass`]): it threads
//! pass-local state and stops at the first error. The passes are
//!
//! - [`translate()`]: surface tree → [`Progn`](lam_ir::Progn), resolving scopes
//! - [`free_vars()`]: references left unbound
//! - [`verify()`]: recomputes every annotation and compares
//! - [`lower()`]: placeholder for the codegen-ready form
//!
//! [`compile()`] chains them under a [`PipelineConfig`].
//!
//! # Pipeline Position
//!
//! ```text
//! Parse → **Translate → Analyze → Verify** → Lower
//! ```

mod derive;
pub mod free_vars;
pub mod lower;
pub mod pass;
pub mod pipeline;
mod stack;
pub mod translate;
pub mod verify;

use std::sync::Once;

pub use free_vars::{free_vars, free_vars_of};
pub use lower::lower;
pub use pass::{evaluate, execute, Pass};
pub use pipeline::{compile, Compiled, PipelineConfig, VerifyMode};
pub use translate::{translate, TranslateOptions, UnresolvedPolicy};
pub use verify::verify;

pub use lam_diagnostic::{PassError, PassResult};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=lam_pass=debug` or `RUST_LOG=lam_pass=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
