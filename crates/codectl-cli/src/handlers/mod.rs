//! Command handlers that delegate to the core `Editor`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Convert clap arguments into core types
//!   2. Call `Editor` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Build editor argument vectors
//! - Spawn processes
//! - Decide exit codes (see `crate::error`)

pub mod batch;
pub mod diff;
pub mod extensions;
pub mod folder;
pub mod goto;
pub mod new_window;
pub mod open;
pub mod status;
pub mod version;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use codectl_core::{Invocation, MockCommandRunner};

    use crate::bootstrap::CliContext;

    /// Runner named `code` whose presence probe answers `present`.
    pub fn runner(present: bool) -> MockCommandRunner {
        let mut runner = MockCommandRunner::new();
        runner.expect_program().return_const("code".to_string());
        runner
            .expect_succeeds()
            .withf(|inv: &Invocation| inv.to_string() == "-v")
            .return_const(present);
        runner
    }

    /// Present runner that expects exactly one launch with `args`.
    pub fn expect_launch(args: &'static str) -> MockCommandRunner {
        let mut runner = runner(true);
        runner
            .expect_launch()
            .withf(move |inv: &Invocation| inv.to_string() == args)
            .times(1)
            .returning(|_| Ok(()));
        runner
    }

    pub fn context(runner: MockCommandRunner) -> CliContext {
        CliContext::with_runner(Arc::new(runner))
    }
}
