use super::*;
use crate::translate::UnresolvedPolicy;
use lam_diagnostic::PassError;
use lam_ir::{Param, Type, Typed};
use pretty_assertions::assert_eq;

fn config(verify: VerifyMode) -> PipelineConfig {
    PipelineConfig {
        verify,
        ..PipelineConfig::default()
    }
}

fn open_lambda() -> Surface {
    Surface::lambda([Param::new("x", Type::Int)], Surface::var("p"))
}

#[test]
fn test_parse_failure_is_wrapped() {
    let parsed = Err(ParseError::new(3, "unexpected end of input"));
    assert_eq!(
        compile(parsed, &PipelineConfig::default()),
        Err(PassError::Parse(ParseError::new(3, "unexpected end of input")))
    );
}

#[test]
fn test_closed_program_compiles() {
    let tree = Surface::let_in(
        "p",
        Surface::int(1),
        Surface::lambda([Param::new("x", Type::Int)], Surface::var("p")),
    );
    let compiled = compile(Ok(tree), &config(VerifyMode::Always)).unwrap();
    assert!(compiled.free.is_empty());
    assert_eq!(compiled.progn.ty(), &Type::func(Type::Int, Type::Int));
}

#[test]
fn test_open_program_reports_free_without_verification() {
    let compiled = compile(Ok(open_lambda()), &config(VerifyMode::Never)).unwrap();
    assert_eq!(compiled.free, BTreeSet::from([Ref::from("p")]));
}

#[test]
fn test_open_program_fails_verification() {
    assert_eq!(
        compile(Ok(open_lambda()), &config(VerifyMode::Always)),
        Err(PassError::Undefined(Ref::from("p")))
    );
}

#[test]
fn test_reject_policy_fails_in_translation() {
    let config = PipelineConfig {
        translate: TranslateOptions {
            unresolved: UnresolvedPolicy::Reject,
        },
        verify: VerifyMode::Never,
    };
    assert_eq!(
        compile(Ok(open_lambda()), &config),
        Err(PassError::Undefined(Ref::from("p")))
    );
}

#[test]
fn test_verify_modes() {
    assert!(VerifyMode::Always.enabled());
    assert!(!VerifyMode::Never.enabled());
    assert_eq!(VerifyMode::DebugOnly.enabled(), cfg!(debug_assertions));
    assert_eq!(PipelineConfig::default().verify, VerifyMode::Always);
}

#[test]
fn test_default_config_rejects_open_program() {
    assert_eq!(
        compile(Ok(open_lambda()), &PipelineConfig::default()),
        Err(PassError::Undefined(Ref::from("p")))
    );
}
