use super::*;
use crate::translate::{translate, TranslateOptions};
use lam_ir::{Param, Surface};
use pretty_assertions::assert_eq;

fn translated(tree: Surface) -> Progn {
    translate(tree, TranslateOptions::default()).unwrap()
}

fn int_fn() -> Type {
    Type::func(Type::Int, Type::Int)
}

fn identity() -> Expr {
    let x = Ref::local("x", 0, Type::Int);
    Expr::lambda(int_fn(), vec![x.clone()], Expr::Var(x))
}

fn assert_defect(result: PassResult<Progn>) {
    match result {
        Err(error) => assert!(error.is_defect(), "expected a defect, got {error:?}"),
        Ok(progn) => panic!("expected a defect, verified:\n{progn}"),
    }
}

#[test]
fn test_translated_program_verifies_unchanged() {
    let tree = Surface::let_in(
        "id",
        Surface::lambda([Param::new("x", Type::Int)], Surface::var("x")),
        Surface::let_in(
            "twice",
            Surface::lambda(
                [Param::new("f", int_fn()), Param::new("n", Type::Int)],
                Surface::app(
                    Surface::var("f"),
                    [Surface::app(Surface::var("f"), [Surface::var("n")])],
                ),
            ),
            Surface::app(Surface::var("twice"), [Surface::var("id"), Surface::int(3)]),
        ),
    );
    let progn = translated(tree);
    assert_eq!(verify(progn.clone()), Ok(progn));
}

#[test]
fn test_nested_let_verifies() {
    let tree = Surface::lambda(
        [Param::new("x", Type::Int)],
        Surface::let_in("y", Surface::var("x"), Surface::var("y")),
    );
    let progn = translated(tree);
    assert_eq!(verify(progn.clone()), Ok(progn));
}

#[test]
fn test_verify_pass_yields_entry_type() {
    let progn = translated(Surface::lambda([Param::new("b", Type::Bool)], Surface::int(0)));
    let entry_ty = evaluate(verify_pass(&progn), Visible::default()).unwrap();
    assert_eq!(entry_ty, Type::func(Type::Bool, Type::Int));
}

#[test]
fn test_unresolved_reference_is_undefined() {
    let progn = translated(Surface::lambda([Param::new("x", Type::Int)], Surface::var("p")));
    assert_eq!(verify(progn), Err(PassError::Undefined(Ref::from("p"))));
}

#[test]
fn test_deferred_application_reports_undefined_name() {
    // λx:i. let y = p; id y   -- the application of id is deferred
    let tree = Surface::let_in(
        "id",
        Surface::lambda([Param::new("z", Type::Int)], Surface::var("z")),
        Surface::lambda(
            [Param::new("x", Type::Int)],
            Surface::let_in(
                "y",
                Surface::var("p"),
                Surface::app(Surface::var("id"), [Surface::var("y")]),
            ),
        ),
    );
    assert_eq!(
        verify(translated(tree)),
        Err(PassError::Undefined(Ref::from("p")))
    );
}

#[test]
fn test_lambda_annotation_drift_is_defect() {
    let x = Ref::local("x", 0, Type::Int);
    let progn = Progn::new(vec![], Expr::lambda(Type::Bool, vec![x.clone()], Expr::Var(x)));
    assert_defect(verify(progn));
}

#[test]
fn test_application_annotation_drift_is_defect() {
    let progn = Progn::new(vec![], Expr::app(Type::Bool, identity(), vec![Expr::Int(1)]));
    assert_defect(verify(progn));
}

#[test]
fn test_ill_typed_application_is_type_error() {
    let progn = Progn::new(vec![], Expr::app(Type::Int, identity(), vec![Expr::Bool(true)]));
    let Err(PassError::Type(mismatch)) = verify(progn) else {
        panic!("expected type mismatch");
    };
    assert_eq!(mismatch.found, Type::Bool);
}

#[test]
fn test_local_outside_its_lambda_is_defect() {
    let progn = Progn::new(vec![], Expr::Var(Ref::local("x", 0, Type::Int)));
    assert_defect(verify(progn));
}

#[test]
fn test_local_with_wrong_type_is_defect() {
    let x = Ref::local("x", 0, Type::Int);
    let progn = Progn::new(
        vec![],
        Expr::lambda(int_fn(), vec![x], Expr::Var(Ref::local("x", 0, Type::Bool))),
    );
    assert_defect(verify(progn));
}

#[test]
fn test_global_before_its_binding_is_defect() {
    let a = Ref::global("a", 0, Type::Int);
    let b = Ref::global("b", 0, Type::Int);
    let progn = Progn::new(
        vec![
            Binding::new(b.clone(), Expr::Var(a.clone())),
            Binding::new(a, Expr::Int(1)),
        ],
        Expr::Var(b),
    );
    assert_defect(verify(progn));
}

#[test]
fn test_non_global_binding_is_defect() {
    let a = Ref::local("a", 0, Type::Int);
    let progn = Progn::new(vec![Binding::new(a, Expr::Int(1))], Expr::Int(0));
    assert_defect(verify(progn));
}

#[test]
fn test_binding_type_drift_is_defect() {
    let a = Ref::global("a", 0, Type::Bool);
    let progn = Progn::new(vec![Binding::new(a, Expr::Int(1))], Expr::Int(0));
    assert_defect(verify(progn));
}

#[test]
fn test_non_local_parameter_is_defect() {
    let x = Ref::global("x", 0, Type::Int);
    let progn = Progn::new(vec![], Expr::lambda(int_fn(), vec![x.clone()], Expr::Var(x)));
    assert_defect(verify(progn));
}

#[test]
fn test_placeholder_typed_local_is_defect() {
    // let @g0:∅→∅ = λ%f0:∅.%f0:∅ 1 #t
    let f = Ref::local("f", 0, Type::Unit);
    let body = Expr::app(
        Type::Unit,
        Expr::Var(f.clone()),
        vec![Expr::Int(1), Expr::Bool(true)],
    );
    let lambda_ty = Type::func(Type::Unit, Type::Unit);
    let g = Ref::global("g", 0, lambda_ty.clone());
    let progn = Progn::new(
        vec![Binding::new(g.clone(), Expr::lambda(lambda_ty, vec![f], body))],
        Expr::Var(g),
    );
    assert_defect(verify(progn));
}

#[test]
fn test_placeholder_typed_global_is_defect() {
    let g = Ref::global("g", 0, Type::Unit);
    let progn = Progn::new(vec![], Expr::Var(g));
    assert_defect(verify(progn));
}

#[test]
fn test_application_of_placeholder_global_is_not_deferred() {
    let g = Ref::global("g", 0, Type::Unit);
    let progn = Progn::new(
        vec![Binding::new(g.clone(), Expr::Int(1))],
        Expr::app(Type::Unit, Expr::Var(g), vec![Expr::Int(2)]),
    );
    assert_defect(verify(progn));
}
