use pasquale::{analyze, error::SemanticError, parse};

fn analyze_source(source: &str) -> Result<usize, SemanticError> {
    let program = parse(source).unwrap();
    analyze(&program).map(|resolutions| resolutions.call_count())
}

fn semantic_error(source: &str) -> SemanticError {
    analyze_source(source).unwrap_err()
}

#[test]
fn well_formed_program_passes() {
    let source = "PROGRAM Ok;
VAR a, b : INTEGER;
    y    : REAL;
BEGIN
   a := 1;
   b := a * 2;
   y := b / 3
END.";
    assert_eq!(analyze_source(source), Ok(0));
}

#[test]
fn redeclaration_in_the_same_scope_fails() {
    let source = "PROGRAM Dup;
VAR y : INTEGER;
    y : REAL;
BEGIN
END.";
    assert_eq!(semantic_error(source),
               SemanticError::DuplicateIdentifier { name:   "y".to_string(),
                                                    line:   3,
                                                    column: 5, });
}

#[test]
fn redeclaration_is_case_insensitive() {
    let source = "PROGRAM Dup; VAR Total, TOTAL : INTEGER; BEGIN END.";
    assert!(matches!(semantic_error(source),
                     SemanticError::DuplicateIdentifier { ref name, .. } if name == "total"));
}

#[test]
fn procedure_name_clashing_with_variable_fails() {
    let source = "PROGRAM Dup;
VAR p : INTEGER;
PROCEDURE p; BEGIN END;
BEGIN
END.";
    assert_eq!(semantic_error(source),
               SemanticError::DuplicateIdentifier { name:   "p".to_string(),
                                                    line:   3,
                                                    column: 11, });
}

#[test]
fn inner_scope_may_shadow_outer_names() {
    let source = "PROGRAM Shadow;
VAR x : REAL;
PROCEDURE p(x : INTEGER);
VAR y : INTEGER;
BEGIN
   y := x
END;
BEGIN
   x := 1.5
END.";
    assert_eq!(analyze_source(source), Ok(0));
}

#[test]
fn local_clashing_with_parameter_fails() {
    let source = "PROGRAM Clash;
PROCEDURE p(a : INTEGER);
VAR a : REAL;
BEGIN
END;
BEGIN
END.";
    assert_eq!(semantic_error(source),
               SemanticError::DuplicateIdentifier { name:   "a".to_string(),
                                                    line:   3,
                                                    column: 5, });
}

#[test]
fn undeclared_operand_fails() {
    let source = "PROGRAM Undeclared;
VAR a : INTEGER;
BEGIN
   a := 2 * b
END.";
    let err = semantic_error(source);
    assert_eq!(err,
               SemanticError::UndeclaredIdentifier { name:   "b".to_string(),
                                                     line:   4,
                                                     column: 13, });
    assert_eq!(err.to_string(), "Error on line 4, column 13: Undeclared identifier 'b'.");
}

#[test]
fn undeclared_target_fails() {
    let source = "PROGRAM Undeclared;
BEGIN
   BEGIN
      z := 1
   END
END.";
    assert_eq!(semantic_error(source),
               SemanticError::UndeclaredIdentifier { name:   "z".to_string(),
                                                     line:   4,
                                                     column: 7, });
}

#[test]
fn procedure_locals_are_invisible_outside() {
    let source = "PROGRAM Hidden;
VAR a : INTEGER;
PROCEDURE p;
VAR secret : INTEGER;
BEGIN
   secret := 1
END;
BEGIN
   a := secret
END.";
    assert!(matches!(semantic_error(source),
                     SemanticError::UndeclaredIdentifier { ref name, line: 9, .. }
                     if name == "secret"));
}

const TWO_PARAMS: &str = "PROGRAM Arity;
PROCEDURE pair(a : INTEGER; b : REAL);
BEGIN
END;
BEGIN
   CALLS
END.";

fn with_calls(calls: &str) -> String {
    TWO_PARAMS.replace("CALLS", calls)
}

#[test]
fn matching_argument_count_passes() {
    assert_eq!(analyze_source(&with_calls("pair(1, 2.5); Pair(3, 4)")), Ok(2));
}

#[test]
fn wrong_argument_count_fails() {
    for (call, found) in [("pair()", 0), ("pair(1)", 1), ("pair(1, 2, 3)", 3)] {
        let err = semantic_error(&with_calls(call));
        assert_eq!(err,
                   SemanticError::ArgumentCountMismatch { name: "pair".to_string(),
                                                          found,
                                                          expected: 2,
                                                          line: 6,
                                                          column: 4 });
    }

    let err = semantic_error(&with_calls("pair(1)"));
    assert_eq!(err.to_string(),
               "Error on line 6, column 4: Procedure 'pair' called with 1 arguments but takes 2.");
}

#[test]
fn arguments_are_checked() {
    assert!(matches!(semantic_error(&with_calls("pair(1, q)")),
                     SemanticError::UndeclaredIdentifier { ref name, .. } if name == "q"));
}

#[test]
fn calling_a_variable_fails() {
    let source = "PROGRAM NotCallable;
VAR v : INTEGER;
BEGIN
   v(1)
END.";
    assert_eq!(semantic_error(source),
               SemanticError::NotAProcedure { name:   "v".to_string(),
                                              line:   4,
                                              column: 4, });
}

#[test]
fn reading_a_procedure_fails() {
    let source = "PROGRAM NotReadable;
VAR v : INTEGER;
PROCEDURE p; BEGIN END;
BEGIN
   v := p + 1
END.";
    assert_eq!(semantic_error(source),
               SemanticError::NotAVariable { name:   "p".to_string(),
                                             line:   5,
                                             column: 9, });
}

#[test]
fn calling_an_undeclared_procedure_fails() {
    let source = "PROGRAM Missing; BEGIN nowhere() END.";
    assert!(matches!(semantic_error(source),
                     SemanticError::UndeclaredIdentifier { ref name, .. } if name == "nowhere"));
}

#[test]
fn later_siblings_are_not_yet_visible() {
    let source = "PROGRAM Order;
PROCEDURE first;
BEGIN
   second()
END;
PROCEDURE second;
BEGIN
END;
BEGIN
END.";
    assert_eq!(semantic_error(source),
               SemanticError::UndeclaredIdentifier { name:   "second".to_string(),
                                                     line:   4,
                                                     column: 4, });
}

#[test]
fn earlier_siblings_and_recursion_are_visible() {
    let source = "PROGRAM Order;
PROCEDURE first;
BEGIN
   first()
END;
PROCEDURE second;
BEGIN
   first()
END;
BEGIN
   second()
END.";
    assert_eq!(analyze_source(source), Ok(3));
}

#[test]
fn nested_procedures_see_enclosing_names() {
    let source = "PROGRAM Nesting;
VAR total : INTEGER;
PROCEDURE outer(n : INTEGER);
   PROCEDURE inner;
   BEGIN
      total := n;
      outer(n - 1)
   END;
BEGIN
   inner()
END;
BEGIN
   outer(3)
END.";
    assert_eq!(analyze_source(source), Ok(3));
}

#[test]
fn nested_procedures_are_invisible_outside() {
    let source = "PROGRAM Nesting;
PROCEDURE outer;
   PROCEDURE inner; BEGIN END;
BEGIN
END;
BEGIN
   inner()
END.";
    assert!(matches!(semantic_error(source),
                     SemanticError::UndeclaredIdentifier { ref name, .. } if name == "inner"));
}

#[test]
fn resolutions_link_calls_to_declarations() {
    let source = "PROGRAM Links;
PROCEDURE outer(a : INTEGER);
   PROCEDURE inner(b, c : INTEGER); BEGIN END;
BEGIN
   inner(a, a)
END;
BEGIN
   outer(1)
END.";
    let program = parse(source).unwrap();
    let resolutions = analyze(&program).unwrap();

    let mut bindings: Vec<_> = (0..8).filter_map(|id| resolutions.procedure(pasquale::ast::NodeId(id)))
                                     .map(|binding| {
                                         (binding.declaration.name.as_str(),
                                          binding.declaring_scope,
                                          binding.arity())
                                     })
                                     .collect();
    bindings.sort_unstable();
    assert_eq!(bindings, [("inner", 1, 2), ("outer", 0, 1)]);
}
