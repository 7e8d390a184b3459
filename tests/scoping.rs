use pasquale::{
    analyze,
    error::{Error, RuntimeError},
    execute,
    interpreter::{
        evaluator::{
            core::{Config, EvalResult, FrameLookup},
            memory::{Bindings, Frame, Memory},
        },
        value::core::Value,
    },
    parse, run_with_config,
};

const TOP_FRAME: Config = Config { frame_lookup: FrameLookup::TopFrame };
const STATIC_CHAIN: Config = Config { frame_lookup: FrameLookup::StaticChain };

fn run_ok(source: &str, config: Config) -> Bindings {
    run_with_config(source, config).unwrap_or_else(|e| panic!("{e}\n{source}"))
}

fn run_err(source: &str, config: Config) -> RuntimeError {
    match run_with_config(source, config) {
        Err(Error::Runtime(e)) => e,
        Err(e) => panic!("failed before execution: {e}"),
        Ok(bindings) => panic!("expected a runtime error, got:\n{bindings}"),
    }
}

const READS_GLOBAL: &str = "PROGRAM Globals;
VAR g, r : INTEGER;
PROCEDURE Peek;
VAR local : INTEGER;
BEGIN
   local := g + 1;
   r := local
END;
BEGIN
   g := 41;
   Peek()
END.";

#[test]
fn top_frame_is_the_default() {
    assert_eq!(Config::default(), TOP_FRAME);
}

#[test]
fn top_frame_hides_enclosing_variables() {
    let err = run_err(READS_GLOBAL, TOP_FRAME);
    assert_eq!(err,
               RuntimeError::UnknownVariable { name:   "g".to_string(),
                                               line:   6,
                                               column: 13, });
    assert_eq!(err.to_string(),
               "Error on line 6, column 13: Variable 'g' has no value in the current frame.");
}

#[test]
fn static_chain_reads_and_writes_enclosing_variables() {
    let bindings = run_ok(READS_GLOBAL, STATIC_CHAIN);
    assert_eq!(bindings.get("g"), Some(Value::Integer(41)));
    assert_eq!(bindings.get("r"), Some(Value::Integer(42)));
    // Locals never reach the program frame.
    assert_eq!(bindings.get("local"), None);
}

const ASSIGNS_GLOBAL: &str = "PROGRAM Writes;
VAR total : INTEGER;
PROCEDURE Set(v : INTEGER);
BEGIN
   total := v
END;
BEGIN
   total := 1;
   Set(5)
END.";

#[test]
fn top_frame_keeps_assignments_local() {
    let bindings = run_ok(ASSIGNS_GLOBAL, TOP_FRAME);
    assert_eq!(bindings.get("total"), Some(Value::Integer(1)));
    assert_eq!(bindings.len(), 1);
}

#[test]
fn static_chain_assigns_through_to_the_declaring_frame() {
    let bindings = run_ok(ASSIGNS_GLOBAL, STATIC_CHAIN);
    assert_eq!(bindings.get("total"), Some(Value::Integer(5)));
}

#[test]
fn parameters_are_visible_in_both_modes() {
    let source = "PROGRAM Params;
VAR out : REAL;
PROCEDURE Scale(x : INTEGER; factor : REAL);
VAR tmp : REAL;
BEGIN
   tmp := x * factor
END;
BEGIN
   Scale(4, 2.5);
   out := 1
END.";
    for config in [TOP_FRAME, STATIC_CHAIN] {
        let bindings = run_ok(source, config);
        assert_eq!(bindings.get("out"), Some(Value::Integer(1)));
    }
}

const NESTED: &str = "PROGRAM Chain;
VAR total : INTEGER;
PROCEDURE Outer(n : INTEGER);
VAR k : INTEGER;
   PROCEDURE Inner(m : INTEGER);
   BEGIN
      total := total + m * k
   END;
BEGIN
   k := 2;
   Inner(n);
   Inner(n + 1)
END;
BEGIN
   total := 0;
   Outer(2)
END.";

#[test]
fn static_chain_follows_nested_procedures() {
    let bindings = run_ok(NESTED, STATIC_CHAIN);
    assert_eq!(bindings.get("total"), Some(Value::Integer(10)));
}

#[test]
fn top_frame_cannot_see_the_enclosing_procedure() {
    let err = run_err(NESTED, TOP_FRAME);
    assert!(matches!(err, RuntimeError::UnknownVariable { ref name, line: 7, .. } if name == "total"));
}

#[test]
fn static_links_skip_the_dynamic_caller() {
    let source = "PROGRAM Siblings;
VAR count : INTEGER;
PROCEDURE Bump(by : INTEGER);
BEGIN
   count := count + by
END;
PROCEDURE Twice(by : INTEGER);
VAR count : INTEGER;
BEGIN
   count := 100;
   Bump(by);
   Bump(by)
END;
BEGIN
   count := 1;
   Twice(3)
END.";
    // `Bump` is called from `Twice`, but its `count` is the program's.
    let bindings = run_ok(source, STATIC_CHAIN);
    assert_eq!(bindings.get("count"), Some(Value::Integer(7)));
}

#[test]
fn shadowing_leaves_the_outer_variable_alone() {
    let source = "PROGRAM Shadow;
VAR x : INTEGER;
PROCEDURE p;
VAR x : REAL;
BEGIN
   x := 2.5
END;
BEGIN
   x := 1;
   p()
END.";
    for config in [TOP_FRAME, STATIC_CHAIN] {
        let bindings = run_ok(source, config);
        assert_eq!(bindings.get("x"), Some(Value::Integer(1)));
    }
}

#[test]
fn arguments_are_evaluated_in_the_caller() {
    let source = "PROGRAM Caller;
VAR a : INTEGER;
PROCEDURE p(a : INTEGER);
BEGIN
   a := a * 10
END;
BEGIN
   a := 3;
   p(a + 1);
   a := a + 1
END.";
    for config in [TOP_FRAME, STATIC_CHAIN] {
        let bindings = run_ok(source, config);
        assert_eq!(bindings.get("a"), Some(Value::Integer(4)));
    }
}

#[test]
fn runtime_errors_inside_procedures_propagate() {
    let source = "PROGRAM Fails;
VAR a : INTEGER;
PROCEDURE p(d : INTEGER);
VAR q : INTEGER;
BEGIN
   q := 1 DIV d
END;
BEGIN
   a := 1;
   p(0);
   a := 2
END.";
    let err = run_err(source, TOP_FRAME);
    assert_eq!(err,
               RuntimeError::DivisionByZero { line:   6,
                                              column: 11, });
}

#[test]
fn mismatched_resolutions_are_an_internal_error() {
    let analyzed = parse("PROGRAM a; BEGIN END.").unwrap();
    let resolutions = analyze(&analyzed).unwrap();

    let executed = parse("PROGRAM b; PROCEDURE p; BEGIN END; BEGIN p() END.").unwrap();
    let err = execute(&executed, &resolutions, Config::default()).unwrap_err();
    assert!(matches!(err, RuntimeError::Internal { line: 1, column: 42, .. }));
}

fn fail_inside_frame(memory: &mut Memory) -> EvalResult<()> {
    let mut guard = memory.push_frame(Frame::new("p", 1, Some(0)));
    let top = guard.top_index();
    guard.frame_mut(top).variables.insert("d", Value::Integer(0));
    assert_eq!(guard.depth(), 2);
    Err(RuntimeError::DivisionByZero { line:   6,
                                       column: 11, })
}

#[test]
fn frames_are_popped_on_error_exits() {
    let mut memory = Memory::new("fails");
    memory.frame_mut(0).variables.insert("a", Value::Integer(1));

    let err = fail_inside_frame(&mut memory).unwrap_err();
    assert!(matches!(err, RuntimeError::DivisionByZero { .. }));

    assert_eq!(memory.depth(), 1);
    assert_eq!(memory.top_index(), 0);
    let bindings = memory.into_bindings();
    assert_eq!(bindings.get("a"), Some(Value::Integer(1)));
    assert_eq!(bindings.get("d"), None);
}
