use tagvm_spec::{init_test_logging, ExecError, InstructionSpec, Kind, OpCode, Value};

#[test]
fn push_nil_then_ret_returns_nil() {
    init_test_logging();
    let spec = InstructionSpec::new(OpCode::AKind, |g| {
        g.push_nil();
        g.ret();
    });
    let value = spec.run().expect("run failed");
    assert!(value.is_nil());
}

#[test]
fn a_kind_returns_kind_of_nil() {
    init_test_logging();
    let spec = InstructionSpec::new(OpCode::AKind, |g| {
        g.push_nil();
        g.a_kind();
        g.ret();
    });
    let execution = spec.run_traced();
    assert_eq!(execution.result, Ok(Value::Kind(Kind::Nil)));

    // the inspected nil is still underneath when ret runs
    let ret = execution.trace.last().expect("empty trace");
    assert_eq!(ret.opcode, OpCode::Ret);
    assert_eq!(ret.depth_before, 2);
}

#[test]
fn a_kind_leaves_inspected_value_for_later_instructions() {
    init_test_logging();
    let spec = InstructionSpec::new(OpCode::AKind, |g| {
        g.push_int(40);
        g.a_kind();
        g.pop();
        g.ret();
    });
    assert_eq!(spec.run(), Ok(Value::Integer(40)));
}

#[test]
fn a_kind_reports_each_kind() {
    init_test_logging();
    let cases: [(fn(&mut tagvm_spec::SequenceBuilder), Kind); 4] = [
        (|g| { g.push_true(); }, Kind::True),
        (|g| { g.push_false(); }, Kind::False),
        (|g| { g.push_int(-1); }, Kind::Integer),
        (|g| { g.push_nil().a_kind(); }, Kind::Kind),
    ];

    for (push, expected) in cases {
        let spec = InstructionSpec::new(OpCode::AKind, |g| {
            push(g);
            g.a_kind();
            g.ret();
        });
        assert_eq!(spec.run(), Ok(Value::Kind(expected)));
    }
}

#[test]
fn a_kind_on_empty_stack_underflows() {
    init_test_logging();
    let spec = InstructionSpec::new(OpCode::AKind, |g| {
        g.a_kind();
        g.ret();
    });
    assert_eq!(
        spec.run(),
        Err(ExecError::StackUnderflow { ip: 0, opcode: OpCode::AKind })
    );
}
