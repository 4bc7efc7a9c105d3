use tagvm_spec::{
    init_test_logging, EngineConfig, ErrorKind, ExecError, InstructionSpec, Kind, OpCode, Value,
};

#[test]
fn push_literals() {
    init_test_logging();
    let nil = InstructionSpec::new(OpCode::PushNil, |g| {
        g.push_nil();
        g.ret();
    });
    assert_eq!(nil.run().map(|v| v.kind()), Ok(Kind::Nil));

    let int = InstructionSpec::new(OpCode::PushInt, |g| {
        g.push_int(i64::MIN);
        g.ret();
    });
    assert_eq!(int.run(), Ok(Value::Integer(i64::MIN)));
}

#[test]
fn dup_copies_top() {
    init_test_logging();
    let spec = InstructionSpec::new(OpCode::Dup, |g| {
        g.push_false();
        g.dup();
        g.ret();
    });
    let execution = spec.run_traced();
    assert_eq!(execution.result, Ok(Value::Bool(false)));
    assert_eq!(execution.trace.depths(), vec![1, 2, 1]);
}

#[test]
fn pop_discards_top() {
    init_test_logging();
    let spec = InstructionSpec::new(OpCode::Pop, |g| {
        g.push_int(1);
        g.push_int(2);
        g.pop();
        g.ret();
    });
    assert_eq!(spec.run(), Ok(Value::Integer(1)));

    let empty = InstructionSpec::new(OpCode::Pop, |g| {
        g.pop();
    });
    assert_eq!(
        empty.run(),
        Err(ExecError::StackUnderflow { ip: 0, opcode: OpCode::Pop })
    );
}

#[test]
fn bounded_stack_overflows() {
    init_test_logging();
    let spec = InstructionSpec::new(OpCode::PushNil, |g| {
        g.push_nil();
        g.push_nil();
        g.push_nil();
        g.ret();
    })
    .with_config(EngineConfig::new().with_max_stack_depth(2));
    let err = spec.run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StackOverflow);
    assert_eq!(err.ip(), Some(2));
}
