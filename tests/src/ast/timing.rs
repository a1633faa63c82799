use verilog_ast::{
    builder::Builder,
    nodes::{
        DelayControlKind, DelayValueKind, Edge, EventControlType, EventKind, EventType,
        Node, NumberBase, StatementData, TimingControl, TimingControlType,
    },
};

use crate::utils::{
    constant_number, expression_name, identifier_expression, null_statement, var_lvalue,
};

#[test]
fn test_event_expression_edges() {
    let mut builder = Builder::new();
    let clk = identifier_expression(&mut builder, "clk");
    let clk_id = clk.id();
    let posedge = builder.new_event_expression(Edge::Positive, clk);
    assert_eq!(posedge.event_type(), EventType::Posedge);
    assert!(posedge.event_type().is_edge());
    assert_eq!(posedge.expression().map(Node::id), Some(clk_id));

    let rst = identifier_expression(&mut builder, "rst_n");
    let rst_id = rst.id();
    let negedge = builder.new_event_expression(Edge::Negative, rst);
    assert_eq!(negedge.event_type(), EventType::Negedge);
    assert_eq!(negedge.expression().map(Node::id), Some(rst_id));

    let data = identifier_expression(&mut builder, "data");
    let data_id = data.id();
    let level = builder.new_event_expression(Edge::Any, data);
    assert_eq!(level.event_type(), EventType::Expression);
    assert!(!level.event_type().is_edge());
    assert_eq!(level.expression().map(Node::id), Some(data_id));
    assert_eq!(
        level.expression().and_then(expression_name).as_deref(),
        Some("data")
    );
}

#[test]
#[should_panic(expected = "requires a trigger edge")]
fn test_event_expression_rejects_missing_edge() {
    let mut builder = Builder::new();
    let clk = identifier_expression(&mut builder, "clk");
    builder.new_event_expression(Edge::None, clk);
}

#[test]
fn test_event_sequence_holds_right_then_left() {
    let mut builder = Builder::new();
    let clk = identifier_expression(&mut builder, "clk");
    let left = builder.new_event_expression(Edge::Positive, clk);
    let rst = identifier_expression(&mut builder, "rst");
    let right = builder.new_event_expression(Edge::Negative, rst);

    let sequence = builder.new_event_expression_sequence(left.clone(), right.clone());
    assert_eq!(sequence.event_type(), EventType::Sequence);
    assert!(sequence.expression().is_none());
    let EventKind::Sequence(events) = &sequence.kind else {
        panic!("expected an event sequence");
    };
    let ids: Vec<u32> = events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![right.id, left.id]);
    assert_eq!(builder.arena().find_parent_node(left.id), Some(sequence.id));
}

#[test]
fn test_event_control_kinds() {
    let mut builder = Builder::new();
    let any = builder.new_event_control(EventControlType::Any, None);
    assert_eq!(any.control_type, EventControlType::Any);
    assert!(any.expression.is_none());

    let clk = identifier_expression(&mut builder, "clk");
    let event = builder.new_event_expression(Edge::Positive, clk);
    let control = builder.new_event_control(EventControlType::Expression, Some(event.clone()));
    assert_eq!(control.expression.as_ref().map(|e| e.id), Some(event.id));
}

#[test]
#[should_panic(expected = "cannot carry an event expression")]
fn test_implicit_event_control_rejects_expression() {
    let mut builder = Builder::new();
    let clk = identifier_expression(&mut builder, "clk");
    let event = builder.new_event_expression(Edge::Any, clk);
    builder.new_event_control(EventControlType::Any, Some(event));
}

#[test]
fn test_delays() {
    let mut builder = Builder::new();
    let number = builder.new_number(NumberBase::Decimal, None, false, "5");
    let rise = builder.new_delay_value(DelayValueKind::Number(number));
    let name = builder.new_identifier("tFALL");
    let fall = builder.new_delay_value(DelayValueKind::Parameter(name));

    let delay2 = builder.new_delay2(Some(rise.clone()), Some(fall.clone()));
    assert_eq!(delay2.min.as_ref().map(|d| d.id), Some(rise.id));
    assert_eq!(delay2.max.as_ref().map(|d| d.id), Some(fall.id));

    let delay3 = builder.new_delay3(Some(rise.clone()), None, None);
    assert!(delay3.avg.is_none());
    assert!(delay3.max.is_none());
    assert_eq!(builder.arena().find_parent_node(rise.id), Some(delay3.id));
}

#[test]
fn test_delay_controls() {
    let mut builder = Builder::new();
    let number = builder.new_number(NumberBase::Decimal, None, false, "10");
    let value = builder.new_delay_value(DelayValueKind::Number(number));
    let by_value = builder.new_delay_ctrl_value(value.clone());
    assert!(matches!(&by_value.kind, DelayControlKind::Value(v) if v.id == value.id));

    let typ = constant_number(&mut builder, "3");
    let mintypmax = builder.new_mintypmax_expression(None, typ, None);
    let by_mintypmax = builder.new_delay_ctrl_mintypmax(mintypmax);
    assert!(matches!(by_mintypmax.kind, DelayControlKind::MinTypMax(_)));
}

#[test]
fn test_delay_timing_control_statement() {
    let mut builder = Builder::new();
    let number = builder.new_number(NumberBase::Decimal, None, false, "1");
    let value = builder.new_delay_value(DelayValueKind::Number(number));
    let delay = builder.new_delay_ctrl_value(value);
    let body = null_statement(&mut builder);
    let timing = builder.new_timing_control_statement_delay(
        TimingControlType::DelayControl,
        Some(body),
        delay.clone(),
    );
    assert_eq!(timing.timing_type, TimingControlType::DelayControl);
    assert!(timing.repeat.is_none());
    assert!(matches!(&timing.control, TimingControl::Delay(d) if d.id == delay.id));
}

#[test]
#[should_panic(expected = "expects DelayControl")]
fn test_delay_timing_control_rejects_event_kind() {
    let mut builder = Builder::new();
    let number = builder.new_number(NumberBase::Decimal, None, false, "1");
    let value = builder.new_delay_value(DelayValueKind::Number(number));
    let delay = builder.new_delay_ctrl_value(value);
    builder.new_timing_control_statement_delay(TimingControlType::EventControl, None, delay);
}

#[test]
fn test_repeated_event_timing_control_statement() {
    let mut builder = Builder::new();
    let clk = identifier_expression(&mut builder, "clk");
    let event = builder.new_event_expression(Edge::Positive, clk);
    let control = builder.new_event_control(EventControlType::Expression, Some(event));
    let count = constant_number(&mut builder, "3");
    let timing = builder.new_timing_control_statement_event(
        TimingControlType::EventControlRepeat,
        Some(count),
        None,
        control.clone(),
    );
    assert!(timing.timing_type.is_event_control());
    assert!(timing.repeat.is_some());
    assert!(timing.statement.is_none());
    assert_eq!(builder.arena().find_parent_node(control.id), Some(timing.id));

    let lval = var_lvalue(&mut builder, "q");
    let value = identifier_expression(&mut builder, "d");
    let assignment = builder.new_nonblocking_assignment(lval, value, Some(timing.clone()));
    let statement = builder.new_statement(None, false, StatementData::Assignment(assignment));
    assert!(!statement.is_null());
    assert!(builder.arena().find_parent_node(timing.id).is_some());
}

#[test]
#[should_panic(expected = "expects an event control kind")]
fn test_event_timing_control_rejects_delay_kind() {
    let mut builder = Builder::new();
    let control = builder.new_event_control(EventControlType::Any, None);
    builder.new_timing_control_statement_event(
        TimingControlType::DelayControl,
        None,
        None,
        control,
    );
}
