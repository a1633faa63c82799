use verilog_ast::{
    builder::Builder,
    list::NodeList,
    nodes::{
        Description, EdgeSymbol, LevelSymbol, NumberBase, PortDirection, UdpBodyKind,
        UdpBodyType, UdpInputSymbol, UdpNextState, UdpPortNames, UdpSequentialEntryPrefix,
    },
};

use crate::utils::{identifier_expression, identifiers, net_lvalue};

#[test]
fn test_udp_output_port() {
    let mut builder = Builder::new();
    let q = builder.new_identifier("q");
    let port = builder.new_udp_port(PortDirection::Output, q.clone(), None, true, None);
    assert_eq!(port.direction, PortDirection::Output);
    let UdpPortNames::Single {
        identifier, reg, ..
    } = &port.names
    else {
        panic!("expected a single output name");
    };
    assert!(*reg);
    assert_eq!(identifier.id, q.id);
}

#[test]
#[should_panic(expected = "must be built with new_udp_input_port")]
fn test_udp_port_rejects_input_direction() {
    let mut builder = Builder::new();
    let a = builder.new_identifier("a");
    builder.new_udp_port(PortDirection::Input, a, None, false, None);
}

#[test]
fn test_udp_input_port() {
    let mut builder = Builder::new();
    let names = identifiers(&mut builder, &["clk", "d"]);
    let port = builder.new_udp_input_port(names, None);
    assert_eq!(port.direction, PortDirection::Input);
    let UdpPortNames::Many(names) = &port.names else {
        panic!("expected an input name list");
    };
    let names: Vec<_> = names.iter().map(|id| id.name.clone()).collect();
    assert_eq!(names, vec!["clk", "d"]);
}

#[test]
fn test_combinatorial_udp() {
    let mut builder = Builder::new();
    let entry = builder.new_udp_combinatorial_entry(
        NodeList::from(vec![LevelSymbol::Zero, LevelSymbol::Question]),
        UdpNextState::Zero,
    );
    assert_eq!(entry.input_levels.count(), 2);
    assert_eq!(entry.output_symbol, UdpNextState::Zero);

    let body = builder.new_udp_combinatorial_body(NodeList::from(vec![entry.clone()]));
    assert_eq!(body.body_type(), UdpBodyType::Combinatorial);
    assert_eq!(builder.arena().find_parent_node(entry.id), Some(body.id));

    let name = builder.new_identifier("mux2");
    let output = builder.new_identifier("y");
    let output_port = builder.new_udp_port(PortDirection::Output, output, None, false, None);
    let inputs = identifiers(&mut builder, &["a", "b", "s"]);
    let input_port = builder.new_udp_input_port(inputs, None);
    let udp = builder.new_udp_declaration(
        None,
        name,
        NodeList::from(vec![output_port, input_port]),
        body,
    );
    assert_eq!(udp.body_type(), UdpBodyType::Combinatorial);
    assert_eq!(udp.ports.count(), 2);

    let source = builder.new_source_text(NodeList::from(vec![Description::Udp(udp.clone())]));
    assert!(source.modules().is_empty());
    assert_eq!(source.udps().len(), 1);
    let arena = builder.finish().unwrap();
    assert_eq!(arena.udps()[0].id, udp.id);
}

#[test]
fn test_sequential_udp() {
    let mut builder = Builder::new();
    let q = builder.new_identifier("q");
    let zero = builder.new_number(NumberBase::Binary, Some(1), false, "0");
    let initial = builder.new_udp_initial_statement(q, zero);
    assert_eq!(initial.output_port.name, "q");

    let levels = builder.new_udp_sequential_entry(
        UdpSequentialEntryPrefix::Levels,
        NodeList::from(vec![
            UdpInputSymbol::Level(LevelSymbol::One),
            UdpInputSymbol::Level(LevelSymbol::X),
        ]),
        LevelSymbol::Question,
        UdpNextState::One,
    );
    assert_eq!(levels.prefix(), UdpSequentialEntryPrefix::Levels);

    let edges = builder.new_udp_sequential_entry(
        UdpSequentialEntryPrefix::Edges,
        NodeList::from(vec![
            UdpInputSymbol::Transition(LevelSymbol::Zero, LevelSymbol::One),
            UdpInputSymbol::Edge(EdgeSymbol::Any),
        ]),
        LevelSymbol::Zero,
        UdpNextState::Unchanged,
    );
    assert_eq!(edges.prefix(), UdpSequentialEntryPrefix::Edges);
    assert_eq!(edges.output, UdpNextState::Unchanged);

    let body = builder.new_udp_sequential_body(
        Some(initial.clone()),
        NodeList::from(vec![levels, edges]),
    );
    assert_eq!(body.body_type(), UdpBodyType::Sequential);
    let UdpBodyKind::Sequential { initial: found, entries } = &body.kind else {
        panic!("expected a sequential body");
    };
    assert_eq!(found.as_ref().map(|i| i.id), Some(initial.id));
    assert_eq!(entries.count(), 2);
}

#[test]
fn test_udp_instantiation() {
    let mut builder = Builder::new();
    let instance_name = builder.new_identifier("u0");
    let output = net_lvalue(&mut builder, "y");
    let a = identifier_expression(&mut builder, "a");
    let b = identifier_expression(&mut builder, "b");
    let instance =
        builder.new_udp_instance(Some(instance_name), None, output, NodeList::from(vec![a, b]));
    assert_eq!(instance.inputs.count(), 2);
    assert!(instance.range.is_none());

    let udp_name = builder.new_identifier("mux2");
    let instantiation =
        builder.new_udp_instantiation(NodeList::from(vec![instance.clone()]), udp_name, None, None);
    assert_eq!(instantiation.identifier.name, "mux2");
    assert!(instantiation.delay.is_none());
    assert_eq!(builder.arena().find_parent_node(instance.id), Some(instantiation.id));
}
