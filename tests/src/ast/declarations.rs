use verilog_ast::{
    builder::Builder,
    list::NodeList,
    nodes::{
        ChargeStrength, DeclarationType, Description, ModuleItem, NetType, ParameterType,
        PortDirection, StatementData, TypeModifiers,
    },
};

use crate::utils::{constant_number, identifier_expression, identifiers, null_statement, var_lvalue};

#[test]
fn test_generic_parameter_keeps_range_and_sign() {
    let mut builder = Builder::new();
    let upper = constant_number(&mut builder, "3");
    let lower = constant_number(&mut builder, "0");
    let range = builder.new_range(upper, lower);
    let lval = var_lvalue(&mut builder, "DEPTH");
    let value = constant_number(&mut builder, "16");
    let assignment = builder.new_single_assignment(lval, value);

    let parameters = builder.new_parameter_declarations(
        NodeList::from(vec![assignment]),
        true,
        false,
        Some(range.clone()),
        ParameterType::Generic,
    );
    assert!(parameters.signed_values);
    assert!(!parameters.local);
    assert_eq!(parameters.range.as_ref().map(|r| r.id), Some(range.id));
    assert_eq!(builder.arena().find_parent_node(range.id), Some(parameters.id));
}

#[test]
fn test_typed_parameter_drops_range_and_sign() {
    let mut builder = Builder::new();
    let upper = constant_number(&mut builder, "7");
    let lower = constant_number(&mut builder, "0");
    let range = builder.new_range(upper, lower);
    let lval = var_lvalue(&mut builder, "DELAY");
    let value = constant_number(&mut builder, "2");
    let assignment = builder.new_single_assignment(lval, value);

    for parameter_type in [
        ParameterType::Integer,
        ParameterType::Real,
        ParameterType::Realtime,
        ParameterType::Time,
    ] {
        let parameters = builder.new_parameter_declarations(
            NodeList::from(vec![assignment.clone()]),
            true,
            true,
            Some(range.clone()),
            parameter_type,
        );
        assert_eq!(parameters.parameter_type, parameter_type);
        assert!(!parameters.signed_values);
        assert!(parameters.range.is_none());
        assert!(parameters.local);
    }
}

#[test]
fn test_port_declaration() {
    let mut builder = Builder::new();
    let upper = constant_number(&mut builder, "7");
    let lower = constant_number(&mut builder, "0");
    let range = builder.new_range(upper, lower);
    let names = identifiers(&mut builder, &["data", "addr"]);
    let port = builder.new_port_declaration(
        PortDirection::Output,
        NetType::None,
        true,
        true,
        false,
        Some(range),
        names,
    );
    assert_eq!(port.direction, PortDirection::Output);
    assert_eq!(port.net_type, NetType::None);
    assert!(port.net_signed);
    assert!(port.is_reg);
    assert!(!port.is_variable);
    assert!(port.range.is_some());
    assert_eq!(port.port_names.count(), 2);
}

#[test]
fn test_type_declaration_without_modifiers() {
    let mut builder = Builder::new();
    let names = identifiers(&mut builder, &["count"]);
    let declaration =
        builder.new_type_declaration(DeclarationType::Reg, names, TypeModifiers::default());
    assert_eq!(declaration.declaration_type, DeclarationType::Reg);
    assert!(declaration.delay.is_none());
    assert!(declaration.drive_strength.is_none());
    assert!(declaration.charge_strength.is_none());
    assert!(declaration.range.is_none());
    assert!(!declaration.vectored);
    assert!(!declaration.scalared);
    assert!(!declaration.is_signed);
    assert_eq!(declaration.net_type, NetType::None);
}

#[test]
fn test_type_declaration_with_modifiers() {
    let mut builder = Builder::new();
    let upper = constant_number(&mut builder, "15");
    let lower = constant_number(&mut builder, "0");
    let range = builder.new_range(upper, lower);
    let names = identifiers(&mut builder, &["bus"]);
    let modifiers = TypeModifiers::default()
        .with_range(range.clone())
        .with_net_type(NetType::Trireg)
        .with_charge_strength(ChargeStrength::Large)
        .signed();
    let declaration = builder.new_type_declaration(DeclarationType::Net, names, modifiers);
    assert_eq!(declaration.net_type, NetType::Trireg);
    assert_eq!(declaration.charge_strength, Some(ChargeStrength::Large));
    assert!(declaration.is_signed);
    assert_eq!(builder.arena().find_parent_node(range.id), Some(declaration.id));
}

#[test]
fn test_module_declaration() -> anyhow::Result<()> {
    let mut builder = Builder::new();
    let module_name = builder.new_identifier("counter");

    let lval = var_lvalue(&mut builder, "WIDTH");
    let value = constant_number(&mut builder, "8");
    let assignment = builder.new_single_assignment(lval, value);
    let parameters = builder.new_parameter_declarations(
        NodeList::from(vec![assignment]),
        false,
        false,
        None,
        ParameterType::Generic,
    );

    let port_names = identifiers(&mut builder, &["clk"]);
    let port = builder.new_port_declaration(
        PortDirection::Input,
        NetType::Wire,
        false,
        false,
        false,
        None,
        port_names,
    );

    let body = null_statement(&mut builder);
    let ready = identifier_expression(&mut builder, "ready");
    let wait = builder.new_wait_statement(ready, body);
    let initial = builder.new_statement(None, false, StatementData::Wait(wait));
    let module = builder.new_module_declaration(
        None,
        module_name,
        NodeList::from(vec![parameters.clone()]),
        NodeList::from(vec![port.clone()]),
        NodeList::from(vec![
            ModuleItem::Port(port.clone()),
            ModuleItem::Initial(initial),
        ]),
    );
    let source = builder.new_source_text(NodeList::from(vec![Description::Module(module.clone())]));
    let arena = builder.finish()?;

    assert_eq!(source.modules().len(), 1);
    assert_eq!(module.identifier.name, "counter");
    assert_eq!(module.parameters.count(), 1);
    assert_eq!(module.items.count(), 2);
    assert_eq!(arena.find_parent_node(parameters.id), Some(module.id));
    assert_eq!(arena.find_parent_node(module.id), Some(source.id));
    assert_eq!(arena.modules().len(), 1);
    Ok(())
}
