use verilog_ast::{
    builder::Builder,
    list::NodeList,
    nodes::{
        Expression, ExpressionType, LvalueType, Node, NumberBase, Operator, PrimaryValue,
        PrimaryValueType,
    },
};

use crate::utils::{constant_number, expression_name, identifier_expression};

#[test]
fn test_identifier_display() {
    let mut builder = Builder::new();
    let identifier = builder.new_identifier("data_in");
    assert_eq!(identifier.to_string(), "data_in");
}

#[test]
fn test_number_fields() {
    let mut builder = Builder::new();
    let number = builder.new_number(NumberBase::Hex, Some(8), true, "ff");
    assert_eq!(number.base, NumberBase::Hex);
    assert_eq!(number.size, Some(8));
    assert!(number.is_signed);
    assert_eq!(number.digits, "ff");
}

#[test]
fn test_primary_expression_constant_follows_primary() {
    let mut builder = Builder::new();
    let constant = constant_number(&mut builder, "4");
    let plain = identifier_expression(&mut builder, "a");
    assert!(constant.is_constant());
    assert!(!plain.is_constant());
    assert_eq!(constant.expression_type(), ExpressionType::Primary);

    let parameter = builder.new_identifier("WIDTH");
    let primary = builder.new_constant_primary(PrimaryValue::Identifier(parameter));
    let constant_identifier = builder.new_expression_primary(primary);
    assert!(constant_identifier.is_constant());

    let number = builder.new_number(NumberBase::Decimal, None, false, "7");
    let primary = builder.new_primary(PrimaryValue::Number(number));
    let plain_literal = builder.new_expression_primary(primary);
    assert!(!plain_literal.is_constant());
    assert_eq!(plain_literal.expression_type(), ExpressionType::Primary);
}

#[test]
fn test_module_path_primary_is_not_constant() {
    let mut builder = Builder::new();
    let identifier = builder.new_identifier("top");
    let primary = builder.new_module_path_primary(PrimaryValue::Identifier(identifier));
    assert!(!primary.is_constant());
    let expression = builder.new_expression_primary(primary);
    assert!(!expression.is_constant());
}

#[test]
fn test_unary_expression() {
    let mut builder = Builder::new();
    let operand = identifier_expression(&mut builder, "bus");
    let operand_id = operand.id();
    let expression = builder.new_unary_expression(operand, Operator::ReductionNand, None, false);
    let Expression::Unary(unary) = &expression else {
        panic!("expected a unary expression");
    };
    assert_eq!(unary.operation, Operator::ReductionNand);
    assert_eq!(unary.operand.id(), operand_id);
    assert!(unary.attributes.is_none());
    assert_eq!(expression.expression_type(), ExpressionType::Unary);
    assert!(!expression.is_constant());
}

#[test]
fn test_binary_expression_with_attributes() {
    let mut builder = Builder::new();
    let left = constant_number(&mut builder, "1");
    let right = constant_number(&mut builder, "2");
    let attribute_name = builder.new_identifier("keep");
    let attribute = builder.new_attribute(attribute_name, None);
    let attributes = builder.new_attribute_list(attribute);
    let expression = builder.new_binary_expression(
        left,
        right,
        Operator::Shl,
        Some(attributes.clone()),
        true,
    );
    let Expression::Binary(binary) = &expression else {
        panic!("expected a binary expression");
    };
    assert_eq!(binary.operation, Operator::Shl);
    assert!(expression.is_constant());
    assert_eq!(
        builder.arena().find_parent_node(attributes.id),
        Some(expression.id())
    );
}

#[test]
fn test_string_expression_is_constant() {
    let mut builder = Builder::new();
    let expression = builder.new_string_expression("hello");
    assert_eq!(expression.expression_type(), ExpressionType::String);
    assert!(expression.is_constant());
    let Expression::String(string) = expression else {
        panic!("expected a string expression");
    };
    assert_eq!(string.value, "hello");
}

#[test]
fn test_range_index_and_conditional_are_not_constant() {
    let mut builder = Builder::new();
    let upper = constant_number(&mut builder, "7");
    let lower = constant_number(&mut builder, "0");
    let range = builder.new_range_expression(upper, lower);
    assert_eq!(range.expression_type(), ExpressionType::RangeUpDown);
    assert!(!range.is_constant());

    let bit = constant_number(&mut builder, "3");
    let index = builder.new_index_expression(bit);
    assert_eq!(index.expression_type(), ExpressionType::RangeIndex);
    assert!(!index.is_constant());

    let condition = identifier_expression(&mut builder, "sel");
    let if_true = identifier_expression(&mut builder, "a");
    let if_false = identifier_expression(&mut builder, "b");
    let conditional = builder.new_conditional_expression(condition, if_true, if_false, None);
    assert_eq!(conditional.expression_type(), ExpressionType::Conditional);
    assert!(!conditional.is_constant());
    let Expression::Conditional(conditional) = conditional else {
        panic!("expected a conditional expression");
    };
    assert_eq!(expression_name(&conditional.if_true).as_deref(), Some("a"));
    assert_eq!(expression_name(&conditional.if_false).as_deref(), Some("b"));
}

#[test]
fn test_mintypmax_with_typical_only() {
    let mut builder = Builder::new();
    let typ = constant_number(&mut builder, "5");
    let expression = builder.new_mintypmax_expression(None, typ, None);
    let Expression::MinTypMax(mintypmax) = &expression else {
        panic!("expected a min:typ:max expression");
    };
    assert!(mintypmax.min.is_none());
    assert!(mintypmax.max.is_none());
    assert_eq!(expression.expression_type(), ExpressionType::MinTypMax);
}

#[test]
fn test_mintypmax_with_all_values() {
    let mut builder = Builder::new();
    let min = constant_number(&mut builder, "1");
    let typ = constant_number(&mut builder, "2");
    let max = constant_number(&mut builder, "3");
    let max_id = max.id();
    let expression = builder.new_mintypmax_expression(Some(min), typ, Some(max));
    let Expression::MinTypMax(mintypmax) = &expression else {
        panic!("expected a min:typ:max expression");
    };
    assert_eq!(mintypmax.max.as_ref().map(Node::id), Some(max_id));
}

#[test]
fn test_function_call_without_arguments_has_empty_list() {
    let mut builder = Builder::new();
    let name = builder.new_identifier("$time");
    let call = builder.new_function_call(name, false, true, None, None);
    assert!(call.system);
    assert!(!call.constant);
    assert!(call.arguments.is_empty());
}

#[test]
fn test_function_call_arguments_in_order() {
    let mut builder = Builder::new();
    let name = builder.new_identifier("max");
    let a = identifier_expression(&mut builder, "a");
    let b = identifier_expression(&mut builder, "b");
    let call = builder.new_function_call(name, true, false, None, Some(NodeList::from(vec![a, b])));
    let names: Vec<_> = call.arguments.iter().filter_map(expression_name).collect();
    assert_eq!(names, vec!["a", "b"]);

    let primary = builder.new_primary_function_call(call.clone());
    assert_eq!(primary.value_type(), PrimaryValueType::FunctionCall);
    assert_eq!(builder.arena().find_parent_node(call.id), Some(primary.id));
}

#[test]
fn test_attribute_list_extension_restores_source_order() {
    let mut builder = Builder::new();
    let mut attributes = Vec::new();
    for name in ["full_case", "parallel_case", "keep"] {
        let identifier = builder.new_identifier(name);
        attributes.push(builder.new_attribute(identifier, None));
    }
    let list = builder.new_attribute_list(attributes[2].clone());
    builder.extend_attribute_list(&list, attributes[1].clone());
    builder.extend_attribute_list(&list, attributes[0].clone());

    let names: Vec<String> = list
        .entries()
        .iter()
        .map(|attribute| attribute.name.name.clone())
        .collect();
    assert_eq!(names, vec!["full_case", "parallel_case", "keep"]);
    assert_eq!(
        builder.arena().find_parent_node(attributes[0].id),
        Some(list.id)
    );

    let node = builder.new_attribute_node(list.clone());
    assert_eq!(builder.arena().find_parent_node(list.id), Some(node.id));
}

#[test]
fn test_attribute_with_value() {
    let mut builder = Builder::new();
    let name = builder.new_identifier("weight");
    let value = constant_number(&mut builder, "3");
    let attribute = builder.new_attribute(name, Some(value));
    assert!(attribute.value.as_ref().is_some_and(Expression::is_constant));
}

#[test]
fn test_lvalue_identifier_kinds() {
    let mut builder = Builder::new();
    for kind in [
        LvalueType::NetIdentifier,
        LvalueType::VarIdentifier,
        LvalueType::GenvarIdentifier,
    ] {
        let identifier = builder.new_identifier("i");
        let lvalue = builder.new_lvalue_id(kind, identifier.clone());
        assert_eq!(lvalue.lvalue_type(), kind);
        assert_eq!(lvalue.identifier().map(|id| id.id), Some(identifier.id));
        assert!(lvalue.concatenation().is_none());
    }
}

#[test]
#[should_panic(expected = "new_lvalue_id expects an identifier lvalue kind")]
fn test_lvalue_id_rejects_concatenation_kind() {
    let mut builder = Builder::new();
    let identifier = builder.new_identifier("q");
    builder.new_lvalue_id(LvalueType::NetConcatenation, identifier);
}

#[test]
fn test_range_node() {
    let mut builder = Builder::new();
    let upper = constant_number(&mut builder, "31");
    let lower = constant_number(&mut builder, "0");
    let range = builder.new_range(upper, lower);
    assert!(range.upper.is_constant());
    assert_eq!(builder.arena().find_parent_node(range.lower.id()), Some(range.id));
}
