//! Node factory driven by a Verilog parser.
//!
//! The parser calls one `new_*` method per grammar reduction, bottom-up,
//! threading the returned handles into later calls until it reaches a
//! [`SourceText`] or [`ModuleDeclaration`] root. Every call:
//!
//! - asserts the grammar-level preconditions documented on the method,
//! - takes a fresh id from the [`Arena`] and records the new node there,
//! - links the children it was given to the new node's id,
//! - returns the only handle to the node that the caller needs.
//!
//! # Error Handling
//!
//! Two classes of failure exist:
//!
//! - Passing a discriminant to a constructor that does not accept it (for
//!   instance [`Builder::new_lvalue_id`] with a concatenation kind) is a bug in
//!   the calling grammar action. It panics, see the `# Panics` sections.
//! - Running out of ledger space is not a bug. The node is still returned with
//!   id 0 so the parser can carry on, the failure is recorded, and
//!   [`Builder::finish`] hands it to the driver as [`AstError::BuildFailed`].
//!
//! # List order
//!
//! The grammar is left-recursive, so list elements that extend an existing
//! concatenation or attribute list arrive in reverse. The matching `extend_*`
//! methods prepend, which leaves the finished list in source order. If-else
//! chains are different: [`Builder::extend_if_else`] receives batches that are
//! already ordered and appends them.
//!
//! # Example
//!
//! ```
//! use verilog_ast::builder::Builder;
//! use verilog_ast::nodes::{LvalueType, PrimaryValue};
//!
//! let mut builder = Builder::new();
//! let q = builder.new_identifier("q");
//! let d = builder.new_identifier("d");
//! let lval = builder.new_lvalue_id(LvalueType::VarIdentifier, q);
//! let primary = builder.new_primary(PrimaryValue::Identifier(d));
//! let rhs = builder.new_expression_primary(primary);
//! let assign = builder.new_nonblocking_assignment(lval, rhs, None);
//! let arena = builder.finish().unwrap();
//! assert_eq!(arena.find_node(assign.id).map(|n| n.kind_name()), Some("Assignment"));
//! ```

use std::rc::Rc;

use tracing::{debug, error, warn};

use crate::{
    arena::{Arena, ArenaConfig},
    errors::AstError,
    list::NodeList,
    nodes::{
        Assignment, AssignmentKind, AstNode, Attribute, AttributeList, AttributeNode, BinaryExpression,
        BlockDeclaration, BlockType, CaseItem, CaseStatement, CaseType, ChargeStrength,
        CmosSwitchInstance, Concatenation, ConcatenationItem, ConcatenationType,
        ConditionalExpression, ConditionalStatement, ContinuousAssignment, DeclarationType,
        Delay2, Delay3, DelayControlKind, DelayCtrl, DelayValue, DelayValueKind, Description,
        DisableStatement, DriveStrength, Edge, EdgeSensitiveFullPathDeclaration,
        EdgeSensitiveParallelPathDeclaration, EnableGateInstance, EnableGateInstances,
        EnableGateType, EventControl, EventControlType, EventExpression, EventKind, Expression,
        FunctionCall, GateInstantiation, GateInstantiationKind, GenerateBlock, HybridAssignment,
        HybridAssignmentType, HybridTarget, Identifier, IdentifierNode, IfElse, IndexExpression,
        LevelSymbol, LoopKind, LoopStatement, Lvalue, LvalueTarget, LvalueType,
        MinTypMaxExpression, ModuleDeclaration, ModuleInstance, ModuleInstantiation, ModuleItem,
        MosSwitchInstance, NInputGateInstance, NInputGateInstances, NInputGateType,
        NOutputGateInstance, NOutputGateInstances, NOutputGateType, NetType, Node, Number,
        NumberBase, Operator, ParameterDeclarations, ParameterType, PassEnableSwitch,
        PassEnableSwitchType, PassEnableSwitches, PassSwitchInstance, PathCondition,
        PathDeclaration, PathDescriptor, Polarity, PortConnection, PortDeclaration, PortDirection,
        Primary, PrimaryExpression, PrimaryType, PrimaryValue, PrimitivePullStrength,
        PrimitiveStrength, ProceduralAssignment, PullDirection, PullGateInstance,
        PullGateInstances, Range, RangeExpression, SimpleFullPathDeclaration,
        SimpleParallelPathDeclaration, SingleAssignment, SourceText, Statement, StatementBlock,
        StatementData, StringExpression, SwitchDelay, SwitchGate, SwitchInstance, SwitchType,
        Switches, TaskEnableStatement, TimingControl, TimingControlStatement, TimingControlType,
        TypeDeclaration, TypeModifiers, UdpBody, UdpBodyKind, UdpCombinatorialEntry,
        UdpDeclaration, UdpInitialStatement, UdpInputSymbol, UdpInstance, UdpInstantiation,
        UdpNextState, UdpPort, UdpPortNames, UdpSequentialEntry, UdpSequentialEntryPrefix,
        UdpSequentialInputs, UnaryExpression, WaitStatement,
    },
};

pub struct Builder {
    arena: Arena,
    errors: Vec<AstError>,
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl Builder {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    #[must_use]
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            arena: Arena::with_config(config),
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Allocation failures recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[AstError] {
        &self.errors
    }

    /// Hands the finished arena to the driver.
    ///
    /// # Errors
    ///
    /// Returns [`AstError::BuildFailed`] carrying every recorded allocation
    /// failure if any node could not be recorded.
    pub fn finish(self) -> Result<Arena, AstError> {
        if !self.errors.is_empty() {
            for err in &self.errors {
                error!("AST Builder Error: {err}");
            }
            return Err(AstError::BuildFailed {
                errors: self.errors,
            });
        }
        debug!(nodes = self.arena.len(), "AST building finished");
        Ok(self.arena)
    }

    /// Releases every node built so far and forgets recorded failures.
    ///
    /// Handles from the released tree stay readable, but passing one to a later
    /// constructor or `extend_*` call panics.
    pub fn release_all(&mut self) {
        self.arena.release_all();
        self.errors.clear();
    }

    fn alloc(&mut self) -> u32 {
        match self.arena.allocate() {
            Ok(id) => id,
            Err(err) => {
                warn!("node allocation failed: {err}");
                self.errors.push(err);
                0
            }
        }
    }

    fn record<T>(&mut self, node: T) -> Rc<T>
    where
        T: Node,
        Rc<T>: Into<AstNode>,
    {
        let node = Rc::new(node);
        if node.id() != 0 {
            self.arena.insert(node.clone().into());
        }
        node
    }

    fn assert_live(&self, operation: &str, id: u32) {
        assert!(
            !self.arena.is_released(id),
            "{operation} was handed node {id} from a released tree"
        );
    }

    fn adopt<N: Node + ?Sized>(&mut self, parent_id: u32, child: &N) {
        self.arena.set_parent(child.id(), parent_id);
    }

    fn adopt_opt<N: Node>(&mut self, parent_id: u32, child: Option<&N>) {
        if let Some(child) = child {
            self.adopt(parent_id, child);
        }
    }

    fn adopt_all<'a, N: Node + 'a>(
        &mut self,
        parent_id: u32,
        children: impl IntoIterator<Item = &'a N>,
    ) {
        for child in children {
            self.adopt(parent_id, child);
        }
    }

    // Identifiers and attributes

    pub fn new_identifier(&mut self, name: impl Into<String>) -> Rc<Identifier> {
        let id = self.alloc();
        self.record(Identifier {
            id,
            name: name.into(),
        })
    }

    /// Wraps a single identifier in a tree node of its own.
    pub fn new_identifier_node(&mut self, identifier: Rc<Identifier>) -> Rc<IdentifierNode> {
        let id = self.alloc();
        self.adopt(id, &identifier);
        self.record(IdentifierNode { id, identifier })
    }

    /// A single `name = value` attribute from an `(* ... *)` instance.
    pub fn new_attribute(
        &mut self,
        name: Rc<Identifier>,
        value: Option<Expression>,
    ) -> Rc<Attribute> {
        let id = self.alloc();
        self.adopt(id, &name);
        self.adopt_opt(id, value.as_ref());
        self.record(Attribute { id, name, value })
    }

    pub fn new_attribute_list(&mut self, first: Rc<Attribute>) -> Rc<AttributeList> {
        let id = self.alloc();
        self.adopt(id, &first);
        let mut attributes = NodeList::new();
        attributes.append(first);
        self.record(AttributeList {
            id,
            attributes: attributes.into(),
        })
    }

    /// Adds an attribute reduced after the ones already in `list`.
    ///
    /// Prepends, so repeated left-recursive extension ends in source order.
    ///
    /// # Panics
    ///
    /// Panics if `list` or `attribute` was built before the last release.
    pub fn extend_attribute_list(&mut self, list: &Rc<AttributeList>, attribute: Rc<Attribute>) {
        self.assert_live("extend_attribute_list", list.id);
        self.adopt(list.id, &attribute);
        list.attributes.borrow_mut().prepend(attribute);
    }

    pub fn new_attribute_node(&mut self, attributes: Rc<AttributeList>) -> Rc<AttributeNode> {
        let id = self.alloc();
        self.adopt(id, &attributes);
        self.record(AttributeNode { id, attributes })
    }

    // Literals and ranges

    pub fn new_number(
        &mut self,
        base: NumberBase,
        size: Option<u32>,
        is_signed: bool,
        digits: impl Into<String>,
    ) -> Rc<Number> {
        let id = self.alloc();
        self.record(Number {
            id,
            base,
            size,
            is_signed,
            digits: digits.into(),
        })
    }

    /// `[upper:lower]` on a declaration or instance array.
    pub fn new_range(&mut self, upper: Expression, lower: Expression) -> Rc<Range> {
        let id = self.alloc();
        self.adopt(id, &upper);
        self.adopt(id, &lower);
        self.record(Range { id, upper, lower })
    }

    // Lvalues

    /// An lvalue naming a single net, variable or genvar.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is not one of the identifier kinds.
    pub fn new_lvalue_id(&mut self, kind: LvalueType, identifier: Rc<Identifier>) -> Rc<Lvalue> {
        assert!(
            kind.is_identifier(),
            "new_lvalue_id expects an identifier lvalue kind, got {kind:?}"
        );
        let id = self.alloc();
        self.adopt(id, &identifier);
        let target = match kind {
            LvalueType::NetIdentifier => LvalueTarget::NetIdentifier(identifier),
            LvalueType::VarIdentifier => LvalueTarget::VarIdentifier(identifier),
            LvalueType::GenvarIdentifier => LvalueTarget::GenvarIdentifier(identifier),
            LvalueType::NetConcatenation | LvalueType::VarConcatenation => {
                unreachable!("concatenation kinds are rejected above")
            }
        };
        self.record(Lvalue { id, target })
    }

    /// An lvalue that is a concatenation of nets or variables.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is not one of the concatenation kinds.
    pub fn new_lvalue_concat(
        &mut self,
        kind: LvalueType,
        concatenation: Rc<Concatenation>,
    ) -> Rc<Lvalue> {
        assert!(
            kind.is_concatenation(),
            "new_lvalue_concat expects a concatenation lvalue kind, got {kind:?}"
        );
        let id = self.alloc();
        self.adopt(id, &concatenation);
        let target = match kind {
            LvalueType::NetConcatenation => LvalueTarget::NetConcatenation(concatenation),
            LvalueType::VarConcatenation => LvalueTarget::VarConcatenation(concatenation),
            LvalueType::NetIdentifier
            | LvalueType::VarIdentifier
            | LvalueType::GenvarIdentifier => unreachable!("identifier kinds are rejected above"),
        };
        self.record(Lvalue { id, target })
    }

    // Primaries and expressions

    /// A primary inside a constant expression tree.
    pub fn new_constant_primary(&mut self, value: PrimaryValue) -> Rc<Primary> {
        self.primary(PrimaryType::Constant, value)
    }

    pub fn new_primary(&mut self, value: PrimaryValue) -> Rc<Primary> {
        self.primary(PrimaryType::Primary, value)
    }

    pub fn new_module_path_primary(&mut self, value: PrimaryValue) -> Rc<Primary> {
        self.primary(PrimaryType::ModulePath, value)
    }

    pub fn new_primary_function_call(&mut self, call: Rc<FunctionCall>) -> Rc<Primary> {
        self.primary(PrimaryType::Primary, PrimaryValue::FunctionCall(call))
    }

    fn primary(&mut self, primary_type: PrimaryType, value: PrimaryValue) -> Rc<Primary> {
        let id = self.alloc();
        self.adopt(id, &value);
        self.record(Primary {
            id,
            primary_type,
            value,
        })
    }

    /// Wraps a primary so it can sit in an expression tree.
    ///
    /// The expression is constant exactly when the primary is a constant primary.
    pub fn new_expression_primary(&mut self, primary: Rc<Primary>) -> Expression {
        let id = self.alloc();
        self.adopt(id, &primary);
        let constant = primary.is_constant();
        Expression::Primary(self.record(PrimaryExpression {
            id,
            primary,
            constant,
        }))
    }

    pub fn new_unary_expression(
        &mut self,
        operand: Expression,
        operation: Operator,
        attributes: Option<Rc<AttributeList>>,
        constant: bool,
    ) -> Expression {
        debug_assert!(operation.is_unary(), "{operation:?} is not a unary operator");
        let id = self.alloc();
        self.adopt(id, &operand);
        self.adopt_opt(id, attributes.as_ref());
        Expression::Unary(self.record(UnaryExpression {
            id,
            operation,
            operand,
            attributes,
            constant,
        }))
    }

    pub fn new_binary_expression(
        &mut self,
        left: Expression,
        right: Expression,
        operation: Operator,
        attributes: Option<Rc<AttributeList>>,
        constant: bool,
    ) -> Expression {
        debug_assert!(operation.is_binary(), "{operation:?} is not a binary operator");
        let id = self.alloc();
        self.adopt(id, &left);
        self.adopt(id, &right);
        self.adopt_opt(id, attributes.as_ref());
        Expression::Binary(self.record(BinaryExpression {
            id,
            left,
            right,
            operation,
            attributes,
            constant,
        }))
    }

    /// `[left:right]` part select.
    pub fn new_range_expression(&mut self, left: Expression, right: Expression) -> Expression {
        let id = self.alloc();
        self.adopt(id, &left);
        self.adopt(id, &right);
        Expression::Range(self.record(RangeExpression { id, left, right }))
    }

    /// `[index]` bit select.
    pub fn new_index_expression(&mut self, index: Expression) -> Expression {
        let id = self.alloc();
        self.adopt(id, &index);
        Expression::Index(self.record(IndexExpression { id, index }))
    }

    pub fn new_string_expression(&mut self, value: impl Into<String>) -> Expression {
        let id = self.alloc();
        Expression::String(self.record(StringExpression {
            id,
            value: value.into(),
        }))
    }

    /// `condition ? if_true : if_false`.
    pub fn new_conditional_expression(
        &mut self,
        condition: Expression,
        if_true: Expression,
        if_false: Expression,
        attributes: Option<Rc<AttributeList>>,
    ) -> Expression {
        let id = self.alloc();
        self.adopt(id, &condition);
        self.adopt(id, &if_true);
        self.adopt(id, &if_false);
        self.adopt_opt(id, attributes.as_ref());
        Expression::Conditional(self.record(ConditionalExpression {
            id,
            condition,
            if_true,
            if_false,
            attributes,
        }))
    }

    /// `min:typ:max`. Pass `None` for both bounds when only a typical value is written.
    pub fn new_mintypmax_expression(
        &mut self,
        min: Option<Expression>,
        typ: Expression,
        max: Option<Expression>,
    ) -> Expression {
        let id = self.alloc();
        self.adopt_opt(id, min.as_ref());
        self.adopt(id, &typ);
        self.adopt_opt(id, max.as_ref());
        Expression::MinTypMax(self.record(MinTypMaxExpression { id, min, typ, max }))
    }

    /// A user or system (`$name`) function call.
    ///
    /// A call without arguments gets an empty argument list.
    pub fn new_function_call(
        &mut self,
        function: Rc<Identifier>,
        constant: bool,
        system: bool,
        attributes: Option<Rc<AttributeList>>,
        arguments: Option<NodeList<Expression>>,
    ) -> Rc<FunctionCall> {
        let id = self.alloc();
        let arguments = arguments.unwrap_or_default();
        self.adopt(id, &function);
        self.adopt_opt(id, attributes.as_ref());
        self.adopt_all(id, &arguments);
        self.record(FunctionCall {
            id,
            function,
            constant,
            system,
            attributes,
            arguments,
        })
    }

    // Concatenations

    pub fn new_concatenation(
        &mut self,
        concatenation_type: ConcatenationType,
        repeat: Option<Expression>,
        first_value: ConcatenationItem,
    ) -> Rc<Concatenation> {
        let id = self.alloc();
        self.adopt_opt(id, repeat.as_ref());
        self.adopt(id, &first_value);
        let mut items = NodeList::new();
        items.append(first_value);
        self.record(Concatenation {
            id,
            concatenation_type,
            repeat,
            items: items.into(),
        })
    }

    pub fn new_empty_concatenation(
        &mut self,
        concatenation_type: ConcatenationType,
    ) -> Rc<Concatenation> {
        let id = self.alloc();
        self.record(Concatenation {
            id,
            concatenation_type,
            repeat: None,
            items: NodeList::new().into(),
        })
    }

    /// Adds an element reduced after the ones already in `concatenation`.
    ///
    /// Prepends, so repeated left-recursive extension ends in source order.
    ///
    /// # Panics
    ///
    /// Panics if `concatenation` or `item` was built before the last release.
    pub fn extend_concatenation(
        &mut self,
        concatenation: &Rc<Concatenation>,
        item: ConcatenationItem,
    ) {
        self.assert_live("extend_concatenation", concatenation.id);
        self.adopt(concatenation.id, &item);
        concatenation.items.borrow_mut().prepend(item);
    }

    // Path declarations

    pub fn new_path_declaration(
        &mut self,
        condition: PathCondition,
        path: PathDescriptor,
    ) -> Rc<PathDeclaration> {
        let id = self.alloc();
        if let PathCondition::If(state_expression) = &condition {
            self.adopt(id, state_expression);
        }
        self.adopt(id, &path);
        self.record(PathDeclaration {
            id,
            condition,
            path,
        })
    }

    /// `(a => b) = delay;`
    pub fn new_simple_parallel_path_declaration(
        &mut self,
        input_terminal: Rc<Identifier>,
        polarity: Option<Polarity>,
        output_terminal: Rc<Identifier>,
        delay_value: NodeList<Expression>,
    ) -> Rc<SimpleParallelPathDeclaration> {
        let id = self.alloc();
        self.adopt(id, &input_terminal);
        self.adopt(id, &output_terminal);
        self.adopt_all(id, &delay_value);
        self.record(SimpleParallelPathDeclaration {
            id,
            input_terminal,
            polarity,
            output_terminal,
            delay_value,
        })
    }

    /// `(a, b *> c, d) = delay;`
    pub fn new_simple_full_path_declaration(
        &mut self,
        input_terminals: NodeList<Rc<Identifier>>,
        polarity: Option<Polarity>,
        output_terminals: NodeList<Rc<Identifier>>,
        delay_value: NodeList<Expression>,
    ) -> Rc<SimpleFullPathDeclaration> {
        let id = self.alloc();
        self.adopt_all(id, &input_terminals);
        self.adopt_all(id, &output_terminals);
        self.adopt_all(id, &delay_value);
        self.record(SimpleFullPathDeclaration {
            id,
            input_terminals,
            polarity,
            output_terminals,
            delay_value,
        })
    }

    /// `(posedge clk => (q +: d)) = delay;`
    pub fn new_edge_sensitive_parallel_path_declaration(
        &mut self,
        edge: Edge,
        input_terminal: Rc<Identifier>,
        polarity: Option<Polarity>,
        output_terminal: Rc<Identifier>,
        data_source: Expression,
        delay_value: NodeList<Expression>,
    ) -> Rc<EdgeSensitiveParallelPathDeclaration> {
        let id = self.alloc();
        self.adopt(id, &input_terminal);
        self.adopt(id, &output_terminal);
        self.adopt(id, &data_source);
        self.adopt_all(id, &delay_value);
        self.record(EdgeSensitiveParallelPathDeclaration {
            id,
            edge,
            input_terminal,
            polarity,
            output_terminal,
            data_source,
            delay_value,
        })
    }

    pub fn new_edge_sensitive_full_path_declaration(
        &mut self,
        edge: Edge,
        input_terminals: NodeList<Rc<Identifier>>,
        polarity: Option<Polarity>,
        output_terminals: NodeList<Rc<Identifier>>,
        data_source: Expression,
        delay_value: NodeList<Expression>,
    ) -> Rc<EdgeSensitiveFullPathDeclaration> {
        let id = self.alloc();
        self.adopt_all(id, &input_terminals);
        self.adopt_all(id, &output_terminals);
        self.adopt(id, &data_source);
        self.adopt_all(id, &delay_value);
        self.record(EdgeSensitiveFullPathDeclaration {
            id,
            edge,
            input_terminals,
            polarity,
            output_terminals,
            data_source,
            delay_value,
        })
    }

    // Procedural statements

    pub fn new_task_enable_statement(
        &mut self,
        expressions: NodeList<Expression>,
        identifier: Rc<Identifier>,
        is_system: bool,
    ) -> Rc<TaskEnableStatement> {
        let id = self.alloc();
        self.adopt(id, &identifier);
        self.adopt_all(id, &expressions);
        self.record(TaskEnableStatement {
            id,
            identifier,
            expressions,
            is_system,
        })
    }

    pub fn new_forever_loop_statement(&mut self, body: Rc<Statement>) -> Rc<LoopStatement> {
        self.loop_statement(LoopKind::Forever, body)
    }

    /// `for (initial; condition; modify) body`
    pub fn new_for_loop_statement(
        &mut self,
        body: Rc<Statement>,
        initial: Rc<SingleAssignment>,
        modify: Rc<SingleAssignment>,
        condition: Expression,
    ) -> Rc<LoopStatement> {
        self.loop_statement(
            LoopKind::For {
                initial,
                condition,
                modify,
            },
            body,
        )
    }

    pub fn new_while_loop_statement(
        &mut self,
        body: Rc<Statement>,
        condition: Expression,
    ) -> Rc<LoopStatement> {
        self.loop_statement(LoopKind::While { condition }, body)
    }

    pub fn new_repeat_loop_statement(
        &mut self,
        body: Rc<Statement>,
        count: Expression,
    ) -> Rc<LoopStatement> {
        self.loop_statement(LoopKind::Repeat { count }, body)
    }

    fn loop_statement(&mut self, kind: LoopKind, body: Rc<Statement>) -> Rc<LoopStatement> {
        let id = self.alloc();
        match &kind {
            LoopKind::Forever => {}
            LoopKind::For {
                initial,
                condition,
                modify,
            } => {
                self.adopt(id, initial);
                self.adopt(id, condition);
                self.adopt(id, modify);
            }
            LoopKind::While { condition } => self.adopt(id, condition),
            LoopKind::Repeat { count } => self.adopt(id, count),
        }
        self.adopt(id, &body);
        self.record(LoopStatement { id, kind, body })
    }

    /// A case item executed when any of `conditions` matches.
    pub fn new_case_item(
        &mut self,
        conditions: NodeList<Expression>,
        body: Option<Rc<Statement>>,
    ) -> Rc<CaseItem> {
        self.case_item(conditions, body, false)
    }

    /// The `default:` item of a case statement.
    pub fn new_default_case_item(&mut self, body: Option<Rc<Statement>>) -> Rc<CaseItem> {
        self.case_item(NodeList::new(), body, true)
    }

    fn case_item(
        &mut self,
        conditions: NodeList<Expression>,
        body: Option<Rc<Statement>>,
        is_default: bool,
    ) -> Rc<CaseItem> {
        let id = self.alloc();
        self.adopt_all(id, &conditions);
        self.adopt_opt(id, body.as_ref());
        self.record(CaseItem {
            id,
            conditions,
            body,
            is_default,
        })
    }

    /// A `case`, `casex` or `casez` statement.
    ///
    /// The first item flagged default, scanning from the front, is cached as
    /// the default item. Later default items stay in `cases` but are not cached.
    pub fn new_case_statement(
        &mut self,
        expression: Expression,
        cases: NodeList<Rc<CaseItem>>,
        case_type: CaseType,
    ) -> Rc<CaseStatement> {
        self.case_statement(expression, cases, case_type, false)
    }

    /// A case statement inside a function body.
    pub fn new_function_case_statement(
        &mut self,
        expression: Expression,
        cases: NodeList<Rc<CaseItem>>,
        case_type: CaseType,
    ) -> Rc<CaseStatement> {
        self.case_statement(expression, cases, case_type, true)
    }

    fn case_statement(
        &mut self,
        expression: Expression,
        cases: NodeList<Rc<CaseItem>>,
        case_type: CaseType,
        is_function: bool,
    ) -> Rc<CaseStatement> {
        let id = self.alloc();
        self.adopt(id, &expression);
        self.adopt_all(id, &cases);
        let default_item = cases.iter().find(|item| item.is_default).cloned();
        self.record(CaseStatement {
            id,
            expression,
            cases,
            case_type,
            is_function,
            default_item,
        })
    }

    /// One `if (condition) statement` branch.
    pub fn new_conditional_statement(
        &mut self,
        statement: Rc<Statement>,
        condition: Expression,
    ) -> Rc<ConditionalStatement> {
        let id = self.alloc();
        self.adopt(id, &condition);
        self.adopt(id, &statement);
        self.record(ConditionalStatement {
            id,
            condition,
            statement,
        })
    }

    /// Starts an if / else-if chain with its first branch.
    ///
    /// `else_statement` runs when no branch matches and may be absent.
    pub fn new_if_else(
        &mut self,
        if_condition: Rc<ConditionalStatement>,
        else_statement: Option<Rc<Statement>>,
    ) -> Rc<IfElse> {
        let id = self.alloc();
        self.adopt(id, &if_condition);
        self.adopt_opt(id, else_statement.as_ref());
        let mut conditional_statements = NodeList::new();
        conditional_statements.append(if_condition);
        self.record(IfElse {
            id,
            conditional_statements: conditional_statements.into(),
            else_statement,
        })
    }

    /// Appends already-ordered `else if` branches after the existing ones.
    ///
    /// `None` leaves the chain untouched.
    ///
    /// # Panics
    ///
    /// Panics if `if_else` or one of the new branches was built before the last
    /// release.
    pub fn extend_if_else(
        &mut self,
        if_else: &Rc<IfElse>,
        new_statements: Option<NodeList<Rc<ConditionalStatement>>>,
    ) {
        self.assert_live("extend_if_else", if_else.id);
        if let Some(new_statements) = new_statements {
            self.adopt_all(if_else.id, &new_statements);
            if_else
                .conditional_statements
                .borrow_mut()
                .concat(new_statements);
        }
    }

    pub fn new_wait_statement(
        &mut self,
        wait_for: Expression,
        statement: Rc<Statement>,
    ) -> Rc<WaitStatement> {
        let id = self.alloc();
        self.adopt(id, &wait_for);
        self.adopt(id, &statement);
        self.record(WaitStatement {
            id,
            expression: wait_for,
            statement,
        })
    }

    /// An event watching `expression` on `trigger_edge`.
    ///
    /// `Edge::Positive` and `Edge::Negative` give posedge and negedge events,
    /// `Edge::Any` a plain expression event.
    ///
    /// # Panics
    ///
    /// Panics if `trigger_edge` is `Edge::None`.
    pub fn new_event_expression(
        &mut self,
        trigger_edge: Edge,
        expression: Expression,
    ) -> Rc<EventExpression> {
        assert!(
            trigger_edge != Edge::None,
            "new_event_expression requires a trigger edge, got Edge::None"
        );
        let id = self.alloc();
        self.adopt(id, &expression);
        let kind = match trigger_edge {
            Edge::Positive => EventKind::Posedge(expression),
            Edge::Negative => EventKind::Negedge(expression),
            Edge::Any => EventKind::Expression(expression),
            Edge::None => unreachable!("Edge::None is rejected above"),
        };
        self.record(EventExpression { id, kind })
    }

    /// `left or right` / `left, right`. The sequence holds `right` then `left`.
    pub fn new_event_expression_sequence(
        &mut self,
        left: Rc<EventExpression>,
        right: Rc<EventExpression>,
    ) -> Rc<EventExpression> {
        let id = self.alloc();
        self.adopt(id, &right);
        self.adopt(id, &left);
        let mut sequence = NodeList::new();
        sequence.append(right);
        sequence.append(left);
        self.record(EventExpression {
            id,
            kind: EventKind::Sequence(sequence),
        })
    }

    /// # Panics
    ///
    /// Panics if `control_type` is `EventControlType::Any` and an expression is given.
    pub fn new_event_control(
        &mut self,
        control_type: EventControlType,
        expression: Option<Rc<EventExpression>>,
    ) -> Rc<EventControl> {
        assert!(
            control_type != EventControlType::Any || expression.is_none(),
            "an implicit `@*` event control cannot carry an event expression"
        );
        let id = self.alloc();
        self.adopt_opt(id, expression.as_ref());
        self.record(EventControl {
            id,
            control_type,
            expression,
        })
    }

    pub fn new_delay_value(&mut self, value: DelayValueKind) -> Rc<DelayValue> {
        let id = self.alloc();
        self.adopt(id, &value);
        self.record(DelayValue { id, value })
    }

    pub fn new_delay2(
        &mut self,
        min: Option<Rc<DelayValue>>,
        max: Option<Rc<DelayValue>>,
    ) -> Rc<Delay2> {
        let id = self.alloc();
        self.adopt_opt(id, min.as_ref());
        self.adopt_opt(id, max.as_ref());
        self.record(Delay2 { id, min, max })
    }

    pub fn new_delay3(
        &mut self,
        min: Option<Rc<DelayValue>>,
        avg: Option<Rc<DelayValue>>,
        max: Option<Rc<DelayValue>>,
    ) -> Rc<Delay3> {
        let id = self.alloc();
        self.adopt_opt(id, min.as_ref());
        self.adopt_opt(id, avg.as_ref());
        self.adopt_opt(id, max.as_ref());
        self.record(Delay3 { id, min, avg, max })
    }

    /// `#value`
    pub fn new_delay_ctrl_value(&mut self, value: Rc<DelayValue>) -> Rc<DelayCtrl> {
        self.delay_ctrl(DelayControlKind::Value(value))
    }

    /// `#(mintypmax)`
    pub fn new_delay_ctrl_mintypmax(&mut self, mintypmax: Expression) -> Rc<DelayCtrl> {
        self.delay_ctrl(DelayControlKind::MinTypMax(mintypmax))
    }

    fn delay_ctrl(&mut self, kind: DelayControlKind) -> Rc<DelayCtrl> {
        let id = self.alloc();
        self.adopt(id, &kind);
        self.record(DelayCtrl { id, kind })
    }

    /// A statement guarded by a delay control.
    ///
    /// # Panics
    ///
    /// Panics if `timing_type` is not `TimingControlType::DelayControl`.
    pub fn new_timing_control_statement_delay(
        &mut self,
        timing_type: TimingControlType,
        statement: Option<Rc<Statement>>,
        delay_ctrl: Rc<DelayCtrl>,
    ) -> Rc<TimingControlStatement> {
        assert!(
            timing_type == TimingControlType::DelayControl,
            "new_timing_control_statement_delay expects DelayControl, got {timing_type:?}"
        );
        self.timing_control_statement(
            timing_type,
            TimingControl::Delay(delay_ctrl),
            None,
            statement,
        )
    }

    /// A statement guarded by an event control, optionally under `repeat (n)`.
    ///
    /// # Panics
    ///
    /// Panics if `timing_type` is not one of the event control kinds.
    pub fn new_timing_control_statement_event(
        &mut self,
        timing_type: TimingControlType,
        repeat: Option<Expression>,
        statement: Option<Rc<Statement>>,
        event_ctrl: Rc<EventControl>,
    ) -> Rc<TimingControlStatement> {
        assert!(
            timing_type.is_event_control(),
            "new_timing_control_statement_event expects an event control kind, got {timing_type:?}"
        );
        self.timing_control_statement(
            timing_type,
            TimingControl::Event(event_ctrl),
            repeat,
            statement,
        )
    }

    fn timing_control_statement(
        &mut self,
        timing_type: TimingControlType,
        control: TimingControl,
        repeat: Option<Expression>,
        statement: Option<Rc<Statement>>,
    ) -> Rc<TimingControlStatement> {
        let id = self.alloc();
        self.adopt(id, &control);
        self.adopt_opt(id, repeat.as_ref());
        self.adopt_opt(id, statement.as_ref());
        self.record(TimingControlStatement {
            id,
            timing_type,
            control,
            repeat,
            statement,
        })
    }

    // Assignments

    pub fn new_single_assignment(
        &mut self,
        lval: Rc<Lvalue>,
        expression: Expression,
    ) -> Rc<SingleAssignment> {
        let id = self.alloc();
        self.adopt(id, &lval);
        self.adopt(id, &expression);
        self.record(SingleAssignment {
            id,
            lval,
            expression,
        })
    }

    /// `assign` or `force` with a full assignment.
    pub fn new_hybrid_assignment(
        &mut self,
        hybrid_type: HybridAssignmentType,
        assignment: Rc<SingleAssignment>,
    ) -> Rc<Assignment> {
        self.hybrid_assignment(hybrid_type, HybridTarget::Assignment(assignment))
    }

    /// `deassign` or `release` of an lvalue.
    pub fn new_hybrid_lval_assignment(
        &mut self,
        hybrid_type: HybridAssignmentType,
        lval: Rc<Lvalue>,
    ) -> Rc<Assignment> {
        self.hybrid_assignment(hybrid_type, HybridTarget::Lvalue(lval))
    }

    fn hybrid_assignment(
        &mut self,
        hybrid_type: HybridAssignmentType,
        target: HybridTarget,
    ) -> Rc<Assignment> {
        let id = self.alloc();
        self.adopt(id, &target);
        self.record(Assignment {
            id,
            kind: AssignmentKind::Hybrid(HybridAssignment {
                hybrid_type,
                target,
            }),
        })
    }

    /// `lval = [delay_or_event] expression`
    pub fn new_blocking_assignment(
        &mut self,
        lval: Rc<Lvalue>,
        expression: Expression,
        delay_or_event: Option<Rc<TimingControlStatement>>,
    ) -> Rc<Assignment> {
        let procedural = self.procedural_assignment(lval, expression, delay_or_event);
        self.record(Assignment {
            id: procedural.0,
            kind: AssignmentKind::Blocking(procedural.1),
        })
    }

    /// `lval <= [delay_or_event] expression`
    pub fn new_nonblocking_assignment(
        &mut self,
        lval: Rc<Lvalue>,
        expression: Expression,
        delay_or_event: Option<Rc<TimingControlStatement>>,
    ) -> Rc<Assignment> {
        let procedural = self.procedural_assignment(lval, expression, delay_or_event);
        self.record(Assignment {
            id: procedural.0,
            kind: AssignmentKind::Nonblocking(procedural.1),
        })
    }

    fn procedural_assignment(
        &mut self,
        lval: Rc<Lvalue>,
        expression: Expression,
        delay_or_event: Option<Rc<TimingControlStatement>>,
    ) -> (u32, ProceduralAssignment) {
        let id = self.alloc();
        self.adopt(id, &lval);
        self.adopt(id, &expression);
        self.adopt_opt(id, delay_or_event.as_ref());
        (
            id,
            ProceduralAssignment {
                lval,
                expression,
                delay_or_event,
            },
        )
    }

    /// `assign [strength] [delay] a = b, c = d;`
    pub fn new_continuous_assignment(
        &mut self,
        assignments: NodeList<Rc<SingleAssignment>>,
        drive_strength: Option<Rc<DriveStrength>>,
        delay: Option<Rc<Delay3>>,
    ) -> Rc<Assignment> {
        let id = self.alloc();
        self.adopt_all(id, &assignments);
        self.adopt_opt(id, drive_strength.as_ref());
        self.adopt_opt(id, delay.as_ref());
        self.record(Assignment {
            id,
            kind: AssignmentKind::Continuous(ContinuousAssignment {
                assignments,
                drive_strength,
                delay,
            }),
        })
    }

    // Blocks and generic statements

    /// A `begin ... end` or `fork ... join` block.
    pub fn new_statement_block(
        &mut self,
        block_type: BlockType,
        identifier: Option<Rc<Identifier>>,
        declarations: NodeList<BlockDeclaration>,
        statements: NodeList<Rc<Statement>>,
    ) -> Rc<StatementBlock> {
        let id = self.alloc();
        self.adopt_opt(id, identifier.as_ref());
        self.adopt_all(id, &declarations);
        self.adopt_all(id, &statements);
        self.record(StatementBlock {
            id,
            block_type,
            identifier,
            declarations,
            statements,
        })
    }

    pub fn new_disable_statement(&mut self, identifier: Rc<Identifier>) -> Rc<DisableStatement> {
        let id = self.alloc();
        self.adopt(id, &identifier);
        self.record(DisableStatement { id, identifier })
    }

    pub fn new_statement(
        &mut self,
        attributes: Option<Rc<AttributeList>>,
        is_function_statement: bool,
        data: StatementData,
    ) -> Rc<Statement> {
        self.statement(attributes, is_function_statement, false, Some(data))
    }

    /// The empty statement `;`.
    pub fn new_null_statement(&mut self, attributes: Option<Rc<AttributeList>>) -> Rc<Statement> {
        self.statement(attributes, false, false, None)
    }

    fn statement(
        &mut self,
        attributes: Option<Rc<AttributeList>>,
        is_function_statement: bool,
        is_generate_statement: bool,
        data: Option<StatementData>,
    ) -> Rc<Statement> {
        let id = self.alloc();
        self.adopt_opt(id, attributes.as_ref());
        self.adopt_opt(id, data.as_ref());
        self.record(Statement {
            id,
            attributes,
            is_function_statement,
            is_generate_statement,
            data,
        })
    }

    // User defined primitives

    /// The output (or `output reg`) port of a UDP.
    ///
    /// # Panics
    ///
    /// Panics if `direction` is `PortDirection::Input`; input ports are built
    /// with [`Builder::new_udp_input_port`].
    pub fn new_udp_port(
        &mut self,
        direction: PortDirection,
        identifier: Rc<Identifier>,
        attributes: Option<Rc<AttributeList>>,
        reg: bool,
        default_value: Option<Expression>,
    ) -> Rc<UdpPort> {
        assert!(
            !direction.is_input(),
            "UDP input ports must be built with new_udp_input_port"
        );
        let id = self.alloc();
        self.adopt(id, &identifier);
        self.adopt_opt(id, attributes.as_ref());
        self.adopt_opt(id, default_value.as_ref());
        self.record(UdpPort {
            id,
            direction,
            attributes,
            names: UdpPortNames::Single {
                identifier,
                reg,
                default_value,
            },
        })
    }

    pub fn new_udp_input_port(
        &mut self,
        identifiers: NodeList<Rc<Identifier>>,
        attributes: Option<Rc<AttributeList>>,
    ) -> Rc<UdpPort> {
        let id = self.alloc();
        self.adopt_all(id, &identifiers);
        self.adopt_opt(id, attributes.as_ref());
        self.record(UdpPort {
            id,
            direction: PortDirection::Input,
            attributes,
            names: UdpPortNames::Many(identifiers),
        })
    }

    pub fn new_udp_declaration(
        &mut self,
        attributes: Option<Rc<AttributeList>>,
        identifier: Rc<Identifier>,
        ports: NodeList<Rc<UdpPort>>,
        body: Rc<UdpBody>,
    ) -> Rc<UdpDeclaration> {
        let id = self.alloc();
        self.adopt_opt(id, attributes.as_ref());
        self.adopt(id, &identifier);
        self.adopt_all(id, &ports);
        self.adopt(id, &body);
        self.record(UdpDeclaration {
            id,
            attributes,
            identifier,
            ports,
            body,
        })
    }

    pub fn new_udp_instance(
        &mut self,
        identifier: Option<Rc<Identifier>>,
        range: Option<Rc<Range>>,
        output: Rc<Lvalue>,
        inputs: NodeList<Expression>,
    ) -> Rc<UdpInstance> {
        let id = self.alloc();
        self.adopt_opt(id, identifier.as_ref());
        self.adopt_opt(id, range.as_ref());
        self.adopt(id, &output);
        self.adopt_all(id, &inputs);
        self.record(UdpInstance {
            id,
            identifier,
            range,
            output,
            inputs,
        })
    }

    /// Instances of one UDP sharing strength and delay.
    pub fn new_udp_instantiation(
        &mut self,
        instances: NodeList<Rc<UdpInstance>>,
        identifier: Rc<Identifier>,
        drive_strength: Option<Rc<DriveStrength>>,
        delay: Option<Rc<Delay2>>,
    ) -> Rc<UdpInstantiation> {
        let id = self.alloc();
        self.adopt(id, &identifier);
        self.adopt_all(id, &instances);
        self.adopt_opt(id, drive_strength.as_ref());
        self.adopt_opt(id, delay.as_ref());
        self.record(UdpInstantiation {
            id,
            identifier,
            instances,
            drive_strength,
            delay,
        })
    }

    /// `initial q = 1'b0;` inside a sequential UDP.
    pub fn new_udp_initial_statement(
        &mut self,
        output_port: Rc<Identifier>,
        initial_value: Rc<Number>,
    ) -> Rc<UdpInitialStatement> {
        let id = self.alloc();
        self.adopt(id, &output_port);
        self.adopt(id, &initial_value);
        self.record(UdpInitialStatement {
            id,
            output_port,
            initial_value,
        })
    }

    pub fn new_udp_sequential_body(
        &mut self,
        initial: Option<Rc<UdpInitialStatement>>,
        entries: NodeList<Rc<UdpSequentialEntry>>,
    ) -> Rc<UdpBody> {
        let id = self.alloc();
        self.adopt_opt(id, initial.as_ref());
        self.adopt_all(id, &entries);
        self.record(UdpBody {
            id,
            kind: UdpBodyKind::Sequential { initial, entries },
        })
    }

    pub fn new_udp_combinatorial_body(
        &mut self,
        entries: NodeList<Rc<UdpCombinatorialEntry>>,
    ) -> Rc<UdpBody> {
        let id = self.alloc();
        self.adopt_all(id, &entries);
        self.record(UdpBody {
            id,
            kind: UdpBodyKind::Combinatorial(entries),
        })
    }

    pub fn new_udp_combinatorial_entry(
        &mut self,
        input_levels: NodeList<LevelSymbol>,
        output_symbol: UdpNextState,
    ) -> Rc<UdpCombinatorialEntry> {
        let id = self.alloc();
        self.record(UdpCombinatorialEntry {
            id,
            input_levels,
            output_symbol,
        })
    }

    /// A row of a sequential UDP table. `prefix` says whether the input
    /// columns are plain levels or contain an edge.
    pub fn new_udp_sequential_entry(
        &mut self,
        prefix: UdpSequentialEntryPrefix,
        levels_or_edges: NodeList<UdpInputSymbol>,
        current_state: LevelSymbol,
        output: UdpNextState,
    ) -> Rc<UdpSequentialEntry> {
        let id = self.alloc();
        let inputs = match prefix {
            UdpSequentialEntryPrefix::Levels => UdpSequentialInputs::Levels(levels_or_edges),
            UdpSequentialEntryPrefix::Edges => UdpSequentialInputs::Edges(levels_or_edges),
        };
        self.record(UdpSequentialEntry {
            id,
            inputs,
            current_state,
            output,
        })
    }

    // Generate blocks and instantiation

    /// A statement that appears as an item of a generate region.
    pub fn new_generate_item(&mut self, construct: StatementData) -> Rc<Statement> {
        self.statement(None, false, true, Some(construct))
    }

    pub fn new_generate_block(
        &mut self,
        identifier: Option<Rc<Identifier>>,
        generate_items: NodeList<Rc<Statement>>,
    ) -> Rc<GenerateBlock> {
        let id = self.alloc();
        self.adopt_opt(id, identifier.as_ref());
        self.adopt_all(id, &generate_items);
        self.record(GenerateBlock {
            id,
            identifier,
            generate_items,
        })
    }

    /// Instances of one module sharing a parameter override list.
    pub fn new_module_instantiation(
        &mut self,
        module_identifier: Rc<Identifier>,
        module_parameters: NodeList<Rc<PortConnection>>,
        module_instances: NodeList<Rc<ModuleInstance>>,
    ) -> Rc<ModuleInstantiation> {
        let id = self.alloc();
        self.adopt(id, &module_identifier);
        self.adopt_all(id, &module_parameters);
        self.adopt_all(id, &module_instances);
        self.record(ModuleInstantiation {
            id,
            module_identifier,
            module_parameters,
            module_instances,
        })
    }

    pub fn new_module_instance(
        &mut self,
        instance_identifier: Rc<Identifier>,
        port_connections: NodeList<Rc<PortConnection>>,
    ) -> Rc<ModuleInstance> {
        let id = self.alloc();
        self.adopt(id, &instance_identifier);
        self.adopt_all(id, &port_connections);
        self.record(ModuleInstance {
            id,
            instance_identifier,
            port_connections,
        })
    }

    /// `.port_name(expression)`; an empty `.port_name()` has no expression.
    pub fn new_named_port_connection(
        &mut self,
        port_name: Rc<Identifier>,
        expression: Option<Expression>,
    ) -> Rc<PortConnection> {
        self.port_connection(Some(port_name), expression)
    }

    /// A positional connection; `None` leaves the port unconnected.
    pub fn new_ordered_port_connection(
        &mut self,
        expression: Option<Expression>,
    ) -> Rc<PortConnection> {
        self.port_connection(None, expression)
    }

    fn port_connection(
        &mut self,
        port_name: Option<Rc<Identifier>>,
        expression: Option<Expression>,
    ) -> Rc<PortConnection> {
        let id = self.alloc();
        self.adopt_opt(id, port_name.as_ref());
        self.adopt_opt(id, expression.as_ref());
        self.record(PortConnection {
            id,
            port_name,
            expression,
        })
    }

    // Gate and switch primitives

    /// A MOS or CMOS switch type with its three-value delay.
    ///
    /// # Panics
    ///
    /// Panics if `switch_type` is `tran` or `rtran`.
    pub fn new_switch_gate_d3(
        &mut self,
        switch_type: SwitchType,
        delay: Option<Rc<Delay3>>,
    ) -> Rc<SwitchGate> {
        assert!(
            !switch_type.takes_delay2(),
            "{switch_type:?} takes a delay2, use new_switch_gate_d2"
        );
        let id = self.alloc();
        self.adopt_opt(id, delay.as_ref());
        self.record(SwitchGate {
            id,
            switch_type,
            delay: SwitchDelay::Delay3(delay),
        })
    }

    /// A `tran` or `rtran` switch type with its two-value delay.
    ///
    /// # Panics
    ///
    /// Panics if `switch_type` is neither `tran` nor `rtran`.
    pub fn new_switch_gate_d2(
        &mut self,
        switch_type: SwitchType,
        delay: Option<Rc<Delay2>>,
    ) -> Rc<SwitchGate> {
        assert!(
            switch_type.takes_delay2(),
            "{switch_type:?} takes a delay3, use new_switch_gate_d3"
        );
        let id = self.alloc();
        self.adopt_opt(id, delay.as_ref());
        self.record(SwitchGate {
            id,
            switch_type,
            delay: SwitchDelay::Delay2(delay),
        })
    }

    pub fn new_switches(
        &mut self,
        switch_gate: Rc<SwitchGate>,
        switches: NodeList<SwitchInstance>,
    ) -> Rc<Switches> {
        let id = self.alloc();
        self.adopt(id, &switch_gate);
        self.adopt_all(id, &switches);
        self.record(Switches {
            id,
            switch_gate,
            switches,
        })
    }

    pub fn new_primitive_pull_strength(
        &mut self,
        direction: PullDirection,
        strength_1: PrimitiveStrength,
        strength_0: PrimitiveStrength,
    ) -> Rc<PrimitivePullStrength> {
        let id = self.alloc();
        self.record(PrimitivePullStrength {
            id,
            direction,
            strength_1,
            strength_0,
        })
    }

    /// `(strength1, strength0)` drive strength.
    pub fn new_drive_strength(
        &mut self,
        strength_1: PrimitiveStrength,
        strength_0: PrimitiveStrength,
    ) -> Rc<DriveStrength> {
        let id = self.alloc();
        self.record(DriveStrength {
            id,
            strength_1,
            strength_0,
        })
    }

    pub fn new_pull_gate_instance(
        &mut self,
        name: Option<Rc<Identifier>>,
        output_terminal: Rc<Lvalue>,
    ) -> Rc<PullGateInstance> {
        let id = self.alloc();
        self.adopt_opt(id, name.as_ref());
        self.adopt(id, &output_terminal);
        self.record(PullGateInstance {
            id,
            name,
            output_terminal,
        })
    }

    /// A `pullup` or `pulldown` gate instantiation.
    ///
    /// # Panics
    ///
    /// Panics if `direction` is `PullDirection::None`.
    pub fn new_pull_gate_instances(
        &mut self,
        direction: PullDirection,
        strength: Option<Rc<PrimitivePullStrength>>,
        instances: NodeList<Rc<PullGateInstance>>,
    ) -> Rc<PullGateInstances> {
        assert!(
            direction.gate_type().is_some(),
            "pull gates must pull up or down"
        );
        let id = self.alloc();
        self.adopt_opt(id, strength.as_ref());
        self.adopt_all(id, &instances);
        self.record(PullGateInstances {
            id,
            direction,
            strength,
            instances,
        })
    }

    pub fn new_pass_switch_instance(
        &mut self,
        name: Option<Rc<Identifier>>,
        terminal_1: Rc<Lvalue>,
        terminal_2: Rc<Lvalue>,
    ) -> Rc<PassSwitchInstance> {
        let id = self.alloc();
        self.adopt_opt(id, name.as_ref());
        self.adopt(id, &terminal_1);
        self.adopt(id, &terminal_2);
        self.record(PassSwitchInstance {
            id,
            name,
            terminal_1,
            terminal_2,
        })
    }

    /// One instance of an n-input gate, e.g. a three-input `nand`.
    pub fn new_n_input_gate_instance(
        &mut self,
        name: Option<Rc<Identifier>>,
        input_terminals: NodeList<Expression>,
        output_terminal: Rc<Lvalue>,
    ) -> Rc<NInputGateInstance> {
        let id = self.alloc();
        self.adopt_opt(id, name.as_ref());
        self.adopt_all(id, &input_terminals);
        self.adopt(id, &output_terminal);
        self.record(NInputGateInstance {
            id,
            name,
            input_terminals,
            output_terminal,
        })
    }

    pub fn new_enable_gate_instance(
        &mut self,
        name: Option<Rc<Identifier>>,
        output_terminal: Rc<Lvalue>,
        enable_terminal: Expression,
        input_terminal: Expression,
    ) -> Rc<EnableGateInstance> {
        let id = self.alloc();
        self.adopt_opt(id, name.as_ref());
        self.adopt(id, &output_terminal);
        self.adopt(id, &enable_terminal);
        self.adopt(id, &input_terminal);
        self.record(EnableGateInstance {
            id,
            name,
            output_terminal,
            enable_terminal,
            input_terminal,
        })
    }

    pub fn new_mos_switch_instance(
        &mut self,
        name: Option<Rc<Identifier>>,
        output_terminal: Rc<Lvalue>,
        enable_terminal: Expression,
        input_terminal: Expression,
    ) -> Rc<MosSwitchInstance> {
        let id = self.alloc();
        self.adopt_opt(id, name.as_ref());
        self.adopt(id, &output_terminal);
        self.adopt(id, &enable_terminal);
        self.adopt(id, &input_terminal);
        self.record(MosSwitchInstance {
            id,
            name,
            output_terminal,
            enable_terminal,
            input_terminal,
        })
    }

    pub fn new_cmos_switch_instance(
        &mut self,
        name: Option<Rc<Identifier>>,
        output_terminal: Rc<Lvalue>,
        ncontrol_terminal: Expression,
        pcontrol_terminal: Expression,
        input_terminal: Expression,
    ) -> Rc<CmosSwitchInstance> {
        let id = self.alloc();
        self.adopt_opt(id, name.as_ref());
        self.adopt(id, &output_terminal);
        self.adopt(id, &ncontrol_terminal);
        self.adopt(id, &pcontrol_terminal);
        self.adopt(id, &input_terminal);
        self.record(CmosSwitchInstance {
            id,
            name,
            output_terminal,
            ncontrol_terminal,
            pcontrol_terminal,
            input_terminal,
        })
    }

    pub fn new_pass_enable_switch(
        &mut self,
        name: Option<Rc<Identifier>>,
        terminal_1: Rc<Lvalue>,
        terminal_2: Rc<Lvalue>,
        enable: Expression,
    ) -> Rc<PassEnableSwitch> {
        let id = self.alloc();
        self.adopt_opt(id, name.as_ref());
        self.adopt(id, &terminal_1);
        self.adopt(id, &terminal_2);
        self.adopt(id, &enable);
        self.record(PassEnableSwitch {
            id,
            name,
            terminal_1,
            terminal_2,
            enable,
        })
    }

    pub fn new_pass_enable_switches(
        &mut self,
        switch_type: PassEnableSwitchType,
        delay: Option<Rc<Delay2>>,
        switches: NodeList<Rc<PassEnableSwitch>>,
    ) -> Rc<PassEnableSwitches> {
        let id = self.alloc();
        self.adopt_opt(id, delay.as_ref());
        self.adopt_all(id, &switches);
        self.record(PassEnableSwitches {
            id,
            switch_type,
            delay,
            switches,
        })
    }

    pub fn new_n_input_gate_instances(
        &mut self,
        gate_type: NInputGateType,
        delay: Option<Rc<Delay3>>,
        drive_strength: Option<Rc<DriveStrength>>,
        instances: NodeList<Rc<NInputGateInstance>>,
    ) -> Rc<NInputGateInstances> {
        let id = self.alloc();
        self.adopt_opt(id, delay.as_ref());
        self.adopt_opt(id, drive_strength.as_ref());
        self.adopt_all(id, &instances);
        self.record(NInputGateInstances {
            id,
            gate_type,
            delay,
            drive_strength,
            instances,
        })
    }

    pub fn new_enable_gate_instances(
        &mut self,
        gate_type: EnableGateType,
        delay: Option<Rc<Delay3>>,
        drive_strength: Option<Rc<DriveStrength>>,
        instances: NodeList<Rc<EnableGateInstance>>,
    ) -> Rc<EnableGateInstances> {
        let id = self.alloc();
        self.adopt_opt(id, delay.as_ref());
        self.adopt_opt(id, drive_strength.as_ref());
        self.adopt_all(id, &instances);
        self.record(EnableGateInstances {
            id,
            gate_type,
            delay,
            drive_strength,
            instances,
        })
    }

    /// One `buf` or `not` instance driving every lvalue in `outputs`.
    pub fn new_n_output_gate_instance(
        &mut self,
        name: Option<Rc<Identifier>>,
        outputs: NodeList<Rc<Lvalue>>,
        input: Expression,
    ) -> Rc<NOutputGateInstance> {
        let id = self.alloc();
        self.adopt_opt(id, name.as_ref());
        self.adopt_all(id, &outputs);
        self.adopt(id, &input);
        self.record(NOutputGateInstance {
            id,
            name,
            outputs,
            input,
        })
    }

    pub fn new_n_output_gate_instances(
        &mut self,
        gate_type: NOutputGateType,
        delay: Option<Rc<Delay2>>,
        drive_strength: Option<Rc<DriveStrength>>,
        instances: NodeList<Rc<NOutputGateInstance>>,
    ) -> Rc<NOutputGateInstances> {
        let id = self.alloc();
        self.adopt_opt(id, delay.as_ref());
        self.adopt_opt(id, drive_strength.as_ref());
        self.adopt_all(id, &instances);
        self.record(NOutputGateInstances {
            id,
            gate_type,
            delay,
            drive_strength,
            instances,
        })
    }

    pub fn new_gate_instantiation(&mut self, kind: GateInstantiationKind) -> Rc<GateInstantiation> {
        let id = self.alloc();
        self.adopt(id, &kind);
        self.record(GateInstantiation { id, kind })
    }

    // Declarations

    /// `parameter` / `localparam` declarations sharing a type.
    ///
    /// Only generic parameters keep `signed_values` and `range`; for integer,
    /// real, realtime and time parameters they are dropped.
    pub fn new_parameter_declarations(
        &mut self,
        assignments: NodeList<Rc<SingleAssignment>>,
        signed_values: bool,
        local: bool,
        range: Option<Rc<Range>>,
        parameter_type: ParameterType,
    ) -> Rc<ParameterDeclarations> {
        let (signed_values, range) = if parameter_type.is_generic() {
            (signed_values, range)
        } else {
            (false, None)
        };
        let id = self.alloc();
        self.adopt_all(id, &assignments);
        self.adopt_opt(id, range.as_ref());
        self.record(ParameterDeclarations {
            id,
            parameter_type,
            assignments,
            signed_values,
            local,
            range,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_port_declaration(
        &mut self,
        direction: PortDirection,
        net_type: NetType,
        net_signed: bool,
        is_reg: bool,
        is_variable: bool,
        range: Option<Rc<Range>>,
        port_names: NodeList<Rc<Identifier>>,
    ) -> Rc<PortDeclaration> {
        let id = self.alloc();
        self.adopt_opt(id, range.as_ref());
        self.adopt_all(id, &port_names);
        self.record(PortDeclaration {
            id,
            direction,
            net_type,
            net_signed,
            is_reg,
            is_variable,
            range,
            port_names,
        })
    }

    /// A net or variable declaration.
    ///
    /// Pass `TypeModifiers::default()` when the declaration has no optional
    /// modifiers.
    pub fn new_type_declaration(
        &mut self,
        declaration_type: DeclarationType,
        identifiers: NodeList<Rc<Identifier>>,
        modifiers: TypeModifiers,
    ) -> Rc<TypeDeclaration> {
        let TypeModifiers {
            delay,
            drive_strength,
            charge_strength,
            range,
            vectored,
            scalared,
            is_signed,
            net_type,
        } = modifiers;
        let id = self.alloc();
        self.adopt_all(id, &identifiers);
        self.adopt_opt(id, delay.as_ref());
        self.adopt_opt(id, drive_strength.as_ref());
        self.adopt_opt(id, range.as_ref());
        self.record(TypeDeclaration {
            id,
            declaration_type,
            identifiers,
            delay,
            drive_strength,
            charge_strength,
            range,
            vectored,
            scalared,
            is_signed,
            net_type,
        })
    }

    // Roots

    pub fn new_module_declaration(
        &mut self,
        attributes: Option<Rc<AttributeList>>,
        identifier: Rc<Identifier>,
        parameters: NodeList<Rc<ParameterDeclarations>>,
        ports: NodeList<Rc<PortDeclaration>>,
        items: NodeList<ModuleItem>,
    ) -> Rc<ModuleDeclaration> {
        let id = self.alloc();
        self.adopt_opt(id, attributes.as_ref());
        self.adopt(id, &identifier);
        self.adopt_all(id, &parameters);
        self.adopt_all(id, &ports);
        self.adopt_all(id, &items);
        self.record(ModuleDeclaration {
            id,
            attributes,
            identifier,
            parameters,
            ports,
            items,
        })
    }

    pub fn new_source_text(&mut self, descriptions: NodeList<Description>) -> Rc<SourceText> {
        let id = self.alloc();
        self.adopt_all(id, &descriptions);
        self.record(SourceText { id, descriptions })
    }
}

impl TypeModifiers {
    #[must_use]
    pub fn with_range(mut self, range: Rc<Range>) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub fn with_net_type(mut self, net_type: NetType) -> Self {
        self.net_type = net_type;
        self
    }

    #[must_use]
    pub fn with_charge_strength(mut self, charge_strength: ChargeStrength) -> Self {
        self.charge_strength = Some(charge_strength);
        self
    }

    #[must_use]
    pub fn signed(mut self) -> Self {
        self.is_signed = true;
        self
    }
}
