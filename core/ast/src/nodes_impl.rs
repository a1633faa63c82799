use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use crate::nodes::{
    Assignment, AssignmentKind, AssignmentType, Attribute, AttributeList, CaseItem,
    CaseStatement, Concatenation, ConcatenationItem, ConditionalStatement, Description,
    EventExpression, EventKind, EventType, Expression, ExpressionType, GateInstantiation,
    GateInstantiationKind, GateType, Identifier, IfElse, LoopKind, LoopStatement, LoopType,
    Lvalue, LvalueTarget, LvalueType, ModuleDeclaration, PathCondition, PathDeclaration,
    PathDeclarationType, PathDescriptor, Primary, PrimaryType, PrimaryValue, PrimaryValueType,
    SourceText, Statement, StatementData, StatementType, UdpBody, UdpBodyKind, UdpBodyType,
    UdpDeclaration, UdpSequentialEntry, UdpSequentialEntryPrefix, UdpSequentialInputs,
};

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl AttributeList {
    /// Attributes in their current order.
    #[must_use]
    pub fn entries(&self) -> Vec<Rc<Attribute>> {
        self.attributes.borrow().iter().cloned().collect()
    }
}

impl Lvalue {
    #[must_use]
    pub fn lvalue_type(&self) -> LvalueType {
        match &self.target {
            LvalueTarget::NetIdentifier(_) => LvalueType::NetIdentifier,
            LvalueTarget::VarIdentifier(_) => LvalueType::VarIdentifier,
            LvalueTarget::GenvarIdentifier(_) => LvalueType::GenvarIdentifier,
            LvalueTarget::NetConcatenation(_) => LvalueType::NetConcatenation,
            LvalueTarget::VarConcatenation(_) => LvalueType::VarConcatenation,
        }
    }

    #[must_use]
    pub fn identifier(&self) -> Option<&Rc<Identifier>> {
        match &self.target {
            LvalueTarget::NetIdentifier(id)
            | LvalueTarget::VarIdentifier(id)
            | LvalueTarget::GenvarIdentifier(id) => Some(id),
            LvalueTarget::NetConcatenation(_) | LvalueTarget::VarConcatenation(_) => None,
        }
    }

    #[must_use]
    pub fn concatenation(&self) -> Option<&Rc<Concatenation>> {
        match &self.target {
            LvalueTarget::NetConcatenation(concat) | LvalueTarget::VarConcatenation(concat) => {
                Some(concat)
            }
            _ => None,
        }
    }
}

impl Primary {
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.primary_type == PrimaryType::Constant
    }

    #[must_use]
    pub fn value_type(&self) -> PrimaryValueType {
        match &self.value {
            PrimaryValue::Number(_) => PrimaryValueType::Number,
            PrimaryValue::Identifier(_) => PrimaryValueType::Identifier,
            PrimaryValue::Concatenation(_) => PrimaryValueType::Concatenation,
            PrimaryValue::FunctionCall(_) => PrimaryValueType::FunctionCall,
            PrimaryValue::MinTypMax(_) => PrimaryValueType::MinTypMax,
        }
    }
}

impl Expression {
    #[must_use]
    pub fn expression_type(&self) -> ExpressionType {
        match self {
            Expression::Primary(_) => ExpressionType::Primary,
            Expression::Unary(_) => ExpressionType::Unary,
            Expression::Binary(_) => ExpressionType::Binary,
            Expression::Range(_) => ExpressionType::RangeUpDown,
            Expression::Index(_) => ExpressionType::RangeIndex,
            Expression::Conditional(_) => ExpressionType::Conditional,
            Expression::MinTypMax(_) => ExpressionType::MinTypMax,
            Expression::String(_) => ExpressionType::String,
        }
    }

    /// Whether this expression belongs to a constant expression tree.
    ///
    /// Primary, unary and binary expressions carry the flag they were built
    /// with. String literals are always constant. Ranges, indices, conditionals
    /// and min:typ:max triples are never flagged constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match self {
            Expression::Primary(expr) => expr.constant,
            Expression::Unary(expr) => expr.constant,
            Expression::Binary(expr) => expr.constant,
            Expression::String(_) => true,
            Expression::Range(_)
            | Expression::Index(_)
            | Expression::Conditional(_)
            | Expression::MinTypMax(_) => false,
        }
    }
}

impl Concatenation {
    /// Items in their current order.
    #[must_use]
    pub fn items(&self) -> Vec<ConcatenationItem> {
        self.items.borrow().iter().cloned().collect()
    }
}

impl PathDeclaration {
    #[must_use]
    pub fn path_type(&self) -> PathDeclarationType {
        match &self.path {
            PathDescriptor::SimpleParallel(_) => PathDeclarationType::SimpleParallel,
            PathDescriptor::SimpleFull(_) => PathDeclarationType::SimpleFull,
            PathDescriptor::EdgeSensitiveParallel(_) => PathDeclarationType::EdgeSensitiveParallel,
            PathDescriptor::EdgeSensitiveFull(_) => PathDeclarationType::EdgeSensitiveFull,
        }
    }

    #[must_use]
    pub fn is_state_dependent(&self) -> bool {
        !matches!(self.condition, PathCondition::Unconditional)
    }
}

impl LoopStatement {
    #[must_use]
    pub fn loop_type(&self) -> LoopType {
        match &self.kind {
            LoopKind::Forever => LoopType::Forever,
            LoopKind::For { .. } => LoopType::For,
            LoopKind::While { .. } => LoopType::While,
            LoopKind::Repeat { .. } => LoopType::Repeat,
        }
    }

    /// The loop condition, or the repeat count for `repeat` loops.
    #[must_use]
    pub fn condition(&self) -> Option<&Expression> {
        match &self.kind {
            LoopKind::Forever => None,
            LoopKind::For { condition, .. } | LoopKind::While { condition } => Some(condition),
            LoopKind::Repeat { count } => Some(count),
        }
    }
}

impl CaseStatement {
    /// Items that are not the cached default, in source order.
    #[must_use]
    pub fn non_default_items(&self) -> Vec<Rc<CaseItem>> {
        self.cases
            .iter()
            .filter(|&item| {
                self.default_item
                    .as_ref()
                    .is_none_or(|default| !Rc::ptr_eq(default, item))
            })
            .cloned()
            .collect()
    }
}

impl IfElse {
    /// Conditional branches in priority order.
    #[must_use]
    pub fn branches(&self) -> Vec<Rc<ConditionalStatement>> {
        self.conditional_statements.borrow().iter().cloned().collect()
    }
}

impl EventExpression {
    #[must_use]
    pub fn event_type(&self) -> EventType {
        match &self.kind {
            EventKind::Posedge(_) => EventType::Posedge,
            EventKind::Negedge(_) => EventType::Negedge,
            EventKind::Expression(_) => EventType::Expression,
            EventKind::Sequence(_) => EventType::Sequence,
        }
    }

    /// The watched expression; `None` for sequences.
    #[must_use]
    pub fn expression(&self) -> Option<&Expression> {
        match &self.kind {
            EventKind::Posedge(expr) | EventKind::Negedge(expr) | EventKind::Expression(expr) => {
                Some(expr)
            }
            EventKind::Sequence(_) => None,
        }
    }
}

impl Assignment {
    #[must_use]
    pub fn assignment_type(&self) -> AssignmentType {
        match &self.kind {
            AssignmentKind::Blocking(_) => AssignmentType::Blocking,
            AssignmentKind::Nonblocking(_) => AssignmentType::Nonblocking,
            AssignmentKind::Continuous(_) => AssignmentType::Continuous,
            AssignmentKind::Hybrid(_) => AssignmentType::Hybrid,
        }
    }
}

impl Statement {
    #[must_use]
    pub fn statement_type(&self) -> StatementType {
        let Some(data) = &self.data else {
            return StatementType::Null;
        };
        match data {
            StatementData::Assignment(_) => StatementType::Assignment,
            StatementData::Case(_) => StatementType::Case,
            StatementData::IfElse(_) => StatementType::IfElse,
            StatementData::Disable(_) => StatementType::Disable,
            StatementData::Loop(_) => StatementType::Loop,
            StatementData::Block(_) => StatementType::Block,
            StatementData::TimingControl(_) => StatementType::TimingControl,
            StatementData::TaskEnable(_) => StatementType::TaskEnable,
            StatementData::Wait(_) => StatementType::Wait,
            StatementData::FunctionCall(_) => StatementType::FunctionCall,
            StatementData::ModuleInstantiation(_) => StatementType::ModuleInstantiation,
            StatementData::GateInstantiation(_) => StatementType::GateInstantiation,
            StatementData::UdpInstantiation(_) => StatementType::UdpInstantiation,
            StatementData::GenerateBlock(_) => StatementType::GenerateBlock,
            StatementData::TypeDeclaration(_) => StatementType::TypeDeclaration,
            StatementData::ParameterDeclarations(_) => StatementType::ParameterDeclarations,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.data.is_none()
    }
}

impl UdpBody {
    #[must_use]
    pub fn body_type(&self) -> UdpBodyType {
        match &self.kind {
            UdpBodyKind::Combinatorial(_) => UdpBodyType::Combinatorial,
            UdpBodyKind::Sequential { .. } => UdpBodyType::Sequential,
        }
    }
}

impl UdpDeclaration {
    #[must_use]
    pub fn body_type(&self) -> UdpBodyType {
        self.body.body_type()
    }
}

impl UdpSequentialEntry {
    #[must_use]
    pub fn prefix(&self) -> UdpSequentialEntryPrefix {
        match &self.inputs {
            UdpSequentialInputs::Levels(_) => UdpSequentialEntryPrefix::Levels,
            UdpSequentialInputs::Edges(_) => UdpSequentialEntryPrefix::Edges,
        }
    }
}

impl GateInstantiation {
    /// Gate type of the instantiated primitive.
    ///
    /// `None` for a pull gate whose direction is `PullDirection::None`, which
    /// the builder never produces.
    #[must_use]
    pub fn gate_type(&self) -> Option<GateType> {
        match &self.kind {
            GateInstantiationKind::Switches(switches) => {
                Some(switches.switch_gate.switch_type.gate_type())
            }
            GateInstantiationKind::PassEnable(_) => Some(GateType::PassEnable),
            GateInstantiationKind::NInput(_) => Some(GateType::NInput),
            GateInstantiationKind::Enable(_) => Some(GateType::Enable),
            GateInstantiationKind::NOutput(_) => Some(GateType::NOutput),
            GateInstantiationKind::Pull(pull) => pull.direction.gate_type(),
        }
    }
}

impl SourceText {
    #[must_use]
    pub fn modules(&self) -> Vec<Rc<ModuleDeclaration>> {
        self.descriptions
            .iter()
            .filter_map(|description| match description {
                Description::Module(module) => Some(module.clone()),
                Description::Udp(_) => None,
            })
            .collect()
    }

    #[must_use]
    pub fn udps(&self) -> Vec<Rc<UdpDeclaration>> {
        self.descriptions
            .iter()
            .filter_map(|description| match description {
                Description::Udp(udp) => Some(udp.clone()),
                Description::Module(_) => None,
            })
            .collect()
    }
}
