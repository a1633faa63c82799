//! Verilog AST node types.
//!
//! Every node kind is a struct carrying a `u32` id assigned by the arena that
//! recorded it, plus the fields valid for that kind. Positions in the grammar
//! that accept several kinds of node are tagged enums whose variants carry only
//! their own payload; the discriminant of such a position is exposed
//! through accessor methods in `nodes_impl`.
//!
//! Nodes are shared through `Rc`. The only fields mutated after construction
//! are the lists grown by the `extend_*` family in the builder, which sit behind
//! a `RefCell`.

use std::{cell::RefCell, rc::Rc};

use crate::list::NodeList;

/// Implemented by every node struct and by every enum whose variants all wrap nodes.
///
/// For a wrapping enum the id is the id of the wrapped node.
pub trait Node {
    fn id(&self) -> u32;
}

impl<T: Node + ?Sized> Node for Rc<T> {
    fn id(&self) -> u32 {
        (**self).id()
    }
}

#[macro_export]
macro_rules! ast_node {
    (
        $(#[$outer:meta])*
        $struct_vis:vis struct $name:ident {
            $(
                $(#[$field_attr:meta])*
                $field_vis:vis $field_name:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, PartialEq, Eq, Debug)]
        $struct_vis struct $name {
            pub id: u32,
            $(
                $(#[$field_attr])*
                $field_vis $field_name : $field_ty,
            )*
        }

        impl $crate::nodes::Node for $name {
            fn id(&self) -> u32 {
                self.id
            }
        }
    };
}

macro_rules! ast_nodes {
    (
        $(
            $(#[$outer:meta])*
            $struct_vis:vis struct $name:ident { $($fields:tt)* }
        )+
    ) => {
        $(
            ast_node! {
                $(#[$outer])*
                $struct_vis struct $name { $($fields)* }
            }

            impl From<Rc<$name>> for AstNode {
                fn from(node: Rc<$name>) -> Self {
                    AstNode::$name(node)
                }
            }
        )+

        /// Type-erased handle to any node, as recorded in the arena ledger.
        #[derive(Clone, Debug)]
        pub enum AstNode {
            $(
                $name(Rc<$name>),
            )+
        }

        impl AstNode {
            #[must_use]
            pub fn id(&self) -> u32 {
                match self {
                    $(
                        AstNode::$name(node) => node.id,
                    )+
                }
            }

            /// Name of the node kind, e.g. `"CaseStatement"`.
            #[must_use]
            pub fn kind_name(&self) -> &'static str {
                match self {
                    $(
                        AstNode::$name(_) => stringify!($name),
                    )+
                }
            }
        }
    };
}

macro_rules! ast_enum {
    (
        $(#[$outer:meta])*
        $enum_vis:vis enum $name:ident {
            $(
                $(#[$arm_attr:meta])*
                $arm:ident ( $ty:ty ),
            )*
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, PartialEq, Eq, Debug)]
        $enum_vis enum $name {
            $(
                $(#[$arm_attr])*
                $arm($ty),
            )*
        }

        impl Node for $name {
            fn id(&self) -> u32 {
                match self {
                    $(
                        $name::$arm(n) => n.id(),
                    )*
                }
            }
        }
    };
}

macro_rules! ast_enums {
    (
        $(
            $(#[$outer:meta])*
            $enum_vis:vis enum $name:ident { $($arms:tt)* }
        )+
    ) => {
        $(
            ast_enum! {
                $(#[$outer])*
                $enum_vis enum $name { $($arms)* }
            }
        )+
    };
}

ast_enums! {

    pub enum Expression {
        Primary(Rc<PrimaryExpression>),
        Unary(Rc<UnaryExpression>),
        Binary(Rc<BinaryExpression>),
        Range(Rc<RangeExpression>),
        Index(Rc<IndexExpression>),
        Conditional(Rc<ConditionalExpression>),
        MinTypMax(Rc<MinTypMaxExpression>),
        String(Rc<StringExpression>),
    }

    pub enum PrimaryValue {
        Number(Rc<Number>),
        Identifier(Rc<Identifier>),
        Concatenation(Rc<Concatenation>),
        FunctionCall(Rc<FunctionCall>),
        MinTypMax(Expression),
    }

    /// An element of a concatenation, in source order once construction is done.
    pub enum ConcatenationItem {
        Expression(Expression),
        Lvalue(Rc<Lvalue>),
        Concatenation(Rc<Concatenation>),
    }

    pub enum LvalueTarget {
        NetIdentifier(Rc<Identifier>),
        VarIdentifier(Rc<Identifier>),
        GenvarIdentifier(Rc<Identifier>),
        NetConcatenation(Rc<Concatenation>),
        VarConcatenation(Rc<Concatenation>),
    }

    pub enum DelayValueKind {
        Number(Rc<Number>),
        Parameter(Rc<Identifier>),
        Specparam(Rc<Identifier>),
        MinTypMax(Expression),
    }

    pub enum DelayControlKind {
        Value(Rc<DelayValue>),
        MinTypMax(Expression),
    }

    pub enum TimingControl {
        Delay(Rc<DelayCtrl>),
        Event(Rc<EventControl>),
    }

    pub enum HybridTarget {
        Assignment(Rc<SingleAssignment>),
        Lvalue(Rc<Lvalue>),
    }

    pub enum PathDescriptor {
        SimpleParallel(Rc<SimpleParallelPathDeclaration>),
        SimpleFull(Rc<SimpleFullPathDeclaration>),
        EdgeSensitiveParallel(Rc<EdgeSensitiveParallelPathDeclaration>),
        EdgeSensitiveFull(Rc<EdgeSensitiveFullPathDeclaration>),
    }

    pub enum StatementData {
        Assignment(Rc<Assignment>),
        Case(Rc<CaseStatement>),
        IfElse(Rc<IfElse>),
        Disable(Rc<DisableStatement>),
        Loop(Rc<LoopStatement>),
        Block(Rc<StatementBlock>),
        TimingControl(Rc<TimingControlStatement>),
        TaskEnable(Rc<TaskEnableStatement>),
        Wait(Rc<WaitStatement>),
        FunctionCall(Rc<FunctionCall>),
        ModuleInstantiation(Rc<ModuleInstantiation>),
        GateInstantiation(Rc<GateInstantiation>),
        UdpInstantiation(Rc<UdpInstantiation>),
        GenerateBlock(Rc<GenerateBlock>),
        TypeDeclaration(Rc<TypeDeclaration>),
        ParameterDeclarations(Rc<ParameterDeclarations>),
    }

    pub enum BlockDeclaration {
        Type(Rc<TypeDeclaration>),
        Parameters(Rc<ParameterDeclarations>),
    }

    pub enum SwitchInstance {
        Mos(Rc<MosSwitchInstance>),
        Cmos(Rc<CmosSwitchInstance>),
        Pass(Rc<PassSwitchInstance>),
    }

    pub enum GateInstantiationKind {
        Switches(Rc<Switches>),
        PassEnable(Rc<PassEnableSwitches>),
        NInput(Rc<NInputGateInstances>),
        Enable(Rc<EnableGateInstances>),
        NOutput(Rc<NOutputGateInstances>),
        Pull(Rc<PullGateInstances>),
    }

    pub enum ModuleItem {
        Port(Rc<PortDeclaration>),
        Parameters(Rc<ParameterDeclarations>),
        Type(Rc<TypeDeclaration>),
        ContinuousAssignment(Rc<Assignment>),
        GateInstantiation(Rc<GateInstantiation>),
        UdpInstantiation(Rc<UdpInstantiation>),
        ModuleInstantiation(Rc<ModuleInstantiation>),
        GenerateBlock(Rc<GenerateBlock>),
        Initial(Rc<Statement>),
        Always(Rc<Statement>),
        PathDeclaration(Rc<PathDeclaration>),
    }

    pub enum Description {
        Module(Rc<ModuleDeclaration>),
        Udp(Rc<UdpDeclaration>),
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Div,
    Mod,
    Pow,
    LogicalNot,
    LogicalAnd,
    LogicalOr,
    BitwiseNot,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseXnor,
    ReductionNand,
    ReductionNor,
    Lt,
    Gt,
    Lte,
    Gte,
    Eq,
    NotEq,
    CaseEq,
    CaseNotEq,
    Shl,
    Shr,
    ArithShl,
    ArithShr,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Polarity {
    Positive,
    Negative,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Edge {
    Positive,
    Negative,
    Any,
    None,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LvalueType {
    NetIdentifier,
    VarIdentifier,
    GenvarIdentifier,
    NetConcatenation,
    VarConcatenation,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrimaryType {
    Constant,
    Primary,
    ModulePath,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrimaryValueType {
    Number,
    Identifier,
    Concatenation,
    FunctionCall,
    MinTypMax,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExpressionType {
    Primary,
    Unary,
    Binary,
    RangeUpDown,
    RangeIndex,
    Conditional,
    MinTypMax,
    String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NumberBase {
    Binary,
    Octal,
    Decimal,
    Hex,
    Real,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConcatenationType {
    Expression,
    ConstantExpression,
    Net,
    Variable,
    ModulePath,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PathDeclarationType {
    SimpleParallel,
    SimpleFull,
    EdgeSensitiveParallel,
    EdgeSensitiveFull,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PathCondition {
    Unconditional,
    If(Expression),
    IfNone,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoopType {
    Forever,
    For,
    While,
    Repeat,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LoopKind {
    Forever,
    For {
        initial: Rc<SingleAssignment>,
        condition: Expression,
        modify: Rc<SingleAssignment>,
    },
    While {
        condition: Expression,
    },
    Repeat {
        count: Expression,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CaseType {
    Case,
    Casex,
    Casez,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventType {
    Posedge,
    Negedge,
    Expression,
    Sequence,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EventKind {
    Posedge(Expression),
    Negedge(Expression),
    Expression(Expression),
    Sequence(NodeList<Rc<EventExpression>>),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventControlType {
    Identifier,
    Expression,
    /// `@*` and `@(*)`: implicit sensitivity, carries no expression.
    Any,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimingControlType {
    DelayControl,
    EventControl,
    EventControlRepeat,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AssignmentType {
    Blocking,
    Nonblocking,
    Continuous,
    Hybrid,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HybridAssignmentType {
    Assign,
    Deassign,
    Force,
    Release,
}

/// Payload of a blocking or nonblocking assignment.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProceduralAssignment {
    pub lval: Rc<Lvalue>,
    pub expression: Expression,
    pub delay_or_event: Option<Rc<TimingControlStatement>>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ContinuousAssignment {
    pub assignments: NodeList<Rc<SingleAssignment>>,
    pub drive_strength: Option<Rc<DriveStrength>>,
    pub delay: Option<Rc<Delay3>>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HybridAssignment {
    pub hybrid_type: HybridAssignmentType,
    pub target: HybridTarget,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AssignmentKind {
    Blocking(ProceduralAssignment),
    Nonblocking(ProceduralAssignment),
    Continuous(ContinuousAssignment),
    Hybrid(HybridAssignment),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BlockType {
    Sequential,
    Parallel,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatementType {
    Assignment,
    Case,
    IfElse,
    Disable,
    Loop,
    Block,
    TimingControl,
    TaskEnable,
    Wait,
    FunctionCall,
    ModuleInstantiation,
    GateInstantiation,
    UdpInstantiation,
    GenerateBlock,
    TypeDeclaration,
    ParameterDeclarations,
    Null,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PortDirection {
    Input,
    Output,
    Inout,
    None,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum UdpPortNames {
    Single {
        identifier: Rc<Identifier>,
        reg: bool,
        default_value: Option<Expression>,
    },
    Many(NodeList<Rc<Identifier>>),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UdpBodyType {
    Combinatorial,
    Sequential,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum UdpBodyKind {
    Combinatorial(NodeList<Rc<UdpCombinatorialEntry>>),
    Sequential {
        initial: Option<Rc<UdpInitialStatement>>,
        entries: NodeList<Rc<UdpSequentialEntry>>,
    },
}

/// `0`, `1`, `x`/`X`, `?` and `b`/`B` in a UDP table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LevelSymbol {
    Zero,
    One,
    X,
    Question,
    B,
}

/// `r`, `f`, `p`, `n` and `*` in a UDP table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EdgeSymbol {
    Rise,
    Fall,
    Positive,
    Negative,
    Any,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UdpInputSymbol {
    Level(LevelSymbol),
    Edge(EdgeSymbol),
    /// A parenthesised `(01)` style transition.
    Transition(LevelSymbol, LevelSymbol),
}

/// Output column of a UDP table; `Unchanged` is `-`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UdpNextState {
    Zero,
    One,
    X,
    Unchanged,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UdpSequentialEntryPrefix {
    Levels,
    Edges,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum UdpSequentialInputs {
    Levels(NodeList<UdpInputSymbol>),
    Edges(NodeList<UdpInputSymbol>),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SwitchType {
    Cmos,
    Rcmos,
    Nmos,
    Pmos,
    Rnmos,
    Rpmos,
    Tran,
    Rtran,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SwitchDelay {
    Delay3(Option<Rc<Delay3>>),
    Delay2(Option<Rc<Delay2>>),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PassEnableSwitchType {
    Tranif0,
    Tranif1,
    Rtranif0,
    Rtranif1,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NInputGateType {
    And,
    Nand,
    Or,
    Nor,
    Xor,
    Xnor,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EnableGateType {
    Bufif0,
    Bufif1,
    Notif0,
    Notif1,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NOutputGateType {
    Buf,
    Not,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PullDirection {
    Up,
    Down,
    None,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrimitiveStrength {
    Supply,
    Strong,
    Pull,
    Weak,
    HighZ,
    None,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChargeStrength {
    Small,
    Medium,
    Large,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GateType {
    Cmos,
    Mos,
    Pass,
    PassEnable,
    NInput,
    Enable,
    NOutput,
    PullUp,
    PullDown,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParameterType {
    Generic,
    Integer,
    Real,
    Realtime,
    Time,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NetType {
    Supply0,
    Supply1,
    Tri,
    Triand,
    Trior,
    Trireg,
    Tri0,
    Tri1,
    Uwire,
    Wire,
    Wand,
    Wor,
    #[default]
    None,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeclarationType {
    Net,
    Reg,
    Genvar,
    Integer,
    Real,
    Realtime,
    Time,
    Event,
    Specparam,
}

/// Optional modifiers of a net or variable declaration.
///
/// The default value is "no modifiers": every option absent, every flag false
/// and the net type `NetType::None`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct TypeModifiers {
    pub delay: Option<Rc<Delay3>>,
    pub drive_strength: Option<Rc<DriveStrength>>,
    pub charge_strength: Option<ChargeStrength>,
    pub range: Option<Rc<Range>>,
    pub vectored: bool,
    pub scalared: bool,
    pub is_signed: bool,
    pub net_type: NetType,
}

ast_nodes! {

    // Identifiers and attributes

    pub struct Identifier {
        pub name: String,
    }

    pub struct IdentifierNode {
        pub identifier: Rc<Identifier>,
    }

    pub struct Attribute {
        pub name: Rc<Identifier>,
        pub value: Option<Expression>,
    }

    pub struct AttributeList {
        pub attributes: RefCell<NodeList<Rc<Attribute>>>,
    }

    pub struct AttributeNode {
        pub attributes: Rc<AttributeList>,
    }

    // Literals and ranges

    pub struct Number {
        pub base: NumberBase,
        pub size: Option<u32>,
        pub is_signed: bool,
        pub digits: String,
    }

    pub struct Range {
        pub upper: Expression,
        pub lower: Expression,
    }

    pub struct Lvalue {
        pub target: LvalueTarget,
    }

    // Primaries and expressions

    pub struct Primary {
        pub primary_type: PrimaryType,
        pub value: PrimaryValue,
    }

    pub struct PrimaryExpression {
        pub primary: Rc<Primary>,
        pub constant: bool,
    }

    pub struct UnaryExpression {
        pub operation: Operator,
        pub operand: Expression,
        pub attributes: Option<Rc<AttributeList>>,
        pub constant: bool,
    }

    pub struct BinaryExpression {
        pub left: Expression,
        pub right: Expression,
        pub operation: Operator,
        pub attributes: Option<Rc<AttributeList>>,
        pub constant: bool,
    }

    pub struct RangeExpression {
        pub left: Expression,
        pub right: Expression,
    }

    pub struct IndexExpression {
        pub index: Expression,
    }

    pub struct StringExpression {
        pub value: String,
    }

    pub struct ConditionalExpression {
        pub condition: Expression,
        pub if_true: Expression,
        pub if_false: Expression,
        pub attributes: Option<Rc<AttributeList>>,
    }

    /// `(min:typ:max)`; a lone typical value leaves `min` and `max` empty.
    pub struct MinTypMaxExpression {
        pub min: Option<Expression>,
        pub typ: Expression,
        pub max: Option<Expression>,
    }

    pub struct FunctionCall {
        pub function: Rc<Identifier>,
        pub constant: bool,
        pub system: bool,
        pub attributes: Option<Rc<AttributeList>>,
        pub arguments: NodeList<Expression>,
    }

    pub struct Concatenation {
        pub concatenation_type: ConcatenationType,
        pub repeat: Option<Expression>,
        pub items: RefCell<NodeList<ConcatenationItem>>,
    }

    // Path declarations

    pub struct SimpleParallelPathDeclaration {
        pub input_terminal: Rc<Identifier>,
        pub polarity: Option<Polarity>,
        pub output_terminal: Rc<Identifier>,
        pub delay_value: NodeList<Expression>,
    }

    pub struct SimpleFullPathDeclaration {
        pub input_terminals: NodeList<Rc<Identifier>>,
        pub polarity: Option<Polarity>,
        pub output_terminals: NodeList<Rc<Identifier>>,
        pub delay_value: NodeList<Expression>,
    }

    pub struct EdgeSensitiveParallelPathDeclaration {
        pub edge: Edge,
        pub input_terminal: Rc<Identifier>,
        pub polarity: Option<Polarity>,
        pub output_terminal: Rc<Identifier>,
        pub data_source: Expression,
        pub delay_value: NodeList<Expression>,
    }

    pub struct EdgeSensitiveFullPathDeclaration {
        pub edge: Edge,
        pub input_terminals: NodeList<Rc<Identifier>>,
        pub polarity: Option<Polarity>,
        pub output_terminals: NodeList<Rc<Identifier>>,
        pub data_source: Expression,
        pub delay_value: NodeList<Expression>,
    }

    pub struct PathDeclaration {
        pub condition: PathCondition,
        pub path: PathDescriptor,
    }

    // Procedural statements

    pub struct TaskEnableStatement {
        pub identifier: Rc<Identifier>,
        pub expressions: NodeList<Expression>,
        pub is_system: bool,
    }

    pub struct LoopStatement {
        pub kind: LoopKind,
        pub body: Rc<Statement>,
    }

    pub struct CaseItem {
        pub conditions: NodeList<Expression>,
        pub body: Option<Rc<Statement>>,
        pub is_default: bool,
    }

    pub struct CaseStatement {
        pub expression: Expression,
        pub cases: NodeList<Rc<CaseItem>>,
        pub case_type: CaseType,
        pub is_function: bool,
        /// First item of `cases` flagged as default, if any.
        pub default_item: Option<Rc<CaseItem>>,
    }

    pub struct ConditionalStatement {
        pub condition: Expression,
        pub statement: Rc<Statement>,
    }

    /// `if` / `else if` chain. Earlier entries have priority.
    pub struct IfElse {
        pub conditional_statements: RefCell<NodeList<Rc<ConditionalStatement>>>,
        pub else_statement: Option<Rc<Statement>>,
    }

    pub struct WaitStatement {
        pub expression: Expression,
        pub statement: Rc<Statement>,
    }

    pub struct EventExpression {
        pub kind: EventKind,
    }

    pub struct EventControl {
        pub control_type: EventControlType,
        pub expression: Option<Rc<EventExpression>>,
    }

    pub struct DelayValue {
        pub value: DelayValueKind,
    }

    pub struct Delay2 {
        pub min: Option<Rc<DelayValue>>,
        pub max: Option<Rc<DelayValue>>,
    }

    pub struct Delay3 {
        pub min: Option<Rc<DelayValue>>,
        pub avg: Option<Rc<DelayValue>>,
        pub max: Option<Rc<DelayValue>>,
    }

    pub struct DelayCtrl {
        pub kind: DelayControlKind,
    }

    pub struct TimingControlStatement {
        pub timing_type: TimingControlType,
        pub control: TimingControl,
        pub repeat: Option<Expression>,
        pub statement: Option<Rc<Statement>>,
    }

    pub struct SingleAssignment {
        pub lval: Rc<Lvalue>,
        pub expression: Expression,
    }

    pub struct Assignment {
        pub kind: AssignmentKind,
    }

    pub struct StatementBlock {
        pub block_type: BlockType,
        pub identifier: Option<Rc<Identifier>>,
        pub declarations: NodeList<BlockDeclaration>,
        pub statements: NodeList<Rc<Statement>>,
    }

    pub struct DisableStatement {
        pub identifier: Rc<Identifier>,
    }

    /// A statement or generate item. `data` is empty for the null statement `;`.
    pub struct Statement {
        pub attributes: Option<Rc<AttributeList>>,
        pub is_function_statement: bool,
        pub is_generate_statement: bool,
        pub data: Option<StatementData>,
    }

    // User defined primitives

    pub struct UdpPort {
        pub direction: PortDirection,
        pub attributes: Option<Rc<AttributeList>>,
        pub names: UdpPortNames,
    }

    pub struct UdpDeclaration {
        pub attributes: Option<Rc<AttributeList>>,
        pub identifier: Rc<Identifier>,
        pub ports: NodeList<Rc<UdpPort>>,
        pub body: Rc<UdpBody>,
    }

    pub struct UdpInstance {
        pub identifier: Option<Rc<Identifier>>,
        pub range: Option<Rc<Range>>,
        pub output: Rc<Lvalue>,
        pub inputs: NodeList<Expression>,
    }

    pub struct UdpInstantiation {
        pub identifier: Rc<Identifier>,
        pub instances: NodeList<Rc<UdpInstance>>,
        pub drive_strength: Option<Rc<DriveStrength>>,
        pub delay: Option<Rc<Delay2>>,
    }

    pub struct UdpInitialStatement {
        pub output_port: Rc<Identifier>,
        pub initial_value: Rc<Number>,
    }

    pub struct UdpBody {
        pub kind: UdpBodyKind,
    }

    pub struct UdpCombinatorialEntry {
        pub input_levels: NodeList<LevelSymbol>,
        pub output_symbol: UdpNextState,
    }

    pub struct UdpSequentialEntry {
        pub inputs: UdpSequentialInputs,
        pub current_state: LevelSymbol,
        pub output: UdpNextState,
    }

    // Generate blocks and instantiation

    pub struct GenerateBlock {
        pub identifier: Option<Rc<Identifier>>,
        pub generate_items: NodeList<Rc<Statement>>,
    }

    pub struct ModuleInstantiation {
        pub module_identifier: Rc<Identifier>,
        pub module_parameters: NodeList<Rc<PortConnection>>,
        pub module_instances: NodeList<Rc<ModuleInstance>>,
    }

    pub struct ModuleInstance {
        pub instance_identifier: Rc<Identifier>,
        pub port_connections: NodeList<Rc<PortConnection>>,
    }

    /// `.port(expr)` when named, a bare `expr` when ordered. Either side may be empty.
    pub struct PortConnection {
        pub port_name: Option<Rc<Identifier>>,
        pub expression: Option<Expression>,
    }

    // Gate and switch primitives

    pub struct SwitchGate {
        pub switch_type: SwitchType,
        pub delay: SwitchDelay,
    }

    pub struct DriveStrength {
        pub strength_1: PrimitiveStrength,
        pub strength_0: PrimitiveStrength,
    }

    pub struct PrimitivePullStrength {
        pub direction: PullDirection,
        pub strength_1: PrimitiveStrength,
        pub strength_0: PrimitiveStrength,
    }

    pub struct PullGateInstance {
        pub name: Option<Rc<Identifier>>,
        pub output_terminal: Rc<Lvalue>,
    }

    pub struct PullGateInstances {
        pub direction: PullDirection,
        pub strength: Option<Rc<PrimitivePullStrength>>,
        pub instances: NodeList<Rc<PullGateInstance>>,
    }

    pub struct PassSwitchInstance {
        pub name: Option<Rc<Identifier>>,
        pub terminal_1: Rc<Lvalue>,
        pub terminal_2: Rc<Lvalue>,
    }

    pub struct NInputGateInstance {
        pub name: Option<Rc<Identifier>>,
        pub input_terminals: NodeList<Expression>,
        pub output_terminal: Rc<Lvalue>,
    }

    pub struct EnableGateInstance {
        pub name: Option<Rc<Identifier>>,
        pub output_terminal: Rc<Lvalue>,
        pub enable_terminal: Expression,
        pub input_terminal: Expression,
    }

    pub struct MosSwitchInstance {
        pub name: Option<Rc<Identifier>>,
        pub output_terminal: Rc<Lvalue>,
        pub enable_terminal: Expression,
        pub input_terminal: Expression,
    }

    pub struct CmosSwitchInstance {
        pub name: Option<Rc<Identifier>>,
        pub output_terminal: Rc<Lvalue>,
        pub ncontrol_terminal: Expression,
        pub pcontrol_terminal: Expression,
        pub input_terminal: Expression,
    }

    pub struct PassEnableSwitch {
        pub name: Option<Rc<Identifier>>,
        pub terminal_1: Rc<Lvalue>,
        pub terminal_2: Rc<Lvalue>,
        pub enable: Expression,
    }

    pub struct PassEnableSwitches {
        pub switch_type: PassEnableSwitchType,
        pub delay: Option<Rc<Delay2>>,
        pub switches: NodeList<Rc<PassEnableSwitch>>,
    }

    pub struct NInputGateInstances {
        pub gate_type: NInputGateType,
        pub delay: Option<Rc<Delay3>>,
        pub drive_strength: Option<Rc<DriveStrength>>,
        pub instances: NodeList<Rc<NInputGateInstance>>,
    }

    pub struct EnableGateInstances {
        pub gate_type: EnableGateType,
        pub delay: Option<Rc<Delay3>>,
        pub drive_strength: Option<Rc<DriveStrength>>,
        pub instances: NodeList<Rc<EnableGateInstance>>,
    }

    pub struct NOutputGateInstance {
        pub name: Option<Rc<Identifier>>,
        pub outputs: NodeList<Rc<Lvalue>>,
        pub input: Expression,
    }

    pub struct NOutputGateInstances {
        pub gate_type: NOutputGateType,
        pub delay: Option<Rc<Delay2>>,
        pub drive_strength: Option<Rc<DriveStrength>>,
        pub instances: NodeList<Rc<NOutputGateInstance>>,
    }

    pub struct Switches {
        pub switch_gate: Rc<SwitchGate>,
        pub switches: NodeList<SwitchInstance>,
    }

    pub struct GateInstantiation {
        pub kind: GateInstantiationKind,
    }

    // Declarations

    pub struct ParameterDeclarations {
        pub parameter_type: ParameterType,
        pub assignments: NodeList<Rc<SingleAssignment>>,
        pub signed_values: bool,
        pub local: bool,
        pub range: Option<Rc<Range>>,
    }

    pub struct PortDeclaration {
        pub direction: PortDirection,
        pub net_type: NetType,
        pub net_signed: bool,
        pub is_reg: bool,
        pub is_variable: bool,
        pub range: Option<Rc<Range>>,
        pub port_names: NodeList<Rc<Identifier>>,
    }

    pub struct TypeDeclaration {
        pub declaration_type: DeclarationType,
        pub identifiers: NodeList<Rc<Identifier>>,
        pub delay: Option<Rc<Delay3>>,
        pub drive_strength: Option<Rc<DriveStrength>>,
        pub charge_strength: Option<ChargeStrength>,
        pub range: Option<Rc<Range>>,
        pub vectored: bool,
        pub scalared: bool,
        pub is_signed: bool,
        pub net_type: NetType,
    }

    // Roots

    pub struct ModuleDeclaration {
        pub attributes: Option<Rc<AttributeList>>,
        pub identifier: Rc<Identifier>,
        pub parameters: NodeList<Rc<ParameterDeclarations>>,
        pub ports: NodeList<Rc<PortDeclaration>>,
        pub items: NodeList<ModuleItem>,
    }

    pub struct SourceText {
        pub descriptions: NodeList<Description>,
    }
}
