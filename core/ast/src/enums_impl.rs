//! Implementation methods for the scalar discriminant enums.
//!
//! These are the partitions the builder asserts on before it allocates a node.

use crate::nodes::{
    EventType, GateType, LvalueType, Operator, ParameterType, PortDirection, PullDirection,
    SwitchType, TimingControlType,
};

impl LvalueType {
    /// Returns `true` for the three identifier kinds.
    #[must_use]
    pub fn is_identifier(self) -> bool {
        matches!(
            self,
            LvalueType::NetIdentifier | LvalueType::VarIdentifier | LvalueType::GenvarIdentifier
        )
    }

    #[must_use]
    pub fn is_concatenation(self) -> bool {
        matches!(
            self,
            LvalueType::NetConcatenation | LvalueType::VarConcatenation
        )
    }
}

impl SwitchType {
    /// `tran` and `rtran` are the only switches that take a two-value delay.
    #[must_use]
    pub fn takes_delay2(self) -> bool {
        matches!(self, SwitchType::Tran | SwitchType::Rtran)
    }

    #[must_use]
    pub fn gate_type(self) -> GateType {
        match self {
            SwitchType::Cmos | SwitchType::Rcmos => GateType::Cmos,
            SwitchType::Nmos | SwitchType::Pmos | SwitchType::Rnmos | SwitchType::Rpmos => {
                GateType::Mos
            }
            SwitchType::Tran | SwitchType::Rtran => GateType::Pass,
        }
    }
}

impl TimingControlType {
    #[must_use]
    pub fn is_event_control(self) -> bool {
        matches!(
            self,
            TimingControlType::EventControl | TimingControlType::EventControlRepeat
        )
    }
}

impl PullDirection {
    /// Gate type of a pull gate pulling in this direction; `None` has no gate.
    #[must_use]
    pub fn gate_type(self) -> Option<GateType> {
        match self {
            PullDirection::Up => Some(GateType::PullUp),
            PullDirection::Down => Some(GateType::PullDown),
            PullDirection::None => None,
        }
    }
}

impl PortDirection {
    #[must_use]
    pub fn is_input(self) -> bool {
        self == PortDirection::Input
    }
}

impl ParameterType {
    #[must_use]
    pub fn is_generic(self) -> bool {
        self == ParameterType::Generic
    }
}

impl EventType {
    #[must_use]
    pub fn is_edge(self) -> bool {
        matches!(self, EventType::Posedge | EventType::Negedge)
    }
}

impl Operator {
    /// Operators that may appear in prefix position.
    #[must_use]
    pub fn is_unary(self) -> bool {
        matches!(
            self,
            Operator::Plus
                | Operator::Minus
                | Operator::LogicalNot
                | Operator::BitwiseNot
                | Operator::BitwiseAnd
                | Operator::BitwiseOr
                | Operator::BitwiseXor
                | Operator::BitwiseXnor
                | Operator::ReductionNand
                | Operator::ReductionNor
        )
    }

    /// Operators that may join two operands.
    #[must_use]
    pub fn is_binary(self) -> bool {
        !matches!(
            self,
            Operator::LogicalNot
                | Operator::BitwiseNot
                | Operator::ReductionNand
                | Operator::ReductionNor
        )
    }
}
