#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Operator {
    // Tie-break order for the evaluator scan, not precedence.
    pub const SCAN_ORDER: [Operator; 6] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Modulo,
        Operator::Power,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" | "add" => Some(Self::Add),
            "-" | "subtract" => Some(Self::Subtract),
            "*" | "multiply" => Some(Self::Multiply),
            "/" | "divide" => Some(Self::Divide),
            "%" | "mod" => Some(Self::Modulo),
            "^" | "power" => Some(Self::Power),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
            Self::Power => '^',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Add => "Addition completed",
            Self::Subtract => "Subtraction completed",
            Self::Multiply => "Multiplication completed",
            Self::Divide => "Division completed",
            Self::Modulo => "Modulo completed",
            Self::Power => "Power calculation completed",
        }
    }
}
