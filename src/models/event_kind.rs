use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    In,
    Out,
}

impl EventKind {
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::In => "in",
            EventKind::Out => "out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventKind::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EventKind::Out)
    }
}
