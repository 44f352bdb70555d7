#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchKind {
    In,
    Out,
}

impl PunchKind {
    /// Kind of the punch at `index` (0-based) in chronological order:
    /// even positions open a session, odd positions close one.
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            PunchKind::In
        } else {
            PunchKind::Out
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::In => "clock-in",
            PunchKind::Out => "clock-out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, PunchKind::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, PunchKind::Out)
    }
}
