use serde::Serialize;

/// The four punch events a day bucket can contain. Closed set: anything
/// else must die at the parse boundary, never inside the validator.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PunchKind {
    DayIn,
    BreakStart,
    BreakEnd,
    DayOut,
}

impl PunchKind {
    pub fn from_cli_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" | "day-in" | "day_in" => Some(Self::DayIn),
            "break" | "break-start" | "break_start" => Some(Self::BreakStart),
            "resume" | "break-end" | "break_end" => Some(Self::BreakEnd),
            "out" | "day-out" | "day_out" => Some(Self::DayOut),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchKind::DayIn => "day_in",
            PunchKind::BreakStart => "break_start",
            PunchKind::BreakEnd => "break_end",
            PunchKind::DayOut => "day_out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "day_in" => Some(PunchKind::DayIn),
            "break_start" => Some(PunchKind::BreakStart),
            "break_end" => Some(PunchKind::BreakEnd),
            "day_out" => Some(PunchKind::DayOut),
            _ => None,
        }
    }

    /// Human label used in CLI output and rejection messages.
    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::DayIn => "Day In",
            PunchKind::BreakStart => "Break Start",
            PunchKind::BreakEnd => "Break End",
            PunchKind::DayOut => "Day Out",
        }
    }

    pub fn is_day_in(&self) -> bool {
        matches!(self, PunchKind::DayIn)
    }

    pub fn is_day_out(&self) -> bool {
        matches!(self, PunchKind::DayOut)
    }
}
