//! The editable fields of the form, in display order

/// The kind of keyboard input a field expects.
///
/// This is advisory: every field stores exactly what was typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Half-width ASCII (vital signs)
    Ascii,
    /// Any text
    Any,
}

impl InputMode {
    /// Short note shown next to a focused field
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            InputMode::Ascii => Some("半角英数"),
            InputMode::Any => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    BloodPressure,
    Temperature,
    Pulse,
    Subjective,
    Objective,
    Assessment,
    Plan,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::BloodPressure,
        FormField::Temperature,
        FormField::Pulse,
        FormField::Subjective,
        FormField::Objective,
        FormField::Assessment,
        FormField::Plan,
    ];

    pub const VITALS: [FormField; 3] = [
        FormField::BloodPressure,
        FormField::Temperature,
        FormField::Pulse,
    ];

    pub const SOAP: [FormField; 4] = [
        FormField::Subjective,
        FormField::Objective,
        FormField::Assessment,
        FormField::Plan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::BloodPressure => "血圧",
            FormField::Temperature => "体温",
            FormField::Pulse => "脈拍",
            FormField::Subjective => "S:",
            FormField::Objective => "O:",
            FormField::Assessment => "A:",
            FormField::Plan => "P:",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::BloodPressure | FormField::Temperature | FormField::Pulse => "入力",
            FormField::Subjective => "主観的データ",
            FormField::Objective => "客観的データ",
            FormField::Assessment => "アセスメント",
            FormField::Plan => "計画",
        }
    }

    pub fn input_mode(&self) -> InputMode {
        if self.is_vital() {
            InputMode::Ascii
        } else {
            InputMode::Any
        }
    }

    pub fn is_vital(&self) -> bool {
        matches!(
            self,
            FormField::BloodPressure | FormField::Temperature | FormField::Pulse
        )
    }

    pub fn index(&self) -> usize {
        match self {
            FormField::BloodPressure => 0,
            FormField::Temperature => 1,
            FormField::Pulse => 2,
            FormField::Subjective => 3,
            FormField::Objective => 4,
            FormField::Assessment => 5,
            FormField::Plan => 6,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
