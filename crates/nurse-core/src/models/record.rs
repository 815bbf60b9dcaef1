use chrono::NaiveDate;

use super::FormField;
use crate::calendar;

/// Vital signs as typed. No unit or range checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vitals {
    pub blood_pressure: String,
    pub temperature: String,
    pub pulse: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoapNote {
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
}

/// The one record the screen edits. Lives as long as the screen does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NursingRecord {
    record_date: NaiveDate,
    patient_name: String,
    pub vitals: Vitals,
    pub soap: SoapNote,
}

impl NursingRecord {
    /// Fresh record dated yesterday relative to `today`
    pub fn new(patient_name: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            record_date: calendar::default_record_date(today),
            patient_name: patient_name.into(),
            vitals: Vitals::default(),
            soap: SoapNote::default(),
        }
    }

    /// Shown on screen but never edited there
    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    pub fn record_date(&self) -> NaiveDate {
        self.record_date
    }

    /// Record date as shown on screen (`yyyy/MM/dd`)
    pub fn display_date(&self) -> String {
        calendar::format_record_date(self.record_date)
    }

    /// Commit a date chosen in the picker. Dates on or after `today` are
    /// clamped to the latest selectable day so the invariant holds even if a
    /// caller bypasses the picker.
    pub fn commit_date(&mut self, date: NaiveDate, today: NaiveDate) {
        self.record_date = date.min(calendar::latest_selectable(today));
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::BloodPressure => &self.vitals.blood_pressure,
            FormField::Temperature => &self.vitals.temperature,
            FormField::Pulse => &self.vitals.pulse,
            FormField::Subjective => &self.soap.subjective,
            FormField::Objective => &self.soap.objective,
            FormField::Assessment => &self.soap.assessment,
            FormField::Plan => &self.soap.plan,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::BloodPressure => &mut self.vitals.blood_pressure,
            FormField::Temperature => &mut self.vitals.temperature,
            FormField::Pulse => &mut self.vitals.pulse,
            FormField::Subjective => &mut self.soap.subjective,
            FormField::Objective => &mut self.soap.objective,
            FormField::Assessment => &mut self.soap.assessment,
            FormField::Plan => &mut self.soap.plan,
        }
    }

    /// Replace a field's value verbatim
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }
}
