//! QA entry wizard
//!
//! Two steps: the program, machine allotment and inspection checklist; then
//! per-process run details for the fixed LASER/FOLDING/FORMING sequence.

use chrono::NaiveDate;
use uuid::Uuid;

use shared::{
    validate_cycle_time, validate_required, CreateQaRequest, ProcessEntry, ProcessKind,
    ProcessRow, INSPECTION_PARAMETERS,
};

use super::{FieldErrors, SteppedForm};

/// Accumulated state of the QA wizard
#[derive(Debug, Clone)]
pub struct QaForm {
    pub program_number: String,
    /// M/C allotment: machines this program ran on
    pub machine_ids: Vec<Uuid>,
    /// Checklist entries in catalog order, with their checked flag
    pub parameters: Vec<(String, bool)>,
    /// One row per process, in shop-floor order
    pub processes: Vec<ProcessRow>,
}

impl Default for QaForm {
    fn default() -> Self {
        Self {
            program_number: String::new(),
            machine_ids: Vec::new(),
            parameters: INSPECTION_PARAMETERS
                .iter()
                .map(|name| (name.to_string(), false))
                .collect(),
            processes: ProcessKind::ALL.iter().copied().map(ProcessRow::new).collect(),
        }
    }
}

impl QaForm {
    /// Add or remove a machine from the allotment
    pub fn toggle_machine(&mut self, machine_id: Uuid) {
        if let Some(position) = self.machine_ids.iter().position(|id| *id == machine_id) {
            self.machine_ids.remove(position);
        } else {
            self.machine_ids.push(machine_id);
        }
    }

    /// Check or uncheck an inspection parameter
    pub fn set_parameter(&mut self, name: &str, checked: bool) {
        if let Some(entry) = self.parameters.iter_mut().find(|(n, _)| n == name) {
            entry.1 = checked;
        }
    }

    pub fn set_process_date(&mut self, process: ProcessKind, date: NaiveDate) {
        if let Some(row) = self.processes.iter_mut().find(|r| r.process == process) {
            row.date = Some(date);
        }
    }

    pub fn set_cycle_time(&mut self, process: ProcessKind, minutes: &str) {
        if let Some(row) = self.processes.iter_mut().find(|r| r.process == process) {
            row.cycle_time_minutes = minutes.to_string();
        }
    }

    fn checked_parameters(&self) -> Vec<String> {
        self.parameters
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl SteppedForm for QaForm {
    type Payload = CreateQaRequest;

    fn step_count(&self) -> u8 {
        2
    }

    fn validate_step(&self, step: u8) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match step {
            1 => {
                errors.check("program_number", validate_required(&self.program_number));
                if self.machine_ids.is_empty() {
                    errors.push("machine_ids", "Select at least one machine");
                }
                if !self.parameters.iter().any(|(_, checked)| *checked) {
                    errors.push("parameters", "Check at least one inspection parameter");
                }
            }
            2 => {
                for row in &self.processes {
                    if row.date.is_none() {
                        errors.push(format!("processes.{}.date", row.process), "Required");
                    }
                    errors.check(
                        &format!("processes.{}.cycle_time", row.process),
                        validate_cycle_time(&row.cycle_time_minutes),
                    );
                }
            }
            _ => {}
        }
        errors
    }

    fn assemble(&self) -> Result<Self::Payload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut processes = Vec::with_capacity(self.processes.len());

        for row in &self.processes {
            let minutes = row.cycle_time_minutes.trim().parse::<u32>();
            match (row.date, minutes) {
                (Some(date), Ok(cycle_time_minutes)) => processes.push(ProcessEntry {
                    process: row.process,
                    date,
                    cycle_time_minutes,
                }),
                (None, _) => {
                    errors.push(format!("processes.{}.date", row.process), "Required");
                }
                (_, Err(_)) => {
                    errors.push(
                        format!("processes.{}.cycle_time", row.process),
                        "Must be a whole number of minutes",
                    );
                }
            }
        }

        if errors.is_empty() {
            Ok(CreateQaRequest {
                program_number: self.program_number.trim().to_string(),
                machine_ids: self.machine_ids.clone(),
                parameters: self.checked_parameters(),
                processes,
            })
        } else {
            Err(errors)
        }
    }
}
