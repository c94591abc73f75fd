use std::collections::HashSet;

use storage::models::{Event, EventId, NewRecord, ResultType, is_well_formed_result};
use tracing::warn;

use super::models::DataSet;
use crate::{ImporterError, Result};

pub struct DataSetValidator;

/// Data set resolved to canonical ids, ready to be written
#[derive(Debug)]
pub struct ValidatedDataSet {
    pub events: Vec<Event>,
    pub records: Vec<NewRecord>,
    pub report: ValidationReport,
}

impl DataSetValidator {
    pub fn validate(data_set: &DataSet) -> Result<ValidatedDataSet> {
        let mut report = ValidationReport::default();
        let mut events = Vec::with_capacity(data_set.events.len());
        let mut records = Vec::with_capacity(data_set.records.len());

        if data_set.events.is_empty() {
            report
                .errors
                .push("At least one event is required".to_string());
        }

        let mut declared = HashSet::new();
        for (idx, event) in data_set.events.iter().enumerate() {
            let Some(id) = EventId::from_alias(&event.id) else {
                report
                    .errors
                    .push(format!("Event #{}: unsupported id '{}'", idx + 1, event.id));
                continue;
            };

            if !declared.insert(id) {
                report
                    .errors
                    .push(format!("Event #{}: '{}' is declared twice", idx + 1, id));
            }
            if event.name.trim().is_empty() {
                report
                    .errors
                    .push(format!("Event #{}: name cannot be empty", idx + 1));
            }

            events.push(Event {
                id,
                name: event.name.clone(),
            });
        }

        if data_set.records.is_empty() {
            report
                .warnings
                .push("Data set contains no records".to_string());
        }

        let mut used = HashSet::new();
        for (idx, record) in data_set.records.iter().enumerate() {
            let position = idx + 1;

            if record.name.is_empty() {
                report
                    .errors
                    .push(format!("Record #{}: name cannot be empty", position));
            }
            if record.method.is_empty() {
                report
                    .errors
                    .push(format!("Record #{}: method cannot be empty", position));
            }
            if !is_well_formed_result(&record.result) {
                report.errors.push(format!(
                    "Record #{}: unsupported result '{}'",
                    position, record.result
                ));
            }

            let event_id = EventId::from_alias(&record.event_id);
            match event_id {
                Some(id) if !declared.contains(&id) => report.errors.push(format!(
                    "Record #{}: event '{}' is not declared",
                    position, id
                )),
                Some(_) => {}
                None => report.errors.push(format!(
                    "Record #{}: unsupported eventId '{}'",
                    position, record.event_id
                )),
            }

            let record_type = ResultType::from_alias(&record.record_type);
            if record_type.is_none() {
                report.errors.push(format!(
                    "Record #{}: unsupported type '{}'",
                    position, record.record_type
                ));
            }

            if let (Some(event_id), Some(record_type)) = (event_id, record_type) {
                used.insert(event_id);
                records.push(NewRecord {
                    name: record.name.clone(),
                    result: record.result.clone(),
                    method: record.method.clone(),
                    event_id,
                    record_type,
                });
            }
        }

        if !data_set.records.is_empty() {
            for event in &events {
                if !used.contains(&event.id) {
                    report
                        .warnings
                        .push(format!("Event '{}' has no records", event.id));
                }
            }
        }

        if !report.errors.is_empty() {
            Err(ImporterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(ValidatedDataSet {
                events,
                records,
                report,
            })
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}
