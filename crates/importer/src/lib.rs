pub mod dataset;
pub mod error;

pub use dataset::models::{DataSet, EventData, RecordData};
pub use dataset::validator::{DataSetValidator, ValidatedDataSet, ValidationReport};
pub use error::{ImporterError, Result};
