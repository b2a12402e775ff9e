//! Promotion Rules
//!
//! Business-rule validation for promotion campaign records: an ordered
//! catalogue of rules checked against a candidate campaign and the tenant's
//! feature settings, plus the form, storage and response mappings around it.

pub mod campaigns;
pub mod fixtures;
pub mod forms;
pub mod prelude;
pub mod responses;
pub mod rules;
pub mod storage;
pub mod tenants;
pub mod validator;
