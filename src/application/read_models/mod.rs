//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of a run for report formatters.

mod consistency_read_model;
mod consistency_read_model_builder;

pub use consistency_read_model::{
    ConsistencyReadModel, MismatchView, ReportMetadataView, RequirementView, SummaryView,
};
pub use consistency_read_model_builder::ConsistencyReadModelBuilder;
