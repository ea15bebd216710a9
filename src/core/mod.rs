//! Core module - build metadata and how each value is derived

mod metadata;

pub(crate) use metadata::{BuildMetadata, MetadataSources};
