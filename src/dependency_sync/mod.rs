/// Dependency sync core - pure domain types and services
///
/// This module contains the business logic of the tool: the package name
/// value object and the analyzer-report extraction service. It performs
/// no I/O and knows nothing about uv or deptry binaries.
pub mod domain;
pub mod services;
