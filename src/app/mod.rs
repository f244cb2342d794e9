//! Core modules for the WAF importer.
//!
//! # Module Organization
//!
//! - [`waf_importer`] - AWS WAF Classic discovery and conversion into
//!   importable resource descriptors
//!
//! # Architecture
//!
//! - [`waf_importer::aws_services`] wraps the SDK list calls behind a trait
//! - [`waf_importer::normalizers`] turns list summaries into descriptors
//! - [`waf_importer::generator`] runs every lister in a fixed order

pub mod waf_importer;
