/// Website asset generation
///
/// This module handles:
/// - The generation request and its defaults (request.rs)
/// - The fixed table of derived files (catalog.rs)
/// - Manifest / browserconfig / meta tag formatting (artifacts.rs)
/// - The ordered pipeline that writes everything to disk (pipeline.rs)

pub mod artifacts;
pub mod catalog;
pub mod pipeline;
pub mod request;

pub use pipeline::generate;
pub use request::GenerationRequest;
