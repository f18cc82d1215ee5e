//! Session facade bundling a controller with its state.

pub mod study;

pub use study::StudySession;
