//! Review Pulse: a desktop dashboard over a store of sentiment-labeled
//! Reddit movie reviews. The data pipeline (load → derive → filter →
//! aggregate/sample) lives in [`data`]; the egui shell lives in [`app`] and
//! [`ui`].

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod ingest;
pub mod state;
pub mod ui;
