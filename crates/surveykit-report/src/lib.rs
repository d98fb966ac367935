//! surveykit-report — Renders progress snapshots for people to read.

pub mod html;
