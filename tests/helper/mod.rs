#![allow(dead_code)]

pub mod manifest;
pub mod runner;

pub use manifest::ManifestBuilder;
pub use runner::ScriptedRunner;
