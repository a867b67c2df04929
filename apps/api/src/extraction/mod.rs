// Extraction orchestration: connector call, payload mapping, confidence.
// All provider calls go through the connectors module — nothing here
// talks to the network directly.

pub mod confidence;
pub mod handlers;
pub mod service;
