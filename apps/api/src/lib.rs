//! SkillBridge API — compares a candidate profile against a target role or a
//! job description, scores the gap, and renders a weekly learning roadmap
//! with downloadable reports.

pub mod analysis;
pub mod animation;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod extract;
pub mod llm_client;
pub mod report;
pub mod routes;
pub mod state;
