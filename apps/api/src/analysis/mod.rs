//! Skill-gap analysis: deterministic role matching, the generative
//! job-description boundary, roadmap assembly, and session hand-off.

pub mod handlers;
pub mod jd;
pub mod matcher;
pub mod roadmap;
pub mod session;
