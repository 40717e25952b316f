//! Records read from a module: agents, workflows and the install configuration.

pub mod agent;
pub mod install_config;
pub mod workflow;

pub use agent::{Agent, AgentType, Capability, MenuItem, Persona, Tool};
pub use install_config::Sensitivity;
pub use workflow::Workflow;
