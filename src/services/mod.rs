//! Services layer.
//!
//! Route handlers stay thin and delegate here. `suggestions` turns a data
//! snapshot into candidate rules via the configured LLM.

pub mod suggestions;
