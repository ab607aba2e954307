//! Q&A transcript signs for stenography: question and answer markers,
//! bylines and speaker labels produced from short commands such as
//! `QUESTION:FOLLOWING_STATEMENT` or `BYLINE:PLAINTIFF_1:INITIAL`.

pub mod config;
pub mod error;
pub mod global;
pub mod host;
pub mod plugin;
pub mod set_name;
pub mod sign;
pub mod speaker;

pub use config::Config;
pub use error::{QAndAError, Result};
pub use host::{Action, ActionContext, ActionId, MachineState, Transcript};
pub use plugin::QAndA;
pub use sign::SignType;
pub use speaker::SpeakerType;
