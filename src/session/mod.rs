//! Game sessions: the state machine a front end drives, and a console driver
//! that alternates two agents over it.

pub mod driver;
pub mod state;

pub use driver::{SessionConfig, SessionDriver};
pub use state::{GameSession, Phase};
