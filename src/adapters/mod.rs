//! Adapters implementing the [`Agent`](crate::ports::Agent) port.

pub mod computed;
pub mod interactive;
pub mod random;

pub use computed::ComputedAgent;
pub use interactive::InteractiveAgent;
pub use random::RandomAgent;
