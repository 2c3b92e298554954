mod session;

pub use session::{ControlEvent, RunState, Session};
