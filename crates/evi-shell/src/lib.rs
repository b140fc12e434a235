//! Host shell for the Evicamp desktop
//!
//! Everything around the window manager that the business modules plug into:
//! - [`session`]: the login gate, behind an [`Authenticator`] supplied by the host
//! - [`content`]: hosted module views, instantiated by category
//! - [`sidebar`]: navigation entries with their "is open" highlight
//! - [`shell`]: ties a session to a desktop and mounts content per window
//!
//! The desktop only exists while a session is active; logging out drops it,
//! so no window layout outlives the session.

pub mod content;
pub mod session;
pub mod shell;
pub mod sidebar;

mod error;

pub use content::{ContentRegistry, ContentView, ModuleEntry};
pub use error::{ShellError, ShellResult};
pub use session::{Authenticator, Session, SessionToken};
pub use shell::Shell;
pub use sidebar::{navigation, NavItem};
