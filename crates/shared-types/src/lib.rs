pub mod config;
pub mod error;
pub mod nav;
pub mod notification;
pub mod records;
pub mod session;
pub mod tab;
pub mod token;
pub mod user;

pub use config::*;
pub use error::*;
pub use notification::*;
pub use records::*;
pub use session::*;
pub use tab::*;
pub use token::*;
pub use user::*;

// nav is NOT glob re-exported: its menu tables are meant to be addressed as
// `nav::ADMIN_MENU` etc. Only the entry points are lifted.
pub use nav::{resolve, NavEntry, NavIcon, NavTarget, ResolvedNav};
