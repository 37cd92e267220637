// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod field;
pub mod page_header;
pub mod sheet;
pub mod sidebar;
pub mod skeleton;

// Primitive-backed components
pub mod avatar;
pub mod toast;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use field::*;
pub use page_header::*;
pub use sheet::*;
pub use sidebar::*;
pub use skeleton::*;
pub use toast::*;
