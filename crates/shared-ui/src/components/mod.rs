// Standalone components
pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod empty_state;
pub mod form_field;
pub mod page_header;
pub mod skeleton;
pub mod stat_card;

// Primitive wrappers
pub mod checkbox;
pub mod collapsible;
pub mod progress;
pub mod tabs;

pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use collapsible::*;
pub use empty_state::*;
pub use form_field::*;
pub use page_header::*;
pub use progress::*;
pub use skeleton::*;
pub use stat_card::*;
pub use tabs::*;
