pub mod error;
pub mod feature_flags;
pub mod models;

// Navigation
pub mod breadcrumb;
pub mod layout;

// Insurance domain
pub mod analysis;
pub mod claim;
pub mod policy;
pub mod profile;
pub mod registration;
pub mod samples;

pub use error::*;
pub use feature_flags::*;
pub use models::*;

pub use analysis::*;
pub use breadcrumb::*;
pub use claim::*;
pub use layout::*;
pub use policy::*;
pub use profile::*;
pub use registration::*;
pub use samples::*;
