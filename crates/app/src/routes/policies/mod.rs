pub mod detail;
pub mod list;

pub use detail::PolicyDetail;
pub use list::PolicyList;
