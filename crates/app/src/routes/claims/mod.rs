pub mod detail;
pub mod list;
pub mod new;

pub use detail::ClaimDetail;
pub use list::ClaimList;
pub use new::NewClaim;
