pub mod analysis;
pub mod breadcrumb;
pub mod claim_row;
pub mod icons;

pub use analysis::{AnalysisPanel, AnalysisSummary};
pub use breadcrumb::Breadcrumbs;
pub use claim_row::ClaimRow;
pub use icons::SectionIcon;
