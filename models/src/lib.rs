mod severity;
mod cvss;
mod customer;
mod target;
mod assessment;
mod category;
mod highlight;
mod poc;
mod vulnerability;

pub use severity::{Complexity, Severity};
pub use cvss::{CvssSet, CvssVersion, Vector};
pub use customer::Customer;
pub use target::Target;
pub use assessment::{Assessment, AssessmentType};
pub use category::{Category, SOURCE_BURP, SOURCE_GENERIC, SOURCE_NESSUS};
pub use highlight::{HighlightRange, Highlighted, LineCol};
pub use poc::{Poc, PocItem, PocKind};
pub use vulnerability::Vulnerability;
