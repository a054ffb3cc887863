mod error;
mod escape;
mod palette;
mod snapshot;
mod timezone;

pub mod aggregate;
pub mod highlight;
pub mod prepare;
pub mod sanitize;
pub mod template;

pub use error::{ReportError, Result};
pub use escape::{escape_text, escape_xml};
pub use palette::{ComplexityColors, Palette, SeverityColors};
pub use snapshot::Snapshot;
pub use timezone::{DateLayout, ZoneIndex};
pub use aggregate::OwaspCounter;
pub use highlight::segment;
pub use prepare::{prepare, Preparer, ReportData};
