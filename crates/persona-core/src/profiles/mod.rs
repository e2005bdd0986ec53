//! Per-instrument profilers.
//!
//! Each profiler scores one section of the question bank and derives its
//! rankings, labels, and canned text. Profilers never look at each other's
//! output.

pub mod attachment;
pub mod big_five;
pub mod egogram;
pub mod riasec;
pub mod sensitivity;
pub mod strengths;

pub use attachment::AttachmentProfile;
pub use big_five::BigFiveProfile;
pub use egogram::EgogramProfile;
pub use riasec::RiasecProfile;
pub use sensitivity::SensitivityProfile;
pub use strengths::StrengthsProfile;
