//! Public types for the esimcheck API.

mod answer;
mod device;
mod search;

pub use answer::{AnswerPayload, LookupKey};
pub use device::{DeviceDetail, SpecEntry, SpecSection, SpecValue};
pub use search::SearchResult;
