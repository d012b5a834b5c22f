pub mod codec;
pub mod rank;
pub mod search;
pub mod sort;
pub mod store;

pub use crate::domain::model::{Candidate, Criterion, LoadOutcome, SortOutcome, SortStrategy};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
