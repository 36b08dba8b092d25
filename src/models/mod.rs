pub mod competition;
pub mod team;
pub mod matches;
pub mod summary;
pub mod report;
pub mod provider;

pub use competition::*;
pub use team::*;
pub use matches::*;
pub use summary::*;
pub use report::*;
