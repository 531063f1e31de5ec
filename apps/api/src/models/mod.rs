pub mod application;
pub mod company;
pub mod job;
pub mod resume;
pub mod user;

pub use application::{Application, ApplicationStatus, HistoryEntry};
pub use company::Company;
pub use job::{Job, JobStatus};
pub use resume::ResumeData;
pub use user::{User, UserRole};
