pub mod catalog;
pub mod domain;
pub mod media;
pub mod ports;

pub use domain::{DomainError, Lesson, LessonDraft, StoredMedia};
pub use ports::{CatalogStore, MediaStore, PortError, PortResult};
