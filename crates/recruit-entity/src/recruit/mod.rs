//! Recruit entity, submission schema and department lookup.

pub mod department;
pub mod model;
pub mod semester;

pub use department::Department;
pub use model::{NewRecruit, Recruit, RecruitPatch};
