//! Semester labels offered by the submission form.

/// Pre-selected value for the current-semester field.
pub const DEFAULT_CURRENT_SEMESTER: &str = "Fall 2025";

/// Options offered for every semester field.
pub const SEMESTER_OPTIONS: &[&str] = &[
    "N/A",
    "Spring 2023",
    "Summer 2023",
    "Fall 2023",
    "Spring 2024",
    "Summer 2024",
    "Fall 2024",
    "Spring 2025",
    "Summer 2025",
    "Fall 2025",
];
