//! Lesson-plan prompt construction.

use aral_renderer::HTML_MARKER;

/// The eleven lesson parts every generated plan must cover, in order.
pub const LESSON_PARTS: &[&str] = &[
    "Drill",
    "Review",
    "Establishing a Purpose for the Lesson",
    "Presenting Examples",
    "Discussion 1",
    "Discussion 2",
    "Developing Mastery",
    "Finding Practical Applications",
    "Generalization",
    "Evaluation",
    "Additional Activities",
];

/// Build the instruction text sent to the model for one generation.
///
/// The prompt pins down the table shape and asks the model to optionally
/// append a pre-rendered HTML table behind [`HTML_MARKER`], which the
/// renderer picks up directly.
#[must_use]
pub fn build_prompt(grade: &str, subject: &str, objective: &str) -> String {
    let parts = LESSON_PARTS
        .iter()
        .map(|part| format!("- {part}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Generate a brief lesson plan for Philippine K-12.\n\
         \n\
         Output must be a 2-column table (Markdown or HTML table OK) with:\n\
         Left column: Lesson Part\n\
         Right column: Brief Description (teacher-ready)\n\
         \n\
         Lesson Parts (in this order):\n\
         {parts}\n\
         \n\
         User inputs:\n\
         Grade Level: {grade}\n\
         Subject: {subject}\n\
         Objective: {objective}\n\
         \n\
         Make each description brief (1-2 sentences). Return just the table and nothing else. \
         If possible return both a Markdown table and an HTML table separated by a marker \
         '{HTML_MARKER}' so the client can use the HTML directly."
    )
}
