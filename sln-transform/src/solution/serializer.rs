//! Renders a [`SolutionDocument`] back to text.

use super::chapter::Chapter;
use super::document::SolutionDocument;
use super::section::Section;

fn push_section(lines: &mut Vec<String>, section: &Section) {
    let body = section.body();
    lines.push(format!("\t{}", body.header()));
    lines.extend(body.entries.iter().map(|entry| format!("\t\t{entry}")));
    lines.push(format!("\t{}", body.footer()));
}

fn push_sections(lines: &mut Vec<String>, sections: &[Section]) {
    for section in sections {
        push_section(lines, section);
    }
}

fn push_chapter(lines: &mut Vec<String>, chapter: &Chapter) {
    match chapter {
        Chapter::Project(project) => {
            lines.push(project.header());
            push_sections(lines, project.sections());
            lines.push("EndProject".to_string());
        }
        Chapter::Global(global) => {
            lines.push("Global".to_string());
            push_sections(lines, global.sections());
            lines.push("EndGlobal".to_string());
        }
        Chapter::Generic(generic) => {
            lines.push(generic.start.clone());
            push_sections(lines, &generic.sections);
            if let Some(end) = &generic.end {
                lines.push(end.clone());
            }
        }
    }
}

/// Render the document as lines without terminators.
#[must_use]
pub fn to_lines(document: &SolutionDocument) -> Vec<String> {
    let mut lines = document.preamble().to_vec();
    for chapter in document.chapters() {
        push_chapter(&mut lines, chapter);
    }
    lines
}

/// Render the document as text, joined with its line ending.
#[must_use]
pub fn to_text(document: &SolutionDocument) -> String {
    let ending = document.line_ending().as_str();
    let mut text = to_lines(document).join(ending);
    if document.trailing_newline() {
        text.push_str(ending);
    }
    text
}
