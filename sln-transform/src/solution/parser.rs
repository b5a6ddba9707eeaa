//! Line-oriented solution parser.
//!
//! Lines are first grouped into chapters, then each chapter's interior is
//! grouped into sections:
//! - A line starting with `Project` or `Global` always opens a chapter
//! - After a chapter whose last line starts with `End`, any non-indented
//!   line opens a new (generic) chapter
//! - Inside a chapter, a line starting with two tabs, or whose trimmed text
//!   starts with `End`, continues the current section; any other line opens
//!   a new section

use super::chapter::{Chapter, GenericChapter, GlobalChapter, ProjectChapter};
use super::document::{LineEnding, SolutionDocument};
use super::guid::SolutionGuid;
use super::section::{Section, SectionBody};
use crate::error::{Error, Result};
use crate::path::FilePath;

/// Text every solution file starts with, after an optional BOM and blank lines.
pub const SIGNATURE: &str = "Microsoft Visual Studio Solution File";

const BOM: char = '\u{feff}';

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    text: &'a str,
}

impl Line<'_> {
    fn error(&self, reason: impl Into<String>) -> Error {
        Error::parse(self.number, self.text, reason)
    }
}

/// Parse solution text, remembering its line ending.
///
/// # Errors
///
/// Returns [`Error::Parse`] naming the first offending line.
///
/// # Examples
///
/// ```
/// use sln_transform::path::FilePath;
/// use sln_transform::solution::parser::parse_str;
///
/// let text = "Microsoft Visual Studio Solution File, Format Version 12.00\r\nGlobal\r\nEndGlobal\r\n";
/// let doc = parse_str(FilePath::new_file("C:\\All.sln"), text).unwrap();
/// assert_eq!(doc.to_text(), text);
/// ```
pub fn parse_str(path: FilePath, text: &str) -> Result<SolutionDocument> {
    let lines: Vec<&str> = text.lines().collect();
    let mut document = parse_lines(path, &lines)?;
    document.set_line_ending(LineEnding::detect(text));
    document.set_trailing_newline(text.ends_with('\n'));
    Ok(document)
}

/// Parse a solution given as lines without terminators.
///
/// # Errors
///
/// Returns [`Error::Parse`] naming the first offending line.
pub fn parse_lines<S: AsRef<str>>(path: FilePath, lines: &[S]) -> Result<SolutionDocument> {
    let lines: Vec<Line<'_>> = lines
        .iter()
        .enumerate()
        .map(|(index, text)| Line {
            number: index + 1,
            text: text.as_ref(),
        })
        .collect();

    let (preamble, groups) = split_chapters(&lines);
    check_signature(&preamble)?;

    let mut chapters = Vec::with_capacity(groups.len());
    let mut seen_global = false;
    for group in &groups {
        let chapter = parse_chapter(group)?;
        if matches!(chapter, Chapter::Global(_)) {
            if seen_global {
                return Err(group[0].error("more than one Global chapter"));
            }
            seen_global = true;
        }
        chapters.push(chapter);
    }

    log::debug!("parsed {path} with {} chapters", chapters.len());
    Ok(SolutionDocument::new(
        path,
        preamble.iter().map(|line| line.text.to_string()).collect(),
        chapters,
    ))
}

fn starts_chapter(text: &str) -> bool {
    text.starts_with("Project") || text.starts_with("Global")
}

fn is_indented(text: &str) -> bool {
    text.starts_with(['\t', ' '])
}

fn is_closed(group: &[Line<'_>]) -> bool {
    match group {
        [only] if only.text.trim().is_empty() => true,
        [.., last] => last.text.starts_with("End"),
        [] => true,
    }
}

fn split_chapters<'a>(lines: &[Line<'a>]) -> (Vec<Line<'a>>, Vec<Vec<Line<'a>>>) {
    let mut preamble = Vec::new();
    let mut groups: Vec<Vec<Line<'a>>> = Vec::new();

    for &line in lines {
        let opens = starts_chapter(line.text)
            || groups
                .last()
                .is_some_and(|group| is_closed(group) && !is_indented(line.text));
        if opens {
            groups.push(vec![line]);
        } else if let Some(group) = groups.last_mut() {
            group.push(line);
        } else {
            preamble.push(line);
        }
    }

    (preamble, groups)
}

fn check_signature(preamble: &[Line<'_>]) -> Result<()> {
    fn content<'a>(line: &Line<'a>) -> &'a str {
        line.text.trim_start_matches(BOM).trim()
    }

    match preamble.iter().find(|line| !content(line).is_empty()) {
        Some(line) if content(line).starts_with(SIGNATURE) => Ok(()),
        Some(line) => Err(line.error("expected the solution file signature")),
        None => Err(Error::parse(1, "", "expected the solution file signature")),
    }
}

fn parse_chapter(group: &[Line<'_>]) -> Result<Chapter> {
    let Some((first, rest)) = group.split_first() else {
        return Err(Error::parse(0, "", "empty chapter"));
    };

    if first.text.starts_with("Project") {
        let interior = closed_by(first, rest, "EndProject")?;
        let (type_guid, name, path_text, id) = parse_project_header(first)?;
        let sections = parse_sections(interior, false)?;
        return Ok(Chapter::Project(ProjectChapter::from_parts(
            type_guid, name, path_text, id, sections,
        )));
    }

    if first.text.starts_with("Global") {
        let interior = closed_by(first, rest, "EndGlobal")?;
        return Ok(Chapter::Global(GlobalChapter::new(parse_sections(
            interior, true,
        )?)));
    }

    let generic = match rest.split_last() {
        None => GenericChapter {
            start: first.text.to_string(),
            end: None,
            sections: Vec::new(),
        },
        Some((last, interior)) => GenericChapter {
            start: first.text.to_string(),
            end: Some(last.text.to_string()),
            sections: parse_sections(interior, false)?,
        },
    };
    Ok(Chapter::Generic(generic))
}

fn closed_by<'l, 'a>(first: &Line<'a>, rest: &'l [Line<'a>], end: &str) -> Result<&'l [Line<'a>]> {
    match rest.split_last() {
        Some((last, interior)) if last.text == end => Ok(interior),
        Some((last, _)) => Err(last.error(format!("expected `{end}`"))),
        None => Err(first.error(format!("chapter is not closed by `{end}`"))),
    }
}

fn parse_project_header(line: &Line<'_>) -> Result<(SolutionGuid, String, String, SolutionGuid)> {
    const EXPECTED: &str = "expected `Project(\"{Type}\") = \"Name\", \"Path\", \"{Guid}\"`";

    let rest = line
        .text
        .strip_prefix("Project(\"")
        .ok_or_else(|| line.error(EXPECTED))?;
    let (type_text, rest) = rest.split_once("\")").ok_or_else(|| line.error(EXPECTED))?;
    let rest = rest
        .trim_start()
        .strip_prefix('=')
        .ok_or_else(|| line.error(EXPECTED))?;
    let fields = quoted_fields(rest).ok_or_else(|| line.error(EXPECTED))?;
    let [name, path_text, id_text] = fields.as_slice() else {
        return Err(line.error(EXPECTED));
    };

    let guid = |text: &str| SolutionGuid::parse(text).map_err(|e| line.error(e.to_string()));
    Ok((
        guid(type_text)?,
        (*name).to_string(),
        (*path_text).to_string(),
        guid(*id_text)?,
    ))
}

/// Split `"a", "b", "c"` into its quoted fields.
fn quoted_fields(text: &str) -> Option<Vec<&str>> {
    let mut fields = Vec::new();
    let mut rest = text.trim_start();
    while !rest.is_empty() {
        let inner = rest.strip_prefix('"')?;
        let close = inner.find('"')?;
        fields.push(&inner[..close]);
        rest = inner[close + 1..].trim_start();
        match rest.strip_prefix(',') {
            Some(after) => rest = after.trim_start(),
            None if rest.is_empty() => {}
            None => return None,
        }
    }
    Some(fields)
}

fn is_continuation(text: &str) -> bool {
    text.starts_with("\t\t") || text.trim_start().starts_with("End")
}

fn parse_sections(lines: &[Line<'_>], in_global: bool) -> Result<Vec<Section>> {
    let mut groups: Vec<Vec<Line<'_>>> = Vec::new();
    for &line in lines {
        if is_continuation(line.text) {
            match groups.last_mut() {
                Some(group) => group.push(line),
                None => return Err(line.error("line outside of a section")),
            }
        } else {
            groups.push(vec![line]);
        }
    }
    groups
        .iter()
        .map(|group| parse_section(group, in_global))
        .collect()
}

fn parse_section(group: &[Line<'_>], in_global: bool) -> Result<Section> {
    let Some((header, rest)) = group.split_first() else {
        return Err(Error::parse(0, "", "empty section"));
    };
    let mut body = parse_section_header(header)?;

    let footer = body.footer();
    let entries = match rest.split_last() {
        Some((last, entries)) if last.text.trim() == footer => entries,
        Some((last, _)) => return Err(last.error(format!("expected `{footer}`"))),
        None => return Err(header.error(format!("section is not closed by `{footer}`"))),
    };

    for line in entries {
        let (key, value) = line
            .text
            .split_once('=')
            .ok_or_else(|| line.error("expected `key = value`"))?;
        body.push(key.trim(), value.trim());
    }
    Ok(Section::classify(body, in_global))
}

fn is_tag(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Recognize `Type(Name) = Position`.
fn parse_section_header(line: &Line<'_>) -> Result<SectionBody> {
    let error = || line.error("expected `Type(Name) = Position`");
    let text = line.text.trim();
    let (tag, rest) = text.split_once('(').ok_or_else(error)?;
    let (name, rest) = rest.split_once(')').ok_or_else(error)?;
    let position = rest
        .trim_start()
        .strip_prefix('=')
        .ok_or_else(error)?
        .trim();
    if !is_tag(tag) || name.trim().is_empty() || !is_tag(position) {
        return Err(error());
    }
    Ok(SectionBody::new(tag, name, position))
}
