//! Template scanner: walks view files, captures element tags with a
//! quote-aware state machine, and synthesizes bindings from the tags
//! that carry `data-` attributes.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Error;
use crate::extract::AttributePatterns;
use crate::types::Binding;

/// Substring that marks a tag as interesting to the scanner. Tags
/// without it are discarded before any attribute extraction runs.
const BINDING_MARKER: &str = "data-";

/// How many characters of tag text (after `<`) appear in a selector.
const SELECTOR_PREVIEW_CHARS: usize = 20;

/// Scanner state while walking template source one character at a time.
enum TagState {
    /// Between tags; only `<` followed by an ASCII letter enters a tag.
    Outside,
    /// Inside a tag, outside any quoted attribute value.
    InTag,
    /// Inside a single-quoted attribute value.
    SingleQuoted,
    /// Inside a double-quoted attribute value.
    DoubleQuoted,
}

/// One element tag captured from template source: its byte offset and
/// the full `<...>` text including both angle brackets.
struct TagSpan<'a> {
    /// Byte offset of the opening `<` within its source.
    offset: usize,
    /// Full tag text, `<` through `>` inclusive.
    text: &'a str,
}

/// Walks template files and produces bindings with identifiers that are
/// unique across the whole scan, in file-then-document order.
pub struct TemplateScanner<'a> {
    /// Compiled attribute patterns, shared across every scanned file.
    patterns: &'a AttributePatterns,
    /// Bindings issued so far; the next identifier is this plus one.
    next_ordinal: u32,
}

impl<'a> TemplateScanner<'a> {
    /// New scanner whose first binding will be `el_0001`.
    pub fn new(patterns: &'a AttributePatterns) -> Self {
        Self { patterns, next_ordinal: 0 }
    }

    /// Scan one template file and append its bindings.
    ///
    /// # Errors
    ///
    /// Returns `Error::FileNotFound` if the file cannot be read; the
    /// walker listed it, so a read failure means it vanished mid-scan.
    pub fn scan_file(
        &mut self,
        path: &Path,
        origin: &str,
        bindings: &mut Vec<Binding>,
    ) -> Result<(), Error> {
        let source = std::fs::read_to_string(path)
            .map_err(|_err| return Error::FileNotFound { path: path.to_path_buf() })?;
        self.scan_source(&source, origin, bindings);
        Ok(())
    }

    /// Scan template source text: capture element tags, keep the ones
    /// carrying the binding marker, and synthesize one binding per tag.
    pub fn scan_source(&mut self, source: &str, origin: &str, bindings: &mut Vec<Binding>) {
        for tag in element_tags(source) {
            if !tag.text.contains(BINDING_MARKER) {
                continue;
            }
            let line = line_of_offset(source, tag.offset);
            bindings.push(self.binding_for_tag(&tag, origin, line));
        }
    }

    /// Build a binding for one captured tag: allocate the next ordinal
    /// identifier, render the selector, and run the four extractors.
    fn binding_for_tag(&mut self, tag: &TagSpan<'_>, origin: &str, line: usize) -> Binding {
        self.next_ordinal += 1;
        let id = format!("el_{:04}", self.next_ordinal);

        let controllers = self.patterns.controllers(tag.text);
        let actions = self.patterns.actions(tag.text);
        let targets = self.patterns.targets(tag.text);
        let values = self.patterns.values(tag.text);

        // A wired-up element with nothing attached to its controllers is
        // flagged here and reported by the presence lint rule.
        let broken = (!controllers.is_empty()
            && actions.is_empty()
            && targets.is_empty()
            && values.is_empty())
        .then_some(true);

        Binding {
            id,
            selector: self.selector_for(tag, origin, line),
            controllers,
            actions,
            targets,
            values,
            broken,
        }
    }

    /// Render a human-oriented selector: origin path, line number, a
    /// fixed-length preview of the tag text, and the element's `#id`
    /// suffix when it has an `id` attribute.
    fn selector_for(&self, tag: &TagSpan<'_>, origin: &str, line: usize) -> String {
        let preview: String = tag.text.chars().skip(1).take(SELECTOR_PREVIEW_CHARS).collect();
        let suffix = self
            .patterns
            .id_attribute(tag.text)
            .map(|id| format!("#{id}"))
            .unwrap_or_default();
        format!("{origin}:{line} <{preview}...{suffix}>")
    }
}

/// Collect all template files under the configured views directory, in
/// lexicographic path order for deterministic binding identifiers.
/// Missing views directories are not an error: an empty list comes back
/// and the scan simply finds no bindings.
pub fn template_files(root: &Path, config: &Config) -> Vec<PathBuf> {
    let views_root = root.join(&config.views_dir);
    let mut files = Vec::new();

    for entry in WalkDir::new(views_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "erb"))
    {
        let path = entry.into_path();
        let relative = path.strip_prefix(root).unwrap_or(&path).to_string_lossy();
        if config.should_scan(&relative) {
            files.push(path);
        }
    }

    files
}

/// Lazily capture every element tag in the source with a four-state
/// machine; each call to the iterator advances the scan to the next
/// closed tag. Quote handling is the whole point: `>` inside a quoted
/// attribute value does not close the tag, so inline event handlers
/// and ERB output embedded in attributes never split a tag in two. A
/// tag still open at end of input is dropped. The machine tracks
/// quotes, not comments, so tag-like text inside an HTML comment is
/// still captured.
fn element_tags(source: &str) -> impl Iterator<Item = TagSpan<'_>> {
    let mut state = TagState::Outside;
    let mut start = 0;
    let mut chars = source.char_indices().peekable();

    std::iter::from_fn(move || {
        while let Some((offset, ch)) = chars.next() {
            match state {
                TagState::Outside => {
                    let opens_tag = ch == '<'
                        && chars.peek().is_some_and(|&(_, next)| next.is_ascii_alphabetic());
                    if opens_tag {
                        state = TagState::InTag;
                        start = offset;
                    }
                }
                TagState::InTag => match ch {
                    '>' => {
                        state = TagState::Outside;
                        return Some(TagSpan { offset: start, text: &source[start..=offset] });
                    }
                    '\'' => state = TagState::SingleQuoted,
                    '"' => state = TagState::DoubleQuoted,
                    _ => {}
                },
                TagState::SingleQuoted => {
                    if ch == '\'' {
                        state = TagState::InTag;
                    }
                }
                TagState::DoubleQuoted => {
                    if ch == '"' {
                        state = TagState::InTag;
                    }
                }
            }
        }
        None
    })
}

/// 1-based line number of a byte offset, counted by preceding newlines.
fn line_of_offset(source: &str, offset: usize) -> usize {
    source[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}
