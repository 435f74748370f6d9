//! Metadata carried by each pre-rendered `.log-entry`, and the text
//! derived from it for copy, file info and tag chips.

use std::collections::HashSet;

use crate::level::Level;

/// `data-line` value the logger writes when it had no line number.
pub const NO_LINE: &str = "-1";

pub const UNKNOWN_FILE: &str = "unknown";
pub const UNKNOWN_LINE: &str = "?";
pub const NO_TAGS_LABEL: &str = "No tags";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    pub level: Level,
    pub tags: Vec<String>,
    /// Raw `data-file` path, as written by the logger.
    pub file: Option<String>,
    /// Raw `data-line` value.
    pub line: Option<String>,
}

impl EntryMeta {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            tags: Vec::new(),
            file: None,
            line: None,
        }
    }

    pub fn with_tags(mut self, tags_attr: &str) -> Self {
        self.tags = parse_tags(tags_attr);
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    pub fn has_any_tag(&self, wanted: &HashSet<String>) -> bool {
        self.tags.iter().any(|t| wanted.contains(t))
    }

    /// File name shown in the detail row, `None` when the entry has no file.
    pub fn file_name(&self) -> Option<&str> {
        self.file.as_deref().map(file_basename)
    }

    pub fn line_number(&self) -> Option<&str> {
        line_number(self.line.as_deref())
    }

    /// `"<file>:<line> - <message>"`, the clipboard payload for this entry.
    pub fn copy_text(&self, message: &str) -> String {
        format!(
            "{}:{} - {}",
            self.file_name().unwrap_or(UNKNOWN_FILE),
            self.line_number().unwrap_or(UNKNOWN_LINE),
            message.trim()
        )
    }

    /// Editor deep link, present only when both file and a real line exist.
    pub fn editor_link(&self, uri_prefix: &str) -> Option<String> {
        let file = self.file.as_deref()?;
        let line = self.line_number()?;
        Some(format!("{uri_prefix}{}:{line}", file.replace('\\', "/")))
    }

    /// One chip per tag, or a single placeholder chip when there are none.
    pub fn tag_chips(&self) -> Vec<TagChip> {
        if self.tags.is_empty() {
            return vec![TagChip {
                label: NO_TAGS_LABEL.to_string(),
                class_name: "log-tag empty",
            }];
        }
        self.tags
            .iter()
            .map(|t| TagChip {
                label: t.clone(),
                class_name: "log-tag",
            })
            .collect()
    }

    /// Contents of the `.log-file-info` row, `None` when the entry has no file.
    pub fn file_info(&self, uri_prefix: &str) -> Option<FileInfo> {
        let file_name = self.file_name()?.to_string();
        let line_link = self.line_number().zip(self.editor_link(uri_prefix)).map(|(line, href)| {
            LineLink {
                text: format!("Line {line}"),
                title: format!("Open {file_name} at line {line}"),
                href,
            }
        });
        Some(FileInfo {
            file_name,
            line_link,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub label: String,
    pub class_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub file_name: String,
    pub line_link: Option<LineLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLink {
    pub text: String,
    pub title: String,
    pub href: String,
}

/// Split a `data-tags` attribute on whitespace, dropping empty tokens.
pub fn parse_tags(attr: &str) -> Vec<String> {
    attr.split_whitespace().map(str::to_string).collect()
}

/// Distinct tags across all entries, in order of first appearance.
pub fn discover_tags<'a>(entries: impl IntoIterator<Item = &'a EntryMeta>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for entry in entries {
        for tag in &entry.tags {
            if seen.insert(tag.as_str()) {
                out.push(tag.clone());
            }
        }
    }
    out
}

/// Last path component, splitting on both `/` and `\`.
pub fn file_basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

pub fn line_number(attr: Option<&str>) -> Option<&str> {
    attr.filter(|l| !l.is_empty() && *l != NO_LINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_skips_empty_tokens() {
        assert_eq!(parse_tags("ui net "), vec!["ui", "net"]);
        assert_eq!(parse_tags("  render\tgpu\n"), vec!["render", "gpu"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("   ").is_empty());
    }

    #[test]
    fn test_discover_tags_unique_first_seen() {
        let entries = vec![
            EntryMeta::new(Level::Info).with_tags("net ui "),
            EntryMeta::new(Level::Fatal),
            EntryMeta::new(Level::Step).with_tags("ui gpu net"),
        ];
        assert_eq!(discover_tags(&entries), vec!["net", "ui", "gpu"]);
        assert!(discover_tags(&[EntryMeta::new(Level::Info)]).is_empty());
    }

    #[test]
    fn test_file_basename() {
        assert_eq!(file_basename("C:\\src\\app.ts"), "app.ts");
        assert_eq!(file_basename("/home/dev/engine/src/Utils/Logger.cpp"), "Logger.cpp");
        assert_eq!(file_basename("C:\\mixed/dir\\main.cpp"), "main.cpp");
        assert_eq!(file_basename("main.cpp"), "main.cpp");
        assert_eq!(file_basename(""), "");
    }

    #[test]
    fn test_copy_text_with_file_and_line() {
        let meta = EntryMeta::new(Level::Fatal)
            .with_file("C:\\src\\app.ts")
            .with_line("42");
        assert_eq!(meta.copy_text("Boom"), "app.ts:42 - Boom");
        assert_eq!(meta.copy_text("  Boom \n"), "app.ts:42 - Boom");
    }

    #[test]
    fn test_copy_text_fallbacks() {
        let meta = EntryMeta::new(Level::Info).with_line("-1");
        assert_eq!(meta.copy_text("Boom"), "unknown:? - Boom");

        let meta = EntryMeta::new(Level::Info).with_file("src/main.cpp");
        assert_eq!(meta.copy_text("Boom"), "main.cpp:? - Boom");
    }

    #[test]
    fn test_editor_link() {
        let meta = EntryMeta::new(Level::Step)
            .with_file("C:\\src\\app.ts")
            .with_line("42");
        assert_eq!(
            meta.editor_link("vscode://file/").as_deref(),
            Some("vscode://file/C:/src/app.ts:42")
        );

        let no_line = EntryMeta::new(Level::Step).with_file("src/app.ts").with_line("-1");
        assert_eq!(no_line.editor_link("vscode://file/"), None);
        assert_eq!(no_line.file_name(), Some("app.ts"));

        let no_file = EntryMeta::new(Level::Step).with_line("7");
        assert_eq!(no_file.editor_link("vscode://file/"), None);
    }

    #[test]
    fn test_empty_line_is_no_line() {
        let meta = EntryMeta::new(Level::Info).with_file("src/a.cpp").with_line("");
        assert_eq!(meta.line_number(), None);
        assert_eq!(meta.copy_text("Boom"), "a.cpp:? - Boom");
        assert_eq!(meta.editor_link("vscode://file/"), None);
        assert_eq!(line_number(Some("12")), Some("12"));
        assert_eq!(line_number(None), None);
    }

    #[test]
    fn test_tag_chips() {
        let meta = EntryMeta::new(Level::Info).with_tags("ui net");
        let chips = meta.tag_chips();
        let labels: Vec<_> = chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["ui", "net"]);
        assert!(chips.iter().all(|c| c.class_name == "log-tag"));

        let meta = EntryMeta::new(Level::Info).with_tags("");
        assert_eq!(
            meta.tag_chips(),
            vec![TagChip {
                label: NO_TAGS_LABEL.to_string(),
                class_name: "log-tag empty",
            }]
        );
    }

    #[test]
    fn test_file_info_with_line_link() {
        let meta = EntryMeta::new(Level::Warning)
            .with_file("C:\\src\\app.ts")
            .with_line("42");
        let info = meta.file_info("vscode://file/").unwrap();
        assert_eq!(info.file_name, "app.ts");
        assert_eq!(
            info.line_link,
            Some(LineLink {
                text: "Line 42".to_string(),
                title: "Open app.ts at line 42".to_string(),
                href: "vscode://file/C:/src/app.ts:42".to_string(),
            })
        );
    }

    #[test]
    fn test_file_info_without_line() {
        for line in ["-1", ""] {
            let meta = EntryMeta::new(Level::Info).with_file("src/main.cpp").with_line(line);
            let info = meta.file_info("vscode://file/").unwrap();
            assert_eq!(info.file_name, "main.cpp");
            assert_eq!(info.line_link, None);
        }
        let meta = EntryMeta::new(Level::Info).with_file("src/main.cpp");
        assert_eq!(meta.file_info("vscode://file/").unwrap().line_link, None);
    }

    #[test]
    fn test_no_file_means_no_file_info() {
        let meta = EntryMeta::new(Level::Info).with_line("42");
        assert_eq!(meta.file_info("vscode://file/"), None);
    }
}
