//! Documentation comment extraction
//!
//! Turns the comment metadata attached to a declaration or property into the
//! description, example, and default value shown in the rendered docs.

use crate::syntax::{CommentMeta, DocTag};

/// Documentation pulled out of a comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    /// Untagged text, one line per fragment
    pub description: Option<String>,
    /// Text of the first `@example` tag
    pub example: Option<String>,
    /// Text of the first `@default` / `@defaultValue` tag
    pub default: Option<String>,
}

impl DocComment {
    /// Extract documentation from comment metadata
    ///
    /// Only the first occurrence of each tag kind is honored; repeated tags
    /// are ignored rather than merged.
    pub fn extract(meta: &CommentMeta) -> Self {
        let description: Vec<&str> = meta
            .fragments
            .iter()
            .map(|fragment| fragment.trim())
            .filter(|fragment| !fragment.is_empty())
            .collect();

        Self {
            description: (!description.is_empty()).then(|| description.join("\n")),
            example: first_tag(&meta.tags, Tag::Example),
            default: first_tag(&meta.tags, Tag::Default),
        }
    }

    /// Check if nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.example.is_none() && self.default.is_none()
    }
}

/// Tag kinds the renderer knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Example,
    Default,
}

impl Tag {
    fn from_name(name: &str) -> Option<Self> {
        match name.trim_start_matches('@') {
            "example" => Some(Tag::Example),
            "default" | "defaultValue" => Some(Tag::Default),
            _ => None,
        }
    }
}

fn first_tag(tags: &[DocTag], kind: Tag) -> Option<String> {
    let tag = tags
        .iter()
        .find(|tag| Tag::from_name(&tag.name) == Some(kind))?;
    tag.text
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

impl CommentMeta {
    /// Split raw JSDoc text into untagged fragments and tags
    ///
    /// Accepts either a full `/** ... */` block or its bare contents. Every
    /// line before the first `@tag` is a fragment; a tag's text runs until the
    /// next tag line.
    pub fn from_jsdoc(text: &str) -> Self {
        let body = text.trim();
        // Strip the closing marker before the second `*` of `/**`.
        let body = match body.strip_prefix("/*") {
            Some(rest) => {
                let rest = rest.strip_suffix("*/").unwrap_or(rest);
                rest.strip_prefix('*').unwrap_or(rest)
            }
            None => body,
        };

        let mut meta = CommentMeta::default();
        let mut current: Option<(String, Vec<String>)> = None;

        for line in body.lines() {
            let line = strip_gutter(line);

            if let Some(tagged) = line.strip_prefix('@') {
                if let Some((name, lines)) = current.take() {
                    meta.tags.push(finish_tag(name, &lines));
                }
                let (name, rest) = tagged
                    .split_once(char::is_whitespace)
                    .unwrap_or((tagged, ""));
                current = Some((name.to_string(), vec![rest.trim().to_string()]));
                continue;
            }

            match current.as_mut() {
                Some((_, lines)) => lines.push(line.to_string()),
                None if !line.is_empty() => meta.fragments.push(line.to_string()),
                None => {}
            }
        }

        if let Some((name, lines)) = current {
            meta.tags.push(finish_tag(name, &lines));
        }

        meta
    }
}

/// Strip the leading ` * ` of a JSDoc line
fn strip_gutter(line: &str) -> &str {
    let line = line.trim_start();
    let line = match line.strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    };
    line.trim_end()
}

fn finish_tag(name: String, lines: &[String]) -> DocTag {
    let text = lines.join("\n").trim().to_string();
    DocTag {
        name,
        text: (!text.is_empty()).then_some(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_from_fragments() {
        let meta = CommentMeta {
            fragments: vec!["First line.".to_string(), "  Second line. ".to_string()],
            tags: Vec::new(),
        };
        let doc = DocComment::extract(&meta);
        assert_eq!(doc.description.as_deref(), Some("First line.\nSecond line."));
        assert!(doc.example.is_none());
        assert!(doc.default.is_none());
    }

    #[test]
    fn test_empty_comment() {
        let doc = DocComment::extract(&CommentMeta::default());
        assert!(doc.is_empty());

        let blank = CommentMeta::text("   ");
        assert!(DocComment::extract(&blank).description.is_none());
    }

    #[test]
    fn test_tags() {
        let meta = CommentMeta::text("Port to listen on.")
            .with_tag("default", "8080")
            .with_tag("example", "3000");
        let doc = DocComment::extract(&meta);
        assert_eq!(doc.default.as_deref(), Some("8080"));
        assert_eq!(doc.example.as_deref(), Some("3000"));
    }

    #[test]
    fn test_first_tag_wins() {
        let meta = CommentMeta::default()
            .with_tag("example", "first")
            .with_tag("example", "second")
            .with_tag("defaultValue", "1")
            .with_tag("default", "2");
        let doc = DocComment::extract(&meta);
        assert_eq!(doc.example.as_deref(), Some("first"));
        assert_eq!(doc.default.as_deref(), Some("1"));
    }

    #[test]
    fn test_unknown_tags_ignored() {
        let meta = CommentMeta::text("Text.").with_tag("deprecated", "use other");
        let doc = DocComment::extract(&meta);
        assert_eq!(doc.description.as_deref(), Some("Text."));
        assert!(doc.example.is_none());
    }

    #[test]
    fn test_from_jsdoc_block() {
        let text = "/**\n * A user account.\n *\n * Created on signup.\n * @default null\n * @example\n * {\n *   id: 1\n * }\n */";
        let meta = CommentMeta::from_jsdoc(text);
        assert_eq!(meta.fragments, vec!["A user account.", "Created on signup."]);
        assert_eq!(meta.tags.len(), 2);
        assert_eq!(meta.tags[0].name, "default");
        assert_eq!(meta.tags[0].text.as_deref(), Some("null"));
        assert_eq!(meta.tags[1].name, "example");
        assert_eq!(meta.tags[1].text.as_deref(), Some("{\n  id: 1\n}"));
    }

    #[test]
    fn test_from_jsdoc_bare_text() {
        let meta = CommentMeta::from_jsdoc("Just text");
        assert_eq!(meta.fragments, vec!["Just text"]);
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_from_jsdoc_empty_blocks() {
        for text in ["/**/", "/***/", "/** */", "/*\n */"] {
            let meta = CommentMeta::from_jsdoc(text);
            assert!(meta.is_empty(), "{text:?} gave {meta:?}");
        }
    }

    #[test]
    fn test_from_jsdoc_single_line() {
        let meta = CommentMeta::from_jsdoc("/* Plain block. */");
        assert_eq!(meta.fragments, vec!["Plain block."]);
    }

    #[test]
    fn test_from_jsdoc_tag_without_text() {
        let meta = CommentMeta::from_jsdoc("/** @example */");
        assert_eq!(meta.tags.len(), 1);
        assert!(meta.tags[0].text.is_none());
        assert!(DocComment::extract(&meta).example.is_none());
    }
}
