// JSDoc Extractor
//
// Extracts JSDoc comments and tags.

use super::entities::*;
use super::host::DocComment;

/// Extracts JSDoc documentation.
pub struct JsDocExtractor;

impl JsDocExtractor {
    /// Parse JSDoc comment text. Description lines keep their line breaks
    /// and blank lines separate paragraphs. Lines inside a fenced code block
    /// are never read as tags.
    pub fn parse(comment: &str) -> (String, Vec<JsDocTag>) {
        let mut description: Vec<&str> = Vec::new();
        let mut tags = Vec::new();

        let mut in_description = true;
        let mut in_fence = false;
        let mut current_tag: Option<(String, String)> = None;

        for line in comment.lines() {
            let content = Self::strip_line(line);
            let trimmed = content.trim();

            if trimmed.starts_with("```") {
                in_fence = !in_fence;
            }

            if !in_fence && trimmed.starts_with('@') {
                // Save previous tag if any
                if let Some((name, text)) = current_tag.take() {
                    tags.push(JsDocTag { name, text });
                }

                in_description = false;

                if let Some(space_pos) = trimmed.find(char::is_whitespace) {
                    let tag_name = trimmed[1..space_pos].to_string();
                    let tag_text = trimmed[space_pos..].trim().to_string();
                    current_tag = Some((tag_name, tag_text));
                } else {
                    let tag_name = trimmed[1..].to_string();
                    current_tag = Some((tag_name, String::new()));
                }
            } else if in_description {
                // Runs of blank lines collapse into one paragraph break
                if !trimmed.is_empty() || description.last().is_some_and(|l| !l.is_empty()) {
                    description.push(if trimmed.is_empty() { "" } else { content });
                }
            } else if let Some((_, ref mut text)) = current_tag {
                if !trimmed.is_empty() {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(trimmed);
                }
            }
        }

        if let Some((name, text)) = current_tag {
            tags.push(JsDocTag { name, text });
        }

        (description.join("\n").trim().to_string(), tags)
    }

    /// One comment line without its indentation, the leading `*` and the
    /// single space after it. Deeper indentation is kept for code samples.
    fn strip_line(line: &str) -> &str {
        let line = line.trim_start();
        let line = match line.strip_prefix('*') {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        };
        line.trim_end()
    }

    /// Get tag value by name.
    pub fn get_tag<'a>(tags: &'a [JsDocTag], name: &str) -> Option<&'a str> {
        tags.iter().find(|t| t.name == name).map(|t| t.text.as_str())
    }

    /// Check if tags include a specific tag.
    pub fn has_tag(tags: &[JsDocTag], name: &str) -> bool {
        tags.iter().any(|t| t.name == name)
    }

    /// Parse @param tag into parameter name and description. A leading
    /// `{Type}` and a `-` separator are dropped.
    pub fn parse_param_tag(text: &str) -> Option<(String, String)> {
        let text = match text.strip_prefix('{') {
            Some(rest) => rest.split_once('}').map(|(_, after)| after.trim_start()).unwrap_or(rest),
            None => text,
        };

        let mut parts = text.splitn(2, char::is_whitespace);
        let name = parts.next().filter(|name| !name.is_empty())?.to_string();
        let description = parts.next().unwrap_or("").trim();
        let description = description.strip_prefix('-').unwrap_or(description).trim();
        Some((name, description.to_string()))
    }

    /// Description of the named parameter from a set of `@param` tags.
    pub fn param_description(tags: &[JsDocTag], param_name: &str) -> String {
        tags.iter()
            .filter(|t| t.name == "param")
            .filter_map(|t| Self::parse_param_tag(&t.text))
            .find(|(name, _)| name == param_name)
            .map(|(_, description)| description)
            .unwrap_or_default()
    }

    /// Strip the `/**` and `*/` framing from a block comment.
    pub fn strip_comment(raw: &str) -> &str {
        let raw = raw.trim();
        let raw = raw.strip_prefix("/**").unwrap_or(raw);
        raw.strip_suffix("*/").unwrap_or(raw)
    }

    /// The `/** ... */` block that immediately precedes `anchor`, separated
    /// from it only by whitespace.
    pub fn leading_jsdoc(source_text: &str, anchor: u32) -> Option<&str> {
        let before = source_text.get(..anchor as usize)?.trim_end();
        if !before.ends_with("*/") {
            return None;
        }

        let start = before.rfind("/**")?;
        let comment = &before[start..];
        // `/**/` is an empty block comment, not JSDoc
        if comment.len() < 5 || comment[3..comment.len() - 2].contains("*/") {
            return None;
        }

        Some(comment)
    }

    /// Parsed documentation for the node starting at `anchor`. Nodes
    /// without a leading JSDoc block get an empty comment.
    pub fn leading_doc_comment(source_text: &str, anchor: u32) -> DocComment {
        let Some(raw) = Self::leading_jsdoc(source_text, anchor) else {
            return DocComment::default();
        };

        let (description, jsdoc_tags) = Self::parse(Self::strip_comment(raw));
        DocComment {
            description,
            jsdoc_tags,
            raw_comment: raw.to_string(),
        }
    }
}
