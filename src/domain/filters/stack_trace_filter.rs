//! Stack trace filter implementation.

use regex::Regex;
use serde_json::Value;

use super::Filter;
use crate::domain::value::to_display_string;

/// `<ws>at <class.method>(<file>:<line>)...[<coords>]`
const FRAME_PATTERN: &str =
    r"^(\s*)(at)\s+([A-Za-z0-9_.$]+(\.([A-Za-z0-9_$]+))*)\((.*)?:(\d+)\).*\[(.*)\]$";

/// Parts of a stack frame line that can be linked to source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame<'a> {
    pub indent: &'a str,
    pub at: &'a str,
    pub class_and_method: &'a str,
    pub file_name: &'a str,
    pub line: &'a str,
    pub coords: &'a str,
}

impl StackFrame<'_> {
    /// Class part of `class_and_method`: everything before the last `.`.
    pub fn class_name(&self) -> &str {
        match self.class_and_method.rfind('.') {
            Some(idx) if idx > 0 => &self.class_and_method[..idx],
            _ => self.class_and_method,
        }
    }
}

/// Renders stack frames as an HTML list, linking frames to a source view.
pub struct StackTraceFilter {
    frame: Regex,
    source_route: String,
    list_class: String,
}

impl StackTraceFilter {
    /// Create a new StackTraceFilter.
    ///
    /// `source_route` is the link prefix (e.g. `#/source/view`) and
    /// `list_class` the class of the surrounding `<ul>`.
    ///
    /// # Errors
    ///
    /// Returns error if the frame pattern fails to compile.
    pub fn new(source_route: &str, list_class: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            frame: Regex::new(FRAME_PATTERN)?,
            source_route: source_route.trim_end_matches('/').to_string(),
            list_class: list_class.to_string(),
        })
    }

    /// Parse a frame line. Returns `None` unless class/method, file name
    /// and coordinates are all present.
    pub fn parse<'a>(&self, text: &'a str) -> Option<StackFrame<'a>> {
        let caps = self.frame.captures(text)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or("");

        let frame = StackFrame {
            indent: group(1),
            at: group(2),
            class_and_method: group(3),
            file_name: group(6),
            line: group(7),
            coords: group(8),
        };
        if frame.class_and_method.is_empty() || frame.file_name.is_empty() || frame.coords.is_empty()
        {
            return None;
        }
        Some(frame)
    }

    /// Source view link for a frame.
    pub fn source_link(&self, frame: &StackFrame<'_>) -> String {
        let mut link = format!(
            "{}/{}/class/{}/{}",
            self.source_route,
            frame.coords,
            frame.class_name(),
            frame.file_name
        );
        if !frame.line.is_empty() {
            link.push_str("?line=");
            link.push_str(frame.line);
        }
        link
    }

    /// Render one frame as a list item, linked when it parses.
    pub fn format_frame(&self, text: &str) -> String {
        let body = match self.parse(text) {
            Some(frame) => format!(
                "{}{} <a href='{}'>{}</a>({}:{})[{}]",
                frame.indent,
                frame.at,
                self.source_link(&frame),
                frame.class_and_method,
                frame.file_name,
                frame.line,
                frame.coords
            ),
            None => text.to_string(),
        };
        format!("<li>{}</li>", body)
    }

    /// Render frames as a complete `<ul>` list.
    pub fn format_frames<'a, I>(&self, frames: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let items: String = frames
            .into_iter()
            .map(|frame| self.format_frame(frame))
            .collect();
        format!("<ul class=\"{}\">{}</ul>", self.list_class, items)
    }
}

impl Filter for StackTraceFilter {
    fn name(&self) -> &'static str {
        "stackTracify"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["stack-trace"]
    }

    fn apply(&self, input: Option<&Value>, _args: &[Value]) -> Option<Value> {
        let lines: Vec<String> = match input {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| to_display_string(Some(item)))
                .collect(),
            other => vec![to_display_string(other)],
        };
        Some(Value::String(
            self.format_frames(lines.iter().map(String::as_str)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FRAME: &str =
        "\tat org.example.Service.handle(Service.java:42) ~[core-1.0.jar:1.0][org.example:core:1.0]";

    fn filter() -> StackTraceFilter {
        StackTraceFilter::new("#/source/view", "stack-trace").unwrap()
    }

    #[test]
    fn test_parse_frame() {
        let filter = filter();
        let frame = filter.parse(FRAME).unwrap();
        assert_eq!(frame.indent, "\t");
        assert_eq!(frame.class_and_method, "org.example.Service.handle");
        assert_eq!(frame.class_name(), "org.example.Service");
        assert_eq!(frame.file_name, "Service.java");
        assert_eq!(frame.line, "42");
        assert_eq!(frame.coords, "org.example:core:1.0");
    }

    #[test]
    fn test_format_linked_frame() {
        assert_eq!(
            filter().format_frame(FRAME),
            "<li>\tat <a href='#/source/view/org.example:core:1.0/class/org.example.Service/Service.java?line=42'>\
             org.example.Service.handle</a>(Service.java:42)[org.example:core:1.0]</li>"
        );
    }

    #[test]
    fn test_non_matching_frame_kept() {
        assert_eq!(
            filter().format_frame("java.lang.IllegalStateException: boom"),
            "<li>java.lang.IllegalStateException: boom</li>"
        );
        // No coordinates in brackets
        assert_eq!(
            filter().format_frame("  at a.B.c(B.java:1)[]"),
            "<li>  at a.B.c(B.java:1)[]</li>"
        );
    }

    #[test]
    fn test_non_ascii_class_not_linked() {
        assert_eq!(
            filter().format_frame("at café.Main.run(Main.java:3)[g:a:1]"),
            "<li>at café.Main.run(Main.java:3)[g:a:1]</li>"
        );
    }

    #[test]
    fn test_non_string_frames_are_coerced() {
        let filter = filter();
        assert_eq!(
            filter.apply(Some(&json!([42, null, {"a": 1}])), &[]),
            Some(json!(
                "<ul class=\"stack-trace\"><li>42</li><li>null</li><li>[object Object]</li></ul>"
            ))
        );
        assert_eq!(
            filter.apply(None, &[]),
            Some(json!("<ul class=\"stack-trace\"><li>undefined</li></ul>"))
        );
    }

    #[test]
    fn test_class_without_dot() {
        let filter = filter();
        let frame = filter.parse("at main(App.java:3)[g:a:1]").unwrap();
        assert_eq!(frame.class_name(), "main");
        assert_eq!(
            filter.source_link(&frame),
            "#/source/view/g:a:1/class/main/App.java?line=3"
        );
    }

    #[test]
    fn test_apply_array_wraps_list() {
        let out = filter()
            .apply(Some(&json!(["Exception: x", "at a.B.c(B.java:7)[g:a:2]"])), &[])
            .unwrap();
        assert_eq!(
            out,
            json!(
                "<ul class=\"stack-trace\"><li>Exception: x</li>\
                 <li>at <a href='#/source/view/g:a:2/class/a.B/B.java?line=7'>a.B.c</a>(B.java:7)[g:a:2]</li></ul>"
            )
        );
    }

    #[test]
    fn test_apply_single_string_and_route_slash() {
        let filter = StackTraceFilter::new("/src/", "trace").unwrap();
        let out = filter.apply(Some(&json!("plain line")), &[]);
        assert_eq!(
            out,
            Some(json!("<ul class=\"trace\"><li>plain line</li></ul>"))
        );
    }
}
