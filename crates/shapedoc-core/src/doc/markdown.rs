//! Markdown documentation generator

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use super::crosslink::{DeclarationSet, LinkedTypeShape};
use super::types::{Declaration, InterfaceDeclaration, PropertyDeclaration};

/// Column headers of the property table
const TABLE_HEADERS: [&str; 6] = ["Property", "Type", "Optional", "Default", "Description", "Example"];

/// How interface bodies are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Column-aligned markdown tables
    #[default]
    #[serde(alias = "table")]
    Tables,
    /// A commented object literal inside a `<pre>` block
    Json,
}

/// Unrecognized output format name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown output format '{0}', expected one of: tables, json")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tables" | "table" => Ok(OutputFormat::Tables),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Tables => f.write_str("tables"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Options controlling the generated document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Body format for interfaces
    pub format: OutputFormat,
    /// Top-level `#` heading
    pub title: Option<String>,
    /// Emit a list of links to every declaration before the sections
    pub table_of_contents: bool,
}

impl RenderOptions {
    /// Options for a format, with no title or table of contents
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}

/// Generates Markdown documentation from linked declarations
pub struct MarkdownGenerator;

impl MarkdownGenerator {
    /// Generate the document
    pub fn generate(declarations: &DeclarationSet<LinkedTypeShape>, options: &RenderOptions) -> String {
        let mut output = String::new();

        if let Some(title) = &options.title {
            writeln!(output, "# {}", title).unwrap();
            writeln!(output).unwrap();
        }

        if options.table_of_contents && !declarations.is_empty() {
            for name in declarations.names() {
                writeln!(output, "- {}", markdown_link(name)).unwrap();
            }
            writeln!(output).unwrap();
        }

        for decl in declarations.iter() {
            Self::write_declaration(&mut output, decl, options.format);
        }

        let trimmed = output.trim_end_matches('\n').len();
        output.truncate(trimmed);
        if !output.is_empty() {
            output.push('\n');
        }
        output
    }

    fn write_declaration(output: &mut String, decl: &Declaration<LinkedTypeShape>, format: OutputFormat) {
        writeln!(output, "## {}", decl.name()).unwrap();
        writeln!(output).unwrap();

        if let Some(description) = decl.description() {
            writeln!(output, "{}", description).unwrap();
            writeln!(output).unwrap();
        }

        match (decl, format) {
            (Declaration::TypeAlias(alias), _) => {
                writeln!(output, "Type: {}", alias.shape.render(markdown_link)).unwrap();
            }
            (Declaration::Interface(iface), OutputFormat::Tables) => Self::write_table(output, iface),
            (Declaration::Interface(iface), OutputFormat::Json) => Self::write_json(output, iface),
        }
        writeln!(output).unwrap();

        if let Some(example) = decl.example() {
            writeln!(output, "Example:").unwrap();
            writeln!(output).unwrap();
            if example.trim_start().starts_with("```") {
                writeln!(output, "{}", example).unwrap();
            } else {
                writeln!(output, "```").unwrap();
                writeln!(output, "{}", example).unwrap();
                writeln!(output, "```").unwrap();
            }
            writeln!(output).unwrap();
        }
    }

    fn write_table(output: &mut String, iface: &InterfaceDeclaration<LinkedTypeShape>) {
        let rows: Vec<[String; 6]> = iface.properties.iter().map(Self::table_row).collect();

        let mut widths = TABLE_HEADERS.map(|header| header.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        Self::write_row(output, &TABLE_HEADERS, &widths);
        let separator = widths.map(|width| "-".repeat(width));
        Self::write_row(output, &separator, &widths);
        for row in &rows {
            Self::write_row(output, row, &widths);
        }
    }

    fn table_row(prop: &PropertyDeclaration<LinkedTypeShape>) -> [String; 6] {
        [
            prop.name.clone(),
            table_cell(&prop.shape.render(markdown_link)),
            if prop.optional { "Yes" } else { "No" }.to_string(),
            prop.default.as_deref().map_or_else(|| "-".to_string(), table_cell),
            prop.description.as_deref().map(table_cell).unwrap_or_default(),
            prop.example.as_deref().map(table_cell).unwrap_or_default(),
        ]
    }

    fn write_row<S: AsRef<str>>(output: &mut String, cells: &[S], widths: &[usize]) {
        output.push('|');
        for (cell, width) in cells.iter().zip(widths) {
            write!(output, " {:<width$} |", cell.as_ref(), width = width).unwrap();
        }
        output.push('\n');
    }

    fn write_json(output: &mut String, iface: &InterfaceDeclaration<LinkedTypeShape>) {
        writeln!(output, "<pre>").unwrap();
        writeln!(output, "{{").unwrap();

        for prop in &iface.properties {
            if let Some(description) = &prop.description {
                for line in description.lines() {
                    writeln!(output, "  // {}", line).unwrap();
                }
            }
            if let Some(default) = &prop.default {
                Self::write_labeled_comment(output, "Default", default);
            }
            if let Some(example) = &prop.example {
                Self::write_labeled_comment(output, "Example", example);
            }

            let marker = if prop.optional { "?" } else { "" };
            writeln!(
                output,
                "  {}{}: {},",
                prop.name,
                marker,
                prop.shape.render(html_link)
            )
            .unwrap();
        }

        writeln!(output, "}}").unwrap();
        writeln!(output, "</pre>").unwrap();
    }

    fn write_labeled_comment(output: &mut String, label: &str, text: &str) {
        let mut lines = text.lines();
        writeln!(output, "  // {}: {}", label, lines.next().unwrap_or_default()).unwrap();
        for line in lines {
            writeln!(output, "  // {}", line).unwrap();
        }
    }
}

/// Markdown link to a declaration heading
fn markdown_link(name: &str) -> String {
    format!("[{}](#{})", name, name)
}

/// Anchor tag to a declaration heading, for use inside HTML blocks
fn html_link(name: &str) -> String {
    format!("<a href=\"#{}\">{}</a>", name, name)
}

/// Keep a table cell on one line and inside its column
fn table_cell(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\n', "<br>")
        .replace('|', "\\|")
}
