use std::path::Path;

pub const FOLDER_ICON: &str = "icons/folder.svg";

/// Static document classification by file extension. Total: anything
/// unrecognized is `PlainText`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
    Rust,
    Go,
    Python,
    JavaScript,
    TypeScript,
    Json,
    Yaml,
    Toml,
    Markdown,
    Html,
    Css,
    C,
    Cpp,
    Java,
    Shell,
    PlainText,
}

impl DocKind {
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            return Self::PlainText;
        };
        match ext.to_ascii_lowercase().as_str() {
            "rs" => Self::Rust,
            "go" => Self::Go,
            "py" | "pyi" => Self::Python,
            "js" | "mjs" | "cjs" | "jsx" => Self::JavaScript,
            "ts" | "mts" | "cts" | "tsx" => Self::TypeScript,
            "json" => Self::Json,
            "yml" | "yaml" => Self::Yaml,
            "toml" => Self::Toml,
            "md" | "markdown" => Self::Markdown,
            "html" | "htm" => Self::Html,
            "css" => Self::Css,
            "c" | "h" => Self::C,
            "cc" | "cpp" | "cxx" | "c++" | "hpp" | "hh" | "hxx" | "h++" => Self::Cpp,
            "java" => Self::Java,
            "sh" | "bash" | "zsh" => Self::Shell,
            _ => Self::PlainText,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Rust => "Rust",
            Self::Go => "Go",
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
            Self::Markdown => "Markdown",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::C => "C",
            Self::Cpp => "C++",
            Self::Java => "Java",
            Self::Shell => "Shell",
            Self::PlainText => "Plain Text",
        }
    }

    pub fn icon_ref(self) -> &'static str {
        match self {
            Self::Rust => "icons/rust.svg",
            Self::Go => "icons/go.svg",
            Self::Python => "icons/python.svg",
            Self::JavaScript => "icons/javascript.svg",
            Self::TypeScript => "icons/typescript.svg",
            Self::Json => "icons/json.svg",
            Self::Yaml => "icons/yaml.svg",
            Self::Toml => "icons/toml.svg",
            Self::Markdown => "icons/markdown.svg",
            Self::Html => "icons/html.svg",
            Self::Css => "icons/css.svg",
            Self::C | Self::Cpp => "icons/c.svg",
            Self::Java => "icons/java.svg",
            Self::Shell => "icons/shell.svg",
            Self::PlainText => "icons/file.svg",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/doc_kind.rs"]
mod tests;
