//! Generate the markdown-writer API reference with markdown-writer itself.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use markdown_writer::{inline, Config, ListItem, MarkdownWriter, CRLF, LF};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "markdown-writer")]
#[command(version, about = "Generate the markdown-writer API reference", long_about = None)]
struct Cli {
    /// Write the reference to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Use `\r\n` line separators
    #[arg(long)]
    crlf: bool,

    /// Wrap paragraphs to this many columns
    #[arg(long, value_name = "COLUMNS")]
    max_width: Option<usize>,
}

/// A documented method and the example shown for it.
struct Method {
    name: &'static str,
    description: &'static str,
    example: Option<Example>,
}

struct Example {
    code: &'static str,
    result: String,
}

struct Category {
    name: &'static str,
    description: &'static str,
    methods: Vec<Method>,
}

fn method(name: &'static str, description: &'static str) -> Method {
    Method {
        name,
        description,
        example: None,
    }
}

impl Method {
    /// Attach an example whose result is rendered by `write` on a fresh writer.
    fn example(
        mut self,
        config: &Config,
        code: &'static str,
        write: impl FnOnce(&mut MarkdownWriter) -> anyhow::Result<()>,
    ) -> anyhow::Result<Self> {
        let mut md = MarkdownWriter::with_config(config.clone());
        write(&mut md).with_context(|| format!("rendering the `{}` example", self.name))?;
        self.example = Some(Example {
            code,
            result: md.markdown(),
        });
        Ok(self)
    }

    fn inline_example(mut self, code: &'static str, result: String) -> Self {
        self.example = Some(Example { code, result });
        self
    }
}

fn categories(config: &Config) -> anyhow::Result<Vec<Category>> {
    Ok(vec![
        Category {
            name: "Inline Methods",
            description: "Methods that transform input to return a formatted markdown string",
            methods: vec![
                method("italic", "Format italic string")
                    .inline_example(r#"md.italic("test");"#, inline::italic("test")),
                method("bold", "Format bold string")
                    .inline_example(r#"md.bold("test");"#, inline::bold("test")),
                method("superscript", "Format superscript")
                    .inline_example(r#"md.superscript("test");"#, inline::superscript("test")),
                method("subscript", "Format subscript")
                    .inline_example(r#"md.subscript("test");"#, inline::subscript("test")),
                method("code", "Format inline code")
                    .inline_example(r#"md.code("test");"#, inline::code("test")),
                method("strikethrough", "Format strikethrough").inline_example(
                    r#"md.strikethrough("test");"#,
                    inline::strikethrough("test"),
                ),
                method("link", "Format an inline link").inline_example(
                    r#"md.link("test", "http://example.com");"#,
                    inline::link("test", "http://example.com"),
                ),
                method("image", "Format an inline image").inline_example(
                    r#"md.image("test", "path/to/file.png");"#,
                    inline::image("test", "path/to/file.png"),
                ),
            ],
        },
        Category {
            name: "Block Methods",
            description: "Methods that write a block to the markdown string",
            methods: vec![
                method("write", "Append text as is, without any spacing").example(
                    config,
                    r#"md.write("some ").write("text");"#,
                    |md| {
                        md.write("some ").write("text");
                        Ok(())
                    },
                )?,
                method("new_line", "Append the line separator a number of times").example(
                    config,
                    r#"md.write("a").new_line(2).write("b");"#,
                    |md| {
                        md.write("a").new_line(2).write("b");
                        Ok(())
                    },
                )?,
                method("nl", "Shorthand for `new_line`").example(
                    config,
                    r#"md.write("a").nl(1).write("b");"#,
                    |md| {
                        md.write("a").nl(1).write("b");
                        Ok(())
                    },
                )?,
                method("h1", "Write a level 1 heading").example(
                    config,
                    r#"md.h1("Heading");"#,
                    |md| {
                        md.h1("Heading");
                        Ok(())
                    },
                )?,
                method("h2", "Write a level 2 heading").example(
                    config,
                    r#"md.h2("Heading");"#,
                    |md| {
                        md.h2("Heading");
                        Ok(())
                    },
                )?,
                method("h3", "Write a level 3 heading").example(
                    config,
                    r#"md.h3("Heading");"#,
                    |md| {
                        md.h3("Heading");
                        Ok(())
                    },
                )?,
                method("h4", "Write a level 4 heading").example(
                    config,
                    r#"md.h4("Heading");"#,
                    |md| {
                        md.h4("Heading");
                        Ok(())
                    },
                )?,
                method("h5", "Write a level 5 heading").example(
                    config,
                    r#"md.h5("Heading");"#,
                    |md| {
                        md.h5("Heading");
                        Ok(())
                    },
                )?,
                method("h6", "Write a level 6 heading").example(
                    config,
                    r#"md.h6("Heading");"#,
                    |md| {
                        md.h6("Heading");
                        Ok(())
                    },
                )?,
                method("p", "Write a paragraph").example(
                    config,
                    r#"md.p("first").p("second");"#,
                    |md| {
                        md.p("first").p("second");
                        Ok(())
                    },
                )?,
                method("hr", "Write a horizontal rule").example(
                    config,
                    r#"md.p("above").hr().p("below");"#,
                    |md| {
                        md.p("above").hr().p("below");
                        Ok(())
                    },
                )?,
                method("block", "Write text separated from its neighbours by a blank line").example(
                    config,
                    r#"md.block("thing 1").block("thing 2");"#,
                    |md| {
                        md.block("thing 1").block("thing 2");
                        Ok(())
                    },
                )?,
                method("ul", "Write an unordered list, optionally loose").example(
                    config,
                    r#"md.ul([ListItem::from("a"), ListItem::sublist(["b", "c"])], false);"#,
                    |md| {
                        md.ul([ListItem::from("a"), ListItem::sublist(["b", "c"])], false);
                        Ok(())
                    },
                )?,
                method("ol", "Write an ordered list, optionally loose").example(
                    config,
                    r#"md.ol(["a", "b"], true);"#,
                    |md| {
                        md.ol(["a", "b"], true);
                        Ok(())
                    },
                )?,
                method("ul_item", "Write one unordered item at an indentation level").example(
                    config,
                    r#"md.ul_item("a", 0).ul_item("b", 1);"#,
                    |md| {
                        md.ul_item("a", 0).ul_item("b", 1);
                        Ok(())
                    },
                )?,
                method("ol_item", "Write one ordered item with a custom ordinal").example(
                    config,
                    r#"md.ol_item("a", 0, "i").ol_item("b", 0, "ii");"#,
                    |md| {
                        md.ol_item("a", 0, "i").ol_item("b", 0, "ii");
                        Ok(())
                    },
                )?,
                method("block_quote", "Write a block quote from text or lines").example(
                    config,
                    r#"md.block_quote("text\n\nmore").block_quote(["line 1", "line 2"]);"#,
                    |md| {
                        md.block_quote("text\n\nmore").block_quote(["line 1", "line 2"]);
                        Ok(())
                    },
                )?,
                method(
                    "block_quote_with",
                    "Write a block quote built with a fresh writer, allowing nested quotes",
                )
                .example(
                    config,
                    r#"md.block_quote_with(|md| { md.p("outer").block_quote("inner"); });"#,
                    |md| {
                        md.block_quote_with(|md| {
                            md.p("outer").block_quote("inner");
                        });
                        Ok(())
                    },
                )?,
                method("code_block", "Write a fenced code block with an optional language").example(
                    config,
                    r#"md.code_block(["fn main() {", "}"], "rust");"#,
                    |md| {
                        md.code_block(["fn main() {", "}"], "rust");
                        Ok(())
                    },
                )?,
                method("table", "Write a table whose first row is the header").example(
                    config,
                    r#"md.table([["name", "value"], ["a", "1"]]);"#,
                    |md| {
                        md.table([["name", "value"], ["a", "1"]]);
                        Ok(())
                    },
                )?,
                method("table_value", "Write a table from a JSON array of rows").example(
                    config,
                    r#"md.table_value(&json!([["name", "stars"], ["serde", 9000]]))?;"#,
                    |md| {
                        md.table_value(&serde_json::json!([["name", "stars"], ["serde", 9000]]))?;
                        Ok(())
                    },
                )?,
            ],
        },
        Category {
            name: "Configuration/Misc",
            description: "All other methods",
            methods: vec![
                method("set_line_separator", "Set the line separator used by later writes").example(
                    config,
                    r#"md.set_line_separator("\r\n").p("a").p("b");"#,
                    |md| {
                        md.set_line_separator("\r\n").p("a").p("b");
                        Ok(())
                    },
                )?,
                method("line_separator", "Get the configured line separator"),
                method("max_width", "Wrap paragraphs to a maximum width").example(
                    config,
                    r#"md.max_width(Some(10)).p("the quick brown fox");"#,
                    |md| {
                        md.max_width(Some(10)).p("the quick brown fox");
                        Ok(())
                    },
                )?,
                method("markdown", "Get the document without trailing line separators"),
            ],
        },
    ])
}

fn api_reference(config: Config) -> anyhow::Result<String> {
    let mut md = MarkdownWriter::with_config(config.clone());
    md.h1("Markdown Writer")
        .h3("Description")
        .write(format!(
            "A library for generating markdown. It builds documents following the {} \
             specification and supports some common extensions including:",
            inline::link("CommonMark", "https://commonmark.org")
        ))
        .ul(
            [
                "Superscripts",
                "Subscripts",
                "Tables",
                "Strikethrough (Using `~~syntax~~`)",
            ],
            false,
        )
        .h3("Installation")
        .code_block("cargo add markdown-writer", "sh")
        .h1("API")
        .h5("Create a markdown writer")
        .code_block(
            [
                "use markdown_writer::MarkdownWriter;",
                "",
                "let mut md = MarkdownWriter::new();",
            ],
            "rust",
        );

    for category in categories(&config)? {
        tracing::debug!(category = category.name, methods = category.methods.len());
        md.h2(category.name);
        if !category.description.is_empty() {
            md.p(category.description);
        }
        for method in category.methods {
            md.h3(method.name).p(method.description);
            if let Some(example) = method.example {
                md.code_block(example.code, "rust")
                    .code_block(example.result, "markdown");
            }
        }
    }

    Ok(md.markdown())
}

fn main() -> anyhow::Result<()> {
    _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    let config = Config {
        line_separator: if cli.crlf { CRLF } else { LF }.into(),
        max_width: cli.max_width,
    };

    let reference = api_reference(config)?;
    match cli.output {
        Some(path) => {
            fs::write(&path, reference)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote API reference");
        }
        None => io::stdout()
            .write_all(reference.as_bytes())
            .context("failed to write to stdout")?,
    }
    Ok(())
}
