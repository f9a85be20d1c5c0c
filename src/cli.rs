use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glyphmark")]
#[command(author, version)]
#[command(about = "Rewrite Markdown emphasis and code into styled Unicode glyphs")]
#[command(
    long_about = "Glyphmark rewrites the text of bold, italic and code spans in Markdown documents \
    into characters from the Unicode Mathematical Alphanumeric Symbols block, so the styling \
    survives in places that only show plain text. Markdown structure is kept byte for byte."
)]
#[command(after_help = "\
EXAMPLES:

    # Convert a file to stdout
    glyphmark convert notes.md

    # Convert from stdin
    echo '**bold** and `code`' | glyphmark convert

    # Show what would change
    glyphmark convert --diff notes.md

    # Convert in place
    glyphmark convert --write notes.md

    # Render sanitized HTML
    glyphmark render notes.md

    # Look up an emoji shortcode
    glyphmark emoji rocket

CONFIGURATION:

Glyphmark looks for configuration files in this order:
  1. Explicit --config path
  2. glyphmark.toml or .glyphmark.toml in current/parent directories
  3. ~/.config/glyphmark/config.toml (XDG)
  4. Built-in defaults

Example .glyphmark.toml:

    flavor = \"gfm\"
    emoji = true

    [extensions]
    footnotes = false

    [render]
    sanitize = true
    skip_html = true")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, glyphmark will \
        search for .glyphmark.toml or glyphmark.toml in the input's directory and its parents, \
        then fall back to ~/.config/glyphmark/config.toml."
    )]
    pub config: Option<PathBuf>,

    /// Leave :shortcode: emoji as typed
    #[arg(long, global = true, env = "GLYPHMARK_NO_EMOJI")]
    pub no_emoji: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a Markdown document to styled glyphs
    #[command(
        long_about = "Rewrite strong, emphasis and code text of a Markdown document into styled \
        Unicode glyphs. Outputs the converted document to stdout by default. Use --write to \
        convert in place or --diff to review the substitutions."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Convert to stdout
    glyphmark convert notes.md

    # Convert from stdin
    echo '*hello*' | glyphmark convert

    # Show a diff (exit code 1 if anything would change)
    glyphmark convert --diff notes.md

    # Convert in place
    glyphmark convert --write notes.md

STYLES:

  - **strong** becomes bold, letters and digits
  - *emphasis* becomes italic
  - emphasis and strong nested in each other become bold italic
  - `code` spans and fenced code become monospace
  - everything else, including the markers themselves, is kept as written")]
    Convert {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        #[arg(
            long_help = "Path to the input file to convert. If not provided, reads from stdin."
        )]
        file: Option<PathBuf>,

        /// Convert the file in place
        #[arg(long, conflicts_with = "diff")]
        #[arg(help = "Write the converted document back to the file")]
        #[arg(
            long_help = "Write the converted output back to the input file, modifying it in \
            place. Cannot be used with stdin input."
        )]
        write: bool,

        /// Show a diff instead of the converted document
        #[arg(long)]
        #[arg(help = "Print a diff of the substitutions (exit code 1 if any)")]
        diff: bool,
    },
    /// Convert a Markdown document and render it to HTML
    #[command(
        long_about = "Convert a Markdown document and render the result to HTML. Raw HTML in \
        the document is dropped and the output is sanitized unless the [render] section of the \
        configuration says otherwise."
    )]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
    /// Show the document tree for debugging
    #[command(
        long_about = "Parse and convert a document and print its tree. By default prints the \
        lossless syntax tree with byte ranges; with --json prints the display tree handed to \
        front-end renderers."
    )]
    Tree {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Print the display tree as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search emoji by name or shortcode
    #[command(after_help = "\
EXAMPLES:

    # Find emoji whose name or shortcode contains 'heart'
    glyphmark emoji heart")]
    Emoji {
        /// Case-insensitive search text
        query: String,
    },
}
