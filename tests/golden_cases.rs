//! Golden test cases for the glyph conversion.
//!
//! Each test case is a directory under `tests/cases/` containing:
//! - `input.md` - Source document
//! - `expected.md` - Expected converted output
//! - `glyphmark.toml` - (Optional) Config to test specific flavors/extensions
//!
//! Run with `UPDATE_EXPECTED=1 cargo test` to regenerate expected outputs.

use glyphmark::{Config, convert, parse};
use std::{fs, path::Path};

/// Load config from test case directory if it exists.
fn load_test_config(dir: &Path) -> Option<Config> {
    let config_path = dir.join("glyphmark.toml");
    if config_path.exists() {
        let content = fs::read_to_string(config_path).ok()?;
        toml::from_str(&content).ok()
    } else {
        None
    }
}

/// Run a single golden test case.
fn run_golden_case(case_name: &str) {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("cases")
        .join(case_name);

    let update_expected = std::env::var_os("UPDATE_EXPECTED").is_some();

    let input_path = dir.join("input.md");
    let expected_path = dir.join("expected.md");
    let config = load_test_config(&dir);

    // Read input file - preserve line endings exactly
    let input = fs::read_to_string(&input_path)
        .unwrap_or_else(|_| panic!("No input file found in {}", case_name));

    // The parser must keep every byte of the input
    let tree = parse(&input, config.clone());
    let tree_text = tree.text().to_string();
    similar_asserts::assert_eq!(
        input,
        tree_text,
        "losslessness check failed for {} (diff: {:+} bytes)",
        case_name,
        tree_text.len() as i64 - input.len() as i64
    );

    let output = convert(&input, config.clone());

    let output_twice = convert(&output, config.clone());
    similar_asserts::assert_eq!(output, output_twice, "idempotency: {}", case_name);

    if update_expected {
        fs::write(&expected_path, &output).unwrap();
        return;
    }

    let expected = fs::read_to_string(&expected_path).unwrap_or_else(|_| input.clone());

    similar_asserts::assert_eq!(expected, output, "case: {}", case_name);
}

/// Generates one test function per case directory, so failures don't stop
/// other cases from running.
macro_rules! golden_test_cases {
    ($($case:ident),+ $(,)?) => {
        $(
            #[test]
            fn $case() {
                run_golden_case(stringify!($case));
            }
        )+
    };
}

golden_test_cases!(
    breaks,
    code,
    commonmark_flavor,
    crlf,
    emoji,
    emphasis,
    footnotes,
    headings_and_quotes,
    html_and_entities,
    links_and_images,
    lists,
    nested_emphasis,
    non_latin,
    tables,
);
