use std::path::Path;

use super::*;

#[test]
fn template_output_over_input() {
    let input = Path::new("export.jinja");
    let template_out = input.with_extension("jinja");
    let params_out = input.with_extension("csv");

    let err = check_output_paths(input, &template_out, &params_out).unwrap_err();
    assert_eq!(err.to_string(), "template output export.jinja would overwrite the input");
}

#[test]
fn params_output_over_input() {
    let input = Path::new("export.csv");
    let err = check_output_paths(input, Path::new("export.jinja"), &input.with_extension("csv")).unwrap_err();
    assert_eq!(err.to_string(), "parameter output export.csv would overwrite the input");
}

#[test]
fn outputs_must_differ() {
    let err = check_output_paths(Path::new("in.yml"), Path::new("out.txt"), Path::new("out.txt")).unwrap_err();
    assert_eq!(err.to_string(), "template and parameter outputs are both out.txt");
}

#[test]
fn distinct_paths_pass() {
    let input = Path::new("export.yml");
    check_output_paths(input, &input.with_extension("jinja"), &input.with_extension("csv")).unwrap();
}

#[test]
fn same_file_through_relative_path() {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
    let dotted = Path::new(env!("CARGO_MANIFEST_DIR")).join(".").join("Cargo.toml");
    assert!(same_file(&manifest, &dotted));
}
