#![allow(dead_code)]

use std::path::PathBuf;

pub fn go_fixture_path(project: Option<&str>) -> PathBuf {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("go");
    match project {
        Some(project) => base.join(project),
        None => base,
    }
}

pub fn sample_file(rel: &str) -> PathBuf {
    go_fixture_path(Some("sample")).join(rel)
}

/// Every selector in the `sample` project, in walk order.
pub const SAMPLE_TESTS: &[&str] = &[
    "TestAdd$",
    "TestSub$",
    "TestSub$/positive$",
    "TestSub$/negative_numbers$",
    "TestSub$/negative_numbers$/both_negative$",
    "TestSub$/negative_numbers$/one_negative$",
    "TestSub$/zero$",
    "TestDeep$",
    "TestDeep$/level_one$",
    "TestDeep$/level_one$/level_two$",
    "TestDeep$/level_one$/level_two$/level_three$",
    "TestDeep$/level_one$/level_two$/level_three$/level_four$",
    "TestDeep$/level_one$/level_two$/back_to_two$",
    "TestDeep$/level_one$/sibling_of_one$",
    "TestParse$",
    "TestParse$/handles_empty_input$",
    "TestParse$/handles_empty_input$/with_trailing_newline$",
    "TestTokenize$",
    "TestTokenize$/idents$",
];
