//! Integration tests for HTML rendering against the library API.

use tagdoc::{parse_str, render, JsonFormat, RenderOptions};

const SKELETON: &str = "<!DOCTYPE html>\n<html>\n<head>\n<title>Documentation</title>\n</head>\n<body>\n<h1>Documentation</h1>\n</body>\n</html>";

#[test]
fn test_no_delimiters_gives_bare_skeleton() {
    let doc = parse_str("int main(void) { return 0; }").unwrap();
    let html = render::to_html(&doc, &RenderOptions::default()).unwrap();
    assert_eq!(html, SKELETON);
}

#[test]
fn test_untagged_blocks_give_bare_skeleton() {
    let doc = parse_str("/* copyright notice */\n/* TODO rewrite */").unwrap();
    let html = render::to_html(&doc, &RenderOptions::default()).unwrap();
    assert_eq!(html, SKELETON);
}

#[test]
fn test_reference_scenario() {
    // the canonical two-tag block
    let doc = parse_str("/* @param x the input\n@return the output */").unwrap();
    let html = render::to_html(&doc, &RenderOptions::default()).unwrap();

    // the space before the closing delimiter is part of the captured content
    let expected = "<!DOCTYPE html>\n<html>\n<head>\n<title>Documentation</title>\n</head>\n<body>\n\
                    <h1>Documentation</h1>\n\
                    <div class='doc-block'>\n<ul>\n\
                    \x20 <li><strong>Param:</strong> x the input</li>\n\
                    \x20 <li><strong>Return:</strong> the output </li>\n\
                    </ul>\n</div>\n\
                    </body>\n</html>";
    assert_eq!(html, expected);
}

#[test]
fn test_list_items_match_valid_lines_in_order() {
    let text = "/*\n@one first\nnoise line\n@two second\n@3rd third\n*/";
    let doc = parse_str(text).unwrap();
    let html = render::to_html(&doc, &RenderOptions::default()).unwrap();

    assert_eq!(html.matches("<li>").count(), 3);
    let one = html.find("One:").unwrap();
    let two = html.find("Two:").unwrap();
    let third = html.find("3rd:").unwrap();
    assert!(one < two && two < third);
}

#[test]
fn test_capitalization_rules() {
    let doc = parse_str("/* @param x\n y */").unwrap();
    // "@param x" then newline: \s+ absorbs " " and content is "x"
    let html = render::to_html(&doc, &RenderOptions::default()).unwrap();
    assert!(html.contains("<strong>Param:</strong> x"));

    let doc = parse_str("/* @RETURNVALUE an int */").unwrap();
    let html = render::to_html(&doc, &RenderOptions::default()).unwrap();
    assert!(html.contains("<strong>RETURNVALUE:</strong> an int "));
}

#[test]
fn test_one_container_per_tagged_block() {
    let text = "/* @a 1 */ /* untagged */ /* @b 2 */";
    let doc = parse_str(text).unwrap();
    let html = render::to_html(&doc, &RenderOptions::default()).unwrap();

    assert_eq!(html.matches("<div class='doc-block'>").count(), 2);
    assert_eq!(html.matches("</div>").count(), 2);
}

#[test]
fn test_idempotent_rendering() {
    let input = "/* @param alpha one */\ncode();\n/* @param beta two */";
    let options = RenderOptions::default();

    let first = render::to_html(&parse_str(input).unwrap(), &options).unwrap();
    let second = render::to_html(&parse_str(input).unwrap(), &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_text_and_json_renderers_agree_on_content() {
    let doc = parse_str("/* @param x the input\n@return the output*/").unwrap();

    let text = render::to_text(&doc, &RenderOptions::default()).unwrap();
    assert_eq!(text, "Param: x the input\nReturn: the output");

    let json = render::to_json(&doc, JsonFormat::Compact).unwrap();
    assert!(json.contains("\"name\":\"param\""));
    assert!(json.contains("\"content\":\"the output\""));
}
