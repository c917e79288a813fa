use http_rule_router::template::ast::SegmentAst;
use http_rule_router::template::{CaptureEnd, PathSegment, TemplateError, compile_template};
use http_rule_router::parse_template;

fn expect_template_error(template: &str) -> TemplateError {
    parse_template(template).expect_err("template should be rejected")
}

#[test]
fn parses_literals_wildcards_and_verb() {
    let ast = parse_template("/v1/*/files/**:list").expect("template should parse");
    assert_eq!(
        ast.segments.segments,
        vec![
            SegmentAst::Literal("v1".to_string()),
            SegmentAst::Star,
            SegmentAst::Literal("files".to_string()),
            SegmentAst::DoubleStar,
        ]
    );
    assert_eq!(ast.verb.as_deref(), Some("list"));
}

#[test]
fn parses_dotted_field_path_with_subpattern() {
    let ast = parse_template("/v1/{book.name=shelves/*/books/*}").expect("template should parse");
    match &ast.segments.segments[1] {
        SegmentAst::Variable(var) => {
            assert_eq!(var.fields.as_slice(), ["book", "name"]);
            let nested = var.segments.as_ref().expect("subpattern expected");
            assert_eq!(nested.segments.len(), 4);
        }
        other => panic!("expected variable segment, got {other:?}"),
    }
}

#[test]
fn compiles_full_template() {
    let route = compile_template(
        "/v1/users/{aa.ba.ca=hh/*}/hello/{hello.abc}/*/hhh/*/messages/{messageId=nn/ss/**}:change",
    )
    .expect("template should compile");

    let segments: Vec<&str> = route.segments.iter().map(PathSegment::as_str).collect();
    assert_eq!(
        segments,
        vec![
            "v1", "users", "hh", "*", "hello", "*", "*", "hhh", "*", "messages", "nn", "ss", "**"
        ]
    );
    assert_eq!(route.verb.as_deref(), Some("change"));

    let captures: Vec<(String, usize, CaptureEnd)> = route
        .variables
        .iter()
        .map(|capture| (capture.field_path(), capture.start, capture.end))
        .collect();
    assert_eq!(
        captures,
        vec![
            ("aa.ba.ca".to_string(), 2, CaptureEnd::Bounded(3)),
            ("hello.abc".to_string(), 5, CaptureEnd::Bounded(5)),
            ("messageId".to_string(), 10, CaptureEnd::Open),
        ]
    );
}

#[test]
fn rejects_missing_leading_slash() {
    match expect_template_error("v1/users") {
        TemplateError::MissingLeadingSlash { position, .. } => assert_eq!(position.offset, 0),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(
        expect_template_error(""),
        TemplateError::MissingLeadingSlash { .. }
    ));
}

#[test]
fn rejects_unterminated_variable() {
    match expect_template_error("/{a=b") {
        TemplateError::UnterminatedVariable { position, .. } => {
            assert_eq!(position.offset, 1);
            assert_eq!(position.line, 1);
            assert_eq!(position.column, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_nested_variable() {
    match expect_template_error("/{a=b/{c}}") {
        TemplateError::NestedVariable { position, .. } => assert_eq!(position.offset, 6),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_unknown_characters() {
    match expect_template_error("/a b") {
        TemplateError::UnexpectedCharacter { found, position, .. } => {
            assert_eq!(found, ' ');
            assert_eq!(position.offset, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(
        expect_template_error("/1a"),
        TemplateError::UnexpectedCharacter { found: '1', .. }
    ));
}

#[test]
fn rejects_incomplete_verb_and_trailing_tokens() {
    match expect_template_error("/a:") {
        TemplateError::UnexpectedEnd { expected, .. } => assert_eq!(expected, "verb"),
        other => panic!("unexpected error: {other:?}"),
    }
    match expect_template_error("/a:b/c") {
        TemplateError::UnexpectedToken {
            found, expected, ..
        } => {
            assert_eq!(found, "/");
            assert_eq!(expected, "end of template");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_empty_field_names() {
    for template in ["/{}", "/{a.}"] {
        match expect_template_error(template) {
            TemplateError::UnexpectedToken {
                found, expected, ..
            } => {
                assert_eq!(found, "}");
                assert_eq!(expected, "field name");
            }
            other => panic!("unexpected error for {template}: {other:?}"),
        }
    }
}

#[test]
fn error_message_names_position() {
    let err = expect_template_error("/{a=b");
    assert_eq!(err.position().offset, 1);
    assert!(err.to_string().contains("missing '}'"), "{err}");
}
