//! Integration tests for the whole pipeline.
//!
//! These tests run source text through tokenization and parsing and check
//! the resulting tree through its public renderings.

use std::rc::Rc;

use csubset::{
    ast::{ast::Node, dot::to_dot},
    lexer::lexer::tokenize,
    parse_source,
    parser::parser::parse,
    render_error,
};

const PROGRAM: &str = "\
// pointer juggling
int counter = 0;
const double scale = 2.5;
char* name;

int step(int* p, char c) {
    int old = *p;
    *p = old + (int) c * 2;
    (*p)++;
    return old << 1 | ~old & 0x0F;
}

void reset(void) {
    counter = 0;
    return;
}

counter = step(&counter, 'a');
";

#[test]
fn test_parse_whole_program() {
    // calls are not part of the language
    let error = parse_source(PROGRAM, "program.c").unwrap_err();
    assert!(error.is_syntax_error());
    assert_eq!(error.get_position().line, 18);

    let source = PROGRAM.replace("counter = step(&counter, 'a');", "counter = counter + 'a';");
    let program = parse_source(&source, "program.c").unwrap();

    assert_eq!(program.len(), 6);
    assert_eq!(
        program.body[3].to_string(),
        "int step(int* p, char c) {\n    int old = *p;\n    *p = old + (int) c * 2;\n    (*p)++;\n    return old << 1 | ~old & 15;\n}"
    );
}

#[test]
fn test_printed_source_reparses_to_the_same_tree() {
    let sources = [
        "int x = 2 + 3 * 4;",
        "x = (a + b) * c - -d;",
        "y = - -x + - --z + &*p;",
        "const char** p = (char**) q;",
        "f = (float) (a + b) / 2.0;",
        "c = '\\'' + '\\n';",
        "*(p + 1) = (x);",
        "int main(void) { int r = a && b || !c; return r; }",
        "double* g(int a, float* b) { (*b)--; return; }",
        "r = a < b == c > d != e <= f;",
        "v = 1e10 + .5 + 2.;",
    ];

    for source in sources {
        let first = parse_source(source, "first.c").unwrap();
        let printed = first.to_string();
        let second = parse_source(&printed, "second.c").unwrap();

        assert_eq!(first.sexpr(), second.sexpr(), "printed as {:?}", printed);
        assert_eq!(printed, second.to_string());
    }
}

#[test]
fn test_leaf_count_matches_leaf_tokens() {
    let source = PROGRAM.replace("counter = step(&counter, 'a');", "counter = counter + 'a';");

    let tokens = tokenize(source.clone(), Some("program.c".to_string())).unwrap();
    let leaf_tokens = tokens.iter().filter(|token| token.is_leaf()).count();

    let program = parse(tokens, Rc::new("program.c".to_string())).unwrap();
    assert_eq!(program.leaf_count(), leaf_tokens);
}

#[test]
fn test_dot_output() {
    let program = parse_source("int f() { return *p + 1; }", "dot.c").unwrap();
    let dot = to_dot(&program);

    assert!(dot.starts_with("digraph AST {\n"));
    assert!(dot.contains("[label=\"Function int f()\", shape=rectangle];"));
    assert!(dot.contains("[label=\"Return\", shape=box];"));
    assert!(dot.contains("[label=\"+\", shape=ellipse];"));
    // Program, Function, Return, +, *, p, 1
    assert_eq!(dot.matches("[label=").count(), 7);
    assert_eq!(dot.matches(" -> ").count(), 6);
}

#[test]
fn test_render_lex_error() {
    let source = "int x = 1;\n    y = x @ 2;\n";
    let error = parse_source(source, "lex.c").unwrap_err();
    assert!(error.is_lex_error());

    let rendered = render_error(&error, source);
    assert_eq!(
        rendered,
        "Error: UnrecognisedToken\n-> lex.c:2:11\n  |\n2 | y = x @ 2;\n  | ------^"
    );
}

#[test]
fn test_render_syntax_error_at_end_of_input() {
    let source = "int x = 1";
    let error = parse_source(source, "eof.c").unwrap_err();

    let rendered = render_error(&error, source);
    assert!(rendered.starts_with(
        "Error: SyntaxError (expected `;`, found end of input, did you miss a semicolon?)"
    ));
    assert!(rendered.contains("1 | int x = 1\n"));
    assert!(rendered.ends_with("| ---------^"));
}
