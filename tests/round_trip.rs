use std::fs;

use pasquale::{
    interpreter::lexer::{Token, TokenKind},
    parse, tokenize,
};
use walkdir::WalkDir;

/// Renders tokens back into source text, placing each one at the line and
/// column it was read from. Comments are lost. The end token renders as
/// nothing but still moves the output to its position, so trailing blank
/// lines survive.
///
/// A token printed longer than it was written (`1.50000000000000001` prints
/// as `1.5`, but `9999999999999999999999.9` grows) pushes later tokens on the
/// same line to the right. At least one blank then keeps the two apart.
fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    let (mut line, mut column) = (1, 1);

    for token in tokens {
        while line < token.line {
            out.push('\n');
            line += 1;
            column = 1;
        }
        let text = token.to_string();
        let padding = if token.column >= column {
            token.column - column
        } else {
            1
        };
        out.extend(std::iter::repeat_n(' ', padding));
        out.push_str(&text);
        column += padding + text.chars().count();
    }
    out
}

fn assert_round_trip(source: &str) {
    let tokens = tokenize(source).unwrap();
    let rendered = render(&tokens);

    let retokenized = tokenize(&rendered).unwrap();
    assert_eq!(tokens, retokenized, "tokens changed for:\n{rendered}");

    match (parse(source), parse(&rendered)) {
        (Ok(original), Ok(reparsed)) => assert_eq!(original, reparsed),
        (Err(original), Err(reparsed)) => assert_eq!(original, reparsed),
        (original, reparsed) => panic!("parse outcome changed: {original:?} vs {reparsed:?}"),
    }
}

#[test]
fn sample_programs_round_trip() {
    let mut count = 0;
    for entry in
        WalkDir::new("programs").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "pas"))
    {
        count += 1;
        let source = fs::read_to_string(entry.path()).unwrap();
        assert_round_trip(&source);
    }
    assert!(count > 0);
}

#[test]
fn literals_and_case_round_trip() {
    assert_round_trip("program Lit; var A : real; begin A := 007 + 3.50 * -2 div 1 end.");
}

#[test]
fn dense_source_round_trips() {
    assert_round_trip("PROGRAM d;VAR a,b:INTEGER;PROCEDURE p(x:INTEGER);BEGIN x:=x END;BEGIN a:=1;p(a);b:=a DIV 2 END.");
}

#[test]
fn broken_programs_fail_the_same_way() {
    assert_round_trip("PROGRAM e; BEGIN\n  a := 1 +\nEND.");
    assert_round_trip("PROGRAM e; BEGIN a := (1 END.");
}

#[test]
fn trailing_newlines_round_trip() {
    assert_round_trip("PROGRAM t; BEGIN END.\n\n");
    assert_round_trip("PROGRAM t; BEGIN END. { done }\n   ");
}

#[test]
fn growing_literals_stay_separate_tokens() {
    let tokens = tokenize("x := 9999999999999999999999.9+1").unwrap();
    let rendered = render(&tokens);
    let kinds: Vec<_> = tokenize(&rendered).unwrap().iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               [TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::RealConst,
                TokenKind::Plus,
                TokenKind::IntegerConst,
                TokenKind::Eof]);
}
