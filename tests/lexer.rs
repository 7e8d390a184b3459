use pasquale::{
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind, TokenValue},
    tokenize,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

fn positions(source: &str) -> Vec<(usize, usize)> {
    tokenize(source).unwrap()
                    .iter()
                    .map(|t| (t.line, t.column))
                    .collect()
}

#[test]
fn keywords_ignore_case() {
    use TokenKind::{Begin, Eof, IntegerDiv, Procedure, Program, Real, Var};

    assert_eq!(kinds("begin BEGIN BeGiN"), [Begin, Begin, Begin, Eof]);
    assert_eq!(kinds("program Var procedure div real"),
               [Program, Var, Procedure, IntegerDiv, Real, Eof]);
}

#[test]
fn identifiers_are_lowercased() {
    let tokens = tokenize("NumBer _Half_X x1").unwrap();
    let names: Vec<_> = tokens.iter()
                              .filter_map(|t| match &t.value {
                                  Some(TokenValue::Identifier(name)) => Some(name.as_str()),
                                  _ => None,
                              })
                              .collect();
    assert_eq!(names, ["number", "_half_x", "x1"]);
}

#[test]
fn keywords_are_whole_words() {
    use TokenKind::{Eof, Identifier};

    assert_eq!(kinds("beginner enda divide"), [Identifier, Identifier, Identifier, Eof]);
}

#[test]
fn numbers_split_into_integers_and_reals() {
    use TokenKind::{Dot, Eof, IntegerConst, RealConst};

    let tokens = tokenize("42 3.14 7.").unwrap();
    assert_eq!(tokens[0].value, Some(TokenValue::Integer(42)));
    assert_eq!(tokens[1].value, Some(TokenValue::Real(3.14)));
    assert_eq!(kinds("42 3.14 7."), [IntegerConst, RealConst, IntegerConst, Dot, Eof]);
}

#[test]
fn assignment_and_colon_are_distinct() {
    use TokenKind::{Assign, Colon, Eof, Identifier, Integer};

    assert_eq!(kinds("a : INTEGER a:=b"),
               [Identifier, Colon, Integer, Identifier, Assign, Identifier, Eof]);
}

#[test]
fn operators_and_punctuation() {
    use TokenKind::{Comma, Dot, Eof, FloatDiv, LParen, Minus, Mul, Plus, RParen, Semi};

    assert_eq!(kinds("+-*/(),.;"),
               [Plus, Minus, Mul, FloatDiv, LParen, RParen, Comma, Dot, Semi, Eof]);
}

#[test]
fn comments_are_skipped_and_do_not_nest() {
    use TokenKind::{Assign, Eof, Identifier, IntegerConst};

    assert_eq!(kinds("{ a { b } c := 1"), [Identifier, Assign, IntegerConst, Eof]);
    // The first `}` closes the comment; the second one is a stray character.
    let err = tokenize("{ { } }").unwrap_err();
    assert_eq!(err,
               ParseError::UnexpectedCharacter { character: '}',
                                                 line:      1,
                                                 column:    7, });
}

#[test]
fn unterminated_comment_reports_its_opening() {
    let err = tokenize("x := 1;\n  { never closed\n\n").unwrap_err();
    assert_eq!(err, ParseError::UnterminatedComment { line: 2, column: 3 });
    assert!(err.is_lexical());
}

#[test]
fn unterminated_comment_at_end_of_input() {
    assert_eq!(tokenize("a {x").unwrap_err(),
               ParseError::UnterminatedComment { line: 1, column: 3 });
    assert_eq!(tokenize("a {").unwrap_err(),
               ParseError::UnterminatedComment { line: 1, column: 3 });

    let err = pasquale::run("PROGRAM p; BEGIN END. {unterminated").unwrap_err();
    assert_eq!((err.line(), err.column()), (1, 23));
    assert_eq!(err.to_string(), "Error on line 1, column 23: Comment is never closed.");
}

#[test]
fn unexpected_character_is_a_lexical_error() {
    let err = tokenize("a := 1 @ 2").unwrap_err();
    assert_eq!(err,
               ParseError::UnexpectedCharacter { character: '@',
                                                 line:      1,
                                                 column:    8, });
    assert_eq!(err.to_string(), "Error on line 1, column 8: Unexpected character '@'.");
}

#[test]
fn oversized_integer_is_a_lexical_error() {
    let err = tokenize("x := 99999999999999999999").unwrap_err();
    assert!(matches!(err, ParseError::IntegerTooLarge { column: 6, .. }));
}

#[test]
fn positions_track_lines_and_columns() {
    assert_eq!(positions("BEGIN\n  a := 1\nEND"),
               [(1, 1), (2, 3), (2, 5), (2, 8), (3, 1), (3, 4)]);
}

#[test]
fn positions_account_for_multiline_comments() {
    assert_eq!(positions("{ one\n two\n three } x\n  y"), [(3, 10), (4, 3), (4, 4)]);
}

#[test]
fn end_token_repeats_forever() {
    let mut lexer = Lexer::new("x").unwrap();
    assert!(lexer.has_more());
    lexer.eat(&[TokenKind::Identifier]).unwrap();
    assert!(!lexer.has_more());

    for _ in 0..3 {
        let token = lexer.eat(&[]).unwrap();
        assert_eq!(token.kind, TokenKind::Eof);
    }
}

#[test]
fn peek_does_not_consume() {
    let lexer = Lexer::new("BEGIN END").unwrap();

    assert!(lexer.peek(&[]).is_none());
    assert!(lexer.peek(&[TokenKind::End]).is_none());
    let token = lexer.peek(&[TokenKind::End, TokenKind::Begin]).unwrap();
    assert_eq!(token.kind, TokenKind::Begin);
    assert_eq!(lexer.current().kind, TokenKind::Begin);
}

#[test]
fn eat_rejects_unexpected_kinds() {
    let mut lexer = Lexer::new("x := 1").unwrap();
    let err = lexer.eat(&[TokenKind::Begin, TokenKind::Var]).unwrap_err();

    assert_eq!(err,
               ParseError::UnexpectedToken { token:    "'x'".to_string(),
                                             expected: "'BEGIN' or 'VAR'".to_string(),
                                             line:     1,
                                             column:   1, });
    assert!(!err.is_lexical());
    // Nothing was consumed.
    assert_eq!(lexer.current().kind, TokenKind::Identifier);
}

#[test]
fn tokens_render_as_source() {
    let rendered: Vec<String> = tokenize("Begin x := 2.0 Div 3 End")
        .unwrap()
        .iter()
        .map(Token::to_string)
        .collect();
    assert_eq!(rendered, ["BEGIN", "x", ":=", "2.0", "DIV", "3", "END", ""]);
}
