// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{parse_table, render_table};

#[test]
fn test_quoted_cell_keeps_commas_and_unescapes_quotes() {
    let rows: Vec<Vec<String>> = parse_table(r#""a,b""c""#);

    assert_eq!(rows, vec![vec![String::from("a,b\"c")]]);
}

#[test]
fn test_blank_line_is_skipped() {
    let rows: Vec<Vec<String>> = parse_table("line1\n\nline2");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec![String::from("line1")]);
    assert_eq!(rows[1], vec![String::from("line2")]);
}

#[test]
fn test_whitespace_only_line_is_skipped() {
    let rows: Vec<Vec<String>> = parse_table("a,b\n   \nc,d\n");

    assert_eq!(rows.len(), 2);
}

#[test]
fn test_cells_are_trimmed() {
    let rows: Vec<Vec<String>> = parse_table(" 123 ,  Budi  ,\" Unit A \"");

    assert_eq!(
        rows,
        vec![vec![
            String::from("123"),
            String::from("Budi"),
            String::from("Unit A"),
        ]]
    );
}

#[test]
fn test_crlf_line_endings() {
    let rows: Vec<Vec<String>> = parse_table("a,b\r\nc,d\r\n");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec![String::from("c"), String::from("d")]);
}

#[test]
fn test_rows_may_have_different_lengths() {
    let rows: Vec<Vec<String>> = parse_table("a,b,c\nd\n");

    assert_eq!(rows[0].len(), 3);
    assert_eq!(rows[1].len(), 1);
}

#[test]
fn test_unterminated_quote_runs_to_end_of_input() {
    let rows: Vec<Vec<String>> = parse_table("x,\"open\nnext,line");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "x");
    assert_eq!(rows[0][1], "open\nnext,line");
}

#[test]
fn test_quoted_line_break_stays_in_cell() {
    let rows: Vec<Vec<String>> = parse_table("\"two\nlines\",b\nc,d");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "two\nlines");
}

#[test]
fn test_rendered_table_parses_back() {
    let rows: Vec<Vec<String>> = vec![
        vec![String::from("LTR-1"), String::from("{\"uraian\":\"a, b\"}")],
        vec![String::from("LTR-2"), String::from("plain")],
    ];

    let text: String = render_table(&rows).unwrap();

    assert_eq!(parse_table(&text), rows);
}

#[test]
fn test_padded_quoted_cell_keeps_its_comma() {
    let rows: Vec<Vec<String>> = parse_table("x, \"a,b\"\"c\" ,y\n");

    assert_eq!(
        rows,
        vec![vec![
            String::from("x"),
            String::from("a,b\"c"),
            String::from("y"),
        ]]
    );
}

#[test]
fn test_tab_padded_quoted_cell_at_line_end() {
    let rows: Vec<Vec<String>> = parse_table("123,\t\"Unit A, Ternate\"\t\r\n456,b\r\n");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec![String::from("123"), String::from("Unit A, Ternate")]);
}

#[test]
fn test_quote_inside_unquoted_cell_is_literal() {
    let rows: Vec<Vec<String>> = parse_table("ab \"c\",d\n");

    assert_eq!(rows[0][1], "d");
    assert_eq!(rows[0].len(), 2);
}
