//! Terminal output for API responses

use crate::response::{
    Fields, Row, RowResponse, SearchResponse, SheetListResponse, SheetResponse, VersionsResponse,
};
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Stdout stream honoring the color flag
pub fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Pretty-printed JSON, uncolored
pub fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// One line per result: `Sheet#row  score  fields`, then the next-page cursor
pub fn print_search_results<W: WriteColor>(out: &mut W, response: &SearchResponse) -> io::Result<()> {
    for result in &response.results {
        print_row_id(out, &result.sheet, &result.row)?;

        write!(out, "  ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(out, "{:.3}", result.score)?;
        out.reset()?;

        print_fields(out, &result.row.fields)?;
        writeln!(out)?;
    }

    if let Some(next) = &response.next {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(out, "next: {}", next)?;
        out.reset()?;
    }

    Ok(())
}

/// Rows of one sheet
pub fn print_rows<W: WriteColor>(out: &mut W, sheet: &str, response: &SheetResponse) -> io::Result<()> {
    for row in &response.rows {
        print_row_line(out, sheet, row)?;
    }
    Ok(())
}

pub fn print_row<W: WriteColor>(out: &mut W, sheet: &str, response: &RowResponse) -> io::Result<()> {
    print_row_line(out, sheet, &response.row)
}

fn print_row_line<W: WriteColor>(out: &mut W, sheet: &str, row: &Row) -> io::Result<()> {
    print_row_id(out, sheet, row)?;
    print_fields(out, &row.fields)?;
    if let Some(transient) = &row.transient {
        print_fields(out, transient)?;
    }
    writeln!(out)
}

/// Version keys with their names
pub fn print_versions<W: WriteColor>(out: &mut W, response: &VersionsResponse) -> io::Result<()> {
    for version in &response.versions {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        write!(out, "{}", version.key)?;
        out.reset()?;
        writeln!(out, "  {}", version.names.join(", "))?;
    }
    Ok(())
}

pub fn print_sheets<W: WriteColor>(out: &mut W, response: &SheetListResponse) -> io::Result<()> {
    for name in response.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

fn print_row_id<W: WriteColor>(out: &mut W, sheet: &str, row: &Row) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(out, "{}", sheet)?;
    out.reset()?;
    write!(out, "#")?;

    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    match row.subrow_id {
        Some(subrow) => write!(out, "{}:{}", row.row_id, subrow)?,
        None => write!(out, "{}", row.row_id)?,
    }
    out.reset()
}

fn print_fields<W: WriteColor>(out: &mut W, fields: &Fields) -> io::Result<()> {
    for (name, value) in fields {
        write!(out, "  ")?;
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{}", name)?;
        out.reset()?;
        write!(out, "={}", display_value(value))?;
    }
    Ok(())
}

// Strings unquoted, everything else as compact JSON
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn render(f: impl FnOnce(&mut Buffer) -> io::Result<()>) -> String {
        let mut buf = Buffer::no_color();
        f(&mut buf).unwrap();
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn test_print_search_results() {
        let response: SearchResponse = serde_json::from_str(
            r#"{
                "results": [
                    {"score": 1.0, "sheet": "Item", "row_id": 4554, "fields": {"Name": "Potion"}}
                ],
                "schema": "s", "version": "v", "next": "cursor-1"
            }"#,
        )
        .unwrap();

        let text = render(|buf| print_search_results(buf, &response));
        assert_eq!(text, "Item#4554  1.000  Name=Potion\nnext: cursor-1\n");
    }

    #[test]
    fn test_print_row_with_subrow_and_transient() {
        let response: RowResponse = serde_json::from_str(
            r#"{
                "row_id": 7, "subrow_id": 2,
                "fields": {"Icon": {"id": 1, "path": "ui/icon.tex"}},
                "transient": {"Description": "Text"},
                "schema": "s", "version": "v"
            }"#,
        )
        .unwrap();

        let text = render(|buf| print_row(buf, "Quest", &response));
        assert_eq!(
            text,
            "Quest#7:2  Icon={\"id\":1,\"path\":\"ui/icon.tex\"}  Description=Text\n"
        );
    }

    #[test]
    fn test_print_versions_and_sheets() {
        let versions: VersionsResponse =
            serde_json::from_str(r#"{"versions": [{"key": "abc", "names": ["7.0", "latest"]}]}"#)
                .unwrap();
        assert_eq!(render(|buf| print_versions(buf, &versions)), "abc  7.0, latest\n");

        let sheets: SheetListResponse =
            serde_json::from_str(r#"{"sheets": [{"name": "Action"}, {"name": "Item"}]}"#).unwrap();
        assert_eq!(render(|buf| print_sheets(buf, &sheets)), "Action\nItem\n");
    }

    #[test]
    fn test_print_json() {
        let mut out = Vec::new();
        print_json(&mut out, &serde_json::json!({"a": 1})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"a\": 1\n}\n");
    }
}
