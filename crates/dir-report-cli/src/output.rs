use crate::commands::OutputFormat;
use colored::*;
use dir_report_core::{Section, Table};
use std::io::{self, Write};

pub fn write_section<W: Write>(
    out: &mut W,
    section: &Section,
    format: OutputFormat,
    color: bool,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, section, color),
        OutputFormat::Csv => write_csv(out, section),
    }
}

fn write_text<W: Write>(out: &mut W, section: &Section, color: bool) -> io::Result<()> {
    let header = format!("=== {} ===", section.title());
    if color {
        writeln!(out, "{}", header.bold().cyan())?;
    } else {
        writeln!(out, "{}", header)?;
    }

    for table in &section.tables {
        if let Some(title) = &table.title {
            if color {
                writeln!(out, "--- {} ---", title.bold())?;
            } else {
                writeln!(out, "--- {} ---", title)?;
            }
        }
        write_text_table(out, table)?;
    }
    writeln!(out)
}

fn write_text_table<W: Write>(out: &mut W, table: &Table) -> io::Result<()> {
    if table.is_empty() {
        return writeln!(out, "(no rows)");
    }

    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .fold(header.chars().count(), usize::max)
        })
        .collect();

    // Columns holding only numbers are right-aligned.
    let numeric: Vec<bool> = (0..table.headers.len())
        .map(|i| {
            table
                .rows
                .iter()
                .all(|row| row.get(i).is_some_and(|c| c.parse::<f64>().is_ok()))
        })
        .collect();

    write_text_row(out, &table.headers, &widths, &numeric)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_text_row(out, &rule, &widths, &numeric)?;
    for row in &table.rows {
        write_text_row(out, row, &widths, &numeric)?;
    }
    Ok(())
}

fn write_text_row<W: Write>(
    out: &mut W,
    cells: &[String],
    widths: &[usize],
    numeric: &[bool],
) -> io::Result<()> {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter().zip(numeric))
        .map(|(cell, (&width, &right))| {
            if right {
                format!("{:>width$}", cell, width = width)
            } else {
                format!("{:<width$}", cell, width = width)
            }
        })
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end())
}

fn write_csv<W: Write>(out: &mut W, section: &Section) -> io::Result<()> {
    for table in &section.tables {
        match &table.title {
            Some(title) => writeln!(out, "# {} / {}", section.title(), title)?,
            None => writeln!(out, "# {}", section.title())?,
        }

        let mut wtr = csv::Writer::from_writer(&mut *out);
        wtr.write_record(&table.headers)?;
        for row in &table.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dir_report_core::View;

    fn section() -> Section {
        Section {
            view: View::Executables,
            tables: vec![Table {
                title: None,
                headers: vec!["Name".to_string(), "Size (MB)".to_string()],
                rows: vec![
                    vec!["a.exe".to_string(), "2.00".to_string()],
                    vec!["longer-name.exe".to_string(), "12.50".to_string()],
                ],
            }],
        }
    }

    fn render(section: &Section, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_section(&mut buf, section, format, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_aligns_columns() {
        let text = render(&section(), OutputFormat::Text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "=== Executables over 1 MB, smallest first ===");
        assert_eq!(lines[1], "Name             Size (MB)");
        assert_eq!(lines[3], "a.exe                 2.00");
        assert_eq!(lines[4], "longer-name.exe      12.50");
    }

    #[test]
    fn test_text_empty_table() {
        let empty = Section {
            view: View::Listing,
            tables: vec![Table {
                title: None,
                headers: vec!["Path".to_string()],
                rows: vec![],
            }],
        };
        let text = render(&empty, OutputFormat::Text);
        assert!(text.contains("(no rows)"));
    }

    #[test]
    fn test_csv_output() {
        let csv = render(&section(), OutputFormat::Csv);
        assert_eq!(
            csv,
            "# Executables over 1 MB, smallest first\n\
             Name,Size (MB)\n\
             a.exe,2.00\n\
             longer-name.exe,12.50\n\
             \n"
        );
    }

    #[test]
    fn test_csv_quotes_commas() {
        let mut s = section();
        s.tables[0].rows = vec![vec!["a,b.exe".to_string(), "3.00".to_string()]];
        let csv = render(&s, OutputFormat::Csv);
        assert!(csv.contains("\"a,b.exe\",3.00"));
    }
}
