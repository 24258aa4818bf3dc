/// A report row that knows its own column layout.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Rendered rows of one result set, ready for text or CSV output.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_rows<R: TableRow>(rows: &[R]) -> Self {
        Self {
            title: None,
            headers: R::headers().iter().map(|h| h.to_string()).collect(),
            rows: rows.iter().map(TableRow::cells).collect(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Two decimals, the precision every size and percentage column uses.
pub fn fmt_decimal(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn fmt_extension(extension: &str) -> String {
    if extension.is_empty() {
        "(none)".to_string()
    } else {
        extension.to_string()
    }
}
