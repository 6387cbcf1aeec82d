use serde::{Deserialize, Serialize};

/// A raw spreadsheet cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            _ => CellValue::Text(trimmed.to_string()),
        }
    }

    /// Non-negative integer count; anything missing or non-numeric is 0
    pub fn as_count(&self) -> u32 {
        let value = match self {
            CellValue::Number(n) => *n,
            CellValue::Text(t) => t.trim().parse::<f64>().unwrap_or(0.0),
            CellValue::Empty => 0.0,
        };
        if value.is_finite() && value > 0.0 {
            value.floor().min(f64::from(u32::MAX)) as u32
        } else {
            0
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(t) if t.is_empty() => None,
            CellValue::Text(t) => Some(t.clone()),
            CellValue::Number(n) => Some(format_number(*n)),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// One sheet row: column label to cell, in column order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetRow {
    cells: Vec<(String, CellValue)>,
}

impl SheetRow {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    pub fn push(&mut self, label: impl Into<String>, value: CellValue) {
        self.cells.push((label.into(), value));
    }

    pub fn get(&self, label: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(l, _)| l == label).map(|(_, v)| v)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn label_at(&self, position: usize) -> Option<&str> {
        self.cells.get(position).map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, v)| *v == CellValue::Empty)
    }
}

impl<L: Into<String>> FromIterator<(L, CellValue)> for SheetRow {
    fn from_iter<I: IntoIterator<Item = (L, CellValue)>>(iter: I) -> Self {
        let mut row = SheetRow::new();
        for (label, value) in iter {
            row.push(label, value);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classifies_cells() {
        assert_eq!(CellValue::parse("  "), CellValue::Empty);
        assert_eq!(CellValue::parse("12"), CellValue::Number(12.0));
        assert_eq!(CellValue::parse(" Zed "), CellValue::Text("Zed".to_string()));
    }

    #[test]
    fn test_count_coercion() {
        assert_eq!(CellValue::Number(7.9).as_count(), 7);
        assert_eq!(CellValue::Number(-3.0).as_count(), 0);
        assert_eq!(CellValue::Text("abc".to_string()).as_count(), 0);
        assert_eq!(CellValue::Text("4".to_string()).as_count(), 4);
        assert_eq!(CellValue::Empty.as_count(), 0);
    }

    #[test]
    fn test_numeric_names_render_without_fraction() {
        assert_eq!(CellValue::Number(42.0).as_text(), Some("42".to_string()));
        assert_eq!(CellValue::Number(2.5).as_text(), Some("2.5".to_string()));
        assert_eq!(CellValue::Empty.as_text(), None);
    }

    #[test]
    fn test_lookup_by_label_and_position() {
        let row: SheetRow = vec![
            ("A", CellValue::Empty),
            ("B", CellValue::Text("x".to_string())),
        ]
        .into_iter()
        .collect();

        assert_eq!(row.label_at(1), Some("B"));
        assert_eq!(row.label_at(2), None);
        assert!(row.contains("A"));
        assert!(!row.is_blank());
    }
}
