// ---------------------------------------------------------------------------
// RawTable – the untyped table straight out of the CSV
// ---------------------------------------------------------------------------

/// Header row plus string cells, exactly as read from the source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        RawTable { headers, rows }
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Record – one birth-count row
// ---------------------------------------------------------------------------

/// A single row of the normalized dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub state: String,
    pub month: String,
    /// Carried through but not used by filtering or grouping.
    pub month_code: String,
    /// Carried through but not used by filtering or grouping.
    pub year_code: String,
    /// Expected to be "M" or "F"; not enforced.
    pub gender: String,
    pub births: f64,
    /// Every cell of the source row in column order, for tabular display.
    pub cells: Vec<String>,
}

// ---------------------------------------------------------------------------
// Dataset – the normalized table
// ---------------------------------------------------------------------------

/// Ordered records sharing the normalized column list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Normalized column names in source order.
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Dataset { columns, records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of `births` over all records.
    pub fn total_births(&self) -> f64 {
        self.records.iter().map(|r| r.births).sum()
    }
}
