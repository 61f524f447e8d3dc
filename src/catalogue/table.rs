//! Filtered table view - client-side search over a fixed record list

/// One row of the demo data table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRecord {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub status: &'static str,
}

/// Reference data shown by the data table example
pub const SAMPLE_RECORDS: &[TableRecord] = &[
    TableRecord {
        id: 1,
        name: "John Doe",
        email: "john@example.com",
        role: "Admin",
        status: "Active",
    },
    TableRecord {
        id: 2,
        name: "Jane Smith",
        email: "jane@example.com",
        role: "User",
        status: "Active",
    },
    TableRecord {
        id: 3,
        name: "Bob Johnson",
        email: "bob@example.com",
        role: "Editor",
        status: "Inactive",
    },
    TableRecord {
        id: 4,
        name: "Alice Brown",
        email: "alice@example.com",
        role: "User",
        status: "Active",
    },
    TableRecord {
        id: 5,
        name: "Charlie Wilson",
        email: "charlie@example.com",
        role: "Admin",
        status: "Active",
    },
];

/// Records whose name or email contains `query`, ignoring case
///
/// Keeps source order. An empty query keeps everything.
pub fn filter<'a>(query: &str, records: &'a [TableRecord]) -> Vec<&'a TableRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle) || r.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Search query state for one table
#[derive(Debug, Clone, Default)]
pub struct TableView {
    query: String,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Rows matching the current query
    pub fn visible<'a>(&self, records: &'a [TableRecord]) -> Vec<&'a TableRecord> {
        filter(&self.query, records)
    }
}
