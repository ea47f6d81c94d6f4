/// Data layer: table types, loading, schema normalization, filtering, aggregation.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable (text cells)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  schema   │  canonical headers, required fields, numeric births → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  state / month / gender selections → filtered Dataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  sum births per (state, gender)
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod schema;
