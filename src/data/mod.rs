/// Data layer: core types, loading, and the two chart transformations.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (once, at startup)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, site order, payload bounds
///   └───────────────┘
///        │                        SiteSelector (site)
///        ├──────────────┐
///        ▼              ▼
///   ┌───────────┐  ┌──────────┐
///   │ aggregate  │  │  filter   │  + PayloadInterval
///   └───────────┘  └──────────┘
///     PieChart       ScatterChart
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod site;
