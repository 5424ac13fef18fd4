//! Native-Form client utilities
//!
//! Client-side helpers for the Native-Form server-rendered web application.
//!
//! # Overview
//!
//! Two independent utilities:
//!
//! - **`request`** - CSRF-aware JSON POST. The anti-forgery token is read
//!   from `<meta name="csrf-token">` at call time and sent back in the
//!   `X-CSRFToken` header.
//! - **`table`** - click-to-sort for tables marked `data-sortable`. Rows are
//!   ordered by the trimmed, lowercased text of the clicked column, and the
//!   direction flips on every click.
//!
//! # Module Structure
//!
//! - **`shared`** - `ClientConfig` and `ClientError`
//! - **`page`** - the `PageMeta` trait and `HtmlPage`, a parsed document
//! - **`request`** - `ApiClient` and `CsrfToken`
//! - **`table`** - `SortableTable`, `SortState` and page setup
//! - **`web`** - live DOM bindings (`wasm32` with the `web` feature)
//!
//! # Feature Flags
//!
//! - **`web`** - `web-sys` bindings: `SortableTables::attach` and
//!   `PageMeta` for `web_sys::Document`
//!
//! # Usage
//!
//! ```rust
//! use nativeform_client::page::HtmlPage;
//! use nativeform_client::shared::ClientConfig;
//! use nativeform_client::table::{init_sortable_tables, SortDirection};
//!
//! let page = HtmlPage::parse(
//!     "<table data-sortable><thead><tr><th>N</th></tr></thead>\
//!      <tbody><tr><td>3</td></tr><tr><td>1</td></tr><tr><td>2</td></tr></tbody></table>",
//! );
//! let config = ClientConfig::builder().base_url("http://localhost:5000").build().unwrap();
//! let mut tables = init_sortable_tables(&page, &config).unwrap();
//!
//! assert_eq!(tables[0].header_click(0).unwrap(), SortDirection::Descending);
//! assert_eq!(tables[0].column_values(0), vec!["3", "2", "1"]);
//! ```
//!
//! # Error Handling
//!
//! Every fallible operation returns `Result<_, shared::ClientError>`. A page
//! without a token fails before any request is built.

/// Shared configuration and error types
pub mod shared;

/// Page access
pub mod page;

/// CSRF-aware JSON POST helper
pub mod request;

/// Click-to-sort tables
pub mod table;

/// Browser DOM bindings
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

pub use page::{HtmlPage, PageMeta};
pub use request::{ApiClient, CsrfToken};
pub use shared::{ClientConfig, ClientError};
pub use table::{init_sortable_tables, SortDirection, SortState, SortableTable};
