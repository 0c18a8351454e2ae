//! Generic paginated list pages
//!
//! A page configures a [`ListEntity`] and drives a [`ListController`] through
//! a [`ListHandle`]. The controller owns the load state machine and request
//! sequencing; rendering and pagination are pure functions over its state.

pub mod controller;
pub mod entity;
pub mod handle;
pub mod options;
pub mod pagination;
pub mod render;

pub use controller::{fetch_page, ListController, ListPhase, LoadTicket};
pub use entity::{ListEntity, ListFilter, RowAction};
pub use handle::{ListHandle, LoadedPage};
pub use options::{fetch_lookup, to_options, SelectOption};
pub use pagination::{page_links, PageLink};
pub use render::{column_count, render, Cell, DataRow, RowDescriptor, Tone, NOT_AVAILABLE};
