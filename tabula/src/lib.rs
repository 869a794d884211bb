pub mod components;
pub mod error;

pub use components::suggest::SuggestionPipeline;
pub use components::table::Table;

pub mod prelude {
    pub use crate::components::suggest::{
        highlight, prefix_filter, CandidateSource, Snapshot, StaticSource, Status, SuggestConfig,
        SuggestionPipeline,
    };
    pub use crate::components::table::{
        format_plain, Alignment, Column, RenderedTable, SortDirection, SortState, Table, Value,
    };
    pub use crate::error::{ExtractError, FetchError, RenderError, SourceError, TableError};
}
