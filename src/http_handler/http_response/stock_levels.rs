use crate::http_handler::http_handler_common::{StockLevel, Stocked};
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /stock endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct StockLevelsResponse {
    levels: Vec<StockLevel>,
}

impl SerdeJSONBodyHTTPResponseType for StockLevelsResponse {}

impl StockLevelsResponse {
    pub(crate) fn levels(&self) -> &[StockLevel] { &self.levels }

    /// Levels at or below their reorder threshold, empties included.
    pub(crate) fn needing_reorder(&self) -> impl Iterator<Item = &StockLevel> {
        self.levels.iter().filter(|level| level.needs_reorder())
    }
}
