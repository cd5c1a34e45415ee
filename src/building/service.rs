use super::layout::SheetLayout;
use super::types::BuildingResponse;
use crate::sheets::error::FetchError;
use crate::sheets::fetcher::RangeFetcher;
use crate::sheets::range::RangeSpec;

use std::sync::Arc;

/// Per-request pipeline: fetch the layout's ranges, then assemble the payload.
///
/// Holds no mutable state, so one instance is shared by all concurrent requests.
pub struct BuildingService {
    fetcher: Arc<dyn RangeFetcher>,
    layout: SheetLayout,
    ranges: Vec<RangeSpec>,
}

impl BuildingService {
    pub fn new(fetcher: Arc<dyn RangeFetcher>, layout: SheetLayout) -> Arc<Self> {
        let ranges = layout.ranges();
        Arc::new(Self {
            fetcher,
            layout,
            ranges,
        })
    }

    /// Only a failed fetch is an error; anything wrong inside the data is absorbed
    /// by the layout and the coercion rules.
    pub async fn load(&self) -> Result<BuildingResponse, FetchError> {
        let fetched = self.fetcher.fetch(&self.ranges).await?;
        let response = self.layout.assemble(fetched);

        tracing::debug!(
            "Assembled {} apartment(s) using {} layout",
            response.apartments.len(),
            self.layout.name()
        );
        Ok(response)
    }
}
