use polars::prelude::DataFrame;

/// The rows of a [`crate::Dataset`] matching one [`crate::FilterCriteria`], in
/// the dataset's original order.
///
/// Views are recomputed for every selection and never cached. The frame keeps
/// the dataset's full schema even when empty, so it can be shown as a table
/// as-is.
#[derive(Debug, Clone)]
pub struct FilteredView {
    frame: DataFrame,
    has_temporal_axis: bool,
}

impl FilteredView {
    pub(crate) fn new(frame: DataFrame, has_temporal_axis: bool) -> Self {
        Self {
            frame,
            has_temporal_axis,
        }
    }

    /// The selected rows.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Whether the originating dataset has a `time` column.
    pub fn has_temporal_axis(&self) -> bool {
        self.has_temporal_axis
    }
}
