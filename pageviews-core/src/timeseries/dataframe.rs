use polars::prelude::{Column, DataFrame};

use crate::{MergedSeries, PageviewsError};

/// Conversion of merged tables into polars `DataFrame`s.
pub trait ToDataFrame {
    /// Build a `DataFrame` with one column per table column.
    ///
    /// # Errors
    /// Returns `PageviewsError::Data` if polars rejects the columns.
    fn to_dataframe(&self) -> Result<DataFrame, PageviewsError>;
}

impl ToDataFrame for MergedSeries {
    fn to_dataframe(&self) -> Result<DataFrame, PageviewsError> {
        let [date, views_a, views_b, shares_a, shares_b] = self.column_names();
        let dates: Vec<String> = self
            .dates()
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect();

        DataFrame::new(vec![
            Column::new(date.into(), dates),
            Column::new(views_a.into(), self.views_a()),
            Column::new(views_b.into(), self.views_b()),
            Column::new(shares_a.into(), self.shares_a()),
            Column::new(shares_b.into(), self.shares_b()),
        ])
        .map_err(|e| PageviewsError::Data(e.to_string()))
    }
}
