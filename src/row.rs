use tracing::trace;

use crate::binders::Binder;
use crate::config::{BinderConfiguration, ColumnBinders};
use crate::error::BindError;
use crate::statement::Statement;
use crate::value::BindValue;

/// Bind one row of values, `values[i]` at position `i + 1`.
///
/// A column listed in `overrides` uses that binder; every other column uses whatever
/// `configuration` picks for its position. Binding stops at the first failing column.
///
/// # Errors
///
/// Returns [`BindError::ColumnCountMismatch`] if `columns` and `values` differ in length,
/// otherwise the first error raised by a binder.
pub fn bind_row<C: AsRef<str>>(
    stmt: &mut dyn Statement,
    columns: &[C],
    values: &[BindValue],
    overrides: &ColumnBinders,
    configuration: &dyn BinderConfiguration,
) -> Result<(), BindError> {
    if columns.len() != values.len() {
        return Err(BindError::ColumnCountMismatch {
            columns: columns.len(),
            values: values.len(),
        });
    }

    for (index, (column, value)) in columns.iter().zip(values).enumerate() {
        let position = index + 1;
        let binder: &dyn Binder = match overrides.get(column.as_ref()) {
            Some(kind) => kind.binder(),
            None => configuration.binder_for(&*stmt, position),
        };
        trace!(column = column.as_ref(), binder = binder.name(), "row column");
        binder.bind(stmt, position, value)?;
    }
    Ok(())
}
