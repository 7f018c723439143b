use tracing::debug;

use crate::util::error::{EmptyStructure, InvalidPosition, PositionError, PositionOutOfBounds};

/// Validates a 1-based insertion `position` for a list of `len` elements. Inserting at `len + 1`
/// appends.
pub(crate) fn check_insert_position(position: usize, len: usize) -> Result<(), PositionError> {
    if position == 0 {
        debug!(position, len, "rejected insert at invalid position");
        return Err(InvalidPosition { position }.into());
    }
    if position > len + 1 {
        debug!(position, len, "rejected insert past the end of the list");
        return Err(PositionOutOfBounds { position, len }.into());
    }
    Ok(())
}

/// Validates a 1-based removal `position` for a list of `len` elements.
pub(crate) fn check_remove_position(position: usize, len: usize) -> Result<(), PositionError> {
    if position == 0 {
        debug!(position, len, "rejected removal at invalid position");
        return Err(InvalidPosition { position }.into());
    }
    if len == 0 {
        debug!(position, "rejected removal from an empty list");
        return Err(EmptyStructure::LIST.into());
    }
    if position > len {
        debug!(position, len, "rejected removal past the end of the list");
        return Err(PositionOutOfBounds { position, len }.into());
    }
    Ok(())
}
