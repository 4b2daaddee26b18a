/// Next channel value for a cell, given the reference cell's red channel and
/// the live-cell sum of the clipped 3x3 window around it.
///
/// The window sum deliberately includes the center cell itself, so a live
/// cell's own state contributes 1 to `live`. Only literal 0/1 red values
/// participate in the rules; [`None`] means the working cell is left exactly
/// as it was, which covers dead cells whose window sum is not 3 as well as
/// any red value outside {0, 1}.
pub(super) fn transition(center_red: i32, live: i64) -> Option<i32> {
    match center_red {
        1 if live < 2 => Some(0),
        1 if live <= 3 => Some(1),
        1 => Some(0),
        0 if live == 3 => Some(1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_outcomes() {
        // a live center contributes 1 to its own window sum
        assert_eq!(transition(1, 1), Some(0)); // isolated, dies
        assert_eq!(transition(1, 2), Some(1)); // one neighbor, survives
        assert_eq!(transition(1, 3), Some(1)); // two neighbors, survives
        assert_eq!(transition(1, 4), Some(0)); // three neighbors, overcrowded
        assert_eq!(transition(1, 9), Some(0));
    }

    #[test]
    fn dead_cell_outcomes() {
        assert_eq!(transition(0, 3), Some(1)); // birth
        assert_eq!(transition(0, 0), None);
        assert_eq!(transition(0, 2), None);
        assert_eq!(transition(0, 4), None);
    }

    #[test]
    fn non_binary_red_never_matches() {
        assert_eq!(transition(5, 3), None);
        assert_eq!(transition(-1, 0), None);
        assert_eq!(transition(255, 8), None);
    }
}
