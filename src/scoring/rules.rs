// Payout for ranks 1..=8; anything further down the table earns the floor
const MATCH_POINTS_TABLE: [i64; 8] = [20, 15, 12, 10, 8, 6, 4, 2];
const FLOOR_MATCH_POINTS: i64 = 1;

const CHAMPIONSHIP_VALUE: i64 = 20;
const WIN_VALUE: i64 = 10;
const LAST_PLACE_PENALTY: i64 = 5;

/// Total points derived from raw counters, for sheets without a points column
pub fn cumulative_points(championships: u32, wins: u32, last_place: u32) -> i64 {
    i64::from(championships) * CHAMPIONSHIP_VALUE + i64::from(wins) * WIN_VALUE
        - i64::from(last_place) * LAST_PLACE_PENALTY
}

/// Points awarded for finishing at `rank`
///
/// The payout depends on rank alone; `_participant_count` does not scale it.
pub fn match_points(rank: u32, _participant_count: u32) -> i64 {
    match rank {
        1..=8 => MATCH_POINTS_TABLE[(rank - 1) as usize],
        _ => FLOOR_MATCH_POINTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_points_table() {
        let expected = [20, 15, 12, 10, 8, 6, 4, 2];
        for (idx, points) in expected.iter().enumerate() {
            let rank = idx as u32 + 1;
            for field_size in [rank.max(2), 8, 12] {
                assert_eq!(match_points(rank, field_size), *points);
            }
        }
    }

    #[test]
    fn test_match_points_floor_beyond_eighth() {
        assert_eq!(match_points(9, 12), 1);
        assert_eq!(match_points(12, 12), 1);
        assert_eq!(match_points(0, 4), 1);
    }

    #[test]
    fn test_cumulative_points_formula() {
        assert_eq!(cumulative_points(0, 0, 0), 0);
        assert_eq!(cumulative_points(2, 3, 1), 40 + 30 - 5);
        for (c, w, l) in [(1, 1, 1), (5, 0, 7), (0, 12, 3)] {
            assert_eq!(
                cumulative_points(c, w, l),
                20 * i64::from(c) + 10 * i64::from(w) - 5 * i64::from(l)
            );
        }
    }

    #[test]
    fn test_cumulative_points_can_go_negative() {
        assert_eq!(cumulative_points(0, 1, 5), -15);
    }
}
