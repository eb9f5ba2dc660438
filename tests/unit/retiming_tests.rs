/*!
 * Tests for cue re-timing
 */

use cuesplit::retiming::{retime, retime_all, subdivide, BoundaryPolicy};
use cuesplit::subtitle_processor::Cue;

fn lines(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

/// Three lines over one second
#[test]
fn test_retime_withThreeLines_shouldFollowPolicy() {
    let cue = Cue::new(5, 1000, 2000, "a b c");

    let extended = retime(&cue, lines(&["a", "b", "c"]), BoundaryPolicy::ExtendLast);
    let truncated = retime(&cue, lines(&["a", "b", "c"]), BoundaryPolicy::Truncate);

    assert_eq!(
        extended.iter().map(|c| (c.start_ms, c.end_ms)).collect::<Vec<_>>(),
        vec![(1000, 1333), (1333, 1666), (1666, 2000)]
    );
    assert_eq!(
        truncated.iter().map(|c| (c.start_ms, c.end_ms)).collect::<Vec<_>>(),
        vec![(1000, 1333), (1333, 1666), (1666, 1999)]
    );
}

/// One line keeps the original interval
#[test]
fn test_retime_withSingleLine_shouldKeepInterval() {
    let cue = Cue::new(1, 250, 1750, "Hello.");

    let result = retime(&cue, lines(&["Hello"]), BoundaryPolicy::Truncate);

    assert_eq!(result, vec![Cue::new(1, 250, 1750, "Hello")]);
}

/// No lines means the cue disappears
#[test]
fn test_retime_withNoLines_shouldDropCue() {
    assert!(retime(&Cue::new(1, 0, 1000, "."), Vec::new(), BoundaryPolicy::ExtendLast).is_empty());
}

/// A cue shorter than its line count stays whole
#[test]
fn test_retime_withTinyInterval_shouldKeepLinesTogether() {
    let cue = Cue::new(1, 100, 102, "x");

    let result = retime(&cue, lines(&["a", "b", "c"]), BoundaryPolicy::ExtendLast);

    assert_eq!(result, vec![Cue::new(1, 100, 102, "a\nb\nc")]);
}

/// Sub-intervals are contiguous and never leave the original
#[test]
fn test_subdivide_withManyShapes_shouldStayWithinOriginal() {
    for (start, end, parts) in [(0, 1000, 7), (12_345, 98_765, 13), (1, 2, 1), (0, 10, 10)] {
        for policy in [BoundaryPolicy::ExtendLast, BoundaryPolicy::Truncate] {
            let intervals = subdivide(start, end, parts, policy);

            assert_eq!(intervals.len(), parts);
            assert_eq!(intervals[0].0, start);
            assert!(intervals.iter().all(|(s, e)| s < e && *e <= end));
            assert!(intervals.windows(2).all(|w| w[0].1 == w[1].0));
            if policy == BoundaryPolicy::ExtendLast {
                assert_eq!(intervals[parts - 1].1, end);
            }
        }
    }
}

/// Output of several cues is renumbered from 1
#[test]
fn test_retimeAll_shouldRenumberDensely() {
    let split = vec![
        (Cue::new(4, 0, 2000, "x"), lines(&["a", "b"])),
        (Cue::new(9, 2000, 3000, "y"), lines(&["c"])),
    ];

    let result = retime_all(split, BoundaryPolicy::ExtendLast);

    assert_eq!(
        result,
        vec![
            Cue::new(1, 0, 1000, "a"),
            Cue::new(2, 1000, 2000, "b"),
            Cue::new(3, 2000, 3000, "c"),
        ]
    );
}

/// Policy values deserialize from snake case
#[test]
fn test_boundaryPolicy_shouldDeserializeSnakeCase() {
    let policy: BoundaryPolicy = serde_json::from_str("\"truncate\"").unwrap();
    assert_eq!(policy, BoundaryPolicy::Truncate);
    assert_eq!(BoundaryPolicy::default(), BoundaryPolicy::ExtendLast);
    assert_eq!(serde_json::to_string(&BoundaryPolicy::ExtendLast).unwrap(), "\"extend_last\"");
}
