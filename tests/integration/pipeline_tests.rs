/*!
 * End-to-end tests: transcript -> SRT -> re-split SRT
 */

use anyhow::Result;

use cuesplit::app_config::Config;
use cuesplit::errors::{ParseError, SubtitleError, ValidationError};
use cuesplit::language_utils::ProfileTable;
use cuesplit::line_split::ProtectedTerms;
use cuesplit::pipeline::Resegmenter;
use cuesplit::retiming::BoundaryPolicy;
use cuesplit::segmentation::Transcript;
use cuesplit::subtitle_processor::{self, Cue};
use cuesplit::validation::TimingIssue;
use crate::common;

/// Transcript JSON becomes sentence cues with shared timing
#[test]
fn test_transcriptToSrt_withVerboseJson_shouldProduceSentenceCues() -> Result<()> {
    let engine = Resegmenter::default();
    let transcript = Transcript::from_json(common::TRANSCRIPT_JSON)?;

    let srt = engine.transcript_to_srt(&transcript);

    assert_eq!(
        srt,
        "1\n00:00:00,000 --> 00:00:02,000\nHello world\n\n\
         2\n00:00:02,000 --> 00:00:04,000\nHow are you\n\n\
         3\n00:00:04,000 --> 00:00:06,500\nI am fine\n"
    );
    Ok(())
}

/// Long English cue is wrapped and its interval shared
#[test]
fn test_resplitSrt_withLongEnglishCue_shouldSplitAndRetime() -> Result<()> {
    let engine = Resegmenter::default();

    let output = engine.resplit_srt(common::ENGLISH_SRT, "EN")?;

    assert_eq!(output.input_cues, 3);
    assert_eq!(
        output.cues,
        vec![
            Cue::new(1, 1000, 4000, "This is a test subtitle"),
            Cue::new(2, 5000, 7000, "It contains one entry"),
            Cue::new(3, 7000, 9000, "that is far too long for"),
            Cue::new(4, 9000, 11000, "a single line"),
            Cue::new(5, 12000, 14000, "For testing purposes"),
        ]
    );
    assert!(output.warnings.is_empty());
    assert!(output.report.is_clean(), "unexpected issues: {:?}", output.report);
    assert_eq!(output.srt, subtitle_processor::serialize(&output.cues));
    Ok(())
}

/// Brand name in Chinese text survives the split
#[test]
fn test_resplitSrt_withChineseBrandCue_shouldProtectTerm() -> Result<()> {
    let engine = Resegmenter::default();

    let output = engine.resplit_srt(common::CHINESE_SRT, "CN")?;

    assert_eq!(
        output.cues,
        vec![
            Cue::new(1, 0, 1000, "这是一个很棒的工具"),
            Cue::new(2, 1000, 2000, "Photoroom让你的照片更好"),
            Cue::new(3, 2000, 3000, "看"),
        ]
    );
    Ok(())
}

/// Truncate policy drops the division remainder
#[test]
fn test_resplit_withTruncatePolicy_shouldEndEarly() -> Result<()> {
    let engine = Resegmenter::new(ProfileTable::default(), ProtectedTerms::default(), BoundaryPolicy::Truncate);
    let cues = vec![Cue::new(1, 1000, 2000, "一二三四五六七八九十甲乙丙丁戊己庚辛壬癸子丑寅卯辰巳午未申酉戌亥天地")];

    let output = engine.resplit(cues, "JP")?;

    assert_eq!(
        output.iter().map(|c| (c.start_ms, c.end_ms)).collect::<Vec<_>>(),
        vec![(1000, 1333), (1333, 1666), (1666, 1999)]
    );
    Ok(())
}

/// Re-splitting already split output changes nothing
#[test]
fn test_resplitSrt_withOwnOutput_shouldBeStable() -> Result<()> {
    let engine = Resegmenter::default();

    let first = engine.resplit_srt(common::ENGLISH_SRT, "EN")?;
    let second = engine.resplit_srt(&first.srt, "EN")?;

    assert_eq!(second.cues, first.cues);
    Ok(())
}

/// Transcript cues can be re-split straight away
#[test]
fn test_segmentThenResplit_withJapaneseTranscript_shouldFitBudget() -> Result<()> {
    let engine = Resegmenter::from_config(&Config::default());
    let transcript = Transcript::from_json(
        r#"{"segments": [{"start": 0.0, "end": 6.0, "text": "写真の背景を数秒で削除できます。Photoroomなら、だれでも簡単に使えます。"}]}"#,
    )?;

    let cues = engine.segment_transcript(&transcript);
    assert_eq!(cues.len(), 2);

    let split = engine.resplit(cues, "JP")?;

    assert!(split.len() >= 3);
    assert_eq!(split.first().map(|c| c.start_ms), Some(0));
    assert_eq!(split.last().map(|c| c.end_ms), Some(6000));
    for (i, cue) in split.iter().enumerate() {
        assert_eq!(cue.index as usize, i + 1);
        assert!(cue.text.chars().count() <= 16, "'{}' is too long", cue.text);
    }
    for pair in split.windows(2) {
        assert_eq!(pair[0].end_ms, pair[1].start_ms);
    }
    Ok(())
}

/// Malformed entries are reported and the rest is processed
#[test]
fn test_resplitSrt_withBrokenEntry_shouldWarnAndContinue() -> Result<()> {
    let engine = Resegmenter::default();
    let content = "1\n00:00:01,000 --> 00:00:02,000\nGood\n\n2\n00:00:03,000 00:00:04,000\nBroken\n";

    let output = engine.resplit_srt(content, "EN")?;

    assert_eq!(output.cues, vec![Cue::new(1, 1000, 2000, "Good")]);
    assert_eq!(output.warnings.len(), 1);
    Ok(())
}

/// Input errors surface as typed errors
#[test]
fn test_resplitSrt_withUnusableInput_shouldFail() {
    let engine = Resegmenter::default();

    assert_eq!(
        engine.resplit_srt("garbage", "EN").unwrap_err(),
        SubtitleError::Parse(ParseError::EmptyInput)
    );
    assert!(matches!(
        engine.resplit(vec![Cue::new(1, 500, 500, "x")], "EN"),
        Err(ValidationError::NonMonotonicInterval { index: 1, .. })
    ));
}

/// Reports flag cues that end up too fast to read
#[test]
fn test_resplitSrt_withDenseCue_shouldReportReadingSpeed() -> Result<()> {
    let engine = Resegmenter::default();
    let content = "1\n00:00:00,000 --> 00:00:00,600\nThis sentence has far too many words for such a very short cue.\n";

    let output = engine.resplit_srt(content, "EN")?;

    assert!(!output.report.is_clean());
    assert!(output.report.issue_count() > 0);
    Ok(())
}

/// Overlapping input cues are kept in order and show up in the report
#[test]
fn test_resplitSrt_withOverlappingCues_shouldKeepThemAndReportOverlap() -> Result<()> {
    let engine = Resegmenter::default();
    let content = "1\n00:00:01,000 --> 00:00:03,000\nFirst line here\n\n\
                   2\n00:00:02,500 --> 00:00:04,000\nSecond line here\n";

    let output = engine.resplit_srt(content, "EN")?;

    assert_eq!(
        output.cues,
        vec![
            Cue::new(1, 1000, 3000, "First line here"),
            Cue::new(2, 2500, 4000, "Second line here"),
        ]
    );
    assert!(output.warnings.is_empty());
    let overlap = output.report.timing.iter().find(|r| r.index == 2);
    assert!(overlap.is_some_and(|r| r
        .issues
        .contains(&TimingIssue::OverlapsPrevious { previous_index: 1, overlap_ms: 500 })));
    Ok(())
}
