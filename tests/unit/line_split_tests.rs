/*!
 * Tests for line splitting
 */

use cuesplit::language_utils::LanguageProfile;
use cuesplit::line_split::{split_lines, strategy_for, ProtectedTerms, UnitKind};

fn brand_terms() -> ProtectedTerms {
    ProtectedTerms::new(["Photoroom", "AI"])
}

/// Twenty CJK characters split sixteen and four
#[test]
fn test_splitLines_withTwentyCjkChars_shouldSplitAtBudget() {
    let text = "一二三四五六七八九十甲乙丙丁戊己庚辛壬癸";

    let lines = split_lines(text, &LanguageProfile::logographic("JP", 16), &ProtectedTerms::default());

    assert_eq!(lines, vec!["一二三四五六七八九十甲乙丙丁戊己", "庚辛壬癸"]);
}

/// A protected term inside CJK text is never broken
#[test]
fn test_splitLines_withProtectedTermInCjk_shouldKeepTermWhole() {
    let lines = split_lines(
        "这是一个很棒的工具Photoroom让你的照片更好看。",
        &LanguageProfile::logographic("CN", 16),
        &brand_terms(),
    );

    assert_eq!(lines, vec!["这是一个很棒的工具", "Photoroom让你的照片更好", "看"]);
}

/// ASCII runs inside CJK text stay whole even when not protected
#[test]
fn test_splitLines_withAsciiRunInCjk_shouldKeepRunWhole() {
    let lines = split_lines(
        "我们使用Lightroom处理",
        &LanguageProfile::logographic("CN", 6),
        &ProtectedTerms::default(),
    );

    assert_eq!(lines, vec!["我们使用", "Lightroom", "处理"]);
}

/// Latin text wraps on word boundaries
#[test]
fn test_splitLines_withLatinText_shouldWrapOnWords() {
    let lines = split_lines(
        "Remove the background from any photo with AI in seconds.",
        &LanguageProfile::word_wrapped("EN", 24),
        &brand_terms(),
    );

    assert_eq!(lines, vec!["Remove the background", "from any photo with AI", "in seconds"]);
}

/// A word longer than the budget gets its own line
#[test]
fn test_splitLines_withOverlongWord_shouldOverflowAlone() {
    let lines = split_lines(
        "a supercalifragilisticexpialidocious word",
        &LanguageProfile::word_wrapped("EN", 10),
        &ProtectedTerms::default(),
    );

    assert_eq!(lines, vec!["a", "supercalifragilisticexpialidocious", "word"]);
}

/// Only the last line loses trailing punctuation
#[test]
fn test_splitLines_withPunctuation_shouldStripLastLineOnly() {
    let lines = split_lines(
        "Wait, really? Yes, really.",
        &LanguageProfile::word_wrapped("EN", 13),
        &ProtectedTerms::default(),
    );

    assert_eq!(lines, vec!["Wait, really?", "Yes, really"]);
}

/// Blank input yields no lines
#[test]
fn test_splitLines_withBlankText_shouldReturnNothing() {
    let profile = LanguageProfile::word_wrapped("EN", 24);
    assert!(split_lines("", &profile, &ProtectedTerms::default()).is_empty());
    assert!(split_lines("   ", &profile, &ProtectedTerms::default()).is_empty());
    assert!(split_lines("。", &LanguageProfile::logographic("CN", 16), &ProtectedTerms::default()).is_empty());
}

/// Protected terms match in configured order, not by length
#[test]
fn test_units_withOverlappingTerms_shouldUseFirstConfigured() {
    let terms = ProtectedTerms::new(["AI", "AI修图"]);
    let profile = LanguageProfile::logographic("CN", 16);

    let units = strategy_for(&profile).units("AI修图", &terms);

    assert_eq!(units[0].text, "AI");
    assert_eq!(units[0].kind, UnitKind::ProtectedTerm);
    assert_eq!(units.len(), 3);
}

/// No line over budget unless it is a single unit
#[test]
fn test_splitLines_withVariedInputs_shouldRespectBudget() {
    let inputs = [
        (LanguageProfile::word_wrapped("EN", 24), "Erase unwanted objects, fix lighting and export in one click with the new editor."),
        (LanguageProfile::word_wrapped("fr", 12), "Supprimez l'arrière-plan de vos photos en quelques secondes grâce à Photoroom."),
        (LanguageProfile::logographic("JP", 16), "写真の背景を数秒で削除できます。Photoroomなら簡単です。AIがすべて処理します。"),
        (LanguageProfile::logographic("KR", 8), "사진 배경을 몇 초 만에 제거하세요 Photoroom AI 편집기"),
        (LanguageProfile::logographic("CN", 5), "用Photoroom和AI工具处理你的所有产品照片吧"),
    ];
    let terms = brand_terms();

    for (profile, text) in inputs {
        let strategy = strategy_for(&profile);
        let lines = split_lines(text, &profile, &terms);
        assert!(!lines.is_empty());

        for line in &lines {
            let length = line.chars().count();
            let units = strategy.units(line, &terms).len();
            assert!(
                length <= profile.max_line_length as usize || units == 1,
                "line '{}' ({} chars, {} units) exceeds {} for {}",
                line,
                length,
                units,
                profile.max_line_length,
                profile.code
            );
        }
    }
}
