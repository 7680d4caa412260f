use super::*;

#[test]
fn story_has_eight_steps() {
    assert_eq!(STORY_STEPS.len(), 8);
}

#[test]
fn positions_are_one_based_and_contiguous() {
    for (index, step) in STORY_STEPS.iter().enumerate() {
        assert_eq!(step.position, index + 1);
    }
}

#[test]
fn every_step_carries_complete_copy() {
    for step in STORY_STEPS {
        assert!(!step.year.is_empty());
        assert!(!step.title.is_empty());
        assert!(!step.subtitle.is_empty());
        assert!(!step.narrative.is_empty());
        assert!(!step.framework_insight.is_empty());
        assert!(step.color.starts_with('#'));
        assert!(!step.stats.is_empty() && step.stats.len() <= 3);
    }
}

#[test]
fn narrative_spans_2020_through_2025() {
    assert_eq!(STORY_STEPS.first().map(|s| s.year), Some("2020"));
    assert_eq!(STORY_STEPS.last().map(|s| s.year), Some("2025"));
}
