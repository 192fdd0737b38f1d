/// Returned for any identifier the table does not know.
pub const UNKNOWN_MEANING: &str = "Unknown meaning";

const CARD_MEANINGS: &[(&str, &str)] = &[
    ("the_fool", "Beginnings, innocence, spontaneity, a free spirit."),
    (
        "the_magician",
        "Creator, leader, initiative, fulfillment of hopes, great potential.",
    ),
    (
        "the_high_priestess",
        "Intuition, hidden knowledge, mystery, the subconscious mind.",
    ),
    ("the_empress", "Mother, protector, birth of the new, joy of life."),
    ("the_emperor", "Father, power, responsibility, structure, order."),
    (
        "the_hierophant",
        "Tradition, institutions, conformity, spiritual guidance.",
    ),
    ("the_lovers", "Union, choice, harmony, alignment of values."),
    ("the_chariot", "Willpower, victory, determination, control."),
    ("strength", "Courage, patience, inner strength, compassion."),
    ("the_hermit", "Solitude, introspection, inner guidance, withdrawal."),
    ("wheel_of_fortune", "Cycles, fate, turning points, change of luck."),
    ("justice", "Fairness, truth, law, cause and effect."),
    ("the_hanged_man", "Pause, surrender, new perspective, sacrifice."),
    ("death", "Endings, transformation, transition, clearing the way."),
    ("temperance", "Balance, moderation, patience, finding the middle path."),
    ("the_devil", "Bondage, temptation, materialism, hidden control."),
    ("the_tower", "Sudden upheaval, collapse, revelation, awakening."),
    ("the_star", "Hope, renewal, faith, calm after the storm."),
    ("the_moon", "Illusion, fear, uncertainty, the unknown."),
    ("the_sun", "Success, vitality, clarity, celebration."),
    ("judgement", "Reckoning, rebirth, inner calling, absolution."),
    ("the_world", "Completion, integration, accomplishment, global unity."),
];

/// Looks up the canned meaning for a card identifier. Total: unknown
/// identifiers get [`UNKNOWN_MEANING`].
pub fn meaning_for(identifier: &str) -> &'static str {
    CARD_MEANINGS
        .iter()
        .find(|(key, _)| *key == identifier)
        .map(|(_, meaning)| *meaning)
        .unwrap_or(UNKNOWN_MEANING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_meanings() {
        assert_eq!(
            meaning_for("the_magician"),
            "Creator, leader, initiative, fulfillment of hopes, great potential."
        );
        assert_eq!(
            meaning_for("the_empress"),
            "Mother, protector, birth of the new, joy of life."
        );
        assert_eq!(
            meaning_for("the_emperor"),
            "Father, power, responsibility, structure, order."
        );
    }

    #[test]
    fn test_unknown_identifier_falls_back() {
        assert_eq!(meaning_for("unknown_card"), "Unknown meaning");
        assert_eq!(meaning_for(""), "Unknown meaning");
        // 查表區分大小寫，識別碼應先正規化
        assert_eq!(meaning_for("The_Magician"), "Unknown meaning");
    }

    #[test]
    fn test_table_covers_major_arcana() {
        assert_eq!(CARD_MEANINGS.len(), 22);
    }
}
