use std::collections::HashSet;
use std::sync::LazyLock;

static ANIMAL_CLASSES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "dog", "cat", "lion", "tiger", "bear", "elephant", "monkey", "horse", "sheep", "cow",
        "goat", "deer", "bird", "fish", "reptile", "insect", "snake", "spider", "frog", "turtle",
        "hamster", "guinea_pig", "rabbit", "chicken", "rooster", "penguin", "dolphin", "whale",
        "shark", "octopus", "crab", "lobster", "bee", "butterfly", "ant", "bat", "buffalo",
        "camel", "cheetah", "chimpanzee", "crocodile", "donkey", "eagle", "flamingo", "giraffe",
        "goose", "hawk", "hyena", "jaguar", "kangaroo", "koala", "leopard", "lizard", "lynx",
        "mole", "moose", "ostrich", "otter", "owl", "panda", "parrot", "peacock", "pelican",
        "pigeon", "platypus", "polar_bear", "porcupine", "raccoon", "rat", "raven", "rhinoceros",
        "scorpion", "seal", "seahorse", "skunk", "sloth", "snail", "squid", "squirrel", "swan",
        "vulture", "walrus", "wombat", "woodpecker", "yak", "zebra",
    ]
    .into_iter()
    .collect()
});

pub fn is_animal(label: &str) -> bool {
    ANIMAL_CLASSES.contains(label.to_lowercase().as_str())
}

/// Two decimal places, rounded by the standard float formatter.
pub fn format_confidence(confidence: f32) -> String {
    format!("{:.2}", confidence)
}

pub fn identify(label: &str, confidence: f32) -> String {
    let confidence = format_confidence(confidence);
    if is_animal(label) {
        format!(
            "The image is classified as a {} with {}% confidence.",
            label, confidence
        )
    } else {
        format!(
            "The image is classified as a {} with {}% confidence, which is not in the predefined animal classes.",
            label, confidence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_MATCH_SUFFIX: &str = ", which is not in the predefined animal classes.";

    #[test]
    fn test_every_animal_matches_in_any_case() {
        for animal in ANIMAL_CLASSES.iter() {
            assert!(is_animal(animal));
            assert!(is_animal(&animal.to_uppercase()));

            let message = identify(animal, 12.0);
            assert!(!message.ends_with(NO_MATCH_SUFFIX), "{}", message);
        }
    }

    #[test]
    fn test_mixed_case_label_keeps_original_spelling() {
        assert_eq!(
            identify("Tiger", 87.5),
            "The image is classified as a Tiger with 87.50% confidence."
        );
    }

    #[test]
    fn test_non_animal_uses_no_match_template() {
        for label in ["golden retriever", "tabby", "sports car", "", "dogs"] {
            assert!(!is_animal(label));
            let message = identify(label, 3.0);
            assert_eq!(
                message,
                format!(
                    "The image is classified as a {} with 3.00% confidence{}",
                    label, NO_MATCH_SUFFIX
                )
            );
        }
    }

    #[test]
    fn test_confidence_has_two_decimals() {
        assert_eq!(format_confidence(0.0), "0.00");
        assert_eq!(format_confidence(100.0), "100.00");
        let half = format_confidence(50.005);
        assert!(half == "50.01" || half == "50.00", "{}", half);
    }

    #[test]
    fn test_dog_message() {
        assert_eq!(
            identify("dog", 91.234),
            "The image is classified as a dog with 91.23% confidence."
        );
    }
}
