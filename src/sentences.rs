use rand::Rng;
use std::fs;
use std::io;
use std::path::Path;

/// Built-in pool of fact sentences. Offline, no network required.
const FACTS: &[&str] = &[
    "Honey never spoils; pots found in ancient Egyptian tombs are still edible.",
    "A day on Venus is longer than its year.",
    "Octopuses have three hearts and blue blood.",
    "Hot water can freeze faster than cold water; this is called the Mpemba effect.",
    "The Eiffel Tower can be about 15 cm taller in summer due to thermal expansion.",
    "There are more stars in the universe than grains of sand on Earth.",
    "Humans share a surprising amount of DNA with bananas.",
    "The shortest war in history lasted about 38 minutes in 1896.",
    "The Pacific Ocean contains the Mariana Trench, the deepest point on Earth.",
    "Lightning can heat air to temperatures hotter than the surface of the Sun.",
    "Koalas have fingerprints so similar to humans they can confuse crime scenes.",
    "A blue whale's heart can weigh as much as a small car.",
    "The human nose can detect around a trillion different scents.",
    "Wombat droppings are cube-shaped.",
    "Leap years keep our calendar in sync with Earth's orbit.",
    "Chess has more possible games than atoms in the observable universe.",
    "Sound travels about four times faster in water than in air.",
    "Antarctica is the largest desert on Earth.",
    "Sharks are older than trees.",
    "The Great Wall of China is not visible from space with the naked eye.",
    "The first computer bug was a moth found in 1947.",
    "Some metals, like sodium, react explosively with water.",
    "The Moon drifts away from Earth by about 3.8 cm each year.",
    "A group of flamingos is called a flamboyance.",
    "Tomatoes were once thought to be poisonous in Europe.",
    "Rainbows can form full circles when viewed from the air.",
    "Venus is the hottest planet in the solar system, not Mercury.",
    "Your taste buds live for about 10 to 14 days on average.",
    "Bamboo can grow up to 91 cm in a single day.",
    "Jupiter's Great Red Spot is a storm larger than Earth.",
    "Cheetahs can sprint up to about 70 mph.",
    "The Great Barrier Reef is the largest living structure on Earth.",
    "Humans and giraffes both have seven neck vertebrae.",
    "Peanuts are legumes, not true nuts.",
    "Strawberries are not true berries, but bananas are.",
    "An ostrich's eye is bigger than its brain.",
    "The bumblebee bat is among the smallest mammals by mass.",
    "A day on Mars lasts about 24 hours and 39 minutes.",
];

/// Collapses whitespace runs to single spaces and trims the ends, so pool
/// entries compare cleanly against keyboard input.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Source of target sentences. Non-empty by construction: the built-in list
/// is a fixed literal, and the file loader rejects empty pools.
#[derive(Debug, Clone)]
pub struct SentencePool {
    sentences: Vec<String>,
}

impl SentencePool {
    pub fn builtin() -> Self {
        Self {
            sentences: FACTS.iter().map(|s| normalize_whitespace(s)).collect(),
        }
    }

    /// A pool holding exactly one custom sentence.
    pub fn single(sentence: &str) -> Self {
        Self {
            sentences: vec![normalize_whitespace(sentence)],
        }
    }

    /// Loads a pool from a newline-separated file, skipping blank lines.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let sentences: Vec<String> = text
            .lines()
            .map(normalize_whitespace)
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "sentence file contains no sentences",
            ));
        }

        Ok(Self { sentences })
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Draws one sentence uniformly at random.
    pub fn random_sentence(&self) -> String {
        let rng = &mut rand::thread_rng();
        self.sentences[rng.gen_range(0..self.sentences.len())].clone()
    }

    pub fn contains(&self, sentence: &str) -> bool {
        self.sentences.iter().any(|s| s == sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_pool_is_non_empty() {
        let pool = SentencePool::builtin();
        assert!(!pool.is_empty());
        assert!(pool.len() >= 30);
    }

    #[test]
    fn test_builtin_sentences_are_normalized() {
        let pool = SentencePool::builtin();
        for _ in 0..20 {
            let s = pool.random_sentence();
            assert_eq!(s, normalize_whitespace(&s));
            assert!(!s.is_empty());
        }
    }

    #[test]
    fn test_random_sentence_comes_from_pool() {
        let pool = SentencePool::builtin();
        for _ in 0..50 {
            assert!(pool.contains(&pool.random_sentence()));
        }
    }

    #[test]
    fn test_single_pool() {
        let pool = SentencePool::single("  hello   typing  world ");
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.random_sentence(), "hello typing world");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("a  b\t c\n"), "a b c");
        assert_eq!(normalize_whitespace("   "), "");
        assert_eq!(normalize_whitespace("plain"), "plain");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "first  sentence").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "  second sentence  ").unwrap();
        drop(f);

        let pool = SentencePool::from_file(&path).unwrap();
        assert_eq!(pool.len(), 2);
        assert!(pool.contains("first sentence"));
        assert!(pool.contains("second sentence"));
    }

    #[test]
    fn test_from_file_rejects_empty_pool() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "\n  \n\t\n").unwrap();

        let err = SentencePool::from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_from_file_missing_path() {
        assert!(SentencePool::from_file("/no/such/file").is_err());
    }
}
