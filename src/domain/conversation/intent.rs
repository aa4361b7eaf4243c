//! Intent classification for incoming chat text.

use crate::domain::movie::Genre;

/// Text that asks for a random movie of any genre.
pub const TRIGGER_RANDOM_ALL: &str = "สุ่มหนัง";
/// Text that asks for a random romance movie.
pub const TRIGGER_RANDOM_ROMANCE: &str = "สุ่มหนังรัก";
/// Text that asks for a random comedy.
pub const TRIGGER_RANDOM_COMEDY: &str = "สุ่มหนังตลก";
/// Text that asks for a random horror movie.
pub const TRIGGER_RANDOM_HORROR: &str = "สุ่มหนังผี";
/// Text that asks for the synopsis of the last movie shown.
pub const TRIGGER_SYNOPSIS: &str = "ขอเรื่องย่อหน่อย";

/// The four genre triggers, in menu order.
pub const GENRE_TRIGGERS: [&str; 4] = [
    TRIGGER_RANDOM_ALL,
    TRIGGER_RANDOM_ROMANCE,
    TRIGGER_RANDOM_COMEDY,
    TRIGGER_RANDOM_HORROR,
];

/// What the user wants the bot to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// New follower; never produced from text.
    Greet,
    RandomAll,
    RandomRomance,
    RandomComedy,
    RandomHorror,
    Synopsis,
    /// Unrecognized text, parroted back.
    Echo(String),
}

impl Intent {
    /// Maps message text to an intent by exact match. Never fails.
    pub fn classify(text: &str) -> Self {
        match text {
            TRIGGER_RANDOM_ALL => Intent::RandomAll,
            TRIGGER_RANDOM_ROMANCE => Intent::RandomRomance,
            TRIGGER_RANDOM_COMEDY => Intent::RandomComedy,
            TRIGGER_RANDOM_HORROR => Intent::RandomHorror,
            TRIGGER_SYNOPSIS => Intent::Synopsis,
            other => Intent::Echo(other.to_string()),
        }
    }

    /// Genre to fetch for genre intents, `None` otherwise.
    pub fn genre(&self) -> Option<Genre> {
        match self {
            Intent::RandomAll => Some(Genre::All),
            Intent::RandomRomance => Some(Genre::Romance),
            Intent::RandomComedy => Some(Genre::Comedy),
            Intent::RandomHorror => Some(Genre::Horror),
            Intent::Greet | Intent::Synopsis | Intent::Echo(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn genre_triggers_map_to_genre_intents() {
        assert_eq!(Intent::classify("สุ่มหนัง"), Intent::RandomAll);
        assert_eq!(Intent::classify("สุ่มหนังรัก"), Intent::RandomRomance);
        assert_eq!(Intent::classify("สุ่มหนังตลก"), Intent::RandomComedy);
        assert_eq!(Intent::classify("สุ่มหนังผี"), Intent::RandomHorror);
    }

    #[test]
    fn synopsis_trigger_maps_to_synopsis() {
        assert_eq!(Intent::classify("ขอเรื่องย่อหน่อย"), Intent::Synopsis);
    }

    #[test]
    fn near_miss_is_echoed() {
        // No trimming or fuzzy matching.
        assert_eq!(
            Intent::classify(" สุ่มหนัง"),
            Intent::Echo(" สุ่มหนัง".to_string())
        );
        assert_eq!(Intent::classify(""), Intent::Echo(String::new()));
    }

    #[test]
    fn genre_intents_carry_their_genre() {
        assert_eq!(Intent::RandomAll.genre(), Some(Genre::All));
        assert_eq!(Intent::RandomRomance.genre(), Some(Genre::Romance));
        assert_eq!(Intent::RandomComedy.genre(), Some(Genre::Comedy));
        assert_eq!(Intent::RandomHorror.genre(), Some(Genre::Horror));
        assert_eq!(Intent::Synopsis.genre(), None);
        assert_eq!(Intent::Greet.genre(), None);
        assert_eq!(Intent::Echo("x".to_string()).genre(), None);
    }

    proptest! {
        #[test]
        fn any_other_text_is_echoed_verbatim(text in ".*") {
            prop_assume!(!GENRE_TRIGGERS.contains(&text.as_str()));
            prop_assume!(text != TRIGGER_SYNOPSIS);
            prop_assert_eq!(Intent::classify(&text), Intent::Echo(text.clone()));
        }
    }
}
