use serde::{Deserialize, Serialize};

use crate::foundation::error::{ComedianError, ComedianResult};

/// One line of the routine: either a setup or the punchline that follows it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub joke: String,
    pub punchline: bool,
}

impl Joke {
    pub fn setup(text: impl Into<String>) -> Self {
        Self {
            joke: text.into(),
            punchline: false,
        }
    }

    pub fn punchline(text: impl Into<String>) -> Self {
        Self {
            joke: text.into(),
            punchline: true,
        }
    }
}

/// File name the joke list is written under.
pub const JOKES_FILE: &str = "dadJokes.json";

const DAD_JOKES: &[(&str, &str)] = &[
    (
        "Why don't scientists trust atoms?",
        "Because they make up everything!",
    ),
    (
        "Did you hear about the mathematician who's afraid of negative numbers?",
        "He'll stop at nothing to avoid them!",
    ),
    (
        "I told my wife she was drawing her eyebrows too high.",
        "She looked surprised!",
    ),
    ("What do you call a fake noodle?", "An impasta!"),
    ("How do you organize a space party?", "You planet!"),
    ("Why don't eggs tell jokes?", "They'd crack each other up!"),
    (
        "I'm reading a book on anti-gravity.",
        "It's impossible to put down!",
    ),
    ("What do you call a lazy kangaroo?", "A pouch potato!"),
    ("How does a penguin build its house?", "Igloos it together!"),
    (
        "What did the janitor say when he jumped out of the closet?",
        "Supplies!",
    ),
    (
        "Why did the scarecrow win an award?",
        "Because he was outstanding in his field!",
    ),
    (
        "Why don't skeletons fight each other?",
        "They don't have the guts!",
    ),
    ("What's the best time to go to the dentist?", "Tooth-hurty!"),
    ("I tried to catch some fog earlier.", "I mist."),
    (
        "Why did the golfer bring two pairs of pants?",
        "In case he got a hole in one!",
    ),
    ("What do you call a cow with no legs?", "Ground beef!"),
    ("I used to play piano by ear...", "Now I use my hands!"),
    ("What did the ocean say to the beach?", "Nothing, it just waved!"),
    ("I'm on a seafood diet...", "I see food and I eat it!"),
];

/// The fixed routine as a flat list: each setup is immediately followed by its punchline.
pub fn dad_jokes() -> Vec<Joke> {
    DAD_JOKES
        .iter()
        .flat_map(|&(setup, punch)| [Joke::setup(setup), Joke::punchline(punch)])
        .collect()
}

/// Check that the list strictly alternates setup, punchline, setup, ... and ends on a punchline.
pub fn validate_jokes(jokes: &[Joke]) -> ComedianResult<()> {
    if jokes.is_empty() {
        return Err(ComedianError::validation("joke list is empty"));
    }
    if jokes.len() % 2 != 0 {
        return Err(ComedianError::validation(format!(
            "joke list has odd length {}; every setup needs a punchline",
            jokes.len()
        )));
    }
    for (i, joke) in jokes.iter().enumerate() {
        let expect_punchline = i % 2 == 1;
        if joke.punchline != expect_punchline {
            return Err(ComedianError::validation(format!(
                "joke #{i} (\"{}\") has punchline={}, expected {expect_punchline}",
                joke.joke, joke.punchline
            )));
        }
    }
    Ok(())
}

/// Render the list as a 2-space indented JSON array.
pub fn jokes_to_json(jokes: &[Joke]) -> ComedianResult<String> {
    validate_jokes(jokes)?;
    serde_json::to_string_pretty(jokes).map_err(|e| ComedianError::serde(e.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/jokes.rs"]
mod tests;
