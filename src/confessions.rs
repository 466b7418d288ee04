//! The confession deck shown on the home page.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One testimonial card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confession {
    pub text: String,
    pub tagline: String,
    pub author: String,
}

impl Confession {
    pub fn new(text: impl Into<String>, tagline: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tagline: tagline.into(),
            author: author.into(),
        }
    }
}

const DECK: &[(&str, &str, &str)] = &[
    (
        "My coffee chat just got canceled. It’s late and my interview is tomorrow morning. I don’t know what I’m supposed to do now.",
        "Career emergencies don’t wait for reschedules.",
        "Aaliyah",
    ),
    (
        "Everyone said to ask older club members. The people who knew already graduated. I feel like I missed something important.",
        "Knowledge shouldn’t graduate.",
        "Roy",
    ),
    (
        "The recruiter finally replied today. The deadline was yesterday. Cool.",
        "Timing decides outcomes.",
        "Eva",
    ),
    (
        "I didn’t ask my question because it felt too basic. Now I’m scared it’ll come up tomorrow. I keep replaying it in my head.",
        "Ask anything. No judgment.",
        "Oluwafe",
    ),
    (
        "They told me to read the guide again. I’ve read it three times already. No one has actually heard my answers.",
        "PDFs don’t ask follow-ups.",
        "Chen",
    ),
    (
        "I sent another LinkedIn message today. It says seen. That’s probably it.",
        "Careers shouldn’t depend on replies.",
        "Wang",
    ),
    (
        "My friend said I’ll be fine. They already have an offer. I don’t think they get it.",
        "Reassurance isn’t preparation.",
        "Maria",
    ),
    (
        "I needed help tonight. I didn’t know who to ask. So I asked no one.",
        "Silence isn’t a plan.",
        "Nguyen",
    ),
    (
        "It’s 2am and I’m back on the career center site. Everything says they support students. There’s literally no one to talk to.",
        "Career emergencies happen after office hours.",
        "Federico",
    ),
    (
        "I practiced cases alone in my room. I kept stopping mid sentence. I don’t know if I sound confident or dumb.",
        "Interviews are spoken.",
        "Xiaodi",
    ),
    (
        "We were supposed to do a mock tonight. He said he’s already out downtown. My interview is still in the morning.",
        "Help shouldn’t depend on people showing up.",
        "De'Andre",
    ),
    (
        "I’ve been googling interview prep since midnight. There are too many tabs open. None of this is helping.",
        "Urgency needs answers, not links.",
        "Fabuzor",
    ),
    (
        "People keep saying I should already know this. I don’t know when I was supposed to learn it. I feel behind for no reason.",
        "Access shouldn’t be assumed.",
        "Kunal",
    ),
    (
        "Apparently the answer was in a DM thread. I wasn’t in it. No one told me.",
        "Support shouldn’t live in inboxes.",
        "Serpa",
    ),
    (
        "I didn’t really know what to do. So I guessed and hoped it sounded right. I keep wondering if they noticed.",
        "Guessing isn’t preparation.",
        "Tajun",
    ),
    (
        "The group chat has like 300 messages. My question is still unanswered. I’m not asking again.",
        "Broadcasting isn’t support.",
        "Manish",
    ),
    (
        "My school sends emails every day. I stopped opening them. I probably missed something important.",
        "Support shouldn’t live in spam.",
        "Svetlana",
    ),
    (
        "I wasn’t lazy. I actually cared a lot. I just needed help at the wrong time.",
        "Some moments matter more than schedules.",
        "Olivia",
    ),
    (
        "Students keep asking the same things in different places. No one ever connects it. It feels like wasted effort.",
        "Patterns matter.",
        "Austin",
    ),
    (
        "Clubs try to reach students. Messages get lost. Important things fade.",
        "If it matters, it shouldn’t be missed.",
        "Sam",
    ),
];

/// The built-in deck, in display order.
pub fn default_confessions() -> Arc<[Confession]> {
    DECK.iter()
        .map(|(text, tagline, author)| Confession::new(*text, *tagline, *author))
        .collect()
}
