//! Best-effort name-to-gender inference.
//!
//! The index is a fixed table of common English given names. It is built
//! once at startup and never mutated; anything it does not recognize maps
//! to [`Gender::Unknown`], which the voice assignment handles explicitly.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

const MALE_NAMES: &[&str] = &[
    "aaron", "adam", "alan", "albert", "alex", "alexander", "andrew", "anthony", "arthur",
    "austin", "benjamin", "bob", "bobby", "bradley", "brandon", "brian", "bruce", "bryan",
    "carl", "charles", "charlie", "chris", "christian", "christopher", "daniel", "david",
    "dennis", "donald", "douglas", "dylan", "edward", "eric", "ethan", "eugene", "frank",
    "gabriel", "gary", "george", "gerald", "gregory", "harold", "harry", "henry", "jack",
    "jacob", "james", "jason", "jeffrey", "jeremy", "jerry", "jesse", "joe", "john",
    "johnny", "jonathan", "jordan", "jose", "joseph", "joshua", "juan", "justin", "keith",
    "kenneth", "kevin", "kyle", "larry", "lawrence", "liam", "logan", "louis", "lucas",
    "mark", "mason", "matthew", "michael", "nathan", "nicholas", "noah", "oliver",
    "patrick", "paul", "peter", "philip", "ralph", "randy", "raymond", "richard", "robert",
    "roger", "ronald", "roy", "russell", "ryan", "samuel", "scott", "sean", "stephen",
    "steven", "terry", "thomas", "timothy", "tyler", "victor", "vincent", "walter",
    "wayne", "william", "willie", "zachary",
];

const FEMALE_NAMES: &[&str] = &[
    "abigail", "alice", "amanda", "amber", "amy", "andrea", "angela", "ann", "anna",
    "annie", "ashley", "barbara", "betty", "beverly", "brenda", "brittany", "carol",
    "carolyn", "catherine", "charlotte", "cheryl", "christina", "christine", "cynthia",
    "danielle", "deborah", "debra", "denise", "diana", "diane", "donna", "doris",
    "dorothy", "elizabeth", "emily", "emma", "evelyn", "frances", "gloria", "grace",
    "hannah", "heather", "helen", "isabella", "jacqueline", "jane", "janet", "janice",
    "jean", "jennifer", "jessica", "joan", "joyce", "judith", "judy", "julia", "julie",
    "karen", "katherine", "kathleen", "kathryn", "kayla", "kelly", "kimberly", "laura",
    "lauren", "lillian", "linda", "lisa", "lori", "madison", "margaret", "maria", "marie",
    "marilyn", "martha", "mary", "megan", "melissa", "mia", "michelle", "nancy",
    "natalie", "nicole", "olivia", "pamela", "patricia", "rachel", "rebecca", "rose",
    "ruth", "samantha", "sandra", "sara", "sarah", "sharon", "shirley", "sophia",
    "stephanie", "susan", "teresa", "theresa", "victoria", "virginia",
];

/// Immutable given-name lookup, built at startup.
pub struct NameGenderIndex {
    names: HashMap<&'static str, Gender>,
}

impl NameGenderIndex {
    pub fn builtin() -> Self {
        let mut names = HashMap::with_capacity(MALE_NAMES.len() + FEMALE_NAMES.len());
        for name in MALE_NAMES {
            names.insert(*name, Gender::Male);
        }
        for name in FEMALE_NAMES {
            names.insert(*name, Gender::Female);
        }
        Self { names }
    }

    /// Infers a gender for a speaker label. Matching is case-insensitive on
    /// the first whitespace-separated token, so "Alice Smith" resolves via
    /// "alice".
    pub fn infer(&self, speaker: &str) -> Gender {
        let first_token = speaker.split_whitespace().next().unwrap_or("");
        let key = first_token.to_lowercase();
        self.names
            .get(key.as_str())
            .copied()
            .unwrap_or(Gender::Unknown)
    }
}
