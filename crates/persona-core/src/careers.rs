//! Career suggestions keyed by the top two interest types.

use crate::dimensions::RiasecType;

/// A table entry: an ordered pair of interest types and its suggestions.
pub type CareerEntry = ((RiasecType, RiasecType), &'static [&'static str]);

/// Returned when no table has an entry for the pair.
pub const FALLBACK_CAREERS: &[&str] = &["You have the potential to thrive across a wide range of fields"];

use RiasecType::{Artistic, Conventional, Enterprising, Investigative, Realistic, Social};

/// Suggestions for two distinct interest types.
pub const PAIR_CAREERS: &[CareerEntry] = &[
    (
        (Realistic, Investigative),
        &[
            "Mechanical engineer",
            "Software developer",
            "Architect",
            "Technical researcher",
            "Electrical technician",
            "Robotics developer",
            "Environmental engineer",
            "Aircraft maintenance technician",
        ],
    ),
    (
        (Realistic, Artistic),
        &[
            "Interior designer",
            "Craft artist",
            "Game designer",
            "Video creator",
            "Floral designer",
            "Furniture maker",
            "Stage designer",
            "Landscape designer",
        ],
    ),
    (
        (Realistic, Social),
        &[
            "Physical therapist",
            "Nurse",
            "Athletic trainer",
            "Firefighter",
            "Paramedic",
            "Occupational therapist",
            "Care worker",
            "Veterinary nurse",
        ],
    ),
    (
        (Realistic, Enterprising),
        &[
            "Construction manager",
            "Farm owner",
            "Manufacturing manager",
            "Pilot",
            "Property developer",
            "Car dealer",
            "Construction company owner",
            "Logistics manager",
        ],
    ),
    (
        (Realistic, Conventional),
        &[
            "Quality control specialist",
            "Surveyor",
            "Machine maintenance technician",
            "Systems administrator",
            "Drafter",
            "Inspection technician",
            "Facilities manager",
            "Production planner",
        ],
    ),
    (
        (Investigative, Artistic),
        &[
            "UX designer",
            "Science writer",
            "Researcher",
            "Data visualization specialist",
            "Architectural designer",
            "Sound engineer",
            "Technical writer",
            "Museum curator",
        ],
    ),
    (
        (Investigative, Social),
        &[
            "Clinical psychologist",
            "Physician",
            "Education researcher",
            "Counselor",
            "Speech-language therapist",
            "Dietitian",
            "Public health specialist",
            "School counselor",
        ],
    ),
    (
        (Investigative, Enterprising),
        &[
            "Management consultant",
            "Data scientist",
            "Entrepreneur",
            "Strategy analyst",
            "Market researcher",
            "Investment analyst",
            "New business developer",
            "Sales engineer",
        ],
    ),
    (
        (Investigative, Conventional),
        &[
            "Accountant",
            "Programmer",
            "Statistician",
            "Pharmacist",
            "Systems engineer",
            "Patent researcher",
            "Clinical laboratory technician",
            "Information security specialist",
        ],
    ),
    (
        (Artistic, Social),
        &[
            "Art or music teacher",
            "Art therapist",
            "Community designer",
            "Writer",
            "Music therapist",
            "Yoga or pilates instructor",
            "Picture book author",
            "Workshop facilitator",
        ],
    ),
    (
        (Artistic, Enterprising),
        &[
            "Advertising creative",
            "Producer",
            "Brand manager",
            "Freelance designer",
            "Film director",
            "Fashion designer",
            "Video content creator",
            "Event producer",
        ],
    ),
    (
        (Artistic, Conventional),
        &[
            "Graphic designer",
            "Editor",
            "Web designer",
            "Translator",
            "Desktop publishing operator",
            "Proofreader",
            "Technical illustrator",
            "Photo retoucher",
        ],
    ),
    (
        (Social, Enterprising),
        &[
            "HR manager",
            "Sales team lead",
            "Education administrator",
            "Event planner",
            "Recruitment consultant",
            "Corporate trainer",
            "Nonprofit manager",
            "Coach",
        ],
    ),
    (
        (Social, Conventional),
        &[
            "Office administrator",
            "Social worker",
            "Librarian",
            "Medical office administrator",
            "Childcare worker",
            "Administrative scrivener",
            "Care manager",
            "Receptionist or secretary",
        ],
    ),
    (
        (Enterprising, Conventional),
        &[
            "Business owner",
            "Project manager",
            "Banker",
            "Real estate agent",
            "Tax accountant",
            "Financial planner",
            "Store manager",
            "Sales planner",
        ],
    ),
];

/// Suggestions when one interest type is the only clear favourite.
pub const SAME_TYPE_CAREERS: &[CareerEntry] = &[
    (
        (Realistic, Realistic),
        &[
            "Artisan",
            "Auto mechanic",
            "Civil engineering technician",
            "Electrician",
            "Farmer",
            "Chef",
            "Carpenter",
        ],
    ),
    (
        (Investigative, Investigative),
        &[
            "Researcher",
            "University professor",
            "Data analyst",
            "AI engineer",
            "Medical researcher",
            "Archaeologist",
            "Astronomer",
        ],
    ),
    (
        (Artistic, Artistic),
        &[
            "Painter",
            "Musician",
            "Novelist",
            "Actor",
            "Photographer",
            "Animator",
            "Choreographer",
        ],
    ),
    (
        (Social, Social),
        &[
            "Teacher",
            "Childcare worker",
            "Social worker",
            "Nurse",
            "Counselor",
            "Caregiver",
            "Nonprofit staff member",
        ],
    ),
    (
        (Enterprising, Enterprising),
        &[
            "Entrepreneur",
            "CEO",
            "Politician",
            "Lawyer",
            "Producer",
            "Diplomat",
            "Venture capitalist",
        ],
    ),
    (
        (Conventional, Conventional),
        &[
            "Civil servant",
            "Bookkeeper",
            "General affairs officer",
            "IT operations specialist",
            "Bank teller",
            "Data entry clerk",
            "Legal assistant",
        ],
    ),
];

/// Looks up career suggestions for a pair of interest types.
#[derive(Debug, Clone, Copy)]
pub struct CareerMatcher {
    pairs: &'static [CareerEntry],
    same_type: &'static [CareerEntry],
    fallback: &'static [&'static str],
}

impl Default for CareerMatcher {
    fn default() -> Self {
        Self::standard()
    }
}

impl CareerMatcher {
    /// The shipped tables.
    pub const fn standard() -> Self {
        Self::new(PAIR_CAREERS, SAME_TYPE_CAREERS, FALLBACK_CAREERS)
    }

    pub const fn new(
        pairs: &'static [CareerEntry],
        same_type: &'static [CareerEntry],
        fallback: &'static [&'static str],
    ) -> Self {
        Self {
            pairs,
            same_type,
            fallback,
        }
    }

    /// Suggestions for `(first, second)`.
    ///
    /// Tries the pair table in the given order and then reversed, then the
    /// same-type table in both orders, then the fallback list.
    pub fn suggest(&self, first: RiasecType, second: RiasecType) -> &'static [&'static str] {
        [self.pairs, self.same_type]
            .into_iter()
            .find_map(|table| {
                find(table, (first, second)).or_else(|| find(table, (second, first)))
            })
            .unwrap_or(self.fallback)
    }

    /// Suggestions for the first two entries of a ranking. With fewer than
    /// two entries the missing one repeats the first.
    pub fn suggest_for_top(&self, top: &[RiasecType]) -> &'static [&'static str] {
        match top {
            [] => self.fallback,
            [only] => self.suggest(*only, *only),
            [first, second, ..] => self.suggest(*first, *second),
        }
    }
}

fn find(table: &'static [CareerEntry], key: (RiasecType, RiasecType)) -> Option<&'static [&'static str]> {
    table
        .iter()
        .find(|(pair, _)| *pair == key)
        .map(|(_, careers)| *careers)
}
