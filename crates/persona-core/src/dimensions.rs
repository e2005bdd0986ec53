//! Trait keys of each instrument.
//!
//! Every instrument has a closed set of sub-dimensions. Declaration order is
//! the canonical order: it decides ties when ranking and the order of keys in
//! serialized score maps.

use std::fmt;

use serde::Serialize;

use crate::model::Section;

/// A scored sub-dimension of one instrument.
pub trait Dimension: Copy + Ord + fmt::Debug + Serialize + 'static {
    /// The instrument this dimension belongs to.
    const SECTION: Section;

    /// Every dimension backed by questions, in canonical order.
    const ALL: &'static [Self];

    /// Field name of the dimension in a serialized ranked entry.
    const RANKED_FIELD: &'static str = "trait";

    /// The trait key used in question bank files.
    fn key(self) -> &'static str;

    /// Human-readable label.
    fn label(self) -> &'static str;
}

/// Big Five personality traits. `Stability` is derived from `Neuroticism`
/// and has no questions of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BigFiveTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
    Stability,
}

impl BigFiveTrait {
    /// Traits that take part in ranking and carry a description.
    pub const RANKED: [BigFiveTrait; 5] = [
        BigFiveTrait::Openness,
        BigFiveTrait::Conscientiousness,
        BigFiveTrait::Extraversion,
        BigFiveTrait::Agreeableness,
        BigFiveTrait::Stability,
    ];
}

impl Dimension for BigFiveTrait {
    const SECTION: Section = Section::BigFive;
    const ALL: &'static [Self] = &[
        BigFiveTrait::Openness,
        BigFiveTrait::Conscientiousness,
        BigFiveTrait::Extraversion,
        BigFiveTrait::Agreeableness,
        BigFiveTrait::Neuroticism,
    ];

    fn key(self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "openness",
            BigFiveTrait::Conscientiousness => "conscientiousness",
            BigFiveTrait::Extraversion => "extraversion",
            BigFiveTrait::Agreeableness => "agreeableness",
            BigFiveTrait::Neuroticism => "neuroticism",
            BigFiveTrait::Stability => "stability",
        }
    }

    fn label(self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "Openness",
            BigFiveTrait::Conscientiousness => "Conscientiousness",
            BigFiveTrait::Extraversion => "Extraversion",
            BigFiveTrait::Agreeableness => "Agreeableness",
            BigFiveTrait::Neuroticism => "Neuroticism",
            BigFiveTrait::Stability => "Emotional stability",
        }
    }
}

/// Holland vocational interest types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiasecType {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl RiasecType {
    /// Upper-case initial used in the Holland code.
    pub fn initial(self) -> char {
        self.key()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

impl Dimension for RiasecType {
    const SECTION: Section = Section::Riasec;
    const RANKED_FIELD: &'static str = "type";
    const ALL: &'static [Self] = &[
        RiasecType::Realistic,
        RiasecType::Investigative,
        RiasecType::Artistic,
        RiasecType::Social,
        RiasecType::Enterprising,
        RiasecType::Conventional,
    ];

    fn key(self) -> &'static str {
        match self {
            RiasecType::Realistic => "realistic",
            RiasecType::Investigative => "investigative",
            RiasecType::Artistic => "artistic",
            RiasecType::Social => "social",
            RiasecType::Enterprising => "enterprising",
            RiasecType::Conventional => "conventional",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RiasecType::Realistic => "Realistic",
            RiasecType::Investigative => "Investigative",
            RiasecType::Artistic => "Artistic",
            RiasecType::Social => "Social",
            RiasecType::Enterprising => "Enterprising",
            RiasecType::Conventional => "Conventional",
        }
    }
}

/// Character-strength virtue categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Virtue {
    Wisdom,
    Courage,
    Humanity,
    Justice,
    Temperance,
    Transcendence,
}

impl Dimension for Virtue {
    const SECTION: Section = Section::Strengths;
    const RANKED_FIELD: &'static str = "virtue";
    const ALL: &'static [Self] = &[
        Virtue::Wisdom,
        Virtue::Courage,
        Virtue::Humanity,
        Virtue::Justice,
        Virtue::Temperance,
        Virtue::Transcendence,
    ];

    fn key(self) -> &'static str {
        match self {
            Virtue::Wisdom => "wisdom",
            Virtue::Courage => "courage",
            Virtue::Humanity => "humanity",
            Virtue::Justice => "justice",
            Virtue::Temperance => "temperance",
            Virtue::Transcendence => "transcendence",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Virtue::Wisdom => "Wisdom",
            Virtue::Courage => "Courage",
            Virtue::Humanity => "Humanity",
            Virtue::Justice => "Justice",
            Virtue::Temperance => "Temperance",
            Virtue::Transcendence => "Transcendence",
        }
    }
}

/// Adult attachment styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentStyle {
    Secure,
    Anxious,
    Avoidant,
    Disorganized,
}

impl Dimension for AttachmentStyle {
    const SECTION: Section = Section::Attachment;
    const ALL: &'static [Self] = &[
        AttachmentStyle::Secure,
        AttachmentStyle::Anxious,
        AttachmentStyle::Avoidant,
        AttachmentStyle::Disorganized,
    ];

    fn key(self) -> &'static str {
        match self {
            AttachmentStyle::Secure => "secure",
            AttachmentStyle::Anxious => "anxious",
            AttachmentStyle::Avoidant => "avoidant",
            AttachmentStyle::Disorganized => "disorganized",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AttachmentStyle::Secure => "Secure",
            AttachmentStyle::Anxious => "Anxious",
            AttachmentStyle::Avoidant => "Avoidant",
            AttachmentStyle::Disorganized => "Disorganized",
        }
    }
}

/// Dimensions of sensory-processing sensitivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityDimension {
    Sensory,
    Emotional,
    Depth,
}

impl Dimension for SensitivityDimension {
    const SECTION: Section = Section::Sensitivity;
    const ALL: &'static [Self] = &[
        SensitivityDimension::Sensory,
        SensitivityDimension::Emotional,
        SensitivityDimension::Depth,
    ];

    fn key(self) -> &'static str {
        match self {
            SensitivityDimension::Sensory => "sensory",
            SensitivityDimension::Emotional => "emotional",
            SensitivityDimension::Depth => "depth",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SensitivityDimension::Sensory => "Sensory sensitivity",
            SensitivityDimension::Emotional => "Emotional reactivity",
            SensitivityDimension::Depth => "Depth of processing",
        }
    }
}

/// Transactional-analysis ego states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EgoState {
    /// Critical parent.
    Cp,
    /// Nurturing parent.
    Np,
    /// Adult.
    A,
    /// Free child.
    Fc,
    /// Adapted child.
    Ac,
}

impl EgoState {
    /// Abbreviation used on charts ("CP", "NP", ...).
    pub fn short_label(self) -> &'static str {
        match self {
            EgoState::Cp => "CP",
            EgoState::Np => "NP",
            EgoState::A => "A",
            EgoState::Fc => "FC",
            EgoState::Ac => "AC",
        }
    }
}

impl Dimension for EgoState {
    const SECTION: Section = Section::Egogram;
    const ALL: &'static [Self] = &[
        EgoState::Cp,
        EgoState::Np,
        EgoState::A,
        EgoState::Fc,
        EgoState::Ac,
    ];

    fn key(self) -> &'static str {
        match self {
            EgoState::Cp => "cp",
            EgoState::Np => "np",
            EgoState::A => "a",
            EgoState::Fc => "fc",
            EgoState::Ac => "ac",
        }
    }

    fn label(self) -> &'static str {
        match self {
            EgoState::Cp => "CP (Critical Parent)",
            EgoState::Np => "NP (Nurturing Parent)",
            EgoState::A => "A (Adult)",
            EgoState::Fc => "FC (Free Child)",
            EgoState::Ac => "AC (Adapted Child)",
        }
    }
}

/// Trait keys a question bank may use for `section`.
pub fn known_trait_keys(section: Section) -> Vec<&'static str> {
    fn keys<D: Dimension>() -> Vec<&'static str> {
        D::ALL.iter().map(|d| d.key()).collect()
    }

    match section {
        Section::BigFive => keys::<BigFiveTrait>(),
        Section::Riasec => keys::<RiasecType>(),
        Section::Strengths => keys::<Virtue>(),
        Section::Attachment => keys::<AttachmentStyle>(),
        Section::Sensitivity => keys::<SensitivityDimension>(),
        Section::Egogram => keys::<EgoState>(),
    }
}
