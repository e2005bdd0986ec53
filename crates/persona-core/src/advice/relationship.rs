//! Relationship advice built around the dominant attachment style.

use serde::Serialize;

use super::Signals;
use crate::dimensions::{AttachmentStyle, Dimension};
use crate::profiles::attachment;
use crate::rules::{self, Rule};

/// Attachment-based relationship advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipAdvice {
    /// Label of the dominant attachment style.
    pub style: &'static str,
    /// The style's description first, then any conditional additions.
    pub advice: Vec<&'static str>,
}

fn rules() -> [Rule<Signals>; 3] {
    [
        Rule::new(
            |s: &Signals| s.agreeableness >= 70 && s.attachment == AttachmentStyle::Anxious,
            "Because you are so agreeable, you tend to put your own feelings last. Practicing saying \"no\" matters too.",
        ),
        Rule::new(
            |s: &Signals| s.extraversion <= 30 && s.attachment == AttachmentStyle::Avoidant,
            "Valuing time alone is natural. Still, try gradually adding time with people you trust.",
        ),
        Rule::new(
            |s: &Signals| s.sensitivity >= 60,
            "Your high sensitivity lets you notice how others feel. Be careful not to carry their emotions for them.",
        ),
    ]
}

pub fn synthesize(signals: &Signals) -> RelationshipAdvice {
    let mut advice = vec![attachment::describe(signals.attachment)];
    advice.extend(rules::evaluate(&rules(), signals));

    RelationshipAdvice {
        style: signals.attachment.label(),
        advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::testing::neutral_signals;

    #[test]
    fn description_always_comes_first() {
        let advice = synthesize(&neutral_signals());
        assert_eq!(advice.style, AttachmentStyle::Secure.label());
        assert_eq!(
            advice.advice,
            vec![attachment::describe(AttachmentStyle::Secure)]
        );
    }

    #[test]
    fn agreeable_anxious_and_sensitive() {
        let signals = Signals {
            attachment: AttachmentStyle::Anxious,
            agreeableness: 75,
            sensitivity: 60,
            ..neutral_signals()
        };
        let advice = synthesize(&signals).advice;
        assert_eq!(advice.len(), 3);
        assert_eq!(advice[0], attachment::describe(AttachmentStyle::Anxious));
        assert!(advice[1].contains("\"no\""));
        assert!(advice[2].starts_with("Your high sensitivity"));
    }

    #[test]
    fn introverted_avoidant() {
        let signals = Signals {
            attachment: AttachmentStyle::Avoidant,
            extraversion: 25,
            ..neutral_signals()
        };
        let advice = synthesize(&signals).advice;
        assert_eq!(advice.len(), 2);
        assert!(advice[1].starts_with("Valuing time alone"));
    }

    #[test]
    fn rule_thresholds() {
        use AttachmentStyle::*;

        let texts: Vec<&str> = rules().iter().map(|r| r.texts()[0]).collect();
        let cases: &[(fn(&mut Signals), Option<usize>)] = &[
            (|s| { s.attachment = Anxious; s.agreeableness = 70 }, Some(0)),
            (|s| { s.attachment = Anxious; s.agreeableness = 69 }, None),
            (|s| { s.attachment = Avoidant; s.extraversion = 30 }, Some(1)),
            (|s| { s.attachment = Avoidant; s.extraversion = 31 }, None),
            (|s| s.sensitivity = 60, Some(2)),
            (|s| s.sensitivity = 59, None),
        ];

        for (i, (apply, expected)) in cases.iter().enumerate() {
            let mut signals = neutral_signals();
            apply(&mut signals);
            let mut want = vec![attachment::describe(signals.attachment)];
            want.extend(expected.map(|rule| texts[rule]));
            assert_eq!(synthesize(&signals).advice, want, "case {i}");
        }
    }

    #[test]
    fn thresholds_are_tied_to_the_style() {
        // high agreeableness alone does nothing without the anxious style
        let signals = Signals {
            agreeableness: 100,
            extraversion: 0,
            ..neutral_signals()
        };
        assert_eq!(synthesize(&signals).advice.len(), 1);
    }
}
