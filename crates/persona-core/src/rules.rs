//! Ordered `(predicate, text)` rule lists.
//!
//! Rules are not exclusive: every rule whose predicate holds contributes its
//! texts, in list order. Nothing is deduplicated or re-sorted.

/// A predicate over a context `C` and the texts it contributes when it holds.
pub struct Rule<C> {
    applies: fn(&C) -> bool,
    texts: Texts,
}

enum Texts {
    One(&'static str),
    Many(&'static [&'static str]),
}

impl<C> Rule<C> {
    /// A rule contributing one text.
    pub const fn new(applies: fn(&C) -> bool, text: &'static str) -> Self {
        Self {
            applies,
            texts: Texts::One(text),
        }
    }

    /// A rule contributing several texts, kept together in order.
    pub const fn many(applies: fn(&C) -> bool, texts: &'static [&'static str]) -> Self {
        Self {
            applies,
            texts: Texts::Many(texts),
        }
    }

    pub fn applies(&self, ctx: &C) -> bool {
        (self.applies)(ctx)
    }

    pub fn texts(&self) -> &[&'static str] {
        match &self.texts {
            Texts::One(text) => std::slice::from_ref(text),
            Texts::Many(texts) => *texts,
        }
    }
}

/// Collect the texts of every rule that holds, in order.
pub fn evaluate<C>(rules: &[Rule<C>], ctx: &C) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|rule| rule.applies(ctx))
        .flat_map(|rule| rule.texts().iter().copied())
        .collect()
}

/// Like [`evaluate`], but yields `fallback` alone when no rule holds.
pub fn evaluate_or<C>(rules: &[Rule<C>], ctx: &C, fallback: &'static str) -> Vec<&'static str> {
    let texts = evaluate(rules, ctx);
    if texts.is_empty() {
        vec![fallback]
    } else {
        texts
    }
}
