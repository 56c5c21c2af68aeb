//! A small CSS selector subset.
//!
//! Supported: type selectors (`div`), the universal selector (`*`), id
//! selectors (`#outer`), class selectors (`.knob`), compounds of those
//! (`div.knob#main`) and the descendant combinator (`#outer .content`).

use crate::error::DomError;

/// One compound selector, e.g. `div.item#first`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Compound {
    /// Check a compound against an element's tag, id and classes.
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        if let Some(want) = &self.tag
            && !want.eq_ignore_ascii_case(tag)
        {
            return false;
        }
        if let Some(want) = &self.id
            && id != Some(want.as_str())
        {
            return false;
        }
        self.classes.iter().all(|c| classes.contains(c))
    }
}

/// A parsed selector: compounds joined by descendant combinators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<Compound>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let invalid = |reason: &str| DomError::InvalidSelector {
            selector: input.to_string(),
            reason: reason.to_string(),
        };

        let parts = input
            .split_whitespace()
            .map(|token| parse_compound(token).map_err(invalid))
            .collect::<Result<Vec<_>, _>>()?;

        if parts.is_empty() {
            return Err(invalid("empty selector"));
        }
        Ok(Self { parts })
    }

    /// Compounds from outermost ancestor to the subject.
    pub fn parts(&self) -> &[Compound] {
        &self.parts
    }

    /// The rightmost compound, which the matched element itself must satisfy.
    pub fn subject(&self) -> &Compound {
        // parse() guarantees at least one part
        &self.parts[self.parts.len() - 1]
    }

    /// The compounds that must be matched by ancestors, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Compound> {
        self.parts[..self.parts.len() - 1].iter().rev()
    }
}

fn parse_compound(token: &str) -> Result<Compound, &'static str> {
    let mut compound = Compound::default();
    let mut rest = token;

    // Leading type or universal selector
    let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
    let tag = &rest[..tag_end];
    if !tag.is_empty() && tag != "*" {
        if !is_ident(tag) {
            return Err("invalid type selector");
        }
        compound.tag = Some(tag.to_ascii_lowercase());
    }
    rest = &rest[tag_end..];

    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(['#', '.']).unwrap_or(body.len());
        let name = &body[..end];
        if !is_ident(name) {
            return Err("expected a name after '#' or '.'");
        }
        match marker {
            '#' => {
                if compound.id.is_some() {
                    return Err("more than one id in a compound");
                }
                compound.id = Some(name.to_string());
            }
            _ => compound.classes.push(name.to_string()),
        }
        rest = &body[end..];
    }

    Ok(compound)
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
