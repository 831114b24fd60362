//! Username format catalogue - corporate naming templates as data

use std::collections::HashSet;

use crate::types::NamePair;

/// A single username format rule
///
/// Each rule carries a stable name, a flag marking whether the format is
/// realistic as an email local-part, and a pure render function. Adding
/// a format means adding a row to [`FORMATS`].
#[derive(Debug, Clone, Copy)]
pub struct UsernameFormat {
    /// Stable rule name (e.g. `first.last`)
    pub name: &'static str,
    /// Whether this format is used for `local@domain` email variants
    pub email_worthy: bool,
    render: fn(&NamePair) -> String,
}

impl UsernameFormat {
    /// Render this format for a name pair
    pub fn render(&self, pair: &NamePair) -> String {
        (self.render)(pair)
    }
}

/// The fixed username format catalogue, in emission order
///
/// The email-worthy flag marks the initial.last / first.last style forms
/// that realistically appear as corporate email local-parts.
pub const FORMATS: &[UsernameFormat] = &[
    UsernameFormat { name: "flast", email_worthy: true, render: flast },
    UsernameFormat { name: "f.last", email_worthy: true, render: f_dot_last },
    UsernameFormat { name: "firstlast", email_worthy: true, render: firstlast },
    UsernameFormat { name: "first.last", email_worthy: true, render: first_dot_last },
    UsernameFormat { name: "firstl", email_worthy: false, render: firstl },
    UsernameFormat { name: "lastf", email_worthy: false, render: lastf },
    UsernameFormat { name: "lastfirst", email_worthy: false, render: lastfirst },
    UsernameFormat { name: "lfirst", email_worthy: false, render: lfirst },
    UsernameFormat { name: "l.first", email_worthy: false, render: l_dot_first },
    UsernameFormat { name: "last.f", email_worthy: false, render: last_dot_f },
];

fn flast(p: &NamePair) -> String {
    format!("{}{}", p.first_initial(), p.last)
}

fn f_dot_last(p: &NamePair) -> String {
    format!("{}.{}", p.first_initial(), p.last)
}

fn firstlast(p: &NamePair) -> String {
    format!("{}{}", p.first, p.last)
}

fn first_dot_last(p: &NamePair) -> String {
    format!("{}.{}", p.first, p.last)
}

fn firstl(p: &NamePair) -> String {
    format!("{}{}", p.first, p.last_initial())
}

fn lastf(p: &NamePair) -> String {
    format!("{}{}", p.last, p.first_initial())
}

fn lastfirst(p: &NamePair) -> String {
    format!("{}{}", p.last, p.first)
}

fn lfirst(p: &NamePair) -> String {
    format!("{}{}", p.last_initial(), p.first)
}

fn l_dot_first(p: &NamePair) -> String {
    format!("{}.{}", p.last_initial(), p.first)
}

fn last_dot_f(p: &NamePair) -> String {
    format!("{}.{}", p.last, p.first_initial())
}

/// Expands a name pair through the format catalogue
///
/// Short names can collapse different templates to the same string, so
/// each expansion is deduplicated locally, keeping catalogue order.
#[derive(Debug, Clone, Default)]
pub struct FormatExpander {
    email_formats: Option<HashSet<&'static str>>,
}

impl FormatExpander {
    /// Create an expander using the catalogue's default email-worthy flags
    pub fn new() -> Self {
        Self {
            email_formats: None,
        }
    }

    /// Override the email-worthy subset by rule name
    ///
    /// Names not present in [`FORMATS`] are ignored.
    pub fn with_email_formats(mut self, names: &[&str]) -> Self {
        self.email_formats = Some(
            FORMATS
                .iter()
                .map(|f| f.name)
                .filter(|name| names.contains(name))
                .collect(),
        );
        self
    }

    /// All base usernames for a pair, in catalogue order
    pub fn expand(&self, pair: &NamePair) -> Vec<String> {
        render_unique(FORMATS.iter(), pair)
    }

    /// The email-worthy base usernames for a pair, in catalogue order
    pub fn expand_email_worthy(&self, pair: &NamePair) -> Vec<String> {
        render_unique(
            FORMATS.iter().filter(|f| self.is_email_worthy(f)),
            pair,
        )
    }

    fn is_email_worthy(&self, format: &UsernameFormat) -> bool {
        match &self.email_formats {
            Some(names) => names.contains(format.name),
            None => format.email_worthy,
        }
    }
}

fn render_unique<'a, I>(formats: I, pair: &NamePair) -> Vec<String>
where
    I: Iterator<Item = &'a UsernameFormat>,
{
    let mut seen = HashSet::new();
    let mut usernames = Vec::new();
    for format in formats {
        let username = format.render(pair);
        if seen.insert(username.clone()) {
            usernames.push(username);
        }
    }
    usernames
}
