//! Name resolution: turn a typed name into a single person id.

use costar_kernel::dataset::{DatasetStore, PersonId};

/// A person sharing the queried name, with enough detail to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<String>,
}

/// Outcome of looking up a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonMatch {
    Unique(PersonId),
    /// More than one person has this name; candidates are in id order.
    Ambiguous(Vec<Candidate>),
    NotFound,
}

/// Look up `name` (case-insensitively) without asking anyone anything.
#[must_use]
pub fn resolve_person(store: &DatasetStore, name: &str) -> PersonMatch {
    let ids = store.person_ids_for_name(name);
    match ids.len() {
        0 => PersonMatch::NotFound,
        1 => ids
            .into_iter()
            .next()
            .map_or(PersonMatch::NotFound, PersonMatch::Unique),
        _ => PersonMatch::Ambiguous(
            ids.into_iter()
                .filter_map(|id| {
                    let person = store.person(&id).ok()?;
                    Some(Candidate {
                        name: person.name.clone(),
                        birth: person.birth.clone(),
                        id,
                    })
                })
                .collect(),
        ),
    }
}

/// Pick the candidate whose id equals `answer` (surrounding whitespace ignored).
///
/// An id that is not among the candidates picks nobody.
#[must_use]
pub fn choose_candidate(candidates: &[Candidate], answer: &str) -> Option<PersonId> {
    let answer = answer.trim();
    candidates
        .iter()
        .find(|c| c.id.as_str() == answer)
        .map(|c| c.id.clone())
}
